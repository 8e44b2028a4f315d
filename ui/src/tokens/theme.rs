// Theme Token Store
// Static Tailwind class strings grouped by semantic category

use zoon::RawEl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundTokens {
    pub page: &'static str,
    pub card: &'static str,
    pub muted: &'static str,
    pub hover: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTokens {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub inverse: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderTokens {
    pub default: &'static str,
    pub muted: &'static str,
    pub focus: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientTokens {
    pub primary: &'static str,
    pub header: &'static str,
    pub danger: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub background: BackgroundTokens,
    pub text: TextTokens,
    pub border: BorderTokens,
    pub gradients: GradientTokens,
}

pub static THEME: ThemeTokens = ThemeTokens {
    colors: ColorTokens {
        primary: "text-blue-400",
        secondary: "text-slate-400",
        success: "text-emerald-400",
        warning: "text-amber-400",
        danger: "text-red-400",
        info: "text-sky-400",
    },
    background: BackgroundTokens {
        page: "bg-slate-950",
        card: "bg-slate-900/80 backdrop-blur-sm",
        muted: "bg-slate-800/60",
        hover: "hover:bg-slate-800",
    },
    text: TextTokens {
        primary: "text-slate-100",
        secondary: "text-slate-400",
        muted: "text-slate-500",
        inverse: "text-slate-950",
    },
    border: BorderTokens {
        default: "border border-slate-800",
        muted: "border border-slate-700/50",
        focus: "focus:outline-none focus:ring-2 focus:ring-blue-500",
    },
    gradients: GradientTokens {
        primary: "bg-gradient-to-r from-blue-600 to-indigo-600 hover:from-blue-500 hover:to-indigo-500",
        header: "bg-gradient-to-r from-slate-900 via-slate-900 to-slate-800",
        danger: "bg-gradient-to-r from-red-600 to-rose-600",
    },
};

/// Looks up a token by its dotted path, e.g. `"text.primary"`.
pub fn token(path: &str) -> Option<&'static str> {
    let theme = &THEME;
    let value = match path {
        "colors.primary" => theme.colors.primary,
        "colors.secondary" => theme.colors.secondary,
        "colors.success" => theme.colors.success,
        "colors.warning" => theme.colors.warning,
        "colors.danger" => theme.colors.danger,
        "colors.info" => theme.colors.info,
        "background.page" => theme.background.page,
        "background.card" => theme.background.card,
        "background.muted" => theme.background.muted,
        "background.hover" => theme.background.hover,
        "text.primary" => theme.text.primary,
        "text.secondary" => theme.text.secondary,
        "text.muted" => theme.text.muted,
        "text.inverse" => theme.text.inverse,
        "border.default" => theme.border.default,
        "border.muted" => theme.border.muted,
        "border.focus" => theme.border.focus,
        "gradients.primary" => theme.gradients.primary,
        "gradients.header" => theme.gradients.header,
        "gradients.danger" => theme.gradients.danger,
        _ => return None,
    };
    Some(value)
}

/// Joins class fragments with single spaces, skipping empty ones.
pub fn class_names<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Adds every whitespace-separated class to the element.
/// `classList.add` rejects tokens containing spaces.
pub fn with_classes<R: RawEl>(raw_el: R, classes: &str) -> R {
    classes
        .split_whitespace()
        .fold(raw_el, |raw_el, class| raw_el.class(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_field_access() {
        assert_eq!(token("text.primary"), Some(THEME.text.primary));
        assert_eq!(token("gradients.primary"), Some(THEME.gradients.primary));
        assert_eq!(token("border.focus"), Some(THEME.border.focus));
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let first = token("background.card").unwrap();
        let second = token("background.card").unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn unknown_paths_are_absent() {
        assert_eq!(token("colors"), None);
        assert_eq!(token("colors.primary.dark"), None);
        assert_eq!(token(""), None);
    }

    #[test]
    fn class_names_normalizes_whitespace() {
        assert_eq!(class_names(["a  b", "", " c "]), "a b c");
        assert_eq!(class_names(Vec::<&str>::new()), "");
    }
}

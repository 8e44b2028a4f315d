// Icon Component
// Inline stroke SVG icons that inherit the current text color

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Info,
    TriangleAlert,
    CircleAlert,
    OctagonAlert,
    ShieldAlert,
    Server,
    Activity,
    Wifi,
    Bell,
    Check,
    CircleCheck,
    X,
    RefreshCw,
    LoaderCircle,
}

impl IconName {
    pub fn to_kebab_case(self) -> &'static str {
        match self {
            IconName::Info => "info",
            IconName::TriangleAlert => "triangle-alert",
            IconName::CircleAlert => "circle-alert",
            IconName::OctagonAlert => "octagon-alert",
            IconName::ShieldAlert => "shield-alert",
            IconName::Server => "server",
            IconName::Activity => "activity",
            IconName::Wifi => "wifi",
            IconName::Bell => "bell",
            IconName::Check => "check",
            IconName::CircleCheck => "circle-check",
            IconName::X => "x",
            IconName::RefreshCw => "refresh-cw",
            IconName::LoaderCircle => "loader-circle",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            IconName::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            IconName::TriangleAlert => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            IconName::CircleAlert => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#
            }
            IconName::OctagonAlert => {
                r#"<path d="M12 16h.01"/><path d="M12 8v4"/><path d="M15.312 2a2 2 0 0 1 1.414.586l4.688 4.688A2 2 0 0 1 22 8.688v6.624a2 2 0 0 1-.586 1.414l-4.688 4.688a2 2 0 0 1-1.414.586H8.688a2 2 0 0 1-1.414-.586l-4.688-4.688A2 2 0 0 1 2 15.312V8.688a2 2 0 0 1 .586-1.414l4.688-4.688A2 2 0 0 1 8.688 2z"/>"#
            }
            IconName::ShieldAlert => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="M12 8v4"/><path d="M12 16h.01"/>"#
            }
            IconName::Server => {
                r#"<rect width="20" height="8" x="2" y="2" rx="2" ry="2"/><rect width="20" height="8" x="2" y="14" rx="2" ry="2"/><line x1="6" x2="6.01" y1="6" y2="6"/><line x1="6" x2="6.01" y1="18" y2="18"/>"#
            }
            IconName::Activity => r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#,
            IconName::Wifi => {
                r#"<path d="M12 20h.01"/><path d="M2 8.82a15 15 0 0 1 20 0"/><path d="M5 12.859a10 10 0 0 1 14 0"/><path d="M8.5 16.429a5 5 0 0 1 7 0"/>"#
            }
            IconName::Bell => {
                r#"<path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/><path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/>"#
            }
            IconName::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            IconName::CircleCheck => {
                r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#
            }
            IconName::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            IconName::RefreshCw => {
                r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#
            }
            IconName::LoaderCircle => r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconSize {
    Small,  // 16px
    Medium, // 20px
    Large,  // 24px
}

impl IconSize {
    pub fn to_px(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Medium => 20,
            IconSize::Large => 24,
        }
    }
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    class: Option<String>,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Medium,
            class: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Extra classes, typically a `THEME.colors` token
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn svg_markup(&self) -> String {
        let size_px = self.size.to_px();
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size_px}" height="{size_px}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" data-icon="{}">{}</svg>"#,
            self.name.to_kebab_case(),
            self.name.svg_body(),
        )
    }

    pub fn build(self) -> impl Element {
        let size_px = self.size.to_px();
        let markup = self.svg_markup();
        let class = self.class.unwrap_or_default();

        El::new()
            .s(Width::exact(size_px))
            .s(Height::exact(size_px))
            .s(Align::center())
            .update_raw_el(move |raw_el| with_classes(raw_el, &class))
            .child(RawHtmlEl::new("span").inner_markup(&markup))
    }
}

pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_uses_requested_size_and_current_color() {
        let markup = icon(IconName::Bell).size(IconSize::Small).svg_markup();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="16" height="16""#));
        assert!(markup.contains(r#"stroke="currentColor""#));
        assert!(markup.contains(r#"data-icon="bell""#));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn default_size_is_medium() {
        let markup = icon(IconName::Check).svg_markup();
        assert!(markup.contains(r#"width="20""#));
    }
}

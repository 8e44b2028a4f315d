// Loading Button Component
// Button with a built-in loading state; the caller owns `loading` and
// rebuilds the button whenever it changes.

use crate::components::icon::*;
use crate::tokens::*;
use zoon::*;

pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

const BUTTON_BASE_CLASS: &str = "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-medium transition-colors disabled:cursor-not-allowed disabled:opacity-50";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn base_class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "text-white shadow",
            ButtonVariant::Outline => "border border-slate-600 bg-transparent text-slate-100 hover:bg-slate-800",
            ButtonVariant::Ghost => "bg-transparent text-slate-300 hover:bg-slate-800 hover:text-slate-100",
            ButtonVariant::Destructive => "bg-red-600 text-white shadow hover:bg-red-500",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// What the button shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonContent {
    /// Spinner followed by the loading text
    Spinner { text: String },
    Label {
        text: String,
        left_icon: Option<IconName>,
    },
}

/// Resolved state of a button for one set of inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub class: String,
    pub disabled: bool,
    pub button_type: ButtonType,
    pub content: ButtonContent,
}

pub struct LoadingButtonBuilder {
    label: String,
    loading: bool,
    loading_text: Option<String>,
    variant: ButtonVariant,
    disabled: bool,
    class: Option<String>,
    button_type: ButtonType,
    left_icon: Option<IconName>,
    on_click: Option<Box<dyn Fn()>>,
}

impl LoadingButtonBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            loading: false,
            loading_text: None,
            variant: ButtonVariant::Default,
            disabled: false,
            class: None,
            button_type: ButtonType::Button,
            left_icon: None,
            on_click: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = Some(text.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.loading || self.disabled
    }

    pub fn view(&self) -> ButtonView {
        let gradient = match self.variant {
            ButtonVariant::Default => THEME.gradients.primary,
            _ => "",
        };
        let class = class_names([
            BUTTON_BASE_CLASS,
            self.variant.base_class(),
            gradient,
            THEME.border.focus,
            self.class.as_deref().unwrap_or_default(),
        ]);

        let content = if self.loading {
            ButtonContent::Spinner {
                text: self
                    .loading_text
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LOADING_TEXT.to_string()),
            }
        } else {
            ButtonContent::Label {
                text: self.label.clone(),
                left_icon: self.left_icon,
            }
        };

        ButtonView {
            class,
            disabled: self.is_disabled(),
            button_type: self.button_type,
            content,
        }
    }

    /// Handles one press; returns whether the handler ran.
    pub fn press(&self) -> bool {
        press_if_enabled(self.is_disabled(), self.on_click.as_deref())
    }

    pub fn build(mut self) -> impl Element {
        let view = self.view();
        let on_click = self.on_click.take();
        let disabled = view.disabled;

        let mut button = RawHtmlEl::new("button")
            .attr("type", view.button_type.as_str())
            .attr("aria-busy", if self.loading { "true" } else { "false" });
        if disabled {
            button = button.attr("disabled", "");
        }

        with_classes(button, &view.class)
            .style("font-family", FONT_FAMILY_SANS)
            .event_handler(move |_: events::Click| {
                press_if_enabled(disabled, on_click.as_deref());
            })
            .child(button_content(view.content))
    }
}

fn press_if_enabled(disabled: bool, handler: Option<&dyn Fn()>) -> bool {
    match handler {
        Some(handler) if !disabled => {
            handler();
            true
        }
        _ => false,
    }
}

fn button_content(content: ButtonContent) -> RawElOrText {
    match content {
        ButtonContent::Spinner { text } => {
            let spinner_oscillator = create_spinner();
            let spinner = El::new()
                .s(Align::center())
                .s(Transform::with_signal_self(
                    spinner_oscillator
                        .signal()
                        .map(|factor| Transform::new().rotate(factor * 360.)),
                ))
                .child(icon(IconName::LoaderCircle).size(IconSize::Small).build());

            Row::new()
                .s(Align::new().center_y())
                .s(Gap::new().x(SPACING_8))
                .item(spinner)
                .item(Text::new(text))
                .unify()
        }
        ButtonContent::Label {
            text,
            left_icon: Some(left_icon),
        } => Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(SPACING_8))
            .item(icon(left_icon).size(IconSize::Small).build())
            .item(Text::new(text))
            .unify(),
        ButtonContent::Label {
            text,
            left_icon: None,
        } => Text::new(text).unify(),
    }
}

// Convenience function for creating buttons
pub fn loading_button(label: impl Into<String>) -> LoadingButtonBuilder {
    LoadingButtonBuilder::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_button(label: &str) -> (LoadingButtonBuilder, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let button = loading_button(label).on_click(move || counter.set(counter.get() + 1));
        (button, clicks)
    }

    #[test]
    fn save_button_scenario() {
        let (button, clicks) = counting_button("Save");
        let view = button.view();

        assert_eq!(
            view.content,
            ButtonContent::Label { text: "Save".to_string(), left_icon: None }
        );
        assert!(view.class.contains(THEME.gradients.primary));
        assert!(!view.disabled);

        assert!(button.press());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn loading_shows_spinner_with_fallback_text() {
        let view = loading_button("Save").loading(true).view();
        assert_eq!(
            view.content,
            ButtonContent::Spinner { text: DEFAULT_LOADING_TEXT.to_string() }
        );
        assert_eq!(DEFAULT_LOADING_TEXT, "Loading...");
    }

    #[test]
    fn loading_prefers_custom_text() {
        let view = loading_button("Save").loading(true).loading_text("Saving...").view();
        assert_eq!(view.content, ButtonContent::Spinner { text: "Saving...".to_string() });
    }

    #[test]
    fn loading_text_ignored_when_not_loading() {
        let view = loading_button("Save").loading_text("Saving...").view();
        assert!(matches!(view.content, ButtonContent::Label { ref text, .. } if text == "Save"));
    }

    #[test]
    fn loading_blocks_clicks() {
        let (button, clicks) = counting_button("Save");
        let button = button.loading(true);
        assert!(button.view().disabled);
        assert!(!button.press());
        assert!(!button.press());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn disabled_blocks_clicks() {
        let (button, clicks) = counting_button("Save");
        let button = button.disabled(true);
        assert!(button.view().disabled);
        assert!(!button.press());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn each_press_calls_handler_once() {
        let (button, clicks) = counting_button("Save");
        button.press();
        assert_eq!(clicks.get(), 1);
        button.press();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn press_without_handler_is_a_no_op() {
        assert!(!loading_button("Save").press());
    }

    #[test]
    fn gradient_only_on_default_variant() {
        for variant in [ButtonVariant::Outline, ButtonVariant::Ghost, ButtonVariant::Destructive] {
            let view = loading_button("Go").variant(variant).view();
            assert!(!view.class.contains(THEME.gradients.primary), "{variant:?}");
            assert!(!view.class.contains("bg-gradient-to-r"), "{variant:?}");
        }
    }

    #[test]
    fn caller_class_is_appended() {
        let view = loading_button("Go")
            .variant(ButtonVariant::Ghost)
            .class("w-full  mt-2")
            .view();
        assert!(view.class.ends_with("w-full mt-2"));

        let default_view = loading_button("Go").class("w-full").view();
        assert!(default_view.class.contains(THEME.gradients.primary));
        assert!(default_view.class.ends_with("w-full"));
    }

    #[test]
    fn type_defaults_to_button() {
        assert_eq!(loading_button("Go").view().button_type, ButtonType::Button);
        let submit = loading_button("Go").button_type(ButtonType::Submit).view();
        assert_eq!(submit.button_type.as_str(), "submit");
        assert_eq!(ButtonType::Reset.as_str(), "reset");
    }

    #[test]
    fn left_icon_is_kept_in_label_content() {
        let view = loading_button("Resolve").left_icon(IconName::Check).view();
        assert_eq!(
            view.content,
            ButtonContent::Label { text: "Resolve".to_string(), left_icon: Some(IconName::Check) }
        );
    }
}

// Card Component
// Titled container: header (title + description) above a body of children

use crate::tokens::*;
use zoon::*;

pub const CARD_BASE_CLASS: &str = "rounded-xl border border-slate-800 bg-slate-900/80 backdrop-blur-sm shadow-lg";

pub enum CardChild {
    Text(String),
    Element(Box<dyn Fn() -> RawElOrText>),
}

/// Body slot as seen from outside; elements stay opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardSlot {
    Text(String),
    Element,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLayout {
    pub class: String,
    pub title: String,
    pub description: String,
    pub body: Vec<CardSlot>,
}

pub struct CardBuilder {
    title: String,
    description: String,
    class: Option<String>,
    children: Vec<CardChild>,
}

impl CardBuilder {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            class: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(CardChild::Text(text.into()));
        self
    }

    pub fn child_element(mut self, element_fn: impl Fn() -> RawElOrText + 'static) -> Self {
        self.children.push(CardChild::Element(Box::new(element_fn)));
        self
    }

    pub fn classes(&self) -> String {
        class_names([CARD_BASE_CLASS, self.class.as_deref().unwrap_or_default()])
    }

    pub fn layout(&self) -> CardLayout {
        CardLayout {
            class: self.classes(),
            title: self.title.clone(),
            description: self.description.clone(),
            body: self
                .children
                .iter()
                .map(|child| match child {
                    CardChild::Text(text) => CardSlot::Text(text.clone()),
                    CardChild::Element(_) => CardSlot::Element,
                })
                .collect(),
        }
    }

    pub fn build(self) -> impl Element {
        let class = self.classes();

        let header = Column::new()
            .s(Gap::new().y(SPACING_4))
            .s(Padding::new().x(SPACING_24).top(SPACING_24).bottom(SPACING_12))
            .item(
                El::new()
                    .s(Font::new().size(FONT_SIZE_20).weight(FontWeight::SemiBold))
                    .update_raw_el(|raw_el| with_classes(raw_el, THEME.text.primary))
                    .child(Text::new(self.title)),
            )
            .item(
                Paragraph::new()
                    .s(Font::new().size(FONT_SIZE_14))
                    .update_raw_el(|raw_el| with_classes(raw_el, THEME.text.secondary))
                    .content(self.description),
            );

        let body = Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_12))
            .s(Padding::new().x(SPACING_24).bottom(SPACING_24))
            .items(self.children.into_iter().map(|child| match child {
                CardChild::Text(text) => Text::new(text).unify(),
                CardChild::Element(element_fn) => element_fn(),
            }));

        Column::new()
            .s(Width::fill())
            .s(font_sans())
            .s(transition_colors())
            .update_raw_el(move |raw_el| with_classes(raw_el, &class))
            .item(header)
            .item(body)
    }
}

// Convenience function
pub fn card(title: impl Into<String>, description: impl Into<String>) -> CardBuilder {
    CardBuilder::new(title, description)
}

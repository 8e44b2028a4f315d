use crate::dashboard_state::DashboardState;
use shared::{ValidationResult, ValidationRule, validate_value};
use sitewatch_ui::*;
use std::sync::OnceLock;
use zoon::*;

const FIELD: &str = "site";
const MAX_QUERY_LENGTH: usize = 40;
// Length lives in the pattern: `max` would compare numeric queries like "100" by value.
const QUERY_PATTERN: &str = r"^[A-Za-z0-9 ._-]{0,40}$";
const QUERY_MESSAGE: &str = "Use up to 40 letters, digits, spaces, dots, dashes or underscores";

static SITE_FILTER_RULE: OnceLock<ValidationRule> = OnceLock::new();

/// Built once; every keystroke validates against the same compiled pattern.
pub fn site_filter_rule() -> &'static ValidationRule {
    SITE_FILTER_RULE.get_or_init(|| {
        ValidationRule::new()
            .pattern(QUERY_PATTERN)
            .message(QUERY_MESSAGE)
    })
}

/// Validation message for a raw filter value, `None` when it can be applied.
pub fn filter_error(query: &str) -> Option<String> {
    match validate_value(FIELD, query, site_filter_rule()) {
        Ok(result) => first_error(result),
        Err(error) => {
            zoon::eprintln!("Site filter rule is broken: {error}");
            Some(error.to_string())
        }
    }
}

fn first_error(result: ValidationResult) -> Option<String> {
    if result.is_valid {
        None
    } else {
        result.first_error_for(FIELD).map(str::to_string)
    }
}

fn apply_input(state: &DashboardState, query: String) {
    if filter_error(&query).is_none() {
        state.site_filter.set_neq(query.trim().to_string());
    }
    state.site_filter_input.set_neq(query);
}

pub fn site_filter(state: &DashboardState) -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_4))
        .s(Width::fill().max(320))
        .item(
            TextInput::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_12).y(SPACING_8))
                .s(Font::new().size(FONT_SIZE_14))
                .s(transition_fast())
                .update_raw_el(|raw_el| {
                    with_classes(
                        raw_el,
                        &class_names([
                            "rounded-md",
                            THEME.background.muted,
                            THEME.border.muted,
                            THEME.text.primary,
                            THEME.border.focus,
                        ]),
                    )
                })
                .label_hidden("Filter by site")
                .placeholder(Placeholder::new("Filter by site"))
                .text_signal(state.site_filter_input.signal_cloned())
                .on_change(clone!((state) move |query| apply_input(&state, query))),
        )
        .item_signal(
            state
                .site_filter_input
                .signal_ref(|query| filter_error(query))
                .map(|error| {
                    error.map(|message| {
                        El::new()
                            .s(Font::new().size(FONT_SIZE_12))
                            .update_raw_el(|raw_el| with_classes(raw_el, THEME.colors.danger))
                            .child(Text::new(message))
                    })
                }),
        )
}

//! SiteWatch dashboard root view

use crate::alert_panel::{alert_list, severity_color};
use crate::dashboard_state::DashboardState;
use crate::performance::{UnmountClock, measured};
use crate::site_filter::site_filter;
use shared::{AlertSeverity, EnvConfig};
use sitewatch_ui::*;
use zoon::*;

pub struct SiteWatchApp {
    pub state: DashboardState,
}

impl SiteWatchApp {
    pub fn new(config: &'static EnvConfig) -> Self {
        Self {
            state: DashboardState::new(config),
        }
    }

    pub fn root(&self) -> impl Element {
        let state = self.state.clone();
        // The root is never removed, so its clock is never started
        measured("Dashboard", state.config(), UnmountClock::default(), move || {
            Column::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_32))
                .s(Gap::new().y(SPACING_24))
                .s(font_sans())
                .update_raw_el(|raw_el| {
                    with_classes(raw_el, &class_names([THEME.background.page, "min-h-screen"]))
                })
                .item(header(&state))
                .item(site_filter(&state))
                .item(alert_list(&state))
        })
    }
}

fn header(state: &DashboardState) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .s(Padding::new().x(SPACING_24).y(SPACING_16))
        .s(Align::new().center_y())
        .update_raw_el(|raw_el| {
            with_classes(
                raw_el,
                &class_names(["rounded-xl", THEME.gradients.header, THEME.border.default]),
            )
        })
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_30).weight(FontWeight::Bold))
                        .update_raw_el(|raw_el| with_classes(raw_el, THEME.text.primary))
                        .child(Text::new("SiteWatch")),
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14))
                        .update_raw_el(|raw_el| with_classes(raw_el, THEME.text.muted))
                        .child_signal(
                            state
                                .board
                                .signal_ref(|board| {
                                    format!(
                                        "{} open of {} alerts",
                                        board.open_alerts().len(),
                                        board.len()
                                    )
                                })
                                .map(Text::new),
                        ),
                ),
        )
        .item(El::new().s(Width::fill()))
        .item_signal(state.board.signal_ref(|board| {
            Row::new()
                .s(Gap::new().x(SPACING_12))
                .items(
                    board
                        .count_by_severity()
                        .into_iter()
                        .map(|(severity, count)| severity_count(severity, count)),
                )
        }))
        .item(refresh_button(state))
}

fn severity_count(severity: AlertSeverity, count: usize) -> impl Element {
    Column::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(Align::new().center_x())
        .update_raw_el(|raw_el| {
            with_classes(raw_el, &class_names(["rounded-lg", THEME.background.muted]))
        })
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_20).weight(FontWeight::SemiBold))
                .update_raw_el(move |raw_el| with_classes(raw_el, severity_color(severity)))
                .child(Text::new(&count.to_string())),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_12))
                .update_raw_el(|raw_el| with_classes(raw_el, THEME.text.secondary))
                .child(Text::new(severity.label())),
        )
}

fn refresh_button(state: &DashboardState) -> impl Element {
    let state = state.clone();
    El::new().child_signal(state.refreshing.signal().map(clone!((state) move |refreshing| {
        loading_button("Refresh")
            .variant(ButtonVariant::Outline)
            .left_icon(IconName::RefreshCw)
            .loading(refreshing)
            .loading_text("Refreshing...")
            .on_click(clone!((state) move || state.refresh()))
            .build()
    })))
}

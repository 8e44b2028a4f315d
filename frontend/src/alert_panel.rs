use crate::dashboard_state::{AlertAction, DashboardState, now_ms};
use crate::performance::{UnmountClock, measured};
use shared::{Alert, AlertIcon, AlertSeverity, AlertStatus};
use sitewatch_ui::*;
use zoon::*;

pub fn severity_color(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical | AlertSeverity::High => THEME.colors.danger,
        AlertSeverity::Medium => THEME.colors.warning,
        AlertSeverity::Low => THEME.colors.info,
        AlertSeverity::Info => THEME.colors.secondary,
    }
}

fn severity_accent(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "border-l-4 border-l-red-500",
        AlertSeverity::High => "border-l-4 border-l-orange-500",
        AlertSeverity::Medium => "border-l-4 border-l-amber-400",
        AlertSeverity::Low => "border-l-4 border-l-sky-400",
        AlertSeverity::Info => "border-l-4 border-l-slate-500",
    }
}

pub fn icon_name(icon: AlertIcon) -> IconName {
    match icon {
        AlertIcon::Info => IconName::Info,
        AlertIcon::TriangleAlert => IconName::TriangleAlert,
        AlertIcon::CircleAlert => IconName::CircleAlert,
        AlertIcon::OctagonAlert => IconName::OctagonAlert,
        AlertIcon::ShieldAlert => IconName::ShieldAlert,
        AlertIcon::Server => IconName::Server,
        AlertIcon::Activity => IconName::Activity,
        AlertIcon::Wifi => IconName::Wifi,
        AlertIcon::Bell => IconName::Bell,
    }
}

/// Coarse age such as "just now", "12m ago", "3h ago" or "2d ago".
pub fn format_age(now_ms: u64, timestamp_ms: u64) -> String {
    let minutes = now_ms.saturating_sub(timestamp_ms) / 60_000;
    match minutes {
        0 => "just now".to_string(),
        1..=59 => format!("{minutes}m ago"),
        60..=1439 => format!("{}h ago", minutes / 60),
        _ => format!("{}d ago", minutes / 1440),
    }
}

/// Actions offered for an alert in the given status.
pub fn available_actions(status: AlertStatus) -> Vec<AlertAction> {
    match status {
        AlertStatus::Active => vec![
            AlertAction::Acknowledge,
            AlertAction::Resolve,
            AlertAction::Dismiss,
        ],
        AlertStatus::Acknowledged => vec![AlertAction::Resolve, AlertAction::Dismiss],
        AlertStatus::Resolved => vec![AlertAction::Dismiss],
        AlertStatus::Dismissed => vec![],
    }
}

fn styled_text(text: impl Into<String>, classes: &'static str) -> impl Element {
    let text = text.into();
    El::new()
        .update_raw_el(move |raw_el| with_classes(raw_el, classes))
        .child(Text::new(text))
}

pub fn alert_list(state: &DashboardState) -> impl Element {
    let state = state.clone();
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .items_signal_vec(
            map_ref! {
                let board = state.board.signal_cloned(),
                let filter = state.site_filter.signal_cloned() =>
                board
                    .open_alerts_matching(filter)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Alert>>()
            }
            .to_signal_vec()
            .map(clone!((state) move |alert| alert_card(alert, &state).unify())),
        )
        .item_signal(
            map_ref! {
                let board = state.board.signal_cloned(),
                let filter = state.site_filter.signal_cloned() =>
                board.open_alerts_matching(filter).is_empty()
            }
            .dedupe()
            .map(|no_alerts| {
                no_alerts.then(|| {
                    card("All clear", "No open alerts match the current filter.")
                        .child_element(|| {
                            icon(IconName::CircleCheck)
                                .size(IconSize::Large)
                                .class(THEME.colors.success)
                                .build()
                                .unify()
                        })
                        .build()
                })
            }),
        )
}

fn alert_card(alert: Alert, state: &DashboardState) -> impl Element {
    let unmount_clock = UnmountClock::default();
    measured("AlertCard", state.config(), unmount_clock.clone(), || {
        alert_card_content(alert, state, unmount_clock)
    })
}

fn alert_card_content(
    alert: Alert,
    state: &DashboardState,
    unmount_clock: UnmountClock,
) -> impl Element {
    let severity = alert.severity;
    let icon = icon_name(alert.effective_icon());
    let meta = format!(
        "{} · {} · {} · {}",
        severity.label(),
        alert.category,
        alert.site,
        format_age(now_ms(), alert.timestamp)
    );
    let status = alert.status;
    let metadata: Vec<String> = alert
        .metadata
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    let alert_id = alert.id.clone();
    let state = state.clone();

    let mut card = card(alert.title, alert.description)
        .class(severity_accent(severity))
        .child_element(move || {
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Align::new().center_y())
                .item(icon_with_color(icon, severity))
                .item(styled_text(meta.clone(), THEME.text.muted))
                .item(status_badge(status))
                .unify()
        });

    if !metadata.is_empty() {
        card = card.child_element(move || {
            El::new()
                .s(font_mono())
                .s(Font::new().size(FONT_SIZE_12))
                .update_raw_el(|raw_el| with_classes(raw_el, THEME.text.secondary))
                .child(Text::new(metadata.join("  ")))
                .unify()
        });
    }

    card.child_element(move || {
        Row::new()
            .s(Gap::new().x(SPACING_8))
            .items(available_actions(status).into_iter().map(|action| {
                action_button(action, alert_id.clone(), state.clone(), unmount_clock.clone())
                    .unify()
            }))
            .unify()
    })
    .build()
}

fn icon_with_color(name: IconName, severity: AlertSeverity) -> impl Element {
    icon(name)
        .size(IconSize::Small)
        .class(severity_color(severity))
        .build()
}

fn status_badge(status: AlertStatus) -> impl Element {
    let classes = match status {
        AlertStatus::Active => "rounded-full bg-red-500/10 px-2 py-0.5 text-xs text-red-300",
        AlertStatus::Acknowledged => {
            "rounded-full bg-amber-500/10 px-2 py-0.5 text-xs text-amber-300"
        }
        AlertStatus::Resolved => {
            "rounded-full bg-emerald-500/10 px-2 py-0.5 text-xs text-emerald-300"
        }
        AlertStatus::Dismissed => "rounded-full bg-slate-500/10 px-2 py-0.5 text-xs text-slate-400",
    };
    styled_text(status.as_str(), classes)
}

// Every action rebuilds the alert list, so the click is where this card's removal starts.
fn action_button(
    action: AlertAction,
    alert_id: String,
    state: DashboardState,
    unmount_clock: UnmountClock,
) -> impl Element {
    let (variant, left_icon) = match action {
        AlertAction::Acknowledge => (ButtonVariant::Default, IconName::Check),
        AlertAction::Resolve => (ButtonVariant::Outline, IconName::CircleCheck),
        AlertAction::Dismiss => (ButtonVariant::Ghost, IconName::X),
    };
    loading_button(action.label())
        .variant(variant)
        .left_icon(left_icon)
        .on_click(move || {
            unmount_clock.start();
            state.apply(action, &alert_id)
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets() {
        let now = 10 * 24 * 60 * 60_000;
        assert_eq!(format_age(now, now), "just now");
        assert_eq!(format_age(now, now - 59_999), "just now");
        assert_eq!(format_age(now, now - 12 * 60_000), "12m ago");
        assert_eq!(format_age(now, now - 3 * 60 * 60_000), "3h ago");
        assert_eq!(format_age(now, now - 2 * 24 * 60 * 60_000), "2d ago");
    }

    #[test]
    fn future_timestamps_count_as_now() {
        assert_eq!(format_age(1_000, 5_000_000), "just now");
    }

    #[test]
    fn actions_follow_status() {
        assert_eq!(available_actions(AlertStatus::Active).len(), 3);
        assert_eq!(
            available_actions(AlertStatus::Acknowledged),
            vec![AlertAction::Resolve, AlertAction::Dismiss]
        );
        assert!(available_actions(AlertStatus::Dismissed).is_empty());
    }

    #[test]
    fn urgent_severities_use_danger_color() {
        assert_eq!(severity_color(AlertSeverity::Critical), THEME.colors.danger);
        assert_eq!(severity_color(AlertSeverity::High), THEME.colors.danger);
        assert_eq!(severity_color(AlertSeverity::Info), THEME.colors.secondary);
    }
}

use crate::demo_alerts::demo_alerts;
use shared::{AlertActions, AlertBoard, AlertError, EnvConfig};
use zoon::*;

/// How long the Refresh button stays in its loading state
const REFRESH_DURATION_MS: u32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertAction {
    Acknowledge,
    Resolve,
    Dismiss,
}

impl AlertAction {
    pub fn label(self) -> &'static str {
        match self {
            AlertAction::Acknowledge => "Acknowledge",
            AlertAction::Resolve => "Resolve",
            AlertAction::Dismiss => "Dismiss",
        }
    }
}

/// Reactive dashboard state shared by all views.
#[derive(Clone)]
pub struct DashboardState {
    pub board: Mutable<AlertBoard>,
    /// Raw text of the site filter input
    pub site_filter_input: Mutable<String>,
    /// Last filter value that passed validation
    pub site_filter: Mutable<String>,
    pub refreshing: Mutable<bool>,
    config: &'static EnvConfig,
}

impl DashboardState {
    pub fn new(config: &'static EnvConfig) -> Self {
        let state = Self {
            board: Mutable::new(AlertBoard::new()),
            site_filter_input: Mutable::new(String::new()),
            site_filter: Mutable::new(String::new()),
            refreshing: Mutable::new(false),
            config,
        };
        state.load_alerts();
        state
    }

    pub fn config(&self) -> &'static EnvConfig {
        self.config
    }

    fn load_alerts(&self) {
        if !self.config.mock_data {
            if self.config.debug {
                zoon::println!("Mock data disabled, no alert source configured");
            }
            return;
        }
        let mut board = self.board.lock_mut();
        board.refresh_from(demo_alerts(now_ms()));
        if self.config.debug {
            zoon::println!("Loaded {} demo alerts", board.len());
        }
    }

    pub fn apply(&self, action: AlertAction, alert_id: &str) {
        let result: Result<(), AlertError> = {
            let mut board = self.board.lock_mut();
            match action {
                AlertAction::Acknowledge => board.acknowledge(alert_id),
                AlertAction::Resolve => board.resolve(alert_id),
                AlertAction::Dismiss => board.dismiss(alert_id),
            }
        };
        match result {
            Ok(()) if self.config.debug => {
                zoon::println!("{} '{alert_id}'", action.label());
            }
            Ok(()) => {}
            Err(error) => zoon::eprintln!("{} failed: {error}", action.label()),
        }
    }

    /// Reloads the alerts, keeping statuses set by the user; ignored while a
    /// refresh is running.
    pub fn refresh(&self) {
        if self.refreshing.replace(true) {
            return;
        }
        let state = self.clone();
        Task::start(async move {
            Timer::sleep(REFRESH_DURATION_MS).await;
            state.load_alerts();
            state.refreshing.set(false);
        });
    }
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

//! SiteWatch frontend entry point

use zoon::*;

mod alert_panel;
mod app;
mod config;
mod dashboard_state;
mod demo_alerts;
mod performance;
mod site_filter;

pub fn main() {
    let config = config::init_env_config();
    if config.debug {
        zoon::println!("SiteWatch starting with {config:?}");
    }

    let app = app::SiteWatchApp::new(config);
    let root_element = app.root();
    start_app("app", move || root_element);
}

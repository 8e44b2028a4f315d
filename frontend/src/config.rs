use shared::{EnvConfig, EnvConfigError};
use std::sync::OnceLock;

const DASHBOARD_TOML: &str = include_str!("../../Dashboard.toml");

static ENV_CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Loads the dashboard configuration once; later calls return the same value.
///
/// A broken Dashboard.toml or override is reported and the defaults are used,
/// so the dashboard still renders.
pub fn init_env_config() -> &'static EnvConfig {
    ENV_CONFIG.get_or_init(|| match load_env_config() {
        Ok(config) => config,
        Err(error) => {
            zoon::eprintln!("Dashboard config error, using defaults: {error}");
            EnvConfig::default()
        }
    })
}

fn load_env_config() -> Result<EnvConfig, EnvConfigError> {
    EnvConfig::from_toml_str(DASHBOARD_TOML)?.with_overrides(compile_time_var)
}

// option_env! needs literal names
fn compile_time_var(key: &str) -> Option<String> {
    let value = match key {
        "SITEWATCH_API_BASE_URL" => option_env!("SITEWATCH_API_BASE_URL"),
        "SITEWATCH_WS_URL" => option_env!("SITEWATCH_WS_URL"),
        "SITEWATCH_AUTH_PROVIDER" => option_env!("SITEWATCH_AUTH_PROVIDER"),
        "SITEWATCH_JWT_SECRET" => option_env!("SITEWATCH_JWT_SECRET"),
        "SITEWATCH_ENABLE_REALTIME" => option_env!("SITEWATCH_ENABLE_REALTIME"),
        "SITEWATCH_ENABLE_NOTIFICATIONS" => option_env!("SITEWATCH_ENABLE_NOTIFICATIONS"),
        "SITEWATCH_ENABLE_ANALYTICS" => option_env!("SITEWATCH_ENABLE_ANALYTICS"),
        "SITEWATCH_ANALYTICS_ID" => option_env!("SITEWATCH_ANALYTICS_ID"),
        "SITEWATCH_SENTRY_DSN" => option_env!("SITEWATCH_SENTRY_DSN"),
        "SITEWATCH_DEBUG" => option_env!("SITEWATCH_DEBUG"),
        "SITEWATCH_MOCK_DATA" => option_env!("SITEWATCH_MOCK_DATA"),
        _ => None,
    };
    value.map(str::to_string)
}

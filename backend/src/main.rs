use moon::*;
use shared::{EnvConfig, EnvConfigError};

const DASHBOARD_CONFIG_PATH: &str = "Dashboard.toml";

// Utility classes are generated in the browser by the Tailwind Play CDN.
const TAILWIND_CDN: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("SiteWatch")
        .append_to_head(TAILWIND_CDN)
        .index_by_robots(false)
}

// The dashboard keeps all state in the browser.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

fn load_dashboard_config() -> Result<EnvConfig, EnvConfigError> {
    let document = std::fs::read_to_string(DASHBOARD_CONFIG_PATH)
        .map_err(|error| EnvConfigError::Parse(format!("{DASHBOARD_CONFIG_PATH}: {error}")))?;
    EnvConfig::from_toml_str(&document)?.with_overrides(|key| std::env::var(key).ok())
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    match load_dashboard_config() {
        Ok(config) => println!(
            "SiteWatch: api {}, realtime {}, mock data {}",
            config.api_base_url, config.enable_realtime, config.mock_data
        ),
        Err(error) => eprintln!("SiteWatch: {error}"),
    }

    start(frontend, up_msg_handler, |_| {}).await
}

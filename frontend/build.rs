const OVERRIDE_KEYS: [&str; 11] = [
    "SITEWATCH_API_BASE_URL",
    "SITEWATCH_WS_URL",
    "SITEWATCH_AUTH_PROVIDER",
    "SITEWATCH_JWT_SECRET",
    "SITEWATCH_ENABLE_REALTIME",
    "SITEWATCH_ENABLE_NOTIFICATIONS",
    "SITEWATCH_ENABLE_ANALYTICS",
    "SITEWATCH_ANALYTICS_ID",
    "SITEWATCH_SENTRY_DSN",
    "SITEWATCH_DEBUG",
    "SITEWATCH_MOCK_DATA",
];

fn main() {
    // Dashboard.toml is embedded with include_str!
    println!("cargo:rerun-if-changed=../Dashboard.toml");

    // Overrides are read with option_env! at compile time
    for key in OVERRIDE_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }
}

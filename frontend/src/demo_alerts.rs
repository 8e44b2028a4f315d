//! Sample alerts shown when `mock_data` is enabled.

use shared::{Alert, AlertCategory, AlertIcon, AlertSeverity, MetadataValue};

const MINUTE_MS: u64 = 60_000;

pub fn demo_alerts(now_ms: u64) -> Vec<Alert> {
    let ago = |minutes: u64| now_ms.saturating_sub(minutes * MINUTE_MS);
    vec![
        Alert::new(
            "berlin-dc1-power",
            "UPS running on battery",
            AlertSeverity::Critical,
            AlertCategory::System,
            "berlin-dc1",
            ago(3),
        )
        .description("Mains power lost on feed B. Estimated battery runtime 18 minutes.")
        .metadata("runtime_minutes", 18.0)
        .metadata("feed", "B"),
        Alert::new(
            "prague-edge-auth",
            "Repeated failed SSH logins",
            AlertSeverity::High,
            AlertCategory::Security,
            "prague-edge",
            ago(12),
        )
        .description("47 failed attempts from 3 addresses within 5 minutes.")
        .icon(AlertIcon::ShieldAlert)
        .metadata("attempts", 47.0)
        .metadata("blocked", true),
        Alert::new(
            "austin-dc2-latency",
            "API p95 latency above 800 ms",
            AlertSeverity::Medium,
            AlertCategory::Performance,
            "austin-dc2",
            ago(25),
        )
        .description("Checkout service latency has been elevated for 20 minutes.")
        .icon(AlertIcon::Activity),
        Alert::new(
            "berlin-dc1-uplink",
            "Backup uplink flapping",
            AlertSeverity::Medium,
            AlertCategory::Network,
            "berlin-dc1",
            ago(41),
        )
        .description("Secondary ISP link changed state 6 times in the last hour.")
        .icon(AlertIcon::Wifi),
        Alert::new(
            "austin-dc2-disk",
            "Log volume at 81%",
            AlertSeverity::Low,
            AlertCategory::System,
            "austin-dc2",
            ago(90),
        )
        .description("/var/log on app-03 is filling at roughly 2% per day.")
        .icon(AlertIcon::Server)
        .metadata("host", MetadataValue::Text("app-03".to_string())),
        Alert::new(
            "prague-edge-release",
            "Edge config deployed",
            AlertSeverity::Info,
            AlertCategory::Application,
            "prague-edge",
            ago(180),
        )
        .description("Release 2024.6.1 rolled out to all edge nodes."),
    ]
}

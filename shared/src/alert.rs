use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ===== ERRORS =====

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlertError {
    #[error("alert '{0}' not found")]
    NotFound(String),
    #[error("alert '{id}' cannot go from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: AlertStatus,
        to: AlertStatus,
    },
    #[error("unknown alert {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

// ===== ENUMERATIONS =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 5] = [
        AlertSeverity::Critical,
        AlertSeverity::High,
        AlertSeverity::Medium,
        AlertSeverity::Low,
        AlertSeverity::Info,
    ];

    /// Sort key, most urgent first
    pub fn rank(self) -> u8 {
        match self {
            AlertSeverity::Critical => 0,
            AlertSeverity::High => 1,
            AlertSeverity::Medium => 2,
            AlertSeverity::Low => 3,
            AlertSeverity::Info => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::High => "high",
            AlertSeverity::Medium => "medium",
            AlertSeverity::Low => "low",
            AlertSeverity::Info => "info",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "Critical",
            AlertSeverity::High => "High",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::Low => "Low",
            AlertSeverity::Info => "Info",
        }
    }

    pub fn default_icon(self) -> AlertIcon {
        match self {
            AlertSeverity::Critical => AlertIcon::OctagonAlert,
            AlertSeverity::High => AlertIcon::TriangleAlert,
            AlertSeverity::Medium => AlertIcon::CircleAlert,
            AlertSeverity::Low => AlertIcon::Bell,
            AlertSeverity::Info => AlertIcon::Info,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
    Dismissed,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
            AlertStatus::Dismissed => "dismissed",
        }
    }

    /// Active and acknowledged alerts still need attention
    pub fn is_open(self) -> bool {
        matches!(self, AlertStatus::Active | AlertStatus::Acknowledged)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    System,
    Security,
    Performance,
    Network,
    Application,
}

impl AlertCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertCategory::System => "system",
            AlertCategory::Security => "security",
            AlertCategory::Performance => "performance",
            AlertCategory::Network => "network",
            AlertCategory::Application => "application",
        }
    }
}

/// Known icons an alert may carry. The frontend maps these onto its icon set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AlertIcon {
    Info,
    TriangleAlert,
    CircleAlert,
    OctagonAlert,
    ShieldAlert,
    Server,
    Activity,
    Wifi,
    Bell,
}

macro_rules! display_and_parse {
    ($ty:ty, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AlertError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                $(
                    if normalized == <$ty>::$variant.as_str() {
                        return Ok(<$ty>::$variant);
                    }
                )+
                Err(AlertError::UnknownVariant {
                    kind: $kind,
                    value: value.to_string(),
                })
            }
        }
    };
}

display_and_parse!(AlertSeverity, "severity", [Critical, High, Medium, Low, Info]);
display_and_parse!(AlertStatus, "status", [Active, Acknowledged, Resolved, Dismissed]);
display_and_parse!(
    AlertCategory,
    "category",
    [System, Security, Performance, Network, Application]
);

// ===== METADATA =====

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MetadataValue {
    Text(String),
    Number(f64),
    Flag(bool),
    /// Opaque payload kept as-is
    Bytes(Vec<u8>),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Number(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Flag(value)
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(text) => f.write_str(text),
            MetadataValue::Number(number) => write!(f, "{number}"),
            MetadataValue::Flag(flag) => write!(f, "{flag}"),
            MetadataValue::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct AlertMetadata(BTreeMap<String, MetadataValue>);

impl AlertMetadata {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ===== ALERT =====

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub category: AlertCategory,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<AlertIcon>,
    #[serde(default, skip_serializing_if = "AlertMetadata::is_empty")]
    pub metadata: AlertMetadata,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        severity: AlertSeverity,
        category: AlertCategory,
        site: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            severity,
            status: AlertStatus::Active,
            category,
            timestamp,
            site: site.into(),
            icon: None,
            metadata: AlertMetadata::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn icon(mut self, icon: AlertIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Explicit icon, or the severity's default one
    pub fn effective_icon(&self) -> AlertIcon {
        self.icon.unwrap_or_else(|| self.severity.default_icon())
    }
}

// ===== ACTIONS =====

/// Operations the dashboard can perform on an alert.
pub trait AlertActions {
    fn acknowledge(&mut self, id: &str) -> Result<(), AlertError>;
    fn resolve(&mut self, id: &str) -> Result<(), AlertError>;
    fn dismiss(&mut self, id: &str) -> Result<(), AlertError>;
}

/// In-memory, insertion-ordered alert collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the alert, replacing an existing one with the same id in place.
    pub fn insert(&mut self, alert: Alert) {
        match self.alerts.iter_mut().find(|existing| existing.id == alert.id) {
            Some(existing) => *existing = alert,
            None => self.alerts.push(alert),
        }
    }

    /// Inserts a fresh snapshot of alerts. Alerts already on the board keep
    /// the status they were moved to; everything else comes from the snapshot.
    pub fn refresh_from(&mut self, alerts: impl IntoIterator<Item = Alert>) {
        for mut alert in alerts {
            if let Some(existing) = self.get(&alert.id) {
                alert.status = existing.status;
            }
            self.insert(alert);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn open_alerts(&self) -> Vec<&Alert> {
        self.open_alerts_matching("")
    }

    /// Open alerts whose site contains `site_query` (case-insensitive),
    /// most severe first, newest first within a severity.
    pub fn open_alerts_matching(&self, site_query: &str) -> Vec<&Alert> {
        let query = site_query.trim().to_lowercase();
        let mut open: Vec<&Alert> = self
            .alerts
            .iter()
            .filter(|alert| alert.status.is_open())
            .filter(|alert| query.is_empty() || alert.site.to_lowercase().contains(&query))
            .collect();
        open.sort_by(|a, b| {
            a.severity
                .rank()
                .cmp(&b.severity.rank())
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        open
    }

    /// Number of open alerts per severity, in severity order.
    pub fn count_by_severity(&self) -> Vec<(AlertSeverity, usize)> {
        AlertSeverity::ALL
            .iter()
            .map(|severity| {
                let count = self
                    .alerts
                    .iter()
                    .filter(|alert| alert.status.is_open() && alert.severity == *severity)
                    .count();
                (*severity, count)
            })
            .collect()
    }

    fn transition(
        &mut self,
        id: &str,
        to: AlertStatus,
        allowed: impl Fn(AlertStatus) -> bool,
    ) -> Result<(), AlertError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or_else(|| AlertError::NotFound(id.to_string()))?;
        if !allowed(alert.status) {
            return Err(AlertError::InvalidTransition {
                id: id.to_string(),
                from: alert.status,
                to,
            });
        }
        alert.status = to;
        Ok(())
    }
}

impl AlertActions for AlertBoard {
    fn acknowledge(&mut self, id: &str) -> Result<(), AlertError> {
        self.transition(id, AlertStatus::Acknowledged, |status| {
            status == AlertStatus::Active
        })
    }

    fn resolve(&mut self, id: &str) -> Result<(), AlertError> {
        self.transition(id, AlertStatus::Resolved, AlertStatus::is_open)
    }

    fn dismiss(&mut self, id: &str) -> Result<(), AlertError> {
        self.transition(id, AlertStatus::Dismissed, |status| {
            status != AlertStatus::Dismissed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_alert(id: &str, severity: AlertSeverity, site: &str, timestamp: u64) -> Alert {
        Alert::new(id, format!("Alert {id}"), severity, AlertCategory::System, site, timestamp)
    }

    fn board_with(alerts: Vec<Alert>) -> AlertBoard {
        let mut board = AlertBoard::new();
        for alert in alerts {
            board.insert(alert);
        }
        board
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Critical".parse::<AlertSeverity>(), Ok(AlertSeverity::Critical));
        assert_eq!(" low ".parse::<AlertSeverity>(), Ok(AlertSeverity::Low));
        assert_eq!("acknowledged".parse::<AlertStatus>(), Ok(AlertStatus::Acknowledged));
        assert_eq!("network".parse::<AlertCategory>(), Ok(AlertCategory::Network));
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let error = "urgent".parse::<AlertSeverity>().unwrap_err();
        assert_eq!(
            error,
            AlertError::UnknownVariant { kind: "severity", value: "urgent".to_string() }
        );
        assert_eq!(error.to_string(), "unknown alert severity 'urgent'");
    }

    #[test]
    fn alert_serializes_with_lowercase_enums_and_tagged_metadata() {
        let alert = create_test_alert("a1", AlertSeverity::High, "berlin-1", 1_000)
            .metadata("cpu", 97.5)
            .metadata("host", "db-01");
        let json = serde_json::to_value(&alert).unwrap();

        assert_eq!(json["severity"], "high");
        assert_eq!(json["status"], "active");
        assert_eq!(json["category"], "system");
        assert_eq!(json["metadata"]["cpu"]["type"], "number");
        assert_eq!(json["metadata"]["host"]["value"], "db-01");
        assert!(json.get("icon").is_none());

        let back: Alert = serde_json::from_value(json).unwrap();
        assert_eq!(back, alert);
    }

    #[test]
    fn invalid_severity_fails_deserialization() {
        let json = serde_json::json!({
            "id": "x", "title": "t", "description": "", "severity": "urgent",
            "status": "active", "category": "system", "timestamp": 0, "site": "s"
        });
        assert!(serde_json::from_value::<Alert>(json).is_err());
    }

    #[test]
    fn effective_icon_falls_back_to_severity() {
        let plain = create_test_alert("a", AlertSeverity::Critical, "s", 0);
        assert_eq!(plain.effective_icon(), AlertIcon::OctagonAlert);

        let custom = plain.icon(AlertIcon::Wifi);
        assert_eq!(custom.effective_icon(), AlertIcon::Wifi);
    }

    #[test]
    fn acknowledge_then_resolve() {
        let mut board = board_with(vec![create_test_alert("a1", AlertSeverity::High, "s", 0)]);

        board.acknowledge("a1").unwrap();
        assert_eq!(board.get("a1").unwrap().status, AlertStatus::Acknowledged);

        board.resolve("a1").unwrap();
        assert_eq!(board.get("a1").unwrap().status, AlertStatus::Resolved);
    }

    #[test]
    fn acknowledge_requires_active() {
        let mut board = board_with(vec![create_test_alert("a1", AlertSeverity::High, "s", 0)]);
        board.acknowledge("a1").unwrap();

        let error = board.acknowledge("a1").unwrap_err();
        assert_eq!(
            error,
            AlertError::InvalidTransition {
                id: "a1".to_string(),
                from: AlertStatus::Acknowledged,
                to: AlertStatus::Acknowledged,
            }
        );
    }

    #[test]
    fn resolved_alert_cannot_be_resolved_again() {
        let mut board = board_with(vec![create_test_alert("a1", AlertSeverity::Low, "s", 0)]);
        board.resolve("a1").unwrap();
        assert!(matches!(
            board.resolve("a1"),
            Err(AlertError::InvalidTransition { from: AlertStatus::Resolved, .. })
        ));
        // Dismissing a resolved alert is still allowed
        board.dismiss("a1").unwrap();
        assert!(board.dismiss("a1").is_err());
    }

    #[test]
    fn unknown_alert_is_not_found() {
        let mut board = AlertBoard::new();
        assert_eq!(board.resolve("missing"), Err(AlertError::NotFound("missing".to_string())));
    }

    #[test]
    fn insert_replaces_existing_id_in_place() {
        let mut board = board_with(vec![
            create_test_alert("a1", AlertSeverity::Low, "s", 0),
            create_test_alert("a2", AlertSeverity::Low, "s", 0),
        ]);
        board.insert(create_test_alert("a1", AlertSeverity::Critical, "s", 5));

        assert_eq!(board.len(), 2);
        assert_eq!(board.alerts()[0].id, "a1");
        assert_eq!(board.alerts()[0].severity, AlertSeverity::Critical);
    }

    #[test]
    fn refresh_keeps_local_status_changes() {
        let mut board = board_with(vec![
            create_test_alert("a1", AlertSeverity::High, "berlin", 1),
            create_test_alert("a2", AlertSeverity::Low, "berlin", 2),
        ]);
        board.acknowledge("a1").unwrap();
        board.dismiss("a2").unwrap();

        board.refresh_from(vec![
            create_test_alert("a1", AlertSeverity::Critical, "berlin", 10).description("updated"),
            create_test_alert("a2", AlertSeverity::Low, "berlin", 20),
            create_test_alert("a3", AlertSeverity::Medium, "prague", 30),
        ]);

        let a1 = board.get("a1").unwrap();
        assert_eq!(a1.status, AlertStatus::Acknowledged);
        assert_eq!(a1.severity, AlertSeverity::Critical);
        assert_eq!(a1.description, "updated");
        assert_eq!(board.get("a2").unwrap().status, AlertStatus::Dismissed);
        assert_eq!(board.get("a3").unwrap().status, AlertStatus::Active);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn open_alerts_sorted_by_severity_then_newest() {
        let mut board = board_with(vec![
            create_test_alert("low", AlertSeverity::Low, "s", 50),
            create_test_alert("crit-old", AlertSeverity::Critical, "s", 10),
            create_test_alert("crit-new", AlertSeverity::Critical, "s", 20),
            create_test_alert("done", AlertSeverity::Critical, "s", 30),
        ]);
        board.resolve("done").unwrap();

        let ids: Vec<&str> = board.open_alerts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["crit-new", "crit-old", "low"]);
    }

    #[test]
    fn site_filter_is_case_insensitive_substring() {
        let board = board_with(vec![
            create_test_alert("a", AlertSeverity::Low, "Berlin-DC1", 0),
            create_test_alert("b", AlertSeverity::Low, "Prague-DC2", 0),
        ]);

        let ids: Vec<&str> =
            board.open_alerts_matching("berlin").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        assert_eq!(board.open_alerts_matching("  ").len(), 2);
    }

    #[test]
    fn count_by_severity_ignores_closed_alerts() {
        let mut board = board_with(vec![
            create_test_alert("a", AlertSeverity::High, "s", 0),
            create_test_alert("b", AlertSeverity::High, "s", 0),
            create_test_alert("c", AlertSeverity::Info, "s", 0),
        ]);
        board.dismiss("b").unwrap();

        let counts = board.count_by_severity();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[1], (AlertSeverity::High, 1));
        assert_eq!(counts[4], (AlertSeverity::Info, 1));
        assert_eq!(counts[0], (AlertSeverity::Critical, 0));
    }

    #[test]
    fn metadata_display() {
        assert_eq!(MetadataValue::Bytes(vec![1, 2, 3]).to_string(), "<3 bytes>");
        assert_eq!(MetadataValue::from(true).to_string(), "true");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Render timings for a single component, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub component_name: String,
    pub render_time: f64,
    pub mount_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmount_time: Option<f64>,
}

impl PerformanceMetrics {
    pub fn new(component_name: impl Into<String>, render_time: f64, mount_time: f64) -> Self {
        Self {
            component_name: component_name.into(),
            render_time,
            mount_time,
            unmount_time: None,
        }
    }

    pub fn with_unmount_time(mut self, unmount_time: f64) -> Self {
        self.unmount_time = Some(unmount_time);
        self
    }

    pub fn total_time(&self) -> f64 {
        self.render_time + self.mount_time + self.unmount_time.unwrap_or(0.0)
    }
}

impl fmt::Display for PerformanceMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: render {:.2}ms, mount {:.2}ms",
            self.component_name, self.render_time, self.mount_time
        )?;
        if let Some(unmount_time) = self.unmount_time {
            write!(f, ", unmount {unmount_time:.2}ms")?;
        }
        write!(f, " (total {:.2}ms)", self.total_time())
    }
}

//! Project configuration
//!
//! A small YAML document stored next to the data
//! (`.helpdesk/config.yaml`). Everything has a default so a missing file is
//! never an error.

use crate::core::Urgency;
use serde::{Deserialize, Serialize};

/// Per-urgency SLA thresholds in hours
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaConfig {
    pub critical_hours: i64,
    pub high_hours: i64,
    pub medium_hours: i64,
    pub low_hours: i64,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            critical_hours: Urgency::Critical.sla_hours(),
            high_hours: Urgency::High.sla_hours(),
            medium_hours: Urgency::Medium.sla_hours(),
            low_hours: Urgency::Low.sla_hours(),
        }
    }
}

impl SlaConfig {
    /// SLA threshold in hours for the given urgency
    #[must_use]
    pub const fn hours_for(&self, urgency: Urgency) -> i64 {
        match urgency {
            Urgency::Critical => self.critical_hours,
            Urgency::High => self.high_hours,
            Urgency::Medium => self.medium_hours,
            Urgency::Low => self.low_hours,
        }
    }
}

/// Helpdesk project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    /// Display name of the helpdesk instance
    pub name: String,
    /// Urgency applied when a ticket is filed without one
    pub default_urgency: Urgency,
    /// Trailing window for daily creation counts in analytics
    pub analytics_window_days: i64,
    /// SLA thresholds, overridable per urgency
    pub sla: SlaConfig,
}

impl Default for HelpdeskConfig {
    fn default() -> Self {
        Self {
            name: "helpdesk".to_string(),
            default_urgency: Urgency::Medium,
            analytics_window_days: 14,
            sla: SlaConfig::default(),
        }
    }
}

//! Application configuration for Artistly
//!
//! Settings live in `settings.json` inside the config directory. Missing
//! fields fall back to defaults, and a missing file is written out on first load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Server ID used as the session token secret
    #[serde(default)]
    pub server_id: String,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: i64,

    /// Idle onboarding wizards are dropped after this many seconds
    #[serde(default = "default_wizard_ttl")]
    pub wizard_ttl_secs: i64,

    /// CORS preflight cache in seconds
    #[serde(default = "default_cors_max_age")]
    pub cors_max_age: usize,

    /// Headline figures on the manager dashboard
    #[serde(default = "default_dashboard_stats")]
    pub dashboard_stats: Vec<DashboardStat>,
}

/// One stats card on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub change: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_id: String::new(),
            session_ttl_secs: default_session_ttl(),
            wizard_ttl_secs: default_wizard_ttl(),
            cors_max_age: default_cors_max_age(),
            dashboard_stats: default_dashboard_stats(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a settings file, creating it when absent.
    /// A fresh server id is generated and saved if none is set.
    pub fn load_from(settings_path: &Path) -> Result<Self> {
        let mut config = if settings_path.exists() {
            let content =
                std::fs::read_to_string(settings_path).context("Failed to read settings file")?;
            serde_json::from_str::<AppConfig>(&content).context("Failed to parse settings file")?
        } else {
            Self::default()
        };

        if config.server_id.is_empty() || !settings_path.exists() {
            if config.server_id.is_empty() {
                config.server_id = uuid::Uuid::new_v4().to_string();
            }
            config.save_to(settings_path)?;
        }

        Ok(config)
    }

    /// Save configuration to a settings file
    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(settings_path, content).context("Failed to write settings file")?;
        Ok(())
    }
}

// Default value functions for serde

fn default_session_ttl() -> i64 {
    24 * 3600
}

fn default_wizard_ttl() -> i64 {
    24 * 3600
}

fn default_cors_max_age() -> usize {
    3600
}

fn default_dashboard_stats() -> Vec<DashboardStat> {
    [
        ("Total Artists", "127", "+12%"),
        ("Pending Reviews", "8", "+3"),
        ("Monthly Bookings", "45", "+23%"),
        ("Revenue", "$12,450", "+18%"),
    ]
    .into_iter()
    .map(|(title, value, change)| DashboardStat {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    })
    .collect()
}

// =============================================================================
// Engine Settings — persisted analysis parameters with atomic save
// =============================================================================
//
// The tunables the dashboard exposes to the user.  Field names serialize in
// camelCase to stay compatible with the settings record the front end
// persists.  Every field carries a serde default so that adding new fields
// never breaks loading an older settings file.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

fn default_risk_percentage() -> f64 {
    1.0
}

fn default_rr_ratio() -> f64 {
    2.0
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_breakout_sensitivity() -> f64 {
    1.0
}

/// User-tunable analysis settings.
///
/// The engine itself consumes `rr_ratio`, `scalping_mode` and
/// `breakout_sensitivity`; `risk_percentage` and `timezone` are carried for
/// the presentation layer (position sizing and display) and pass through
/// uninterpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    /// Account percentage risked per trade (presentation-layer concern).
    #[serde(default = "default_risk_percentage")]
    pub risk_percentage: f64,

    /// Take-profit distance as a multiple of the risked stop distance.
    #[serde(default = "default_rr_ratio")]
    pub rr_ratio: f64,

    /// Display timezone (presentation-layer concern).
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Switch the fast EMA pair to 5/13 and tighten the ATR stop.
    #[serde(default)]
    pub scalping_mode: bool,

    /// Scales the volume-surge and breakout-buffer thresholds.
    /// Lower = more permissive triggers, higher = stricter.
    #[serde(default = "default_breakout_sensitivity")]
    pub breakout_sensitivity: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            risk_percentage: default_risk_percentage(),
            rr_ratio: default_rr_ratio(),
            timezone: default_timezone(),
            scalping_mode: false,
            breakout_sensitivity: default_breakout_sensitivity(),
        }
    }
}

impl EngineSettings {
    /// Load settings from a JSON file at `path`.
    ///
    /// Returns an error when the file is missing or malformed so the caller
    /// can fall back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;

        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;

        info!(
            path = %path.display(),
            rr_ratio = settings.rr_ratio,
            scalping = settings.scalping_mode,
            sensitivity = settings.breakout_sensitivity,
            "settings loaded"
        );

        Ok(settings)
    }

    /// Persist the settings to `path` using an atomic write (write to
    /// `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise settings to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp settings to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp settings to {}", path.display()))?;

        info!(path = %path.display(), "settings saved (atomic)");
        Ok(())
    }
}

//! Configuration for relnotes, stored in .relnotes.toml
//!
//! Every field has a default, so projects without a config file get the
//! stock GNOME-style setup: `po/` and `help/` translation directories and
//! the GB/FDO tracker registry.

use crate::core::error::{RelResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = ".relnotes.toml";

/// A bug tracker instance the project files bugs against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
  /// Human-readable name, e.g. "GNOME"
  pub description: String,
  /// Host name of the Bugzilla instance, e.g. "bugzilla.gnome.org"
  pub host: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
}

/// Configuration for relnotes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
  /// Directory holding UI translation catalogs
  pub po_dir: String,
  /// Directory holding help-manual translation catalogs
  pub help_dir: String,
  /// Bullet used in plain-text lists
  pub bullet: String,
  /// strftime format for the release-note footer date
  pub date_format: String,
  /// Template for one translator credit line
  pub translator_template: String,
  /// Download location, with {name} and {version} placeholders
  pub download_url: String,
  /// Tracker code bug references default to when a line names none
  pub default_tracker: String,
  /// Registry of known trackers, keyed by two-letter code
  pub trackers: BTreeMap<String, TrackerConfig>,
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    let mut trackers = BTreeMap::new();
    trackers.insert(
      "GB".to_string(),
      TrackerConfig {
        description: "GNOME".to_string(),
        host: "bugzilla.gnome.org".to_string(),
        username: None,
        password: None,
      },
    );
    trackers.insert(
      "FDO".to_string(),
      TrackerConfig {
        description: "FreeDesktop".to_string(),
        host: "bugs.freedesktop.org".to_string(),
        username: None,
        password: None,
      },
    );

    Self {
      po_dir: "po".to_string(),
      help_dir: "help".to_string(),
      bullet: "*".to_string(),
      date_format: "%d %B %Y".to_string(),
      translator_template: "Updated {lang}: {translator}".to_string(),
      download_url: "https://download.gnome.org/sources/{name}/{version}/".to_string(),
      default_tracker: "GB".to_string(),
      trackers,
    }
  }
}

impl ReleaseConfig {
  /// Load config from `.relnotes.toml` in the given directory, falling back
  /// to the built-in defaults when the file is absent.
  pub fn load(dir: &Path) -> RelResult<Self> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
      return Ok(Self::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: ReleaseConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
    Ok(config)
  }

  /// Look up a tracker by code
  pub fn tracker(&self, code: &str) -> Option<&TrackerConfig> {
    self.trackers.get(code)
  }

  /// Fill in the download URL for a package
  pub fn download_url_for(&self, name: &str, version: &str) -> String {
    self
      .download_url
      .replace("{name}", &name.to_lowercase())
      .replace("{version}", version)
  }
}

//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The page template
//! has a single fixed layout; configuration only fills in the values that
//! layout shows (site name, links, footer) and tunes parallelism.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the source directory next to the documents:
//!
//! ```text
//! docs/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── index.md
//! ├── vision.md
//! └── architecture.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Ubuntu Sovereign Stack"
//! home_href = "../index.html"
//! stylesheet = "../assets/css/style.css"
//! background = "#f7f9fc"
//! repository_url = "https://github.com/yusufarbc/ubuntu-sovereign-stack"
//! footer = "Ubuntu Sovereign Stack © 2025. Project Documentation."
//! index_page = "index.html"
//!
//! [nav]
//! proposal = "project_proposal.html"
//! vision = "vision.html"
//! architecture = "architecture.html"
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Config files are sparse and unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the stock documentation site. User
/// config files need only specify the values they want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Values shown in the page chrome.
    pub site: SiteInfo,
    /// Targets of the named navigation slots.
    pub nav: NavConfig,
    /// Parallel conversion settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are usable by the page template.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.site.index_page.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.index_page must not be empty".into(),
            ));
        }
        if !self.site.index_page.ends_with(".html") {
            return Err(ConfigError::Validation(
                "site.index_page must end in .html".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity and chrome shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Brand text in the navbar, also appended to every `<title>`.
    pub name: String,
    /// Target of the brand link and the "Home" nav entry.
    pub home_href: String,
    /// Stylesheet linked from every page.
    pub stylesheet: String,
    /// Page background override for docs readability.
    pub background: String,
    /// Target of the GitHub button.
    pub repository_url: String,
    /// Footer text.
    pub footer: String,
    /// Output filename of the docs landing page. It is the "Docs" nav target
    /// and the one page without a "back to index" link.
    pub index_page: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Ubuntu Sovereign Stack".to_string(),
            home_href: "../index.html".to_string(),
            stylesheet: "../assets/css/style.css".to_string(),
            background: "#f7f9fc".to_string(),
            repository_url: "https://github.com/yusufarbc/ubuntu-sovereign-stack".to_string(),
            footer: "Ubuntu Sovereign Stack © 2025. Project Documentation.".to_string(),
            index_page: "index.html".to_string(),
        }
    }
}

/// Link targets for the three named nav slots. The fourth slot ("Docs")
/// always points at `site.index_page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub proposal: String,
    pub vision: String,
    pub architecture: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            proposal: "project_proposal.html".to_string(),
            vision: "vision.html".to_string(),
            architecture: "architecture.html".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of documents converted in parallel.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docsmith configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file in the source
# directory, next to the markdown documents. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site chrome
# ---------------------------------------------------------------------------
[site]
# Brand text in the navbar; also appended to every page title.
name = "Ubuntu Sovereign Stack"

# Brand link and "Home" nav entry.
home_href = "../index.html"

# Stylesheet linked from every page.
stylesheet = "../assets/css/style.css"

# Page background override for readability.
background = "#f7f9fc"

# Target of the GitHub button.
repository_url = "https://github.com/yusufarbc/ubuntu-sovereign-stack"

# Footer text.
footer = "Ubuntu Sovereign Stack © 2025. Project Documentation."

# Output filename of the docs landing page ("Docs" nav entry).
# This page is rendered without the "Back to Index" link.
index_page = "index.html"

# ---------------------------------------------------------------------------
# Navigation slots
# ---------------------------------------------------------------------------
[nav]
proposal = "project_proposal.html"
vision = "vision.html"
architecture = "architecture.html"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum documents converted in parallel.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

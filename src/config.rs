//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = ""                # Site title, exposed to templates as site.title
//! base_url = ""             # Absolute prefix for canonical URLs, no trailing slash
//! copy_static = true        # Copy templates/static/ into the output root
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early. A trailing slash on `base_url` is
//! normalized away so URL assembly can always join with a single `/`.

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
/// All fields have defaults; a missing config file means a site with
/// root-relative URLs and static copying enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, exposed to templates as `site.title`.
    pub title: String,
    /// Prefix for canonical URLs. Empty means site-rooted (`/page.html`).
    pub base_url: String,
    /// Whether `templates/static/` is copied into the output root.
    pub copy_static: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            base_url: String::new(),
            copy_static: true,
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.is_empty()
            && !self.base_url.starts_with('/')
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "base_url must be empty, /-rooted, or an http(s) URL".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from the content root, or defaults when absent.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let mut config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    config.base_url = config.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// A documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# leafpress site configuration
# All options are optional - defaults shown below.

# Site title, exposed to templates as site.title
title = ""

# Absolute prefix for canonical URLs. Leave empty for site-rooted URLs
# ("/page.html"). Links in rendered pages are always path-relative, so
# this only affects the canonical URLs templates see.
base_url = ""

# Copy templates/static/ into the output root on every build.
# The destination is replaced wholesale.
copy_static = true
"#
}

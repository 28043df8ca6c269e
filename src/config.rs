//! Site configuration.
//!
//! Everything has a default, so a config file is optional. When present,
//! `inkpress.toml` in the working directory overrides just the keys it sets:
//!
//! ```toml
//! source_dir = "posts"               # Markdown posts
//! output_dir = "site"                # Generated HTML
//! layout = "templates/layout.html"   # Shared layout template
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! ```
//!
//! Unknown keys are rejected to catch typos early. Command-line flags
//! override whatever the file says.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "inkpress.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Paths and server settings for one build.
///
/// Built once at startup and handed to the pipeline; nothing reads paths
/// from globals, so independent builds can run side by side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the markdown posts.
    pub source_dir: PathBuf,
    /// Directory the HTML site is written to. Created if missing.
    pub output_dir: PathBuf,
    /// Layout template applied to every post.
    pub layout: PathBuf,
    /// Where the generated site is served.
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("posts"),
            output_dir: PathBuf::from("site"),
            layout: PathBuf::from("templates/layout.html"),
            server: ServerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind. `0.0.0.0` listens on all of them.
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl SiteConfig {
    /// Reject configurations that can't produce a usable site.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [
            ("source_dir", &self.source_dir),
            ("output_dir", &self.output_dir),
            ("layout", &self.layout),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if self.source_dir == self.output_dir {
            return Err(ConfigError::Validation(
                "source_dir and output_dir must differ".into(),
            ));
        }
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// A missing file yields the defaults. A file that exists but doesn't parse
/// or has unknown keys is an error. The result is not validated, so that
/// command-line overrides can be applied first; call
/// [`SiteConfig::validate`] on the final value.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// A fully commented `inkpress.toml` with every key at its default.
///
/// Printed by `inkpress gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# inkpress configuration
# =====================
# Every key is optional. Values shown are the defaults.

# Directory holding the markdown posts. Only files ending in ".md" directly
# inside it are converted; everything else is ignored.
source_dir = "posts"

# Directory the generated site is written to. Created if missing. Each post
# becomes "<name>.html", overwriting any earlier build.
output_dir = "site"

# Layout template shared by every post (Tera syntax). Insertion points:
#   {{ title }}    the post's file name without ".md", HTML-escaped
#   {{ content }}  the rendered post, inserted as-is
# Run `inkpress gen-layout` for a starting point.
layout = "templates/layout.html"

[server]
# Interface and port the site is served on after the build.
host = "0.0.0.0"
port = 8000
"##
}

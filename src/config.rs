//! # Documentation Configuration
//!
//! Process-wide configuration for a generation pass: the mandatory API
//! metadata (title, version, base URL, contact, description) plus the
//! fallback values applied only when no higher-priority enrichment source
//! supplies a field.
//!
//! The configuration is an explicitly passed value threaded through the
//! pipeline call, never ambient static state, so generation stays
//! deterministic and testable in isolation.

use crate::operation::Operation;
use crate::spec::StatusCode;
use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Resolver supplying a field value for an operation when every other
/// enrichment source came up empty.
pub type FieldResolver = Box<dyn Fn(&Operation) -> Option<String> + Send + Sync>;

/// Defaults applied by the lowest-priority enrichment source.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    /// Appended to every resource's per-verb status codes (deduplicated by
    /// code), so globally declared codes apply in addition to type-specific
    /// ones.
    #[serde(default)]
    pub default_status_codes: Vec<StatusCode>,
    #[serde(default)]
    pub default_tags: Vec<String>,
    #[serde(default)]
    pub fallback_category: Option<String>,
    #[serde(default)]
    pub fallback_notes: Option<String>,
    #[serde(skip)]
    pub title_resolver: Option<FieldResolver>,
    #[serde(skip)]
    pub description_resolver: Option<FieldResolver>,
    #[serde(skip)]
    pub notes_resolver: Option<FieldResolver>,
}

impl fmt::Debug for FallbackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackConfig")
            .field("default_status_codes", &self.default_status_codes)
            .field("default_tags", &self.default_tags)
            .field("fallback_category", &self.fallback_category)
            .field("fallback_notes", &self.fallback_notes)
            .field("title_resolver", &self.title_resolver.is_some())
            .field("description_resolver", &self.description_resolver.is_some())
            .field("notes_resolver", &self.notes_resolver.is_some())
            .finish()
    }
}

/// Top-level configuration for one documentation set.
///
/// `title`, `api_version`, `api_base_url`, `contact`, and `description` are
/// mandatory; [`validate`](DocumentationConfig::validate) is called at the
/// start of every generation pass and fails fast before any output is
/// produced.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentationConfig {
    pub title: String,
    pub api_version: String,
    pub api_base_url: String,
    pub contact: String,
    #[serde(default)]
    pub licence_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl DocumentationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "title" });
        }
        if self.description.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "description" });
        }
        if self.contact.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "contact" });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_base_url" });
        }
        url::Url::parse(&self.api_base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: err.to_string(),
        })?;
        Ok(())
    }
}

/// Load a [`DocumentationConfig`] from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<DocumentationConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path:?}"))?;
    let config: DocumentationConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {path:?}"))?;
    Ok(config)
}

/// Configuration precondition failure, surfaced before any output is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A mandatory field is missing or blank.
    MissingField { field: &'static str },
    /// The API base URL does not parse as an absolute URL.
    InvalidBaseUrl { url: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField { field } => {
                write!(f, "Documentation config is missing mandatory field '{field}'")
            }
            ConfigError::InvalidBaseUrl { url, reason } => {
                write!(f, "Documentation config base URL '{url}' is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//! Suite configuration
//!
//! The pinned repository and version used to live as constants inside the
//! suite itself; here they are an explicit [`SuiteConfig`] passed to the
//! suite constructor, with the pinned values as defaults. Generated suites
//! that need a different deployments version override the config (or load it
//! from a TOML file) instead of editing source.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::version::{self, ResolvedVersion};

fn default_repository() -> String {
    "networkservicemesh/deployments-k8s".to_string()
}

fn default_reference() -> String {
    "1120e9e7450b9370a321e29b63ce477efcfbb1a5".to_string()
}

fn default_checkout_dir() -> PathBuf {
    // Relative to the generated suite's own location; must stay in sync with
    // the generator's input parameters.
    PathBuf::from("..")
}

fn default_suite_name() -> String {
    "base".to_string()
}

/// Configuration for a [`BaseSuite`](crate::BaseSuite).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Deployments repository in `owner/name` form.
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Pinned version reference: a full commit SHA or a tag path.
    #[serde(default = "default_reference")]
    pub reference: String,

    /// Directory the checkout capability materializes the repository into.
    #[serde(default = "default_checkout_dir")]
    pub checkout_dir: PathBuf,

    /// Name the suite-level capture session is keyed by.
    #[serde(default = "default_suite_name")]
    pub suite_name: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            reference: default_reference(),
            checkout_dir: default_checkout_dir(),
            suite_name: default_suite_name(),
        }
    }
}

impl SuiteConfig {
    /// Parse a configuration from TOML content.
    ///
    /// Missing fields fall back to the pinned defaults.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Resolve the configured version reference.
    ///
    /// # Errors
    ///
    /// Fails with a descriptive configuration error if the reference is a
    /// non-tag string shorter than eight characters.
    pub fn resolve_version(&self) -> Result<ResolvedVersion> {
        version::resolve(&self.reference)
    }
}

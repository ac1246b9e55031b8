//! Run Configuration
//!
//! Holds everything a single release-notes run needs, assembled from the
//! command line.

use crate::aws::identity::IdentityProvider;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;

/// Language a layer is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Python,
    Nodejs,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Nodejs => "nodejs",
        }
    }

    /// Lambda runtime identifier the layer targets
    pub fn runtime(self) -> &'static str {
        match self {
            Language::Python => "python3.13",
            Language::Nodejs => "nodejs22.x",
        }
    }

    /// Value for `AWS_LAMBDA_EXEC_WRAPPER`
    pub fn exec_wrapper(self) -> &'static str {
        match self {
            Language::Python => "/opt/otel-instrument",
            Language::Nodejs => "/opt/otel-handler",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release notes run configuration
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub language: Language,
    /// Upstream OpenTelemetry Lambda version
    pub upstream_version: String,
    /// OTLP stdout exporter version
    pub exporter_version: String,
    /// Release group (beta, prod, dev, ...)
    pub release_group: String,
    /// Regions in the order they were given
    pub regions: Vec<String>,
    pub account_id: Option<String>,
    /// Full layer name as published
    pub layer_name: String,
    /// AWS shared config profile
    pub profile: Option<String>,
}

impl ReleaseConfig {
    /// Get effective account ID (CLI > caller identity)
    pub async fn effective_account_id(&self, identity: &dyn IdentityProvider) -> Result<String> {
        if let Some(account_id) = self.account_id.as_deref().filter(|id| !id.is_empty()) {
            return Ok(account_id.to_string());
        }

        identity
            .account_id()
            .await
            .context("Could not determine AWS account ID")
    }
}

/// Split a comma separated region list, trimming each entry.
///
/// Entries are passed through as-is: empty or malformed codes are kept and
/// simply fail to resolve later.
pub fn parse_regions(raw: &str) -> Vec<String> {
    raw.split(',').map(|r| r.trim().to_string()).collect()
}

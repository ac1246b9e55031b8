//! AWS Client
//!
//! Loads the shared SDK configuration once and hands out service clients,
//! scoping Lambda clients to the region being queried.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Region used for account lookups when the environment configures none
pub const FALLBACK_REGION: &str = "us-east-1";

/// Shared AWS configuration
#[derive(Clone, Debug)]
pub struct AwsClient {
    config: SdkConfig,
}

impl AwsClient {
    /// Load configuration from the default provider chain.
    ///
    /// Retries are disabled: each call is a single request.
    pub async fn new(profile: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(profile) = profile {
            tracing::debug!("Using AWS profile: {}", profile);
            loader = loader.profile_name(profile);
        }

        let config = loader.load().await;
        tracing::debug!("Default region: {:?}", config.region());

        Self { config }
    }

    /// Wrap an already loaded configuration
    pub fn from_sdk_config(config: SdkConfig) -> Self {
        Self { config }
    }

    /// Lambda client scoped to `region`
    pub fn lambda(&self, region: &str) -> aws_sdk_lambda::Client {
        let config = aws_sdk_lambda::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .build();
        aws_sdk_lambda::Client::from_conf(config)
    }

    /// STS client in the configured region (or [`FALLBACK_REGION`])
    pub fn sts(&self) -> aws_sdk_sts::Client {
        let mut builder = aws_sdk_sts::config::Builder::from(&self.config);
        if self.config.region().is_none() {
            builder = builder.region(Region::new(FALLBACK_REGION));
        }
        aws_sdk_sts::Client::from_conf(builder.build())
    }
}

/// Format an AWS SDK error with its full source chain for diagnostics
pub fn format_aws_error<E: std::error::Error>(error: &E) -> String {
    aws_sdk_lambda::error::DisplayErrorContext(error).to_string()
}

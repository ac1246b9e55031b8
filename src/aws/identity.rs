//! Caller Identity
//!
//! Resolves the AWS account the current credentials belong to.

use super::client::{format_aws_error, AwsClient};
use anyhow::Result;
use async_trait::async_trait;

/// Source of the caller's account ID
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn account_id(&self) -> Result<String>;
}

/// Identity provider backed by STS `GetCallerIdentity`
#[derive(Clone, Debug)]
pub struct StsIdentity {
    client: AwsClient,
}

impl StsIdentity {
    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for StsIdentity {
    async fn account_id(&self) -> Result<String> {
        tracing::debug!("GetCallerIdentity");

        let output = self
            .client
            .sts()
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(format_aws_error(&e)))?;

        output
            .account()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("GetCallerIdentity returned no account"))
    }
}

//! Lambda Layers
//!
//! Lists the published versions of a layer in a single region.

use super::client::{format_aws_error, AwsClient};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_lambda::types::LayerVersionsListItem;

/// One published version of a layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerVersion {
    pub version: i64,
    pub arn: Option<String>,
}

impl LayerVersion {
    pub fn new(version: i64, arn: &str) -> Self {
        Self {
            version,
            arn: Some(arn.to_string()),
        }
    }
}

impl From<&LayerVersionsListItem> for LayerVersion {
    fn from(item: &LayerVersionsListItem) -> Self {
        Self {
            version: item.version(),
            arn: item.layer_version_arn().map(str::to_string),
        }
    }
}

/// Source of published layer versions
#[async_trait]
pub trait LayerInventory: Send + Sync {
    /// List the versions of `layer_name` published in `region`
    async fn list_layer_versions(&self, layer_name: &str, region: &str)
        -> Result<Vec<LayerVersion>>;
}

/// Layer inventory backed by the Lambda `ListLayerVersions` API
#[derive(Clone, Debug)]
pub struct LambdaLayerInventory {
    client: AwsClient,
}

impl LambdaLayerInventory {
    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LayerInventory for LambdaLayerInventory {
    async fn list_layer_versions(
        &self,
        layer_name: &str,
        region: &str,
    ) -> Result<Vec<LayerVersion>> {
        tracing::debug!("ListLayerVersions {} in {}", layer_name, region);

        // Single page: Lambda lists newest versions first
        let output = self
            .client
            .lambda(region)
            .list_layer_versions()
            .layer_name(layer_name)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(format_aws_error(&e)))?;

        Ok(output
            .layer_versions()
            .iter()
            .map(LayerVersion::from)
            .collect())
    }
}

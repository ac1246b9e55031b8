//! AWS API interaction module
//!
//! This module wraps the AWS SDK clients the release notes need: Lambda for
//! listing published layer versions and STS for resolving the caller's
//! account.
//!
//! # Module Structure
//!
//! - [`client`] - Shared SDK configuration and per-region client construction
//! - [`layers`] - Layer version inventory backed by `ListLayerVersions`
//! - [`identity`] - Caller account lookup backed by `GetCallerIdentity`
//!
//! # Example
//!
//! ```ignore
//! use layer_notes::aws::{client::AwsClient, layers::{LambdaLayerInventory, LayerInventory}};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = AwsClient::new(None).await;
//!     let inventory = LambdaLayerInventory::new(client);
//!     let versions = inventory.list_layer_versions("otel-python-beta", "eu-west-1").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod identity;
pub mod layers;

//! Release notes generator for OTLP stdout Lambda layers.
//!
//! Looks up the latest published version of a Lambda layer in each requested
//! AWS region and renders a Markdown document listing the layer ARNs grouped
//! by continent, followed by usage instructions.
//!
//! # Module Structure
//!
//! - [`aws`] - AWS SDK wiring: Lambda layer inventory and STS identity
//! - [`config`] - Run configuration and the supported layer languages
//! - [`regions`] - Static region to continent / display name tables
//! - [`resolver`] - Per-region latest version lookup and continent grouping
//! - [`notes`] - Markdown rendering

pub mod aws;
pub mod config;
pub mod notes;
pub mod regions;
pub mod resolver;

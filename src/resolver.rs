//! Layer Resolver
//!
//! Finds the latest published version of a layer in each region and groups
//! the results by continent for rendering.

use crate::aws::layers::{LayerInventory, LayerVersion};
use crate::regions;
use std::collections::BTreeMap;

/// Outcome of looking up a layer in one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// ARN of the highest published version
    Found(String),
    NotFound,
    /// Lookup failed; carries the error detail
    Failed(String),
}

impl Resolution {
    /// Resolved ARN; not found and failed lookups are both `None`
    pub fn arn(&self) -> Option<&str> {
        match self {
            Resolution::Found(arn) => Some(arn),
            Resolution::NotFound | Resolution::Failed(_) => None,
        }
    }
}

/// Resolution for a region along with its display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionResult {
    pub resolution: Resolution,
    pub display_name: String,
}

impl RegionResult {
    pub fn arn(&self) -> Option<&str> {
        self.resolution.arn()
    }
}

/// Region results keyed by continent, then region code, both sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinentGroups {
    continents: BTreeMap<&'static str, BTreeMap<String, RegionResult>>,
}

impl ContinentGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for `region`. A region seen twice keeps the last result.
    pub fn insert(&mut self, region: &str, resolution: Resolution) {
        let result = RegionResult {
            resolution,
            display_name: regions::display_name_for(region),
        };
        self.continents
            .entry(regions::continent_for(region))
            .or_default()
            .insert(region.to_string(), result);
    }

    /// Continents in lexicographic order with their regions
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, RegionResult>)> {
        self.continents.iter().map(|(continent, regions)| (*continent, regions))
    }

    /// Result for a region, regardless of continent
    pub fn get(&self, region: &str) -> Option<&RegionResult> {
        self.continents.values().find_map(|regions| regions.get(region))
    }

    pub fn is_empty(&self) -> bool {
        self.continents.is_empty()
    }

    /// Number of distinct regions recorded
    pub fn region_count(&self) -> usize {
        self.continents.values().map(BTreeMap::len).sum()
    }

    /// Number of regions with a resolved ARN
    pub fn found_count(&self) -> usize {
        self.continents
            .values()
            .flat_map(BTreeMap::values)
            .filter(|r| r.arn().is_some())
            .count()
    }
}

/// Pick the highest version that has an ARN
pub fn select_latest(versions: &[LayerVersion]) -> Option<(i64, &str)> {
    versions
        .iter()
        .filter_map(|v| v.arn.as_deref().map(|arn| (v.version, arn)))
        .max_by_key(|(version, _)| *version)
}

/// Resolve the latest ARN of `layer_name` in `region`.
///
/// Errors never propagate; they are logged and reported as [`Resolution::Failed`].
pub async fn resolve(inventory: &dyn LayerInventory, layer_name: &str, region: &str) -> Resolution {
    match inventory.list_layer_versions(layer_name, region).await {
        Ok(versions) => match select_latest(&versions) {
            Some((version, arn)) => {
                tracing::info!(
                    "Found {} versions for {} in {}, using version {}",
                    versions.len(),
                    layer_name,
                    region,
                    version
                );
                Resolution::Found(arn.to_string())
            }
            None => {
                tracing::info!("No versions of {} found in {}", layer_name, region);
                Resolution::NotFound
            }
        },
        Err(e) => {
            let detail = format!("{:#}", e);
            tracing::error!(
                "Error getting layer version for {} in {}: {}",
                layer_name,
                region,
                detail
            );
            Resolution::Failed(detail)
        }
    }
}

/// Resolve every region in order, one request at a time
pub async fn collect_layer_data(
    inventory: &dyn LayerInventory,
    layer_name: &str,
    regions: &[String],
) -> ContinentGroups {
    let mut groups = ContinentGroups::new();

    for region in regions {
        let resolution = resolve(inventory, layer_name, region).await;
        groups.insert(region, resolution);
    }

    tracing::info!(
        "Resolved {}/{} regions for {}",
        groups.found_count(),
        groups.region_count(),
        layer_name
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory inventory that records every lookup
    #[derive(Default)]
    struct FakeInventory {
        responses: HashMap<String, Vec<Result<Vec<LayerVersion>, String>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeInventory {
        fn with(mut self, region: &str, response: Result<Vec<LayerVersion>, &str>) -> Self {
            self.responses
                .entry(region.to_string())
                .or_default()
                .push(response.map_err(str::to_string));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LayerInventory for FakeInventory {
        async fn list_layer_versions(
            &self,
            _layer_name: &str,
            region: &str,
        ) -> Result<Vec<LayerVersion>> {
            let mut calls = self.calls.lock().unwrap();
            let nth = calls.iter().filter(|r| *r == region).count();
            calls.push(region.to_string());

            match self.responses.get(region).and_then(|r| r.get(nth)) {
                Some(Ok(versions)) => Ok(versions.clone()),
                Some(Err(e)) => Err(anyhow::anyhow!("{}", e)),
                None => Err(anyhow::anyhow!("InvalidRegion: {}", region)),
            }
        }
    }

    fn arn(region: &str, version: i64) -> String {
        format!("arn:aws:lambda:{region}:123456789012:layer:otel-python-beta:{version}")
    }

    fn regions(list: &[&str]) -> Vec<String> {
        list.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_select_latest_picks_highest_version() {
        let versions = vec![
            LayerVersion::new(3, "arn:3"),
            LayerVersion::new(42, "arn:42"),
            LayerVersion::new(7, "arn:7"),
        ];
        assert_eq!(select_latest(&versions), Some((42, "arn:42")));
    }

    #[test]
    fn test_select_latest_empty() {
        assert_eq!(select_latest(&[]), None);
    }

    #[test]
    fn test_select_latest_skips_versions_without_arn() {
        let versions = vec![
            LayerVersion::new(1, "arn:1"),
            LayerVersion {
                version: 2,
                arn: None,
            },
        ];
        assert_eq!(select_latest(&versions), Some((1, "arn:1")));
    }

    #[test]
    fn test_resolve_found() {
        let inventory = FakeInventory::default().with(
            "us-east-1",
            Ok(vec![
                LayerVersion::new(1, &arn("us-east-1", 1)),
                LayerVersion::new(2, &arn("us-east-1", 2)),
            ]),
        );
        let resolution =
            tokio_test::block_on(resolve(&inventory, "otel-python-beta", "us-east-1"));
        assert_eq!(resolution, Resolution::Found(arn("us-east-1", 2)));
    }

    #[test]
    fn test_resolve_empty_is_not_found() {
        let inventory = FakeInventory::default().with("eu-west-1", Ok(vec![]));
        let resolution =
            tokio_test::block_on(resolve(&inventory, "otel-python-beta", "eu-west-1"));
        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(resolution.arn(), None);
    }

    #[test]
    fn test_resolve_error_is_absorbed() {
        let inventory = FakeInventory::default().with("eu-west-1", Err("AccessDeniedException"));
        let resolution =
            tokio_test::block_on(resolve(&inventory, "otel-python-beta", "eu-west-1"));
        assert!(matches!(&resolution, Resolution::Failed(detail) if detail.contains("AccessDenied")));
        assert_eq!(resolution.arn(), None);
    }

    #[test]
    fn test_collect_queries_regions_in_order() {
        let inventory = FakeInventory::default()
            .with("us-east-1", Ok(vec![LayerVersion::new(42, &arn("us-east-1", 42))]))
            .with("eu-west-1", Ok(vec![]))
            .with("ap-southeast-1", Err("ServiceException"));

        let groups = tokio_test::block_on(collect_layer_data(
            &inventory,
            "otel-python-beta",
            &regions(&["us-east-1", "eu-west-1", "ap-southeast-1"]),
        ));

        assert_eq!(inventory.calls(), vec!["us-east-1", "eu-west-1", "ap-southeast-1"]);
        assert_eq!(groups.region_count(), 3);
        assert_eq!(groups.found_count(), 1);

        let continents: Vec<&str> = groups.iter().map(|(c, _)| c).collect();
        assert_eq!(continents, vec!["Europe", "North America", "Other"]);

        let other = groups.get("ap-southeast-1").unwrap();
        assert_eq!(other.display_name, "ap-southeast-1");
        assert!(matches!(other.resolution, Resolution::Failed(_)));
    }

    #[test]
    fn test_collect_failure_does_not_stop_other_regions() {
        let inventory = FakeInventory::default()
            .with("us-east-1", Err("ThrottlingException"))
            .with("us-west-2", Ok(vec![LayerVersion::new(5, &arn("us-west-2", 5))]));

        let groups = tokio_test::block_on(collect_layer_data(
            &inventory,
            "otel-python-beta",
            &regions(&["us-east-1", "us-west-2"]),
        ));

        assert_eq!(groups.get("us-east-1").unwrap().arn(), None);
        assert_eq!(
            groups.get("us-west-2").unwrap().arn(),
            Some(arn("us-west-2", 5).as_str())
        );
    }

    #[test]
    fn test_duplicate_region_last_write_wins() {
        let inventory = FakeInventory::default()
            .with("us-east-1", Ok(vec![LayerVersion::new(1, &arn("us-east-1", 1))]))
            .with("us-east-1", Ok(vec![]));

        let groups = tokio_test::block_on(collect_layer_data(
            &inventory,
            "otel-python-beta",
            &crate::config::parse_regions("us-east-1, us-east-1"),
        ));

        assert_eq!(inventory.calls(), vec!["us-east-1", "us-east-1"]);
        assert_eq!(groups.region_count(), 1);
        assert_eq!(groups.get("us-east-1").unwrap().resolution, Resolution::NotFound);
    }

    #[test]
    fn test_empty_region_string_is_passed_through() {
        let inventory = FakeInventory::default();
        let groups = tokio_test::block_on(collect_layer_data(
            &inventory,
            "otel-python-beta",
            &regions(&[""]),
        ));

        assert_eq!(inventory.calls(), vec![""]);
        let result = groups.get("").unwrap();
        assert_eq!(result.arn(), None);
        assert_eq!(result.display_name, "");
    }

    proptest! {
        /// The selected ARN always belongs to the maximum version
        #[test]
        fn latest_is_maximum(versions in prop::collection::hash_set(0i64..10_000, 1..50)) {
            let versions: Vec<LayerVersion> = versions
                .into_iter()
                .map(|v| LayerVersion::new(v, &format!("arn:{v}")))
                .collect();
            let max = versions.iter().map(|v| v.version).max().unwrap();

            let (version, arn) = select_latest(&versions).unwrap();
            prop_assert_eq!(version, max);
            prop_assert_eq!(arn, format!("arn:{max}"));
        }

        /// Input order does not affect the selection
        #[test]
        fn selection_ignores_order(mut versions in prop::collection::vec(0i64..1_000, 1..30)) {
            versions.sort_unstable();
            versions.dedup();
            let forward: Vec<LayerVersion> = versions
                .iter()
                .map(|v| LayerVersion::new(*v, &format!("arn:{v}")))
                .collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            prop_assert_eq!(select_latest(&forward), select_latest(&reversed));
        }
    }
}

use crate::adapters::outbound::component_payload::ComponentPayload;
use crate::component_hierarchy::domain::Component;
use crate::ports::outbound::ComponentRepository;
use crate::shared::error::FleetError;
use crate::shared::security::{read_regular_file, validate_identifier};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// JsonSnapshotRepository adapter serving component lists from exported
/// JSON files
///
/// Each vessel lives in `{dir}/{vessel_id}.json` holding the body the fleet
/// API returns, either the bare array or the `{"data": [...]}` wrapper.
/// Useful offline and in tests.
pub struct JsonSnapshotRepository {
    snapshot_dir: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(snapshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_dir: snapshot_dir.into(),
        }
    }

    pub fn snapshot_dir(&self) -> &Path {
        &self.snapshot_dir
    }

    /// Path of the snapshot for `vessel_id`
    pub fn snapshot_path(&self, vessel_id: &str) -> PathBuf {
        self.snapshot_dir.join(format!("{}.json", vessel_id))
    }

    fn read_snapshot(&self, vessel_id: &str) -> Result<Vec<Component>> {
        // Keeps the id from escaping the snapshot directory
        validate_identifier(vessel_id, "Vessel id")?;
        let path = self.snapshot_path(vessel_id);

        if !path.exists() {
            return Err(FleetError::SnapshotNotFound {
                path: path.clone(),
                suggestion: format!(
                    "Export the component list of vessel '{}' into {}",
                    vessel_id,
                    self.snapshot_dir.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(&path)?;
        ComponentPayload::parse(&content).map_err(|e| {
            FleetError::SnapshotParseError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl ComponentRepository for JsonSnapshotRepository {
    async fn fetch_by_vessel(&self, vessel_id: &str) -> Result<Vec<Component>> {
        self.read_snapshot(vessel_id)
    }
}

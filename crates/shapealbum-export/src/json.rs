//! JSON export of the snapshot list.

use shapealbum_core::Snapshot;

/// Pretty-printed JSON array of snapshots, oldest first
pub fn export_json(snapshots: &[Snapshot]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshots)
}

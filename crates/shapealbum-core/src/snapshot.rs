//! Immutable point-in-time captures of a canvas.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shapes::Shape;

/// Format of the time-derived part of a snapshot id
pub const ID_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Format of the human-readable snapshot timestamp
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Snapshot identifier: capture time followed by a disambiguating suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub String);

impl SnapshotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity and timestamp for a snapshot that is about to be captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStamp {
    pub id: SnapshotId,
    pub timestamp: String,
}

impl SnapshotStamp {
    /// Build the stamp for a capture at `time` using `suffix` as disambiguator
    pub fn at(time: NaiveDateTime, suffix: &str) -> Self {
        Self {
            id: SnapshotId(format!("{}{}", time.format(ID_FORMAT), suffix)),
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A deep copy of the canvas contents plus descriptive metadata.
///
/// There are no mutators; every accessor hands out owned values or
/// shared borrows of data nothing can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    id: SnapshotId,
    timestamp: String,
    description: String,
    shapes: Vec<Shape>,
}

impl Snapshot {
    pub fn new(stamp: SnapshotStamp, description: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            id: stamp.id,
            timestamp: stamp.timestamp,
            description: description.into(),
            shapes,
        }
    }

    pub fn id(&self) -> &SnapshotId {
        &self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Owned copies of the captured shapes, in canvas order
    pub fn contents(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    /// Iterate the captured shapes in canvas order
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Look up a captured shape by name
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

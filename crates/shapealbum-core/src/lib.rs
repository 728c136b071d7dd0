//! Core types for shapealbum: shapes, the canvas registry, snapshots,
//! typed operations and the action script parser.

pub mod canvas;
pub mod error;
pub mod operation;
pub mod script;
pub mod shapes;
pub mod snapshot;

pub use canvas::Canvas;
pub use error::{ActionKind, AlbumError, InstructionFault, ScriptError};
pub use operation::Operation;
pub use script::{parse_line, parse_lines, parse_script};
pub use shapes::{Shape, ShapeKind};
pub use snapshot::{Snapshot, SnapshotId, SnapshotStamp};

pub use shapealbum_geometry as geometry;

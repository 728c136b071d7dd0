//! Typed operations produced by the script parser.

use serde::{Deserialize, Serialize};
use shapealbum_geometry::{Color, Extent, Position};

use crate::error::ActionKind;
use crate::shapes::ShapeKind;

/// One parsed unit of script intent. Self-contained: it holds no
/// reference to a canvas or history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    CreateShape {
        name: String,
        kind: ShapeKind,
        position: Position,
        extent: Extent,
        color: Color,
    },
    MoveShape {
        name: String,
        position: Position,
    },
    ResizeShape {
        name: String,
        extent: Extent,
    },
    RecolorShape {
        name: String,
        color: Color,
    },
    RemoveShape {
        name: String,
    },
    TakeSnapshot {
        description: String,
    },
}

impl Operation {
    pub fn kind(&self) -> ActionKind {
        match self {
            Operation::CreateShape { .. } => ActionKind::Create,
            Operation::MoveShape { .. } => ActionKind::Move,
            Operation::ResizeShape { .. } => ActionKind::Resize,
            Operation::RecolorShape { .. } => ActionKind::Color,
            Operation::RemoveShape { .. } => ActionKind::Remove,
            Operation::TakeSnapshot { .. } => ActionKind::Snapshot,
        }
    }

    /// Name of the shape this operation targets, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Operation::CreateShape { name, .. }
            | Operation::MoveShape { name, .. }
            | Operation::ResizeShape { name, .. }
            | Operation::RecolorShape { name, .. }
            | Operation::RemoveShape { name } => Some(name),
            Operation::TakeSnapshot { .. } => None,
        }
    }

    pub fn take_snapshot(description: impl Into<String>) -> Self {
        Operation::TakeSnapshot {
            description: description.into(),
        }
    }
}

//! Applies parsed operations to a canvas and its history.

use shapealbum_core::{AlbumError, Canvas, Operation, Shape};
use tracing::debug;

use crate::history::History;

/// Execute one operation. Validation happens before any mutation, so a
/// failed operation leaves both canvas and history untouched.
pub fn apply(operation: &Operation, canvas: &mut Canvas, history: &mut History) -> Result<(), AlbumError> {
    debug!(action = %operation.kind(), shape = operation.target(), "applying operation");

    match operation {
        Operation::CreateShape {
            name,
            kind,
            position,
            extent,
            color,
        } => {
            let shape = Shape::new(name.clone(), *kind, *position, *extent, *color)?;
            canvas.add(shape)
        }
        Operation::MoveShape { name, position } => canvas.move_shape(name, position.x, position.y),
        Operation::ResizeShape { name, extent } => {
            canvas.resize(name, extent.horizontal, extent.vertical)
        }
        Operation::RecolorShape { name, color } => canvas.recolor(name, color.r, color.g, color.b),
        Operation::RemoveShape { name } => canvas.remove(name).map(|_| ()),
        Operation::TakeSnapshot { description } => {
            if canvas.is_empty() {
                return Err(AlbumError::EmptyCanvas);
            }
            let stamp = history.next_stamp();
            let snapshot = canvas.snapshot(stamp, description)?;
            history.record(snapshot)
        }
    }
}

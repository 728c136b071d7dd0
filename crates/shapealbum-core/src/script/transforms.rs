//! One builder per script keyword. Each takes the full token list
//! (keyword included) and produces a single operation.

use shapealbum_geometry::{Color, Extent, Position};

use crate::error::{ActionKind, AlbumError, InstructionFault};
use crate::operation::Operation;
use crate::shapes::ShapeKind;

/// Signature shared by every keyword builder
pub type Transform = fn(&[&str]) -> Result<Operation, AlbumError>;

fn expect_count(action: ActionKind, tokens: &[&str], expected: usize) -> Result<(), AlbumError> {
    if tokens.len() != expected {
        return Err(AlbumError::invalid(
            action,
            InstructionFault::WrongArgumentCount {
                expected,
                found: tokens.len(),
            },
        ));
    }
    Ok(())
}

fn int(action: ActionKind, field: &'static str, token: &str) -> Result<i32, AlbumError> {
    token.parse::<i32>().map_err(|_| {
        AlbumError::invalid(
            action,
            InstructionFault::InvalidValue {
                field,
                value: token.to_string(),
            },
        )
    })
}

/// `shape <name> <oval|rectangle> <x> <y> <h> <v> <r> <g> <b>`
pub fn create(tokens: &[&str]) -> Result<Operation, AlbumError> {
    const ACTION: ActionKind = ActionKind::Create;
    expect_count(ACTION, tokens, 10)?;

    let kind = tokens[2].parse::<ShapeKind>().map_err(|_| {
        AlbumError::invalid(ACTION, InstructionFault::UnsupportedKind(tokens[2].to_string()))
    })?;

    Ok(Operation::CreateShape {
        name: tokens[1].to_string(),
        kind,
        position: Position::new(int(ACTION, "x", tokens[3])?, int(ACTION, "y", tokens[4])?),
        extent: Extent::new(int(ACTION, "h", tokens[5])?, int(ACTION, "v", tokens[6])?),
        color: Color::new(
            int(ACTION, "r", tokens[7])?,
            int(ACTION, "g", tokens[8])?,
            int(ACTION, "b", tokens[9])?,
        ),
    })
}

/// `move <name> <x> <y>`
pub fn move_to(tokens: &[&str]) -> Result<Operation, AlbumError> {
    const ACTION: ActionKind = ActionKind::Move;
    expect_count(ACTION, tokens, 4)?;
    Ok(Operation::MoveShape {
        name: tokens[1].to_string(),
        position: Position::new(int(ACTION, "x", tokens[2])?, int(ACTION, "y", tokens[3])?),
    })
}

/// `resize <name> <h> <v>`
pub fn resize(tokens: &[&str]) -> Result<Operation, AlbumError> {
    const ACTION: ActionKind = ActionKind::Resize;
    expect_count(ACTION, tokens, 4)?;
    Ok(Operation::ResizeShape {
        name: tokens[1].to_string(),
        extent: Extent::new(int(ACTION, "h", tokens[2])?, int(ACTION, "v", tokens[3])?),
    })
}

/// `color <name> <r> <g> <b>`
pub fn recolor(tokens: &[&str]) -> Result<Operation, AlbumError> {
    const ACTION: ActionKind = ActionKind::Color;
    expect_count(ACTION, tokens, 5)?;
    Ok(Operation::RecolorShape {
        name: tokens[1].to_string(),
        color: Color::new(
            int(ACTION, "r", tokens[2])?,
            int(ACTION, "g", tokens[3])?,
            int(ACTION, "b", tokens[4])?,
        ),
    })
}

/// `remove <name>`
pub fn remove(tokens: &[&str]) -> Result<Operation, AlbumError> {
    expect_count(ActionKind::Remove, tokens, 2)?;
    Ok(Operation::RemoveShape {
        name: tokens[1].to_string(),
    })
}

/// `snapshot [description words...]`
pub fn snapshot(tokens: &[&str]) -> Result<Operation, AlbumError> {
    let description = tokens.get(1..).unwrap_or_default().join(" ");
    Ok(Operation::take_snapshot(description))
}

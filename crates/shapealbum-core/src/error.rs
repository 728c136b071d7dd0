//! Error taxonomy for canvas, history and script failures.

use std::fmt;

use thiserror::Error;

/// The kind of operation a script line was being turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Create,
    Move,
    Resize,
    Color,
    Remove,
    Snapshot,
}

impl ActionKind {
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Move => "move",
            ActionKind::Resize => "resize",
            ActionKind::Color => "change color",
            ActionKind::Remove => "remove",
            ActionKind::Snapshot => "take snapshot",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a script line could not be turned into an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionFault {
    /// Token count (keyword included) does not match the keyword's arity
    #[error("wrong argument count: expected {expected} tokens, found {found}")]
    WrongArgumentCount { expected: usize, found: usize },
    /// A numeric field did not parse as a 32-bit integer
    #[error("invalid value `{value}` for {field}")]
    InvalidValue { field: &'static str, value: String },
    /// Shape kind other than `oval` or `rectangle`
    #[error("unsupported shape kind `{0}`")]
    UnsupportedKind(String),
}

/// Every failure the album core can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlbumError {
    #[error("invalid instruction for action {action}: {fault}")]
    InvalidInstruction {
        action: ActionKind,
        fault: InstructionFault,
    },

    #[error("shape name `{0}` is already taken")]
    DuplicateName(String),

    #[error("shape `{0}` doesn't exist")]
    NotFound(String),

    #[error("color value ({r},{g},{b}) is out of bounds, channels must be within 0..=255")]
    OutOfRange { r: i32, g: i32, b: i32 },

    #[error("no content to take a snapshot of")]
    EmptyCanvas,

    #[error("shape kind `{0}` isn't supported")]
    UnsupportedKind(String),

    #[error("shape name must not be empty")]
    EmptyName,

    #[error("snapshot `{0}` is already recorded")]
    DuplicateSnapshot(String),
}

impl AlbumError {
    pub(crate) fn invalid(action: ActionKind, fault: InstructionFault) -> Self {
        AlbumError::InvalidInstruction { action, fault }
    }
}

/// A script line that failed to parse, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: AlbumError,
}

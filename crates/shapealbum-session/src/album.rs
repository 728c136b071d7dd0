//! The album: the single entry point renderers, exporters and script
//! runners use. It owns the canvas and its snapshot history.

use shapealbum_core::{parse_script, AlbumError, Canvas, Operation, ScriptError, Snapshot};
use thiserror::Error;
use tracing::warn;

use crate::history::History;
use crate::interpreter::apply;

/// Failure while running a batch or a whole script.
///
/// Operations applied before the failure stay applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ScriptError),

    #[error("operation {} ({action}) failed: {source}", .index + 1)]
    Execute {
        /// 0-based position of the failing operation in the batch
        index: usize,
        action: &'static str,
        #[source]
        source: AlbumError,
    },
}

/// Canvas plus history behind one contract
#[derive(Debug, Default)]
pub struct Album {
    canvas: Canvas,
    history: History,
}

impl Album {
    /// Empty album wired to the system clock and a random id suffix
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Empty album recording into the given history
    pub fn with_history(history: History) -> Self {
        Self {
            canvas: Canvas::new(),
            history,
        }
    }

    /// Apply one operation
    pub fn execute(&mut self, operation: &Operation) -> Result<(), AlbumError> {
        apply(operation, &mut self.canvas, &mut self.history)
    }

    /// Apply operations in order, stopping at the first failure
    pub fn execute_all<'a, I>(&mut self, operations: I) -> Result<usize, RunError>
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let mut applied = 0;
        for (index, operation) in operations.into_iter().enumerate() {
            if let Err(source) = self.execute(operation) {
                warn!(index, error = %source, "aborting batch");
                return Err(RunError::Execute {
                    index,
                    action: operation.kind().name(),
                    source,
                });
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Parse a script and apply every operation in it
    pub fn run_script(&mut self, text: &str) -> Result<usize, RunError> {
        let operations = parse_script(text)?;
        self.execute_all(&operations)
    }

    /// Capture the current canvas; same as executing a `TakeSnapshot`
    pub fn take_snapshot(&mut self, description: &str) -> Result<(), AlbumError> {
        self.execute(&Operation::take_snapshot(description))
    }

    /// Copy of the live canvas
    pub fn current_state(&self) -> Canvas {
        self.canvas.clone()
    }

    /// Copies of every snapshot, oldest first
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.history.all()
    }

    /// Copy of one snapshot by id
    pub fn snapshot(&self, id: &str) -> Option<Snapshot> {
        self.history.get(id)
    }

    pub fn snapshot_count(&self) -> usize {
        self.history.len()
    }
}

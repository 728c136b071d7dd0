//! Snapshot history, the operation interpreter and the album facade.

pub mod album;
pub mod history;
pub mod interpreter;

pub use album::{Album, RunError};
pub use history::{
    Clock, Disambiguator, FixedClock, History, RandomSuffix, SequenceSuffix, SystemClock,
    SUFFIX_RANGE,
};
pub use interpreter::apply;

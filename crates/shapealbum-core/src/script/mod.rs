//! Line-oriented action script parser.
//!
//! Each line is split on whitespace; the first token, compared
//! case-insensitively, picks a builder from `TRANSFORMS`. Lines with an
//! unknown first token (blank lines, `#` comments, anything else) are
//! skipped. Parsing never touches a canvas or history.

mod transforms;

pub use transforms::Transform;

use crate::error::{AlbumError, ScriptError};
use crate::operation::Operation;

/// Keyword to builder table
const TRANSFORMS: &[(&str, Transform)] = &[
    ("shape", transforms::create),
    ("move", transforms::move_to),
    ("resize", transforms::resize),
    ("color", transforms::recolor),
    ("remove", transforms::remove),
    ("snapshot", transforms::snapshot),
];

/// Split a line into whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Look up the builder for a keyword
pub fn transform_for(keyword: &str) -> Option<Transform> {
    let keyword = keyword.to_lowercase();
    TRANSFORMS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, transform)| *transform)
}

/// Parse one line. `Ok(None)` means the line was skipped.
pub fn parse_line(line: &str) -> Result<Option<Operation>, AlbumError> {
    let tokens = tokenize(line);
    let Some(keyword) = tokens.first() else {
        return Ok(None);
    };
    match transform_for(keyword) {
        Some(transform) => transform(&tokens).map(Some),
        None => Ok(None),
    }
}

/// Parse a sequence of lines, stopping at the first invalid one
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<Operation>, ScriptError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut operations = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        match parse_line(line) {
            Ok(Some(op)) => operations.push(op),
            Ok(None) => {}
            Err(source) => return Err(ScriptError { line: idx + 1, source }),
        }
    }
    Ok(operations)
}

/// Parse a whole script
pub fn parse_script(text: &str) -> Result<Vec<Operation>, ScriptError> {
    parse_lines(text.lines())
}

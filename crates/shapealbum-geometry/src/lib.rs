//! Value types shared by every shapealbum crate.
//!
//! Position, Color and Extent are plain `Copy` records: handing one to a
//! snapshot or a caller always hands over an independent value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest accepted value for a color channel
pub const CHANNEL_MIN: i32 = 0;
/// Largest accepted value for a color channel
pub const CHANNEL_MAX: i32 = 255;

/// A position on the canvas (can be negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates in place
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// RGB color. Channels are only range-checked when a shape is recolored,
/// so a freshly constructed color may hold any integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Overwrite all three channels in place
    pub fn set(&mut self, r: i32, g: i32, b: i32) {
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// True when every channel lies in `[CHANNEL_MIN, CHANNEL_MAX]`
    pub fn in_range(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (CHANNEL_MIN..=CHANNEL_MAX).contains(c))
    }

    /// CSS `rgb(..)` form for SVG fills
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

/// Horizontal and vertical extent of a shape.
///
/// No sign check: zero and negative extents are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Extent {
    pub fn new(horizontal: i32, vertical: i32) -> Self {
        Self { horizontal, vertical }
    }
}

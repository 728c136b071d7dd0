//! Shape types for shapealbum.
//!
//! ShapeKind is the fixed kind tag; Shape is the named record the canvas owns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shapealbum_geometry::{Color, Extent, Position};

use crate::error::AlbumError;

/// Different kinds of shapes the album supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle; position is the min corner, extents are width and height
    Rectangle,
    /// Axis-aligned oval; position is the center, extents are the x and y radii
    Oval,
}

impl ShapeKind {
    /// Keyword used for this kind in scripts and exports
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Oval => "oval",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = AlbumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "oval" => Ok(ShapeKind::Oval),
            other => Err(AlbumError::UnsupportedKind(other.to_string())),
        }
    }
}

/// A named shape. Name and kind are fixed at creation; position, extent and
/// color only change through the owning canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRecord")]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    position: Position,
    extent: Extent,
    color: Color,
}

/// Unchecked wire form; deserialized shapes go through `Shape::new`
#[derive(Deserialize)]
struct ShapeRecord {
    name: String,
    kind: ShapeKind,
    position: Position,
    extent: Extent,
    color: Color,
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = AlbumError;

    fn try_from(record: ShapeRecord) -> Result<Self, Self::Error> {
        Shape::new(record.name, record.kind, record.position, record.extent, record.color)
    }
}

impl Shape {
    pub fn new(
        name: impl Into<String>,
        kind: ShapeKind,
        position: Position,
        extent: Extent,
        color: Color,
    ) -> Result<Self, AlbumError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AlbumError::EmptyName);
        }
        Ok(Self {
            name,
            kind,
            position,
            extent,
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.position.set(x, y);
    }

    pub(crate) fn resize(&mut self, horizontal: i32, vertical: i32) {
        self.extent = Extent::new(horizontal, vertical);
    }

    pub(crate) fn recolor(&mut self, r: i32, g: i32, b: i32) {
        self.color.set(r, g, b);
    }

    /// Bounding box (min_x, min_y, max_x, max_y) in canvas units.
    ///
    /// Widened to `i64` so any `i32` position plus extent fits.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        let (x, y) = (i64::from(self.position.x), i64::from(self.position.y));
        let (horizontal, vertical) = (
            i64::from(self.extent.horizontal),
            i64::from(self.extent.vertical),
        );
        match self.kind {
            ShapeKind::Rectangle => (
                x.min(x + horizontal),
                y.min(y + vertical),
                x.max(x + horizontal),
                y.max(y + vertical),
            ),
            ShapeKind::Oval => {
                let (rx, ry) = (horizontal.abs(), vertical.abs());
                (x - rx, y - ry, x + rx, y + ry)
            }
        }
    }
}

//! The canvas: an insertion-ordered registry of named shapes.

use shapealbum_geometry::Color;

use crate::error::AlbumError;
use crate::shapes::Shape;
use crate::snapshot::{Snapshot, SnapshotStamp};

/// Live set of shapes, keyed by name, kept in creation order.
///
/// `Clone` is a deep copy: two canvases never share a shape. Equality is
/// structural over the ordered shape sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.name() == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Shape, AlbumError> {
        match self.index_of(name) {
            Some(idx) => Ok(&mut self.shapes[idx]),
            None => Err(AlbumError::NotFound(name.to_string())),
        }
    }

    /// Add a shape; its name must not be taken
    pub fn add(&mut self, shape: Shape) -> Result<(), AlbumError> {
        if self.contains(shape.name()) {
            return Err(AlbumError::DuplicateName(shape.name().to_string()));
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Move a shape to a new position
    pub fn move_shape(&mut self, name: &str, x: i32, y: i32) -> Result<(), AlbumError> {
        self.get_mut(name)?.move_to(x, y);
        Ok(())
    }

    /// Replace both extents of a shape
    pub fn resize(&mut self, name: &str, horizontal: i32, vertical: i32) -> Result<(), AlbumError> {
        self.get_mut(name)?.resize(horizontal, vertical);
        Ok(())
    }

    /// Replace the color of a shape; every channel must be within 0..=255
    pub fn recolor(&mut self, name: &str, r: i32, g: i32, b: i32) -> Result<(), AlbumError> {
        let shape = self.get_mut(name)?;
        if !Color::new(r, g, b).in_range() {
            return Err(AlbumError::OutOfRange { r, g, b });
        }
        shape.recolor(r, g, b);
        Ok(())
    }

    /// Remove a shape, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Result<Shape, AlbumError> {
        match self.index_of(name) {
            Some(idx) => Ok(self.shapes.remove(idx)),
            None => Err(AlbumError::NotFound(name.to_string())),
        }
    }

    /// Capture every shape, in order, into a new snapshot
    pub fn snapshot(&self, stamp: SnapshotStamp, description: &str) -> Result<Snapshot, AlbumError> {
        if self.is_empty() {
            return Err(AlbumError::EmptyCanvas);
        }
        Ok(Snapshot::new(stamp, description, self.contents()))
    }

    /// Owned copies of every shape, in creation order
    pub fn contents(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    /// Owned copy of a single shape
    pub fn shape(&self, name: &str) -> Option<Shape> {
        self.index_of(name).map(|idx| self.shapes[idx].clone())
    }

    pub fn names(&self) -> Vec<&str> {
        self.shapes.iter().map(|s| s.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

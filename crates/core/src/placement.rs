//! Placement of a unit piece on a sheet.

use crate::geometry::Rect;
use crate::piece::UnitPiece;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation applied to a placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    /// Rotation in degrees (0 or 90).
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
        }
    }

    /// Effective (width, height) of a `width` x `height` rectangle under this rotation.
    pub fn apply(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Self::Deg0 => (width, height),
            Self::Deg90 => (height, width),
        }
    }
}

/// A unit piece placed at a position on a sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The placed unit piece (original dimensions).
    pub piece: UnitPiece,
    pub x: f64,
    pub y: f64,
    pub rotation: Rotation,
}

impl Placement {
    pub fn new(piece: UnitPiece, x: f64, y: f64, rotation: Rotation) -> Self {
        Self {
            piece,
            x,
            y,
            rotation,
        }
    }

    /// Width occupied on the sheet.
    pub fn width(&self) -> f64 {
        self.rotation.apply(self.piece.width, self.piece.height).0
    }

    /// Height occupied on the sheet.
    pub fn height(&self) -> f64 {
        self.rotation.apply(self.piece.width, self.piece.height).1
    }

    /// Occupied rectangle on the sheet.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    pub fn area(&self) -> f64 {
        self.piece.area()
    }
}

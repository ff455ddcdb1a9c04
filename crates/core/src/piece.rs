//! Piece records: the cutting requirements fed into a run.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a piece.
pub type PieceId = String;

/// Whether a piece may be turned by 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrientationMode {
    /// Natural orientation only.
    #[default]
    Fixed,
    /// Natural or turned by 90 degrees.
    Rotatable,
}

/// Direction of the material fibre a piece must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrainDirection {
    /// Grain runs along the piece width; the piece keeps its natural orientation.
    Horizontal,
    /// Grain runs along the piece height; the piece is always turned by 90 degrees.
    Vertical,
}

/// Membership of a piece in a block of adjacent pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockRef {
    /// Block identifier shared by all members.
    pub id: String,
    /// Left-to-right position of the member inside the block.
    pub position: usize,
}

/// One rectangular cutting requirement, possibly repeated via `quantity`.
///
/// Construct through [`Piece::new`], which rejects non-positive dimensions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Piece {
    id: PieceId,
    width: f64,
    height: f64,
    quantity: usize,
    orientation: OrientationMode,
    grain: Option<GrainDirection>,
    wood_type: Option<String>,
    block: Option<BlockRef>,
}

impl Piece {
    /// Creates a fixed-orientation piece, validating its dimensions and quantity.
    pub fn new(id: impl Into<PieceId>, width: f64, height: f64, quantity: usize) -> Result<Self> {
        let id = id.into();
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::InvalidPiece(format!(
                "width of '{}' must be positive, got {}",
                id, width
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(Error::InvalidPiece(format!(
                "height of '{}' must be positive, got {}",
                id, height
            )));
        }
        if quantity == 0 {
            return Err(Error::InvalidPiece(format!(
                "quantity of '{}' must be at least 1",
                id
            )));
        }

        Ok(Self {
            id,
            width,
            height,
            quantity,
            orientation: OrientationMode::Fixed,
            grain: None,
            wood_type: None,
            block: None,
        })
    }

    /// Sets the orientation mode.
    pub fn with_orientation(mut self, orientation: OrientationMode) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for allowing 90 degree rotation.
    pub fn rotatable(self) -> Self {
        self.with_orientation(OrientationMode::Rotatable)
    }

    /// Sets the grain direction.
    pub fn with_grain(mut self, grain: GrainDirection) -> Self {
        self.grain = Some(grain);
        self
    }

    /// Sets the wood-type tag.
    pub fn with_wood_type(mut self, wood_type: impl Into<String>) -> Self {
        self.wood_type = Some(wood_type.into());
        self
    }

    /// Makes this piece a member of a block at the given left-to-right position.
    pub fn with_block(mut self, id: impl Into<String>, position: usize) -> Self {
        self.block = Some(BlockRef {
            id: id.into(),
            position,
        });
        self
    }

    pub fn id(&self) -> &PieceId {
        &self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn orientation(&self) -> OrientationMode {
        self.orientation
    }

    pub fn grain(&self) -> Option<GrainDirection> {
        self.grain
    }

    pub fn wood_type(&self) -> Option<&str> {
        self.wood_type.as_deref()
    }

    pub fn block(&self) -> Option<&BlockRef> {
        self.block.as_ref()
    }

    /// Area of a single unit.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Expands the piece into one [`UnitPiece`] per quantity unit.
    pub fn expand(&self) -> Vec<UnitPiece> {
        (0..self.quantity)
            .map(|unit_index| UnitPiece {
                piece_id: self.id.clone(),
                unit_index,
                width: self.width,
                height: self.height,
                orientation: self.orientation,
                grain: self.grain,
                wood_type: self.wood_type.clone(),
                block: self.block.clone(),
            })
            .collect()
    }
}

/// A single instance of a [`Piece`]; quantity is implicitly one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitPiece {
    /// Identifier of the originating piece.
    pub piece_id: PieceId,
    /// Index of this unit within the originating piece's quantity.
    pub unit_index: usize,
    pub width: f64,
    pub height: f64,
    pub orientation: OrientationMode,
    pub grain: Option<GrainDirection>,
    pub wood_type: Option<String>,
    pub block: Option<BlockRef>,
}

impl UnitPiece {
    /// Area of the unit in its natural orientation.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the unit carries vertical grain.
    pub fn has_vertical_grain(&self) -> bool {
        self.grain == Some(GrainDirection::Vertical)
    }

    /// Human-readable label, e.g. `side#2`.
    pub fn label(&self) -> String {
        format!("{}#{}", self.piece_id, self.unit_index + 1)
    }
}

/// Expands every piece into its unit pieces, preserving input order.
pub fn expand_pieces(pieces: &[Piece]) -> Vec<UnitPiece> {
    pieces.iter().flat_map(Piece::expand).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_validation() {
        assert!(Piece::new("P1", 100.0, 50.0, 1).is_ok());
        assert!(matches!(
            Piece::new("P1", 0.0, 50.0, 1),
            Err(Error::InvalidPiece(_))
        ));
        assert!(Piece::new("P1", 100.0, -1.0, 1).is_err());
        assert!(Piece::new("P1", f64::NAN, 10.0, 1).is_err());
        assert!(Piece::new("P1", 100.0, 50.0, 0).is_err());
    }

    #[test]
    fn test_builder_fields() {
        let piece = Piece::new("door", 400.0, 700.0, 2)
            .unwrap()
            .rotatable()
            .with_grain(GrainDirection::Vertical)
            .with_wood_type("oak")
            .with_block("front", 1);

        assert_eq!(piece.orientation(), OrientationMode::Rotatable);
        assert_eq!(piece.grain(), Some(GrainDirection::Vertical));
        assert_eq!(piece.wood_type(), Some("oak"));
        assert_eq!(piece.block().map(|b| b.position), Some(1));
        assert_eq!(piece.area(), 280000.0);
    }

    #[test]
    fn test_expand_units() {
        let piece = Piece::new("shelf", 500.0, 300.0, 3).unwrap();
        let units = piece.expand();

        assert_eq!(units.len(), 3);
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.piece_id, "shelf");
            assert_eq!(unit.unit_index, i);
            assert_eq!(unit.width, 500.0);
        }
        assert_eq!(units[2].label(), "shelf#3");
    }

    #[test]
    fn test_expand_pieces_preserves_order() {
        let pieces = vec![
            Piece::new("A", 10.0, 10.0, 2).unwrap(),
            Piece::new("B", 20.0, 20.0, 1).unwrap(),
        ];
        let ids: Vec<_> = expand_pieces(&pieces)
            .into_iter()
            .map(|u| u.piece_id)
            .collect();
        assert_eq!(ids, vec!["A", "A", "B"]);
    }
}

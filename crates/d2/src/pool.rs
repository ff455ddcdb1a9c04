//! Items competing for space in the single-sheet packer.

use crate::orientation::{self, Orientation};
use cutlist_core::{Placement, Rotation, UnitPiece};

/// A block (or sub-block) packed as one synthetic rectangle.
///
/// Members are laid side by side left to right, all under the same rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeBlock {
    pub block_id: String,
    /// Members in left-to-right order.
    pub members: Vec<UnitPiece>,
    /// Rotation applied to every member.
    pub rotation: Rotation,
    /// Sum of the members' effective widths.
    pub width: f64,
    /// Tallest member's effective height.
    pub height: f64,
}

impl CompositeBlock {
    /// Builds a composite from members already in left-to-right order.
    pub fn new(block_id: impl Into<String>, members: Vec<UnitPiece>, rotation: Rotation) -> Self {
        let (width, height) = members.iter().fold((0.0, 0.0_f64), |(w, h), m| {
            let (mw, mh) = rotation.apply(m.width, m.height);
            (w + mw, h.max(mh))
        });
        Self {
            block_id: block_id.into(),
            members,
            rotation,
            width,
            height,
        }
    }

    /// Re-expands the composite into member placements at sequential x offsets.
    pub fn expand(&self, x: f64, y: f64) -> Vec<Placement> {
        let mut offset = x;
        self.members
            .iter()
            .map(|member| {
                let placement = Placement::new(member.clone(), offset, y, self.rotation);
                offset += placement.width();
                placement
            })
            .collect()
    }
}

/// An entry in the packing pool.
#[derive(Debug, Clone, PartialEq)]
pub enum PackItem {
    /// An ordinary unit piece.
    Single(UnitPiece),
    /// A block kept together as one rectangle.
    Composite(CompositeBlock),
}

impl PackItem {
    /// Area used to order the pool.
    pub fn area(&self) -> f64 {
        match self {
            Self::Single(unit) => unit.area(),
            Self::Composite(block) => block.width * block.height,
        }
    }

    /// Orientation candidates, in preference order.
    pub fn candidates(&self) -> Vec<Orientation> {
        match self {
            Self::Single(unit) => orientation::candidates(unit),
            Self::Composite(block) => {
                vec![Orientation::new(block.width, block.height, block.rotation)]
            }
        }
    }

    /// Returns true if some candidate fits on an empty sheet.
    pub fn fits_empty_sheet(&self, width: f64, height: f64) -> bool {
        self.candidates()
            .iter()
            .any(|candidate| candidate.fits_sheet(width, height))
    }

    /// Placements produced by putting this item at `(x, y)` in `orientation`.
    pub fn place(&self, x: f64, y: f64, orientation: &Orientation) -> Vec<Placement> {
        match self {
            Self::Single(unit) => vec![Placement::new(unit.clone(), x, y, orientation.rotation)],
            Self::Composite(block) => block.expand(x, y),
        }
    }

    /// Unit pieces carried by this item.
    pub fn into_units(self) -> Vec<UnitPiece> {
        match self {
            Self::Single(unit) => vec![unit],
            Self::Composite(block) => block.members,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Single(unit) => unit.label(),
            Self::Composite(block) => format!("block '{}'", block.block_id),
        }
    }
}

/// Orders the pool by descending area; equal areas keep their input order.
pub fn sort_by_area(pool: &mut [PackItem]) {
    pool.sort_by(|a, b| b.area().total_cmp(&a.area()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::Piece;

    fn unit(id: &str, w: f64, h: f64) -> UnitPiece {
        Piece::new(id, w, h, 1).unwrap().expand().remove(0)
    }

    #[test]
    fn test_composite_dimensions() {
        let block = CompositeBlock::new(
            "B",
            vec![unit("a", 400.0, 300.0), unit("b", 500.0, 250.0)],
            Rotation::Deg0,
        );
        assert_eq!(block.width, 900.0);
        assert_eq!(block.height, 300.0);

        let turned = CompositeBlock::new(
            "B",
            vec![unit("a", 400.0, 300.0), unit("b", 500.0, 250.0)],
            Rotation::Deg90,
        );
        assert_eq!(turned.width, 550.0);
        assert_eq!(turned.height, 500.0);
    }

    #[test]
    fn test_composite_expansion_is_contiguous() {
        let block = CompositeBlock::new(
            "B",
            vec![unit("a", 400.0, 300.0), unit("b", 500.0, 300.0)],
            Rotation::Deg0,
        );
        let placements = PackItem::Composite(block.clone()).place(
            100.0,
            50.0,
            &Orientation::new(block.width, block.height, Rotation::Deg0),
        );

        assert_eq!(placements.len(), 2);
        assert_eq!((placements[0].x, placements[0].y), (100.0, 50.0));
        assert_eq!((placements[1].x, placements[1].y), (500.0, 50.0));
    }

    #[test]
    fn test_sort_by_area_is_stable() {
        let mut pool = vec![
            PackItem::Single(unit("small", 10.0, 10.0)),
            PackItem::Single(unit("first", 20.0, 20.0)),
            PackItem::Single(unit("second", 40.0, 10.0)),
        ];
        sort_by_area(&mut pool);
        let labels: Vec<_> = pool.iter().map(PackItem::label).collect();
        assert_eq!(labels, vec!["first#1", "second#1", "small#1"]);
    }

    #[test]
    fn test_fits_empty_sheet() {
        let rotatable = PackItem::Single(
            Piece::new("tall", 300.0, 2500.0, 1)
                .unwrap()
                .rotatable()
                .expand()
                .remove(0),
        );
        assert!(rotatable.fits_empty_sheet(2800.0, 2070.0));
        assert!(!PackItem::Single(unit("wide", 3000.0, 300.0)).fits_empty_sheet(2800.0, 2070.0));
    }
}

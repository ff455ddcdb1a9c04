//! Orientation candidates for a unit piece.

use cutlist_core::{GrainDirection, OrientationMode, Rotation, UnitPiece};

/// A (width, height, rotation) option for placing a piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
}

impl Orientation {
    pub fn new(width: f64, height: f64, rotation: Rotation) -> Self {
        Self {
            width,
            height,
            rotation,
        }
    }

    /// Returns true if this orientation fits on an empty `width` x `height` sheet.
    pub fn fits_sheet(&self, width: f64, height: f64) -> bool {
        self.width <= width && self.height <= height
    }
}

/// Returns the orientations a unit piece may be placed in, natural first.
///
/// Grain always wins over rotation permission: vertical grain yields only the
/// turned candidate and horizontal grain only the natural one.
pub fn candidates(piece: &UnitPiece) -> Vec<Orientation> {
    let natural = Orientation::new(piece.width, piece.height, Rotation::Deg0);
    let turned = Orientation::new(piece.height, piece.width, Rotation::Deg90);

    match piece.grain {
        Some(GrainDirection::Vertical) => vec![turned],
        Some(GrainDirection::Horizontal) => vec![natural],
        None => {
            if piece.orientation == OrientationMode::Rotatable && piece.width != piece.height {
                vec![natural, turned]
            } else {
                vec![natural]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::Piece;

    fn unit(piece: Piece) -> UnitPiece {
        piece.expand().remove(0)
    }

    #[test]
    fn test_fixed_piece_has_natural_only() {
        let c = candidates(&unit(Piece::new("P", 500.0, 300.0, 1).unwrap()));
        assert_eq!(c, vec![Orientation::new(500.0, 300.0, Rotation::Deg0)]);
    }

    #[test]
    fn test_rotatable_piece_has_both() {
        let c = candidates(&unit(Piece::new("P", 500.0, 300.0, 1).unwrap().rotatable()));
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].rotation, Rotation::Deg0);
        assert_eq!(c[1], Orientation::new(300.0, 500.0, Rotation::Deg90));
    }

    #[test]
    fn test_square_rotatable_piece_has_one() {
        let c = candidates(&unit(Piece::new("P", 400.0, 400.0, 1).unwrap().rotatable()));
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].rotation, Rotation::Deg0);
    }

    #[test]
    fn test_vertical_grain_forces_rotation() {
        // Fixed orientation mode does not prevent the grain rotation.
        let fixed = unit(
            Piece::new("P", 500.0, 300.0, 1)
                .unwrap()
                .with_grain(GrainDirection::Vertical),
        );
        assert_eq!(
            candidates(&fixed),
            vec![Orientation::new(300.0, 500.0, Rotation::Deg90)]
        );

        let square = unit(
            Piece::new("P", 400.0, 400.0, 1)
                .unwrap()
                .rotatable()
                .with_grain(GrainDirection::Vertical),
        );
        assert_eq!(candidates(&square)[0].rotation, Rotation::Deg90);
    }

    #[test]
    fn test_horizontal_grain_locks_natural() {
        let c = candidates(&unit(
            Piece::new("P", 500.0, 300.0, 1)
                .unwrap()
                .rotatable()
                .with_grain(GrainDirection::Horizontal),
        ));
        assert_eq!(c, vec![Orientation::new(500.0, 300.0, Rotation::Deg0)]);
    }

    #[test]
    fn test_fits_sheet() {
        let o = Orientation::new(2800.0, 2070.0, Rotation::Deg0);
        assert!(o.fits_sheet(2800.0, 2070.0));
        assert!(!o.fits_sheet(2799.0, 2070.0));
    }
}

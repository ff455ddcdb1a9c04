//! Single-sheet packer.

use crate::pool::PackItem;
use crate::scanner::SheetSpace;
use crate::selector::best_fit;
use crate::trace::Trace;
use cutlist_core::{Rect, SheetConfig, SheetLayout};

/// Fills one sheet at a time from a shared pool.
pub struct SheetPacker<'a> {
    config: &'a SheetConfig,
    trace: Trace<'a>,
}

impl<'a> SheetPacker<'a> {
    pub fn new(config: &'a SheetConfig, trace: Trace<'a>) -> Self {
        Self { config, trace }
    }

    /// Packs a fresh sheet from `pool`, removing every item it places.
    ///
    /// The pool is walked front to back; after each placement the walk restarts
    /// at the front. The sheet is finalized once a full walk places nothing.
    /// The pool is expected to be ordered already (largest first).
    pub fn pack_sheet(
        &self,
        pool: &mut Vec<PackItem>,
        index: usize,
        wood_type: Option<&str>,
    ) -> SheetLayout {
        let config = self.config;
        let mut space = SheetSpace::new(config.width, config.height);
        let mut sheet = SheetLayout::new(
            index,
            config.width,
            config.height,
            wood_type.map(str::to_string),
        );

        let mut cursor = 0;
        while cursor < pool.len() {
            let candidates = pool[cursor].candidates();
            let Some(fit) = best_fit(&space, &candidates, config.gap, config.step) else {
                cursor += 1;
                continue;
            };

            let item = pool.remove(cursor);
            space.occupy(Rect::new(
                fit.x,
                fit.y,
                fit.orientation.width,
                fit.orientation.height,
            ));
            self.trace.line(|| {
                format!(
                    "sheet {}: placed {} at ({}, {}) rotated {}",
                    index,
                    item.label(),
                    fit.x,
                    fit.y,
                    fit.orientation.rotation.degrees()
                )
            });
            sheet
                .placements
                .extend(item.place(fit.x, fit.y, &fit.orientation));

            cursor = 0;
        }

        sheet.finalize();
        self.trace.line(|| {
            format!(
                "sheet {} complete: {} pieces, efficiency {:.1}%",
                index,
                sheet.placements.len(),
                sheet.efficiency * 100.0
            )
        });
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::sort_by_area;
    use approx::assert_relative_eq;
    use cutlist_core::{NoopLogger, Piece, Rotation};

    fn pool_of(pieces: &[Piece]) -> Vec<PackItem> {
        let mut pool: Vec<PackItem> = pieces
            .iter()
            .flat_map(Piece::expand)
            .map(PackItem::Single)
            .collect();
        sort_by_area(&mut pool);
        pool
    }

    #[test]
    fn test_single_piece_at_origin() {
        let config = SheetConfig::default();
        let packer = SheetPacker::new(&config, Trace::new(&NoopLogger, false));
        let mut pool = pool_of(&[Piece::new("P", 500.0, 300.0, 1).unwrap().rotatable()]);

        let sheet = packer.pack_sheet(&mut pool, 1, None);

        assert!(pool.is_empty());
        assert_eq!(sheet.index, 1);
        assert_eq!(sheet.placements.len(), 1);
        let p = &sheet.placements[0];
        assert_eq!((p.x, p.y, p.rotation), (0.0, 0.0, Rotation::Deg0));
        assert_relative_eq!(sheet.efficiency, 150000.0 / (2800.0 * 2070.0));
    }

    #[test]
    fn test_larger_pieces_first() {
        let config = SheetConfig::new().with_sheet(1000.0, 1000.0);
        let packer = SheetPacker::new(&config, Trace::new(&NoopLogger, false));
        let mut pool = pool_of(&[
            Piece::new("small", 100.0, 100.0, 1).unwrap(),
            Piece::new("big", 600.0, 600.0, 1).unwrap(),
        ]);

        let sheet = packer.pack_sheet(&mut pool, 1, None);

        assert_eq!(sheet.placements[0].piece.piece_id, "big");
        assert_eq!((sheet.placements[0].x, sheet.placements[0].y), (0.0, 0.0));
        assert_eq!((sheet.placements[1].x, sheet.placements[1].y), (600.0, 0.0));
    }

    #[test]
    fn test_overflow_stays_in_pool() {
        let config = SheetConfig::new().with_sheet(1000.0, 1000.0);
        let packer = SheetPacker::new(&config, Trace::new(&NoopLogger, false));
        let mut pool = pool_of(&[Piece::new("half", 1000.0, 500.0, 3).unwrap()]);

        let sheet = packer.pack_sheet(&mut pool, 4, Some("oak"));

        assert_eq!(sheet.placements.len(), 2);
        assert_eq!(sheet.wood_type.as_deref(), Some("oak"));
        assert_relative_eq!(sheet.efficiency, 1.0);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_restart_fills_gaps_with_later_items() {
        let config = SheetConfig::new().with_sheet(1000.0, 500.0);
        let packer = SheetPacker::new(&config, Trace::new(&NoopLogger, false));
        let mut pool = pool_of(&[
            Piece::new("wide", 800.0, 500.0, 2).unwrap(),
            Piece::new("strip", 200.0, 500.0, 1).unwrap(),
        ]);

        let sheet = packer.pack_sheet(&mut pool, 1, None);

        // The second "wide" does not fit, but the walk continues to "strip".
        assert_eq!(sheet.placements.len(), 2);
        assert_eq!(sheet.placements[1].piece.piece_id, "strip");
        assert_eq!(sheet.placements[1].x, 800.0);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_nothing_fits() {
        let config = SheetConfig::new().with_sheet(100.0, 100.0);
        let packer = SheetPacker::new(&config, Trace::new(&NoopLogger, false));
        let mut pool = pool_of(&[Piece::new("huge", 200.0, 200.0, 1).unwrap()]);

        let sheet = packer.pack_sheet(&mut pool, 1, None);

        assert!(sheet.is_empty());
        assert_eq!(sheet.efficiency, 0.0);
        assert_eq!(pool.len(), 1);
    }
}

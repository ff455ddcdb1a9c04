//! Layout orchestration: partition, decompose, pack every sheet, aggregate.

use crate::block::{decompose, screen_blocks};
use crate::partition::partition_by_wood_type;
use crate::pool::{sort_by_area, PackItem};
use crate::sheet::SheetPacker;
use crate::trace::Trace;
use cutlist_core::{
    expand_pieces, LayoutLogger, NoopLogger, Piece, Result, RunResult, SheetConfig,
    UnplacedPiece, UnplacedReason, ValidationIssue,
};
use std::collections::HashSet;

/// Packing pool of one wood type, ready for the sheet packer.
struct BucketPlan {
    wood_type: Option<String>,
    pool: Vec<PackItem>,
}

/// Everything decided before the first sheet is packed.
struct Plan {
    buckets: Vec<BucketPlan>,
    result: RunResult,
}

/// Arranges pieces onto as many stock sheets as needed.
///
/// A run is synchronous and self-contained: nothing is shared between calls
/// to [`SheetNester::solve`].
pub struct SheetNester {
    config: SheetConfig,
    logger: Box<dyn LayoutLogger>,
}

impl SheetNester {
    /// Creates a nester with the given configuration and no logger.
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            logger: Box::new(NoopLogger),
        }
    }

    /// Creates a nester with default configuration.
    pub fn default_config() -> Self {
        Self::new(SheetConfig::default())
    }

    /// Injects a layout logger; it only sees messages when `config.logging` is set.
    pub fn with_logger(mut self, logger: impl LayoutLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Reports configuration conditions without packing anything.
    pub fn validate(&self, pieces: &[Piece]) -> Result<Vec<ValidationIssue>> {
        Ok(self.plan(pieces)?.result.issues)
    }

    /// Runs the layout.
    ///
    /// Fails only on an invalid sheet configuration. Pieces that cannot be
    /// placed are listed in [`RunResult::unplaced`] and packing continues.
    pub fn solve(&self, pieces: &[Piece]) -> Result<RunResult> {
        let Plan {
            buckets,
            mut result,
        } = self.plan(pieces)?;

        let trace = Trace::new(self.logger.as_ref(), self.config.logging);
        for issue in &result.issues {
            trace.warning(|| issue.to_string());
        }

        let packer = SheetPacker::new(&self.config, trace);
        let mut next_index = 1;

        for bucket in buckets {
            let wood_type = bucket.wood_type.as_deref();
            let mut pool = bucket.pool;
            trace.line(|| {
                format!(
                    "packing {} items of wood type {}",
                    pool.len(),
                    wood_type.unwrap_or("default")
                )
            });

            while !pool.is_empty() {
                let sheet = packer.pack_sheet(&mut pool, next_index, wood_type);
                if sheet.is_empty() {
                    for unit in pool.drain(..).flat_map(PackItem::into_units) {
                        trace.warning(|| format!("no space left for {}", unit.label()));
                        result
                            .unplaced
                            .push(UnplacedPiece::new(unit, UnplacedReason::NoSpace));
                    }
                    break;
                }
                result.sheets.push(sheet);
                next_index += 1;
            }
        }

        result.compute_efficiency();
        log::debug!(
            "layout finished: {} sheets, {} placed, {} unplaced, efficiency {}",
            result.sheet_count(),
            result.placed_count(),
            result.unplaced_count(),
            result.efficiency_percent()
        );
        trace.line(|| {
            format!(
                "{} sheets used, {} pieces placed, {} unplaced, overall efficiency {}",
                result.sheet_count(),
                result.placed_count(),
                result.unplaced_count(),
                result.efficiency_percent()
            )
        });

        Ok(result)
    }

    fn plan(&self, pieces: &[Piece]) -> Result<Plan> {
        let config = &self.config;
        config.validate()?;

        let mut result = RunResult::new();
        let screening = screen_blocks(expand_pieces(pieces), config);
        result.unplaced = screening.unplaced;
        result.blocks = screening.blocks;
        result.issues = screening.issues;

        let mut reported: HashSet<String> = HashSet::new();
        let mut buckets = Vec::new();

        for bucket in partition_by_wood_type(screening.accepted) {
            let decomposition = decompose(bucket.units, config);
            result.blocks.extend(decomposition.blocks);
            result.issues.extend(decomposition.issues);

            let mut pool = Vec::with_capacity(decomposition.items.len());
            for item in decomposition.items {
                if item.fits_empty_sheet(config.width, config.height) {
                    pool.push(item);
                    continue;
                }
                for unit in item.into_units() {
                    if reported.insert(unit.piece_id.clone()) {
                        result.issues.push(ValidationIssue::PieceTooLarge {
                            piece_id: unit.piece_id.clone(),
                            width: unit.width,
                            height: unit.height,
                        });
                    }
                    result
                        .unplaced
                        .push(UnplacedPiece::new(unit, UnplacedReason::TooLarge));
                }
            }

            sort_by_area(&mut pool);
            buckets.push(BucketPlan {
                wood_type: bucket.wood_type,
                pool,
            });
        }

        Ok(Plan { buckets, result })
    }
}

/// Lists configuration conditions for `pieces` on the configured sheet.
pub fn validate_pieces(pieces: &[Piece], config: &SheetConfig) -> Result<Vec<ValidationIssue>> {
    SheetNester::new(config.clone()).validate(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cutlist_core::{Error, GrainDirection, Rotation};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        lines: Rc<RefCell<Vec<String>>>,
        warnings: Rc<RefCell<Vec<String>>>,
    }

    impl LayoutLogger for Recorder {
        fn log_line(&self, message: &str) {
            self.lines.borrow_mut().push(message.to_string());
        }

        fn log_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_simple_layout() {
        let pieces = vec![
            Piece::new("R1", 600.0, 400.0, 3).unwrap(),
            Piece::new("R2", 300.0, 300.0, 2).unwrap().rotatable(),
        ];
        let result = SheetNester::default_config().solve(&pieces).unwrap();

        assert_eq!(result.sheet_count(), 1);
        assert_eq!(result.placed_count(), 5);
        assert!(result.all_placed());
        assert!(result.efficiency > 0.0);
    }

    #[test]
    fn test_invalid_config_fails_before_packing() {
        let nester = SheetNester::new(SheetConfig::new().with_sheet(0.0, 100.0));
        let pieces = vec![Piece::new("P", 10.0, 10.0, 1).unwrap()];
        assert!(matches!(nester.solve(&pieces), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_input() {
        let result = SheetNester::default_config().solve(&[]).unwrap();
        assert_eq!(result.sheet_count(), 0);
        assert_eq!(result.efficiency, 0.0);
        assert!(result.all_placed());
    }

    #[test]
    fn test_too_large_is_reported_once_per_piece() {
        let pieces = vec![Piece::new("slab", 3000.0, 300.0, 2).unwrap()];
        let result = SheetNester::default_config().solve(&pieces).unwrap();

        assert_eq!(result.sheet_count(), 0);
        assert_eq!(result.unplaced.len(), 2);
        assert!(result
            .unplaced
            .iter()
            .all(|u| u.reason == UnplacedReason::TooLarge));
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_wood_types_never_share_sheets() {
        let pieces = vec![
            Piece::new("a", 500.0, 500.0, 1).unwrap().with_wood_type("oak"),
            Piece::new("b", 500.0, 500.0, 1).unwrap(),
            Piece::new("c", 500.0, 500.0, 1).unwrap().with_wood_type("oak"),
            Piece::new("d", 500.0, 500.0, 1).unwrap().with_wood_type("pine"),
        ];
        let result = SheetNester::default_config().solve(&pieces).unwrap();

        assert_eq!(result.sheet_count(), 3);
        let indices: Vec<_> = result.sheets.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(result.sheets[0].wood_type.as_deref(), Some("oak"));
        assert_eq!(result.sheets[0].placements.len(), 2);
        assert_eq!(result.sheets[1].wood_type, None);
        assert_eq!(result.sheets[2].wood_type.as_deref(), Some("pine"));

        for sheet in &result.sheets {
            for p in &sheet.placements {
                assert_eq!(p.piece.wood_type, sheet.wood_type);
            }
        }
    }

    #[test]
    fn test_vertical_grain_rotates() {
        let pieces = vec![Piece::new("door", 400.0, 700.0, 1)
            .unwrap()
            .with_grain(GrainDirection::Vertical)];
        let result = SheetNester::default_config().solve(&pieces).unwrap();

        let placement = &result.sheets[0].placements[0];
        assert_eq!(placement.rotation, Rotation::Deg90);
        assert_eq!((placement.width(), placement.height()), (700.0, 400.0));
    }

    #[test]
    fn test_logger_receives_trace_when_enabled() {
        let recorder = Recorder::default();
        let nester = SheetNester::new(SheetConfig::default().with_logging(true))
            .with_logger(recorder.clone());
        let pieces = vec![
            Piece::new("ok", 100.0, 100.0, 1).unwrap(),
            Piece::new("huge", 5000.0, 100.0, 1).unwrap(),
        ];
        nester.solve(&pieces).unwrap();

        assert!(recorder
            .lines
            .borrow()
            .iter()
            .any(|l| l.contains("sheet 1 complete")));
        assert!(recorder
            .warnings
            .borrow()
            .iter()
            .any(|w| w.contains("'huge'") && w.contains("too large")));
    }

    #[test]
    fn test_logger_is_silent_when_disabled() {
        let recorder = Recorder::default();
        let nester = SheetNester::default_config().with_logger(recorder.clone());
        nester
            .solve(&[Piece::new("ok", 100.0, 100.0, 1).unwrap()])
            .unwrap();

        assert!(recorder.lines.borrow().is_empty());
        assert!(recorder.warnings.borrow().is_empty());
    }

    #[test]
    fn test_logger_does_not_change_result() {
        let pieces = vec![
            Piece::new("a", 700.0, 450.0, 4).unwrap().rotatable(),
            Piece::new("b", 350.0, 900.0, 3).unwrap(),
        ];
        let config = SheetConfig::default().with_logging(true);
        let quiet = SheetNester::new(config.clone()).solve(&pieces).unwrap();
        let traced = SheetNester::new(config)
            .with_logger(Recorder::default())
            .solve(&pieces)
            .unwrap();
        assert_eq!(quiet, traced);
    }

    #[test]
    fn test_validate_pieces() {
        let pieces = vec![
            Piece::new("fine", 100.0, 100.0, 1).unwrap(),
            Piece::new("slab", 3000.0, 300.0, 1).unwrap(),
            Piece::new("x", 2000.0, 100.0, 1).unwrap().with_block("wide", 0),
            Piece::new("y", 2000.0, 100.0, 1).unwrap().with_block("wide", 1),
        ];
        let issues = validate_pieces(&pieces, &SheetConfig::default()).unwrap();

        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::BlockSplit { block_id, .. } if block_id == "wide")));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::PieceTooLarge { piece_id, .. } if piece_id == "slab")));
    }

    #[test]
    fn test_overall_efficiency() {
        let pieces = vec![Piece::new("half", 1400.0, 2070.0, 3).unwrap()];
        let result = SheetNester::default_config().solve(&pieces).unwrap();

        assert_eq!(result.sheet_count(), 2);
        assert_relative_eq!(result.efficiency, 0.75);
        assert_relative_eq!(result.sheets[0].efficiency, 1.0);
        assert_relative_eq!(result.sheets[1].efficiency, 0.5);
    }
}

//! # Cutlist 2D
//!
//! Rectangle nesting engine for the cutlist sheet layout tool.
//!
//! Given rectangular pieces (with quantity, rotation permission, grain
//! direction, wood type and block grouping) and a stock sheet size, the engine
//! decides how many sheets are needed and where every piece goes. It is a
//! greedy heuristic placer, not an optimal cutting-stock solver.
//!
//! ## Pipeline
//!
//! 1. Pieces are expanded into unit pieces, one per quantity unit.
//! 2. Malformed block groupings are rejected ([`block::screen_blocks`]).
//! 3. Units are bucketed by wood type ([`partition::partition_by_wood_type`]).
//! 4. Blocks become composites or sub-blocks ([`block::decompose`]).
//! 5. Sheets are filled one at a time ([`sheet::SheetPacker`]) using a grid
//!    scan ([`scanner::find_position`]) over every orientation candidate
//!    ([`orientation::candidates`]), keeping the lowest then leftmost fit
//!    ([`selector::best_fit`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use cutlist_d2::{Piece, SheetConfig, SheetNester};
//!
//! let pieces = vec![
//!     Piece::new("side", 720.0, 560.0, 2).unwrap().rotatable(),
//!     Piece::new("shelf", 764.0, 540.0, 3).unwrap(),
//! ];
//!
//! let nester = SheetNester::new(SheetConfig::new().with_sheet(2800.0, 2070.0).with_gap(4.0));
//! let result = nester.solve(&pieces).unwrap();
//!
//! println!("{} sheets, efficiency {}", result.sheet_count(), result.efficiency_percent());
//! assert!(result.all_placed());
//! ```

pub mod block;
pub mod nester;
pub mod orientation;
pub mod partition;
pub mod pool;
pub mod scanner;
pub mod selector;
pub mod sheet;
pub mod trace;

// Re-exports
pub use nester::{validate_pieces, SheetNester};
pub use orientation::Orientation;
pub use pool::{CompositeBlock, PackItem};
pub use cutlist_core::{
    BlockDiagnostic, BlockStatus, Error, GrainDirection, LayoutLogger, LogFacade, NoopLogger,
    OrientationMode, Piece, Placement, Rect, Result, Rotation, RunResult, RunSummary,
    SheetConfig, SheetLayout, UnitPiece, UnplacedPiece, UnplacedReason, ValidationIssue,
};

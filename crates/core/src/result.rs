//! Run result representation.

use crate::piece::UnitPiece;
use crate::placement::Placement;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One stock sheet and the pieces placed on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetLayout {
    /// Sequence number, starting at 1 and continuous across wood types.
    pub index: usize,
    pub width: f64,
    pub height: f64,
    /// Wood type this sheet was cut for (`None` for untagged pieces).
    pub wood_type: Option<String>,
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
    /// Placed area divided by sheet area.
    pub efficiency: f64,
}

impl SheetLayout {
    /// Creates an empty sheet.
    pub fn new(index: usize, width: f64, height: f64, wood_type: Option<String>) -> Self {
        Self {
            index,
            width,
            height,
            wood_type,
            placements: Vec::new(),
            efficiency: 0.0,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Total area of the placed pieces.
    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(Placement::area).sum()
    }

    /// Recomputes `efficiency` from the current placements.
    pub fn finalize(&mut self) {
        self.efficiency = if self.area() > 0.0 {
            self.placed_area() / self.area()
        } else {
            0.0
        };
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Why a unit piece ended up unplaced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnplacedReason {
    /// The piece does not fit on an empty sheet in any allowed orientation.
    TooLarge,
    /// Packing stalled before the piece found a position.
    NoSpace,
    /// The piece belongs to a malformed block grouping.
    MalformedBlock,
}

/// A unit piece that could not be placed, with its original dimensions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedPiece {
    pub piece: UnitPiece,
    pub reason: UnplacedReason,
}

impl UnplacedPiece {
    pub fn new(piece: UnitPiece, reason: UnplacedReason) -> Self {
        Self { piece, reason }
    }
}

/// Outcome of block decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockStatus {
    /// Packed as one composite.
    Intact,
    /// Decomposed into the given number of sub-blocks.
    Split(usize),
    /// Grouping was rejected; all members are unplaced.
    Malformed(String),
}

/// Diagnostic record for one block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockDiagnostic {
    pub block_id: String,
    pub wood_type: Option<String>,
    /// Number of member unit pieces.
    pub members: usize,
    /// Sum of member widths as laid side by side.
    pub aggregate_width: f64,
    /// Tallest member.
    pub aggregate_height: f64,
    pub can_fit_on_single_board: bool,
    pub status: BlockStatus,
}

/// A configuration condition reported to the caller instead of failing the run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationIssue {
    /// A piece exceeds the sheet in every allowed orientation.
    PieceTooLarge {
        piece_id: String,
        width: f64,
        height: f64,
    },
    /// A block exceeds one sheet and will be split into sub-blocks.
    BlockSplit {
        block_id: String,
        aggregate_width: f64,
        aggregate_height: f64,
    },
    /// A block grouping is inconsistent and will not be placed.
    MalformedBlock { block_id: String, reason: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PieceTooLarge {
                piece_id,
                width,
                height,
            } => write!(
                f,
                "piece '{}' ({} x {}) is too large for the sheet",
                piece_id, width, height
            ),
            Self::BlockSplit {
                block_id,
                aggregate_width,
                aggregate_height,
            } => write!(
                f,
                "block '{}' ({} x {}) does not fit on one sheet and will be split",
                block_id, aggregate_width, aggregate_height
            ),
            Self::MalformedBlock { block_id, reason } => {
                write!(f, "block '{}' is malformed: {}", block_id, reason)
            }
        }
    }
}

/// Result of a layout run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// Sheets in sequence order.
    pub sheets: Vec<SheetLayout>,
    /// Total placed area divided by total consumed sheet area.
    pub efficiency: f64,
    /// Unit pieces that could not be placed.
    pub unplaced: Vec<UnplacedPiece>,
    /// One entry per block grouping.
    pub blocks: Vec<BlockDiagnostic>,
    /// Configuration conditions detected during the run.
    pub issues: Vec<ValidationIssue>,
}

impl RunResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sheets consumed.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Number of placed unit pieces.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns true if every unit piece was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Iterates over every placement together with its sheet.
    pub fn placements(&self) -> impl Iterator<Item = (&SheetLayout, &Placement)> {
        self.sheets
            .iter()
            .flat_map(|sheet| sheet.placements.iter().map(move |p| (sheet, p)))
    }

    /// Recomputes the overall efficiency across every sheet.
    pub fn compute_efficiency(&mut self) {
        let consumed: f64 = self.sheets.iter().map(SheetLayout::area).sum();
        let placed: f64 = self.sheets.iter().map(SheetLayout::placed_area).sum();
        self.efficiency = if consumed > 0.0 { placed / consumed } else { 0.0 };
    }

    /// Returns efficiency as a percentage string.
    pub fn efficiency_percent(&self) -> String {
        format!("{:.1}%", self.efficiency * 100.0)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from(self)
    }
}

/// Summary statistics for a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    pub total_requested: usize,
    pub total_placed: usize,
    pub total_unplaced: usize,
    pub sheets_used: usize,
    pub efficiency_percent: f64,
}

impl From<&RunResult> for RunSummary {
    fn from(result: &RunResult) -> Self {
        let placed = result.placed_count();
        Self {
            total_requested: placed + result.unplaced.len(),
            total_placed: placed,
            total_unplaced: result.unplaced.len(),
            sheets_used: result.sheet_count(),
            efficiency_percent: result.efficiency * 100.0,
        }
    }
}

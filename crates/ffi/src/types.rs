//! FFI type definitions.

use cutlist_core::{
    BlockDiagnostic, BlockStatus, GrainDirection, Piece, Placement, Result, RunResult,
    SheetConfig, SheetLayout, UnplacedPiece, UnplacedReason, ValidationIssue,
};
use serde::{Deserialize, Serialize};

/// API version.
pub const API_VERSION: &str = "1.0";

/// Layout request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Stock sheet definition.
    pub sheet: SheetRequest,

    /// Pieces to place.
    pub pieces: Vec<PieceRequest>,
}

/// Stock sheet definition; omitted fields use [`SheetConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    pub width: f64,
    pub height: f64,

    /// Minimum gap between pieces.
    #[serde(default)]
    pub gap: Option<f64>,

    /// Scan step.
    #[serde(default)]
    pub step: Option<f64>,

    /// Enable trace logging.
    #[serde(default)]
    pub logging: bool,
}

impl SheetRequest {
    pub fn to_config(&self) -> SheetConfig {
        let defaults = SheetConfig::default();
        SheetConfig::new()
            .with_sheet(self.width, self.height)
            .with_gap(self.gap.unwrap_or(defaults.gap))
            .with_step(self.step.unwrap_or(defaults.step))
            .with_logging(self.logging)
    }
}

/// Grain direction as sent by hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainRequest {
    Horizontal,
    Vertical,
}

impl From<GrainRequest> for GrainDirection {
    fn from(grain: GrainRequest) -> Self {
        match grain {
            GrainRequest::Horizontal => GrainDirection::Horizontal,
            GrainRequest::Vertical => GrainDirection::Vertical,
        }
    }
}

/// Block membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRequest {
    pub id: String,
    pub position: usize,
}

/// Piece request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceRequest {
    /// Unique identifier.
    pub id: String,

    pub width: f64,
    pub height: f64,

    /// Quantity to place.
    #[serde(default = "default_quantity")]
    pub quantity: usize,

    /// Allow 90 degree rotation.
    #[serde(default)]
    pub rotatable: bool,

    #[serde(default)]
    pub grain: Option<GrainRequest>,

    #[serde(default)]
    pub wood_type: Option<String>,

    #[serde(default)]
    pub block: Option<BlockRequest>,
}

impl PieceRequest {
    /// Builds a validated [`Piece`].
    pub fn to_piece(&self) -> Result<Piece> {
        let mut piece = Piece::new(self.id.clone(), self.width, self.height, self.quantity)?;
        if self.rotatable {
            piece = piece.rotatable();
        }
        if let Some(grain) = self.grain {
            piece = piece.with_grain(grain.into());
        }
        if let Some(wood_type) = &self.wood_type {
            piece = piece.with_wood_type(wood_type.clone());
        }
        if let Some(block) = &self.block {
            piece = piece.with_block(block.id.clone(), block.position);
        }
        Ok(piece)
    }
}

/// Response for solve operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// Error message if failed.
    pub error: Option<String>,

    #[serde(default)]
    pub sheets: Vec<SheetResponse>,

    /// Number of sheets used.
    pub sheet_count: usize,

    /// Overall efficiency (0.0 - 1.0).
    pub efficiency: f64,

    #[serde(default)]
    pub unplaced: Vec<UnplacedResponse>,

    #[serde(default)]
    pub blocks: Vec<BlockResponse>,

    /// Human-readable warnings.
    #[serde(default)]
    pub issues: Vec<String>,
}

impl SolveResponse {
    /// Creates a failed response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// One sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetResponse {
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub wood_type: Option<String>,
    pub efficiency: f64,
    pub placements: Vec<PlacementResponse>,
}

/// Placement response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResponse {
    pub piece_id: String,
    /// Unit index within the piece's quantity.
    pub unit_index: usize,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees (0 or 90).
    pub rotation: u16,
    /// Occupied width.
    pub width: f64,
    /// Occupied height.
    pub height: f64,
    #[serde(default)]
    pub block_id: Option<String>,
}

/// Unplaced unit piece with its original dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnplacedResponse {
    pub piece_id: String,
    pub unit_index: usize,
    pub width: f64,
    pub height: f64,
    /// `too_large`, `no_space` or `malformed_block`.
    pub reason: String,
}

/// Block diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockResponse {
    pub block_id: String,
    pub members: usize,
    pub aggregate_width: f64,
    pub aggregate_height: f64,
    pub can_fit_on_single_board: bool,
    /// `intact`, `split` or `malformed`.
    pub status: String,
    #[serde(default)]
    pub sub_blocks: Option<usize>,
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_quantity() -> usize {
    1
}

impl From<Placement> for PlacementResponse {
    fn from(p: Placement) -> Self {
        Self {
            width: p.width(),
            height: p.height(),
            x: p.x,
            y: p.y,
            rotation: p.rotation.degrees(),
            block_id: p.piece.block.map(|b| b.id),
            piece_id: p.piece.piece_id,
            unit_index: p.piece.unit_index,
        }
    }
}

impl From<SheetLayout> for SheetResponse {
    fn from(s: SheetLayout) -> Self {
        Self {
            index: s.index,
            width: s.width,
            height: s.height,
            wood_type: s.wood_type,
            efficiency: s.efficiency,
            placements: s.placements.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UnplacedPiece> for UnplacedResponse {
    fn from(u: UnplacedPiece) -> Self {
        let reason = match u.reason {
            UnplacedReason::TooLarge => "too_large",
            UnplacedReason::NoSpace => "no_space",
            UnplacedReason::MalformedBlock => "malformed_block",
        };
        Self {
            piece_id: u.piece.piece_id,
            unit_index: u.piece.unit_index,
            width: u.piece.width,
            height: u.piece.height,
            reason: reason.to_string(),
        }
    }
}

impl From<BlockDiagnostic> for BlockResponse {
    fn from(b: BlockDiagnostic) -> Self {
        let (status, sub_blocks, reason) = match b.status {
            BlockStatus::Intact => ("intact", None, None),
            BlockStatus::Split(n) => ("split", Some(n), None),
            BlockStatus::Malformed(reason) => ("malformed", None, Some(reason)),
        };
        Self {
            block_id: b.block_id,
            members: b.members,
            aggregate_width: b.aggregate_width,
            aggregate_height: b.aggregate_height,
            can_fit_on_single_board: b.can_fit_on_single_board,
            status: status.to_string(),
            sub_blocks,
            reason,
        }
    }
}

impl From<RunResult> for SolveResponse {
    fn from(r: RunResult) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            sheet_count: r.sheet_count(),
            efficiency: r.efficiency,
            sheets: r.sheets.into_iter().map(Into::into).collect(),
            unplaced: r.unplaced.into_iter().map(Into::into).collect(),
            blocks: r.blocks.into_iter().map(Into::into).collect(),
            issues: r.issues.iter().map(ValidationIssue::to_string).collect(),
        }
    }
}

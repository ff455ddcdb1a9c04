//! # Cutlist Core
//!
//! Core types for the cutlist sheet nesting engine.
//!
//! This crate holds the data model shared by the placement engine
//! (`cutlist-d2`) and the host-facing API (`cutlist-ffi`).
//!
//! ## Core Components
//!
//! - **Pieces**: [`Piece`], [`UnitPiece`], [`OrientationMode`], [`GrainDirection`]
//! - **Configuration**: [`SheetConfig`]
//! - **Geometry**: [`Rect`] and the gap-aware overlap test
//! - **Results**: [`Placement`], [`SheetLayout`], [`RunResult`]
//! - **Logging**: [`LayoutLogger`] trace channel
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::{GrainDirection, Piece, SheetConfig};
//!
//! let door = Piece::new("door", 400.0, 720.0, 2)
//!     .unwrap()
//!     .with_grain(GrainDirection::Vertical)
//!     .with_wood_type("oak");
//!
//! let config = SheetConfig::new()
//!     .with_sheet(2800.0, 2070.0)
//!     .with_gap(4.0);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(door.expand().len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;
pub mod logger;
pub mod piece;
pub mod placement;
pub mod result;

// Re-exports
pub use config::SheetConfig;
pub use error::{Error, Result};
pub use geometry::{collides_with_any, Rect};
pub use logger::{LayoutLogger, LogFacade, NoopLogger};
pub use piece::{
    expand_pieces, BlockRef, GrainDirection, OrientationMode, Piece, PieceId, UnitPiece,
};
pub use placement::{Placement, Rotation};
pub use result::{
    BlockDiagnostic, BlockStatus, RunResult, RunSummary, SheetLayout, UnplacedPiece,
    UnplacedReason, ValidationIssue,
};

//! # Cutlist FFI
//!
//! JSON and C interface for the cutlist sheet nesting engine.
//!
//! Host applications (order configurators, web backends, desktop tools) send a
//! cut list as JSON and receive the sheet layouts back as JSON.
//!
//! ## Functions
//!
//! - [`cutlist_solve`] - Solves a JSON layout request
//! - [`cutlist_free_string`] - Frees result strings
//! - [`cutlist_version`] - Returns the library version
//! - [`solve_json`] - Pure Rust entry point used by the C functions
//!
//! ## Error Codes
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `CUTLIST_OK` | Success |
//! | -1 | `CUTLIST_ERR_NULL_PTR` | Null pointer passed |
//! | -2 | `CUTLIST_ERR_INVALID_JSON` | Input is not UTF-8 |
//! | -3 | `CUTLIST_ERR_SOLVE_FAILED` | Request rejected (see `error`) |
//! | -99 | `CUTLIST_ERR_UNKNOWN` | Unknown error |
//!
//! ## JSON Request Format
//!
//! ```json
//! {
//!   "sheet": { "width": 2800, "height": 2070, "gap": 4, "step": 10 },
//!   "pieces": [
//!     { "id": "side", "width": 720, "height": 560, "quantity": 2, "rotatable": true },
//!     { "id": "door", "width": 400, "height": 700, "grain": "vertical", "wood_type": "oak" },
//!     { "id": "drawer1", "width": 450, "height": 180, "block": { "id": "drawers", "position": 0 } }
//!   ]
//! }
//! ```
//!
//! ## JSON Response Format
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "success": true,
//!   "error": null,
//!   "sheets": [
//!     {
//!       "index": 1, "width": 2800, "height": 2070, "wood_type": null, "efficiency": 0.12,
//!       "placements": [
//!         { "piece_id": "side", "unit_index": 0, "x": 0, "y": 0, "rotation": 0,
//!           "width": 720, "height": 560, "block_id": null }
//!       ]
//!     }
//!   ],
//!   "sheet_count": 1,
//!   "efficiency": 0.12,
//!   "unplaced": [],
//!   "blocks": [],
//!   "issues": []
//! }
//! ```

mod api;
mod types;

pub use api::*;
pub use types::*;

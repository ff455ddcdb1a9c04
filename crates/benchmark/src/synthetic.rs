//! Synthetic cut list generator.
//!
//! Produces reproducible cabinet-style cut lists for stress testing the
//! layout engine.

use cutlist_ffi::{BlockRequest, GrainRequest, PieceRequest, SheetRequest, SolveRequest};
use rand::prelude::*;

/// Parameters of a synthetic cut list.
#[derive(Debug, Clone)]
pub struct SyntheticParams {
    /// Number of distinct pieces.
    pub count: usize,
    /// Number of wood types; 0 leaves every piece untagged.
    pub wood_types: usize,
    /// Probability that a piece starts a block with its successors.
    pub block_rate: f64,
    /// Probability that a piece carries grain.
    pub grain_rate: f64,
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub gap: f64,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            count: 40,
            wood_types: 2,
            block_rate: 0.1,
            grain_rate: 0.2,
            sheet_width: 2800.0,
            sheet_height: 2070.0,
            gap: 4.0,
        }
    }
}

const WOOD_TYPES: [&str; 5] = ["oak", "walnut", "birch", "maple", "ash"];

/// Generator for synthetic layout requests.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Creates a new generator with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a layout request following `params`.
    pub fn generate(&mut self, params: &SyntheticParams) -> SolveRequest {
        let mut pieces = Vec::with_capacity(params.count);
        let mut block_counter = 0;
        let mut i = 0;

        while i < params.count {
            let wood_type = if params.wood_types > 0 {
                let n = params.wood_types.min(WOOD_TYPES.len());
                Some(WOOD_TYPES[self.rng.gen_range(0..n)].to_string())
            } else {
                None
            };

            if self.rng.gen_bool(params.block_rate.clamp(0.0, 1.0)) && i + 1 < params.count {
                // Drawer fronts: same height and wood, cut side by side.
                let members = self.rng.gen_range(2..=4).min(params.count - i);
                let height = round_mm(self.rng.gen_range(120.0..300.0));
                let block_id = format!("B{}", block_counter);
                block_counter += 1;
                for position in 0..members {
                    pieces.push(PieceRequest {
                        id: format!("P{}", i),
                        width: round_mm(self.rng.gen_range(250.0..700.0)),
                        height,
                        quantity: 1,
                        rotatable: false,
                        grain: None,
                        wood_type: wood_type.clone(),
                        block: Some(BlockRequest {
                            id: block_id.clone(),
                            position,
                        }),
                    });
                    i += 1;
                }
                continue;
            }

            let grain = if self.rng.gen_bool(params.grain_rate.clamp(0.0, 1.0)) {
                Some(if self.rng.gen_bool(0.5) {
                    GrainRequest::Vertical
                } else {
                    GrainRequest::Horizontal
                })
            } else {
                None
            };

            pieces.push(PieceRequest {
                id: format!("P{}", i),
                width: round_mm(self.rng.gen_range(150.0..1200.0)),
                height: round_mm(self.rng.gen_range(100.0..900.0)),
                quantity: self.rng.gen_range(1..=4),
                rotatable: self.rng.gen_bool(0.5),
                grain,
                wood_type,
                block: None,
            });
            i += 1;
        }

        SolveRequest {
            version: Some(cutlist_ffi::API_VERSION.to_string()),
            sheet: SheetRequest {
                width: params.sheet_width,
                height: params.sheet_height,
                gap: Some(params.gap),
                step: None,
                logging: false,
            },
            pieces,
        }
    }
}

/// Rounds to whole millimetres.
fn round_mm(value: f64) -> f64 {
    value.round()
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

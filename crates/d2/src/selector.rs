//! Best-fit selection across orientation candidates.

use crate::orientation::Orientation;
use crate::scanner::{find_position, SheetSpace};

/// A feasible position for one orientation candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub x: f64,
    pub y: f64,
    pub orientation: Orientation,
}

/// Scans every candidate and keeps the lowest position, then the leftmost.
///
/// Earlier candidates win exact ties. Returns `None` when no candidate fits.
pub fn best_fit(
    space: &SheetSpace,
    candidates: &[Orientation],
    gap: f64,
    step: f64,
) -> Option<Fit> {
    let mut best: Option<Fit> = None;

    for orientation in candidates {
        let Some((x, y)) = find_position(space, orientation.width, orientation.height, gap, step)
        else {
            continue;
        };

        let is_better = match &best {
            None => true,
            Some(current) => y < current.y || (y == current.y && x < current.x),
        };

        if is_better {
            best = Some(Fit {
                x,
                y,
                orientation: *orientation,
            });
        }
    }

    best
}

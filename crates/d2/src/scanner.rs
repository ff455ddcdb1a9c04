//! Grid scan for the bottom-left-most free position on a sheet.

use cutlist_core::{collides_with_any, Rect};

/// Tolerance for comparing scan coordinates against sheet bounds.
const EPSILON: f64 = 1e-9;

/// Occupied space of a sheet being packed.
#[derive(Debug, Clone)]
pub struct SheetSpace {
    width: f64,
    height: f64,
    occupied: Vec<Rect>,
}

impl SheetSpace {
    /// Creates an empty sheet of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            occupied: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn occupied(&self) -> &[Rect] {
        &self.occupied
    }

    /// Marks a rectangle as taken.
    pub fn occupy(&mut self, rect: Rect) {
        self.occupied.push(rect);
    }

    /// Returns true if `rect` collides with nothing already placed.
    pub fn is_free(&self, rect: &Rect, gap: f64) -> bool {
        !collides_with_any(rect, &self.occupied, gap)
    }
}

/// Number of scan steps that keep an extent of `size` inside `limit`.
fn step_count(limit: f64, size: f64, step: f64) -> Option<usize> {
    let room = limit - size;
    if room < -EPSILON {
        return None;
    }
    Some(((room.max(0.0) / step) + EPSILON).floor() as usize)
}

/// Scans the sheet row by row for a position for a `width` x `height` piece.
///
/// Rows advance from y = 0 and positions within a row from x = 0, both in
/// `step` increments. A collision-free position is skipped when the position
/// one step to the left, or one step toward y = 0, is also free; the first
/// position that survives this check is returned.
pub fn find_position(
    space: &SheetSpace,
    width: f64,
    height: f64,
    gap: f64,
    step: f64,
) -> Option<(f64, f64)> {
    let max_i = step_count(space.width, width, step)?;
    let max_j = step_count(space.height, height, step)?;

    let free_at = |i: usize, j: usize| {
        let rect = Rect::new(i as f64 * step, j as f64 * step, width, height);
        space.is_free(&rect, gap)
    };

    for j in 0..=max_j {
        for i in 0..=max_i {
            if !free_at(i, j) {
                continue;
            }
            if i > 0 && free_at(i - 1, j) {
                continue;
            }
            if j > 0 && free_at(i, j - 1) {
                continue;
            }
            return Some((i as f64 * step, j as f64 * step));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet_gives_origin() {
        let space = SheetSpace::new(2800.0, 2070.0);
        assert_eq!(
            find_position(&space, 500.0, 300.0, 0.0, 10.0),
            Some((0.0, 0.0))
        );
    }

    #[test]
    fn test_exact_fit() {
        let space = SheetSpace::new(2800.0, 2070.0);
        assert_eq!(
            find_position(&space, 2800.0, 2070.0, 0.0, 10.0),
            Some((0.0, 0.0))
        );
    }

    #[test]
    fn test_too_large() {
        let space = SheetSpace::new(2800.0, 2070.0);
        assert_eq!(find_position(&space, 3000.0, 300.0, 0.0, 10.0), None);
        assert_eq!(find_position(&space, 300.0, 2080.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_places_next_to_existing() {
        let mut space = SheetSpace::new(1000.0, 1000.0);
        space.occupy(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(
            find_position(&space, 500.0, 300.0, 0.0, 10.0),
            Some((400.0, 0.0))
        );
    }

    #[test]
    fn test_respects_gap() {
        let mut space = SheetSpace::new(1000.0, 1000.0);
        space.occupy(Rect::new(0.0, 0.0, 400.0, 300.0));
        // 405 would collide with a gap of 10; 410 is exactly the gap away.
        assert_eq!(
            find_position(&space, 500.0, 300.0, 10.0, 5.0),
            Some((410.0, 0.0))
        );
    }

    #[test]
    fn test_moves_to_next_row_when_row_is_full() {
        let mut space = SheetSpace::new(1000.0, 1000.0);
        space.occupy(Rect::new(0.0, 0.0, 600.0, 300.0));
        assert_eq!(
            find_position(&space, 500.0, 200.0, 0.0, 10.0),
            Some((0.0, 300.0))
        );
    }

    #[test]
    fn test_full_sheet() {
        let mut space = SheetSpace::new(100.0, 100.0);
        space.occupy(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(find_position(&space, 10.0, 10.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_fractional_step_stays_in_bounds() {
        let space = SheetSpace::new(0.3, 0.3);
        let (x, y) = find_position(&space, 0.3, 0.3, 0.0, 0.1).unwrap();
        assert_eq!((x, y), (0.0, 0.0));
    }
}

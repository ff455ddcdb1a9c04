//! Axis-aligned rectangles and the gap-aware overlap test.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the two rectangles are closer than `gap` on both axes.
    ///
    /// Rectangles exactly `gap` apart do not collide.
    pub fn collides_with(&self, other: &Rect, gap: f64) -> bool {
        self.x < other.max_x() + gap
            && other.x < self.max_x() + gap
            && self.y < other.max_y() + gap
            && other.y < self.max_y() + gap
    }

    /// Returns true if the rectangle lies inside `[0, width] x [0, height]`.
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.max_x() <= width && self.max_y() <= height
    }
}

/// Returns true if `candidate` collides with any of the `placed` rectangles.
pub fn collides_with_any<'a, I>(candidate: &Rect, placed: I, gap: f64) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    placed
        .into_iter()
        .any(|other| candidate.collides_with(other, gap))
}

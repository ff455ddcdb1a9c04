//! Sheet configuration shared by every sheet in a run.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default stock sheet width.
pub const DEFAULT_SHEET_WIDTH: f64 = 2800.0;
/// Default stock sheet height.
pub const DEFAULT_SHEET_HEIGHT: f64 = 2070.0;
/// Default scan step of the position scanner.
pub const DEFAULT_SCAN_STEP: f64 = 10.0;

/// Stock sheet dimensions and placement parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Sheet width.
    pub width: f64,

    /// Sheet height.
    pub height: f64,

    /// Minimum clearance between placed pieces.
    pub gap: f64,

    /// Increment used when scanning candidate positions.
    pub step: f64,

    /// Whether the injected layout logger receives trace lines.
    pub logging: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SHEET_WIDTH,
            height: DEFAULT_SHEET_HEIGHT,
            gap: 0.0,
            step: DEFAULT_SCAN_STEP,
            logging: false,
        }
    }
}

impl SheetConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sheet dimensions.
    pub fn with_sheet(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the minimum gap between pieces.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the scan step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Enables or disables trace logging.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Area of one sheet.
    pub fn sheet_area(&self) -> f64 {
        self.width * self.height
    }

    /// Checks the structural preconditions of a run.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "sheet width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "sheet height must be positive, got {}",
                self.height
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "scan step must be positive, got {}",
                self.step
            )));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "gap must be zero or positive, got {}",
                self.gap
            )));
        }
        Ok(())
    }
}

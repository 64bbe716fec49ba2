//! The pane layout value: percent fractions, clamp bounds, and the single
//! drag transition that mutates them.

use serde::{Deserialize, Serialize};

/// Tolerance for the sum-to-100 check on construction. Covers float error
/// from repeated even splits, nothing more.
const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("a layout needs at least 2 panes, got {0}")]
    TooFewPanes(usize),

    #[error("pane fractions must sum to 100, got {0}")]
    BadSum(f64),

    #[error("pane {index} fraction {value} is outside clamp bounds")]
    FractionOutOfBounds { index: usize, value: f64 },

    #[error("clamp bounds {min}..{max} are not a valid percent range")]
    InvalidBounds { min: f64, max: f64 },
}

/// Legal range for any single pane fraction, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self {
            min: 20.0,
            max: 80.0,
        }
    }
}

impl ClampBounds {
    fn validate(&self) -> Result<(), LayoutError> {
        if self.min <= 0.0 || self.max >= 100.0 || self.min >= self.max {
            return Err(LayoutError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// An ordered row of pane-size fractions summing to 100, with one divider
/// between each adjacent pair.
///
/// The fractions are private: the only mutation is [`PaneLayout::apply_drag`],
/// which moves size between the two panes adjacent to one divider and keeps
/// the sum at 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneLayout {
    fractions: Vec<f64>,
    bounds: ClampBounds,
}

impl PaneLayout {
    /// Build a layout from explicit fractions. Fails unless there are at
    /// least two panes, the sum is 100, and every fraction is in bounds.
    pub fn from_fractions(
        fractions: Vec<f64>,
        bounds: ClampBounds,
    ) -> Result<Self, LayoutError> {
        bounds.validate()?;
        if fractions.len() < 2 {
            return Err(LayoutError::TooFewPanes(fractions.len()));
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 100.0).abs() > SUM_TOLERANCE {
            return Err(LayoutError::BadSum(sum));
        }
        for (index, &value) in fractions.iter().enumerate() {
            if value < bounds.min - SUM_TOLERANCE || value > bounds.max + SUM_TOLERANCE {
                return Err(LayoutError::FractionOutOfBounds { index, value });
            }
        }
        Ok(Self { fractions, bounds })
    }

    /// An even split across `count` panes.
    pub fn even_split(count: usize, bounds: ClampBounds) -> Result<Self, LayoutError> {
        if count < 2 {
            return Err(LayoutError::TooFewPanes(count));
        }
        let fraction = 100.0 / count as f64;
        Self::from_fractions(vec![fraction; count], bounds)
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn fraction(&self, pane: usize) -> Option<f64> {
        self.fractions.get(pane).copied()
    }

    pub fn pane_count(&self) -> usize {
        self.fractions.len()
    }

    pub fn divider_count(&self) -> usize {
        self.fractions.len() - 1
    }

    pub fn bounds(&self) -> ClampBounds {
        self.bounds
    }

    /// Absolute position of a divider as a percent of the container:
    /// the sum of all fractions up to and including the pane on its left.
    pub fn divider_position(&self, divider: usize) -> Option<f64> {
        if divider >= self.divider_count() {
            return None;
        }
        Some(self.fractions[..=divider].iter().sum())
    }

    /// Apply a drag: `pointer_pct` is the divider's candidate absolute
    /// position as a percent of the container. The pane left of the divider
    /// takes `pointer_pct` minus the preceding fractions, clamped so both
    /// adjacent panes stay in bounds; the right pane absorbs the complement.
    ///
    /// Returns `false` (and mutates nothing) for an unknown divider or when
    /// the clamped value equals the current one — out-of-range pointers
    /// saturate at the bound instead of snapping back in. Panes not adjacent
    /// to the divider are never touched.
    pub fn apply_drag(&mut self, divider: usize, pointer_pct: f64) -> bool {
        if divider >= self.divider_count() {
            return false;
        }

        let prefix: f64 = self.fractions[..divider].iter().sum();
        let pair_total = self.fractions[divider] + self.fractions[divider + 1];

        // The left pane must stay in bounds, and so must the right pane
        // (which gets pair_total - left). For two panes this is exactly
        // min..max on the left fraction.
        let lo = self.bounds.min.max(pair_total - self.bounds.max);
        let hi = self.bounds.max.min(pair_total - self.bounds.min);
        if lo > hi {
            return false;
        }

        let candidate = (pointer_pct - prefix).clamp(lo, hi);
        if candidate == self.fractions[divider] {
            return false;
        }

        self.fractions[divider] = candidate;
        self.fractions[divider + 1] = pair_total - candidate;
        true
    }
}

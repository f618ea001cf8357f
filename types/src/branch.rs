//! Branch decision types.
//!
//! A run draws one [`Roll`] and compares it against a [`Threshold`]. Both are
//! validated on construction so [`Branch::decide`] never sees an out-of-range value.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Roll
// ============================================================================

/// A single random draw in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Roll(f64);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("roll must be in [0, 1), got {0}")]
pub struct RollError(pub f64);

impl Roll {
    pub const ZERO: Roll = Roll(0.0);

    pub fn new(value: f64) -> Result<Self, RollError> {
        // NaN fails both comparisons.
        if (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RollError(value))
        }
    }

    /// Parse a roll from text, e.g. an environment override.
    pub fn parse(raw: &str) -> Result<Self, RollError> {
        let value = raw.trim().parse::<f64>().map_err(|_| RollError(f64::NAN))?;
        Self::new(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

// ============================================================================
// Threshold
// ============================================================================

/// Cut-off a roll must exceed to take the load branch. Inclusive range `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("threshold must be in [0, 1], got {0}")]
pub struct ThresholdError(pub f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.5);

    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ThresholdError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Branch
// ============================================================================

/// Which of the two paths a run took. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Load the lazy module, wait out its delay, then greet.
    LoadAndGreet,
    /// Print the skip message; the lazy module is never touched.
    Skip,
}

impl Branch {
    /// A roll strictly above the threshold loads; equal or below skips.
    #[must_use]
    pub fn decide(roll: Roll, threshold: Threshold) -> Self {
        if roll.value() > threshold.value() {
            Branch::LoadAndGreet
        } else {
            Branch::Skip
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Branch::LoadAndGreet => "load_and_greet",
            Branch::Skip => "skip",
        }
    }

    #[must_use]
    pub const fn loads_module(self) -> bool {
        matches!(self, Branch::LoadAndGreet)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

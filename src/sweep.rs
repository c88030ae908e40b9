//! Geometric value sweeps used to pick which chart circles to draw.

use std::iter::FusedIterator;

use crate::constants::{DEFAULT_SWEEP_LIMIT, DEFAULT_SWEEP_RATIO, DEFAULT_SWEEP_START};
use crate::errors::DomainError;
use crate::math::Scalar;

/// Geometric progression `start, start·ratio, start·ratio², …` bounded above
/// (exclusive) by `limit`.
///
/// Always satisfies `start >= f64::MIN_POSITIVE` and `ratio > 1`, so every
/// sweep is finite.
/// A `limit` at or below `start` is valid and describes an empty sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SweepBounds", into = "SweepBounds")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSpec {
    start: Scalar,
    ratio: Scalar,
    limit: Scalar,
}

impl SweepSpec {
    /// Validates and builds a sweep description.
    ///
    /// # Errors
    /// [`DomainError::InvalidSweep`] unless `start` is a positive normal
    /// number, `ratio > 1` and all three values are finite. Subnormal starts
    /// are rejected because multiplying them by `ratio` can round back to the
    /// same value.
    pub fn new(start: Scalar, ratio: Scalar, limit: Scalar) -> Result<Self, DomainError> {
        let finite = start.is_finite() && ratio.is_finite() && limit.is_finite();
        if !finite || start < Scalar::MIN_POSITIVE || ratio <= 1.0 {
            return Err(DomainError::InvalidSweep {
                start,
                ratio,
                limit,
            });
        }
        Ok(Self {
            start,
            ratio,
            limit,
        })
    }

    /// First value of the sweep.
    #[must_use]
    pub fn start(&self) -> Scalar {
        self.start
    }

    /// Multiplicative step.
    #[must_use]
    pub fn ratio(&self) -> Scalar {
        self.ratio
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn limit(&self) -> Scalar {
        self.limit
    }

    /// True when the sweep yields no values (`limit <= start`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limit <= self.start
    }

    /// Number of values the sweep yields.
    #[must_use]
    pub fn len(&self) -> usize {
        geometric_sweep(*self).count()
    }
}

impl Default for SweepSpec {
    fn default() -> Self {
        Self {
            start: DEFAULT_SWEEP_START,
            ratio: DEFAULT_SWEEP_RATIO,
            limit: DEFAULT_SWEEP_LIMIT,
        }
    }
}

/// Unvalidated wire form of [`SweepSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SweepBounds {
    start: Scalar,
    ratio: Scalar,
    limit: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<SweepBounds> for SweepSpec {
    type Error = DomainError;

    fn try_from(b: SweepBounds) -> Result<Self, Self::Error> {
        Self::new(b.start, b.ratio, b.limit)
    }
}

#[cfg(feature = "serde")]
impl From<SweepSpec> for SweepBounds {
    fn from(s: SweepSpec) -> Self {
        Self {
            start: s.start,
            ratio: s.ratio,
            limit: s.limit,
        }
    }
}

/// Lazy iterator over the values of a [`SweepSpec`].
#[derive(Debug, Clone)]
pub struct GeometricSweep {
    next: Scalar,
    ratio: Scalar,
    limit: Scalar,
}

impl Iterator for GeometricSweep {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        if self.next < self.limit {
            let value = self.next;
            let grown = value * self.ratio;
            // a step that fails to grow would repeat forever
            self.next = if grown > value { grown } else { Scalar::INFINITY };
            Some(value)
        } else {
            None
        }
    }
}

impl FusedIterator for GeometricSweep {}

/// Starts a fresh sweep over `spec`.
///
/// Values are produced by repeated multiplication, so the sequence matches a
/// `v *= ratio` loop bit for bit.
#[must_use]
pub fn geometric_sweep(spec: SweepSpec) -> GeometricSweep {
    GeometricSweep {
        next: spec.start,
        ratio: spec.ratio,
        limit: spec.limit,
    }
}

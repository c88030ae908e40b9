//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Raised when a chart parameter lies outside the domain of the circle maps.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// Normalized resistance is negative or not finite.
    #[error("invalid normalized resistance {0}: must be finite and >= 0")]
    InvalidResistance(Scalar),
    /// Reactance of exactly zero; the locus is the real axis, not a circle.
    #[error("zero reactance degenerates to the real axis")]
    DegenerateReactance,
    /// Normalized reactance is not finite.
    #[error("invalid normalized reactance {0}: must be finite")]
    InvalidReactance(Scalar),
    /// Normalized conductance is negative or not finite.
    #[error("invalid normalized conductance {0}: must be finite and >= 0")]
    InvalidConductance(Scalar),
    /// Susceptance of exactly zero; the locus is the real axis, not a circle.
    #[error("zero susceptance degenerates to the real axis")]
    DegenerateSusceptance,
    /// Normalized susceptance is not finite.
    #[error("invalid normalized susceptance {0}: must be finite")]
    InvalidSusceptance(Scalar),
    /// Sweep parameters that would not produce a finite increasing sequence.
    #[error("invalid sweep (start={start}, ratio={ratio}, limit={limit}): need start > 0, ratio > 1, all finite")]
    InvalidSweep {
        /// Requested first value.
        start: Scalar,
        /// Requested multiplicative step.
        ratio: Scalar,
        /// Requested exclusive bound.
        limit: Scalar,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Wraps geometry and sweep domain errors.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Raised when a chart configuration is invalid.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

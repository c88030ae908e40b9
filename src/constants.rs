//! Default chart sampling and drawing constants.
//!
//! The sweep defaults reproduce the sampling of the classic chart: values start
//! at `0.1` and grow by roughly `√2` per step until they reach `100`.

use crate::math::Scalar;

/// First value of the default resistance/reactance sweep.
pub const DEFAULT_SWEEP_START: Scalar = 0.1;
/// Multiplicative step of the default sweep (≈ √2).
pub const DEFAULT_SWEEP_RATIO: Scalar = 1.414;
/// Exclusive upper bound of the default sweep.
pub const DEFAULT_SWEEP_LIMIT: Scalar = 100.0;

/// Pixels per normalized chart unit for a compact chart.
pub const COMPACT_PIXEL_SCALE: Scalar = 200.0;
/// Pixels per normalized chart unit for a large chart.
pub const LARGE_PIXEL_SCALE: Scalar = 700.0;

/// Common reference impedance Z₀ in ohms.
pub const DEFAULT_REFERENCE_IMPEDANCE: Scalar = 50.0;

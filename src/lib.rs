#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Default sweep and drawing constants.
pub mod constants;
/// Scalar aliases and the impedance-to-reflection-coefficient map.
pub mod math;
/// Circle value type emitted to hosts.
pub mod circle;
/// Constant-resistance, constant-reactance and admittance circles.
pub mod geometry;
/// Geometric value sweeps.
pub mod sweep;
/// Full-chart composition and the host rendering boundary.
pub mod chart;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

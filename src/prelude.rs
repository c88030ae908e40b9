//! Convenience re-exports for drawing impedance charts.

pub use crate::chart::{
    chart_circles, family_circles, render_chart, ChartCircle, ChartConfig, ChartRenderer,
    CircleFamily,
};
pub use crate::circle::Circle;
pub use crate::constants::*;
pub use crate::errors::{ChartError, DomainError};
pub use crate::geometry::{
    constant_conductance_circle, constant_reactance_circle, constant_resistance_circle,
    constant_susceptance_circle,
};
pub use crate::math::{
    impedance_from_reflection, normalize_impedance, reflection_coefficient, CScalar, Scalar,
};
pub use crate::sweep::{geometric_sweep, GeometricSweep, SweepSpec};

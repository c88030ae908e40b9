//! Shared numerical primitives and the impedance-to-chart mapping.

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and reflection coefficients.
pub type CScalar = Complex<Scalar>;

/// Divides an impedance `z` (ohms) by the real reference impedance `z0` (ohms).
///
/// Returns `None` when `z0` is not a positive finite value.
#[must_use]
pub fn normalize_impedance(z: CScalar, z0: Scalar) -> Option<CScalar> {
    if !(z0.is_finite() && z0 > 0.0) {
        return None;
    }
    Some(z / z0)
}

/// Maps a normalized impedance `z` onto the reflection-coefficient plane,
/// `Γ = (z - 1) / (z + 1)`.
///
/// Returns `None` for `z = -1`, the pole of the transform.
#[must_use]
pub fn reflection_coefficient(z: CScalar) -> Option<CScalar> {
    let one = CScalar::new(1.0, 0.0);
    let den = z + one;
    if den.norm() == 0.0 {
        return None;
    }
    Some((z - one) / den)
}

/// Inverse of [`reflection_coefficient`]: `z = (1 + Γ) / (1 - Γ)`.
///
/// Returns `None` for `Γ = 1` (open circuit).
#[must_use]
pub fn impedance_from_reflection(gamma: CScalar) -> Option<CScalar> {
    let one = CScalar::new(1.0, 0.0);
    let den = one - gamma;
    if den.norm() == 0.0 {
        return None;
    }
    Some((one + gamma) / den)
}

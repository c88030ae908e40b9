//! Constant-parameter circles of the impedance (Smith) chart.
//!
//! Under the map `Γ = (z - 1) / (z + 1)` every line `Re z = r` becomes a circle
//! tangent to `Γ = 1` with its center on the real axis, and every line
//! `Im z = x` becomes a circle through `Γ = 1` with its center on the vertical
//! line `Re Γ = 1`. The admittance chart is the same picture rotated by 180°.

use crate::circle::Circle;
use crate::errors::DomainError;
use crate::math::Scalar;

/// Circle traced by all normalized impedances with resistance `r`.
///
/// `center = (r / (r + 1), 0)`, `radius = 1 / (r + 1)`.
///
/// # Errors
/// [`DomainError::InvalidResistance`] if `r` is negative or not finite.
pub fn constant_resistance_circle(r: Scalar) -> Result<Circle, DomainError> {
    if !r.is_finite() || r < 0.0 {
        return Err(DomainError::InvalidResistance(r));
    }
    let k = r + 1.0;
    Ok(Circle::new(r / k, 0.0, 1.0 / k))
}

/// Circle traced by all normalized impedances with reactance `x`.
///
/// `center = (1, 1 / x)`, `radius = |1 / x|`. Inductive (`x > 0`) circles sit
/// in the upper half plane, capacitive ones mirror them below.
///
/// # Errors
/// [`DomainError::DegenerateReactance`] for `x == 0` (the real axis) and
/// [`DomainError::InvalidReactance`] if `x` is not finite or so small that
/// `1 / x` overflows.
pub fn constant_reactance_circle(x: Scalar) -> Result<Circle, DomainError> {
    if !x.is_finite() {
        return Err(DomainError::InvalidReactance(x));
    }
    if x == 0.0 {
        return Err(DomainError::DegenerateReactance);
    }
    let inv = 1.0 / x;
    if !inv.is_finite() {
        return Err(DomainError::InvalidReactance(x));
    }
    Ok(Circle::new(1.0, inv, inv))
}

/// Admittance-chart circle for normalized conductance `g`.
///
/// `center = (-g / (g + 1), 0)`, `radius = 1 / (g + 1)`.
///
/// # Errors
/// [`DomainError::InvalidConductance`] if `g` is negative or not finite.
pub fn constant_conductance_circle(g: Scalar) -> Result<Circle, DomainError> {
    if !g.is_finite() || g < 0.0 {
        return Err(DomainError::InvalidConductance(g));
    }
    let k = g + 1.0;
    Ok(Circle::new(-g / k, 0.0, 1.0 / k))
}

/// Admittance-chart circle for normalized susceptance `b`.
///
/// `center = (-1, -1 / b)`, `radius = |1 / b|`.
///
/// # Errors
/// [`DomainError::DegenerateSusceptance`] for `b == 0` and
/// [`DomainError::InvalidSusceptance`] if `b` is not finite or `1 / b`
/// overflows.
pub fn constant_susceptance_circle(b: Scalar) -> Result<Circle, DomainError> {
    if !b.is_finite() {
        return Err(DomainError::InvalidSusceptance(b));
    }
    if b == 0.0 {
        return Err(DomainError::DegenerateSusceptance);
    }
    let inv = 1.0 / b;
    if !inv.is_finite() {
        return Err(DomainError::InvalidSusceptance(b));
    }
    Ok(Circle::new(-1.0, -inv, inv))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{reflection_coefficient, CScalar};

    const TOL: Scalar = 1.0e-9;

    #[test]
    fn zero_resistance_is_unit_circle() {
        let c = constant_resistance_circle(0.0).unwrap();
        assert_eq!(c, Circle::unit());
    }

    #[test]
    fn unit_resistance_circle() {
        let c = constant_resistance_circle(1.0).unwrap();
        assert_relative_eq!(c.center_x, 0.5, epsilon = TOL);
        assert_relative_eq!(c.center_y, 0.0, epsilon = TOL);
        assert_relative_eq!(c.radius, 0.5, epsilon = TOL);
    }

    #[test]
    fn resistance_circles_stay_on_real_axis() {
        for r in [0.0, 0.1, 0.5, 2.0, 17.3, 99.9, 1.0e6] {
            let c = constant_resistance_circle(r).unwrap();
            assert_eq!(c.center_y, 0.0);
            assert_relative_eq!(c.radius, 1.0 / (r + 1.0), epsilon = TOL);
            // tangent to the open-circuit point
            assert_relative_eq!(c.center_x + c.radius, 1.0, epsilon = TOL);
        }
    }

    #[test]
    fn large_resistance_shrinks_toward_open_circuit() {
        let c = constant_resistance_circle(1.0e9).unwrap();
        assert!(c.radius < 1.0e-8);
        assert_relative_eq!(c.center_x, 1.0, epsilon = 1.0e-8);
    }

    #[test]
    fn negative_resistance_is_rejected() {
        assert_eq!(
            constant_resistance_circle(-1.0),
            Err(DomainError::InvalidResistance(-1.0))
        );
        assert!(matches!(
            constant_resistance_circle(f64::NAN),
            Err(DomainError::InvalidResistance(_))
        ));
        assert!(constant_resistance_circle(f64::INFINITY).is_err());
    }

    #[test]
    fn unit_reactance_circle() {
        let c = constant_reactance_circle(1.0).unwrap();
        assert_eq!(c, Circle::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn reactance_circles_mirror_across_real_axis() {
        for x in [0.1, 0.75, 3.0, 42.0] {
            let pos = constant_reactance_circle(x).unwrap();
            let neg = constant_reactance_circle(-x).unwrap();
            assert_relative_eq!(pos.center_x, neg.center_x, epsilon = TOL);
            assert_relative_eq!(pos.center_y, -neg.center_y, epsilon = TOL);
            assert_relative_eq!(pos.radius, neg.radius, epsilon = TOL);
            assert!(pos.center_y > 0.0);
            assert!(neg.radius >= 0.0);
            assert_eq!(neg, pos.conjugate());
        }
    }

    #[test]
    fn zero_reactance_is_degenerate() {
        assert_eq!(
            constant_reactance_circle(0.0),
            Err(DomainError::DegenerateReactance)
        );
        assert_eq!(
            constant_reactance_circle(-0.0),
            Err(DomainError::DegenerateReactance)
        );
        assert!(matches!(
            constant_reactance_circle(f64::NEG_INFINITY),
            Err(DomainError::InvalidReactance(_))
        ));
    }

    #[test]
    fn subnormal_reactance_does_not_overflow_to_infinite_circle() {
        for x in [1.0e-310, -5.0e-324] {
            assert_eq!(
                constant_reactance_circle(x),
                Err(DomainError::InvalidReactance(x))
            );
            assert_eq!(
                constant_susceptance_circle(x),
                Err(DomainError::InvalidSusceptance(x))
            );
        }
        // smallest normal value still has a finite reciprocal
        let c = constant_reactance_circle(f64::MIN_POSITIVE).unwrap();
        assert!(c.center_y.is_finite() && c.radius.is_finite());
    }

    #[test]
    fn reflected_impedances_lie_on_their_circles() {
        for r in [0.0, 0.2, 1.0, 5.0] {
            for x in [-4.0, -0.3, 0.5, 2.0] {
                let gamma = reflection_coefficient(CScalar::new(r, x)).unwrap();
                let rc = constant_resistance_circle(r).unwrap();
                let xc = constant_reactance_circle(x).unwrap();
                assert!(rc.passes_through(gamma, TOL), "r={r} x={x}");
                assert!(xc.passes_through(gamma, TOL), "r={r} x={x}");
            }
        }
    }

    #[test]
    fn admittance_circles_are_point_reflections() {
        for v in [0.1, 1.0, 7.5] {
            let r = constant_resistance_circle(v).unwrap();
            let g = constant_conductance_circle(v).unwrap();
            assert_relative_eq!(g.center_x, -r.center_x, epsilon = TOL);
            assert_relative_eq!(g.radius, r.radius, epsilon = TOL);

            let x = constant_reactance_circle(v).unwrap();
            let b = constant_susceptance_circle(v).unwrap();
            assert_relative_eq!(b.center_x, -x.center_x, epsilon = TOL);
            assert_relative_eq!(b.center_y, -x.center_y, epsilon = TOL);
            assert_relative_eq!(b.radius, x.radius, epsilon = TOL);
        }
    }

    #[test]
    fn reflected_admittances_lie_on_their_circles() {
        let y = CScalar::new(0.4, -1.5);
        let gamma = reflection_coefficient(CScalar::new(1.0, 0.0) / y).unwrap();
        assert!(constant_conductance_circle(y.re).unwrap().passes_through(gamma, TOL));
        assert!(constant_susceptance_circle(y.im).unwrap().passes_through(gamma, TOL));
    }

    #[test]
    fn admittance_domain_errors() {
        assert_eq!(
            constant_conductance_circle(-0.5),
            Err(DomainError::InvalidConductance(-0.5))
        );
        assert_eq!(
            constant_susceptance_circle(0.0),
            Err(DomainError::DegenerateSusceptance)
        );
        assert!(matches!(
            constant_susceptance_circle(f64::NAN),
            Err(DomainError::InvalidSusceptance(_))
        ));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = constant_resistance_circle(0.3).unwrap();
        let b = constant_resistance_circle(0.3).unwrap();
        assert_eq!(a.center_x.to_bits(), b.center_x.to_bits());
        assert_eq!(a.radius.to_bits(), b.radius.to_bits());

        let a = constant_reactance_circle(-2.2).unwrap();
        let b = constant_reactance_circle(-2.2).unwrap();
        assert_eq!(a.center_y.to_bits(), b.center_y.to_bits());
        assert_eq!(a.radius.to_bits(), b.radius.to_bits());
    }
}

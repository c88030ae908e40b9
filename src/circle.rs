//! Plain circle value emitted by the chart geometry.

use crate::math::{CScalar, Scalar};

/// Circle in the reflection-coefficient plane (or in pixels, once scaled).
///
/// The radius is never negative; orientation is carried by the center.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Real-axis coordinate of the center.
    pub center_x: Scalar,
    /// Imaginary-axis coordinate of the center.
    pub center_y: Scalar,
    /// Radius, `>= 0`.
    pub radius: Scalar,
}

impl Circle {
    /// Creates a circle; the magnitude of `radius` is stored.
    #[must_use]
    pub fn new(center_x: Scalar, center_y: Scalar, radius: Scalar) -> Self {
        Self {
            center_x,
            center_y,
            radius: radius.abs(),
        }
    }

    /// The unit circle centred on the origin (outer edge of the chart).
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Center as a complex number.
    #[must_use]
    pub fn center(&self) -> CScalar {
        CScalar::new(self.center_x, self.center_y)
    }

    /// Scales center and radius by `factor` (e.g. pixels per chart unit).
    #[must_use]
    pub fn scaled(&self, factor: Scalar) -> Self {
        Self::new(
            self.center_x * factor,
            self.center_y * factor,
            self.radius * factor,
        )
    }

    /// Axis-aligned bounding rectangle `(left, top, width, height)`, the form
    /// most toolkit ellipse calls take.
    #[must_use]
    pub fn bounding_box(&self) -> (Scalar, Scalar, Scalar, Scalar) {
        let d = 2.0 * self.radius;
        (
            self.center_x - self.radius,
            self.center_y - self.radius,
            d,
            d,
        )
    }

    /// Distance from `point` to the circle outline.
    #[must_use]
    pub fn distance_to_outline(&self, point: CScalar) -> Scalar {
        ((point - self.center()).norm() - self.radius).abs()
    }

    /// True if `point` lies on the outline within `tolerance`.
    #[must_use]
    pub fn passes_through(&self, point: CScalar, tolerance: Scalar) -> bool {
        self.distance_to_outline(point) <= tolerance
    }

    /// Mirror image across the real axis.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.center_x, -self.center_y, self.radius)
    }
}

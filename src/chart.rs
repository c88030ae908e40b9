//! Full-chart composition and the boundary to a host drawing toolkit.
//!
//! [`chart_circles`] produces every circle of a sampled chart in normalized
//! units. [`render_chart`] scales them to pixels and hands each one to a
//! [`ChartRenderer`] implemented by the host.

use crate::circle::Circle;
use crate::constants::COMPACT_PIXEL_SCALE;
use crate::errors::{ChartError, DomainError};
use crate::geometry::{
    constant_conductance_circle, constant_reactance_circle, constant_resistance_circle,
    constant_susceptance_circle,
};
use crate::math::Scalar;
use crate::sweep::{geometric_sweep, SweepSpec};

/// Which constant-parameter family a chart circle belongs to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleFamily {
    /// Constant normalized resistance.
    Resistance,
    /// Constant normalized reactance.
    Reactance,
    /// Constant normalized conductance (admittance chart).
    Conductance,
    /// Constant normalized susceptance (admittance chart).
    Susceptance,
}

impl CircleFamily {
    /// Circle for `value` in this family.
    ///
    /// # Errors
    /// Propagates the [`DomainError`] of the underlying constructor.
    pub fn circle(self, value: Scalar) -> Result<Circle, DomainError> {
        match self {
            Self::Resistance => constant_resistance_circle(value),
            Self::Reactance => constant_reactance_circle(value),
            Self::Conductance => constant_conductance_circle(value),
            Self::Susceptance => constant_susceptance_circle(value),
        }
    }

    /// True for the families whose circles come in mirrored ± pairs.
    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(self, Self::Reactance | Self::Susceptance)
    }
}

/// One circle of a chart together with the parameter value it represents.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCircle {
    /// Parameter family.
    pub family: CircleFamily,
    /// Normalized parameter value (signed for reactance/susceptance).
    pub value: Scalar,
    /// Circle in normalized chart units.
    pub circle: Circle,
}

/// Drawing parameters for a chart.
///
/// Fields are private so the pixel scale is validated on every path in,
/// including deserialization.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ChartSettings", into = "ChartSettings")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    sweep: SweepSpec,
    pixel_scale: Scalar,
    mirror_reactance: bool,
    include_admittance: bool,
}

impl ChartConfig {
    /// Chart with the given sweep and pixel scale, mirrored reactance and no
    /// admittance circles.
    ///
    /// # Errors
    /// [`ChartError::InvalidConfig`] if `pixel_scale` is not a positive finite
    /// number.
    pub fn new(sweep: SweepSpec, pixel_scale: Scalar) -> Result<Self, ChartError> {
        check_pixel_scale(pixel_scale)?;
        Ok(Self {
            sweep,
            pixel_scale,
            mirror_reactance: true,
            include_admittance: false,
        })
    }

    /// Enables or disables the negative reactance family.
    #[must_use]
    pub fn with_mirror_reactance(mut self, mirror: bool) -> Self {
        self.mirror_reactance = mirror;
        self
    }

    /// Enables or disables the admittance-chart families.
    #[must_use]
    pub fn with_admittance(mut self, include: bool) -> Self {
        self.include_admittance = include;
        self
    }

    /// Replaces the sweep, keeping every other setting.
    #[must_use]
    pub fn with_sweep(mut self, sweep: SweepSpec) -> Self {
        self.sweep = sweep;
        self
    }

    /// Values sampled for every family.
    #[must_use]
    pub fn sweep(&self) -> SweepSpec {
        self.sweep
    }

    /// Pixels per normalized chart unit, always positive and finite.
    #[must_use]
    pub fn pixel_scale(&self) -> Scalar {
        self.pixel_scale
    }

    /// Whether the negative (capacitive) reactance circles are drawn.
    #[must_use]
    pub fn mirror_reactance(&self) -> bool {
        self.mirror_reactance
    }

    /// Whether the admittance-chart circles are drawn.
    #[must_use]
    pub fn include_admittance(&self) -> bool {
        self.include_admittance
    }

    fn families(&self) -> &'static [CircleFamily] {
        if self.include_admittance {
            &[
                CircleFamily::Resistance,
                CircleFamily::Reactance,
                CircleFamily::Conductance,
                CircleFamily::Susceptance,
            ]
        } else {
            &[CircleFamily::Resistance, CircleFamily::Reactance]
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            sweep: SweepSpec::default(),
            pixel_scale: COMPACT_PIXEL_SCALE,
            mirror_reactance: true,
            include_admittance: false,
        }
    }
}

fn check_pixel_scale(pixel_scale: Scalar) -> Result<(), ChartError> {
    if pixel_scale.is_finite() && pixel_scale > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidConfig(format!(
            "pixel scale must be positive and finite, got {pixel_scale}"
        )))
    }
}

/// Unvalidated wire form of [`ChartConfig`]; missing fields take defaults.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct ChartSettings {
    sweep: SweepSpec,
    pixel_scale: Scalar,
    mirror_reactance: bool,
    include_admittance: bool,
}

#[cfg(feature = "serde")]
impl Default for ChartSettings {
    fn default() -> Self {
        ChartConfig::default().into()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ChartSettings> for ChartConfig {
    type Error = ChartError;

    fn try_from(s: ChartSettings) -> Result<Self, Self::Error> {
        Ok(Self::new(s.sweep, s.pixel_scale)?
            .with_mirror_reactance(s.mirror_reactance)
            .with_admittance(s.include_admittance))
    }
}

#[cfg(feature = "serde")]
impl From<ChartConfig> for ChartSettings {
    fn from(c: ChartConfig) -> Self {
        Self {
            sweep: c.sweep,
            pixel_scale: c.pixel_scale,
            mirror_reactance: c.mirror_reactance,
            include_admittance: c.include_admittance,
        }
    }
}

/// Host-side drawing callback.
///
/// Coordinates are in pixels with the chart center at the origin and the
/// imaginary axis pointing up; flipping to a y-down screen is the host's job.
pub trait ChartRenderer {
    /// Draws one circle of the chart.
    fn draw_circle(&mut self, family: CircleFamily, value: Scalar, circle_px: &Circle);

    /// Draws the real axis from `-half_width_px` to `+half_width_px`, the locus
    /// of zero reactance that has no circle of its own.
    fn draw_real_axis(&mut self, half_width_px: Scalar);
}

/// Builds every circle of the chart in normalized units.
///
/// For each family the sweep is walked once; signed families emit `+v` and,
/// when mirroring is enabled, `-v` immediately after it.
///
/// # Errors
/// A [`DomainError`] if a sampled value falls outside its family's domain.
pub fn chart_circles(config: &ChartConfig) -> Result<Vec<ChartCircle>, ChartError> {
    let mut out = Vec::new();
    for &family in config.families() {
        for value in geometric_sweep(config.sweep) {
            out.push(ChartCircle {
                family,
                value,
                circle: family.circle(value)?,
            });
            if family.is_signed() && config.mirror_reactance {
                out.push(ChartCircle {
                    family,
                    value: -value,
                    circle: family.circle(-value)?,
                });
            }
        }
    }
    log::debug!(
        "built {} chart circles (sweep {:?}, admittance={})",
        out.len(),
        config.sweep,
        config.include_admittance
    );
    Ok(out)
}

/// Draws the chart through `renderer`: the real axis first, then every circle
/// scaled by the configured pixel scale. Returns the number of circles drawn.
///
/// # Errors
/// Same as [`chart_circles`]; nothing is drawn if the chart cannot be built.
pub fn render_chart<R>(config: &ChartConfig, renderer: &mut R) -> Result<usize, ChartError>
where
    R: ChartRenderer + ?Sized,
{
    let circles = chart_circles(config)?;
    let scale = config.pixel_scale;
    renderer.draw_real_axis(scale);
    for c in &circles {
        let px = c.circle.scaled(scale);
        log::trace!("{:?} {} -> {:?}", c.family, c.value, px);
        renderer.draw_circle(c.family, c.value, &px);
    }
    log::debug!("rendered {} circles at {} px/unit", circles.len(), scale);
    Ok(circles.len())
}

/// Like [`chart_circles`] for arbitrary `values`, skipping (and logging) those
/// outside the family's domain instead of failing.
#[must_use]
pub fn family_circles<I>(family: CircleFamily, values: I) -> Vec<ChartCircle>
where
    I: IntoIterator<Item = Scalar>,
{
    values
        .into_iter()
        .filter_map(|value| match family.circle(value) {
            Ok(circle) => Some(ChartCircle {
                family,
                value,
                circle,
            }),
            Err(e) => {
                log::warn!("skipping {family:?} circle for {value}: {e}");
                None
            }
        })
        .collect()
}

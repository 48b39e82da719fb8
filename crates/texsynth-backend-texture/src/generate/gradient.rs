//! Anchor gradient sampler.

use texsynth_spec::validation::validate_gradient;
use texsynth_spec::{ColorSpace, GradientAxis, GradientSpec};

use super::{check, GenerateError};
use crate::buffer::TextureBuffer;
use crate::color::Color;
use crate::color_space::interpolate;

/// Anchor with its position resolved to a pixel coordinate on the ramp axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stop {
    position: f64,
    color: Color,
}

/// A sorted working copy of a gradient's anchors.
///
/// The caller's anchors are never reordered; the ramp owns its own copy.
#[derive(Debug, Clone)]
pub struct GradientRamp {
    stops: Vec<Stop>,
    color_space: ColorSpace,
}

impl GradientRamp {
    /// Normalize and sort the anchors of `spec`.
    ///
    /// Returns `None` when the spec has no anchors.
    pub fn new(spec: &GradientSpec) -> Option<Self> {
        if spec.anchors.is_empty() {
            return None;
        }

        let mut stops: Vec<Stop> = spec
            .anchors
            .iter()
            .map(|a| Stop {
                position: spec.normalized_position(a.position),
                color: Color::from_array(a.color),
            })
            .collect();
        // Stable, so equal positions keep their input order.
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));

        log::debug!(
            "gradient ramp: {:?}",
            stops.iter().map(|s| s.position).collect::<Vec<_>>()
        );

        Some(Self {
            stops,
            color_space: spec.color_space,
        })
    }

    /// Color at pixel coordinate `p` along the ramp axis.
    ///
    /// Coordinates before the first stop or after the last hold the end
    /// color. A lone stop colors the whole axis.
    pub fn sample(&self, p: f64) -> Color {
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if self.stops.len() == 1 || p <= first.position {
            return first.color;
        }
        if p >= last.position {
            return last.color;
        }

        // First stop at or beyond p; always in 1..len here.
        let hi = self.stops.partition_point(|s| s.position < p);
        let (lo, hi) = (&self.stops[hi - 1], &self.stops[hi]);
        let span = hi.position - lo.position;
        let t = if span > 0.0 {
            (p - lo.position) / span
        } else {
            0.0
        };
        interpolate(self.color_space, &lo.color, &hi.color, t)
    }
}

/// Generate a gradient texture.
///
/// The ramp is computed once along the primary axis and broadcast across the
/// perpendicular axis.
pub fn generate_gradient(spec: &GradientSpec) -> Result<TextureBuffer, GenerateError> {
    check(validate_gradient(spec))?;
    // Empty anchors were rejected above.
    let ramp = GradientRamp::new(spec).ok_or(GenerateError::InvalidSpec(Vec::new()))?;

    let axis_len = spec.axis_length();
    let colors: Vec<Color> = (0..axis_len).map(|p| ramp.sample(p as f64)).collect();

    let mut buffer = TextureBuffer::new(spec.width, spec.height, Color::black());
    for y in 0..spec.height {
        for x in 0..spec.width {
            let p = match spec.axis {
                GradientAxis::Horizontal => x,
                GradientAxis::Vertical => y,
            };
            buffer.set(x, y, colors[p as usize]);
        }
    }

    log::debug!(
        "generated {}x{} gradient ({} anchors, {:?})",
        spec.width,
        spec.height,
        spec.anchors.len(),
        spec.color_space
    );
    Ok(buffer)
}

//! Gradient ramp recipe types.
//!
//! `texture.gradient_v1` describes a 1D color ramp built from ordered color
//! anchors and broadcast across the perpendicular axis of a 2D texture.

use serde::{Deserialize, Serialize};

/// Parameters for the `texture.gradient_v1` recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientSpec {
    /// Color anchors, in any order.
    pub anchors: Vec<Anchor>,
    /// Axis the ramp runs along.
    #[serde(default)]
    pub axis: GradientAxis,
    /// How anchor positions are interpreted.
    #[serde(default)]
    pub position_mode: PositionMode,
    /// Color space used to interpolate between anchors.
    #[serde(default)]
    pub color_space: ColorSpace,
    /// Texture width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Texture height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

pub(crate) fn default_width() -> u32 {
    1024
}

pub(crate) fn default_height() -> u32 {
    4
}

impl GradientSpec {
    /// Creates a horizontal, percent-mode, RGB gradient with no anchors.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            anchors: Vec::new(),
            axis: GradientAxis::default(),
            position_mode: PositionMode::default(),
            color_space: ColorSpace::default(),
            width,
            height,
        }
    }

    /// Appends an anchor.
    pub fn with_anchor(mut self, position: f64, color: [f64; 4]) -> Self {
        self.anchors.push(Anchor { position, color });
        self
    }

    /// Sets the ramp axis.
    pub fn with_axis(mut self, axis: GradientAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the anchor position mode.
    pub fn with_position_mode(mut self, mode: PositionMode) -> Self {
        self.position_mode = mode;
        self
    }

    /// Sets the interpolation color space.
    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    /// Length in pixels of the axis the ramp runs along.
    pub fn axis_length(&self) -> u32 {
        match self.axis {
            GradientAxis::Horizontal => self.width,
            GradientAxis::Vertical => self.height,
        }
    }

    /// Index of the last pixel on the ramp axis.
    pub fn axis_extent(&self) -> f64 {
        self.axis_length().saturating_sub(1) as f64
    }

    /// Maps an anchor position to a pixel coordinate on the ramp axis.
    ///
    /// Percent positions scale to the last pixel index and round to the
    /// nearest pixel (ties to even). Pixel positions are used as-is. On a
    /// vertical axis the position is mirrored so that position 0 lands on the
    /// far end and 1.0 (or pixel 0 mirrored) lands on row 0.
    ///
    /// Vertical pixel positions mirror about the last pixel index,
    /// `(axis_length - 1) - position`, not about `axis_length`. Pixel 0 then
    /// lands on the top row, matching percent 0.0; mirroring about
    /// `axis_length` would push it one row past the image.
    pub fn normalized_position(&self, position: f64) -> f64 {
        let extent = self.axis_extent();
        let vertical = self.axis == GradientAxis::Vertical;
        match self.position_mode {
            PositionMode::Percent => {
                let t = if vertical { 1.0 - position } else { position };
                (t * extent).round_ties_even()
            }
            PositionMode::Pixel => {
                if vertical {
                    extent - position
                } else {
                    position
                }
            }
        }
    }
}

/// A gradient control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Anchor {
    /// Fraction in [0, 1] (percent mode) or absolute pixel offset (pixel mode).
    pub position: f64,
    /// RGBA color, nominally 0.0-1.0 per channel.
    pub color: [f64; 4],
}

/// Gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientAxis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Anchor position interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionMode {
    /// Normalized fraction of the axis.
    #[default]
    Percent,
    /// Absolute pixel offset along the axis.
    Pixel,
}

/// Color space used for anchor interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Per-channel linear interpolation.
    #[default]
    Rgb,
    /// Shortest-arc hue interpolation.
    Hsv,
    /// Interpolation in the linearized XYZ-style triplet.
    Hcl,
}

//! Spec validation.
//!
//! Every generation precondition is checked here and reported as a coded
//! [`ValidationError`]. Conditions that still produce a well-defined texture
//! but are probably unintended are reported as [`ValidationWarning`]s.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::recipe::{GradientSpec, NoiseKind, NoiseSize, NoiseSpec, PositionMode, Recipe, MAX_CHANNELS};
use crate::spec::{DynamicRange, TextureSpec, SPEC_VERSION};

const ASSET_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

static ASSET_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn asset_id_regex() -> &'static Regex {
    ASSET_ID_REGEX.get_or_init(|| Regex::new(ASSET_ID_PATTERN).expect("invalid regex pattern"))
}

/// Checks if an asset_id matches `^[a-z][a-z0-9_-]{2,63}$`.
pub fn is_valid_asset_id(asset_id: &str) -> bool {
    asset_id_regex().is_match(asset_id)
}

/// Validates a full spec document.
pub fn validate_spec(spec: &TextureSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    if spec.spec_version != SPEC_VERSION {
        result.error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }

    if !is_valid_asset_id(&spec.asset_id) {
        result.error(ValidationError::with_path(
            ErrorCode::InvalidAssetId,
            format!(
                "asset_id '{}' must match {}",
                spec.asset_id, ASSET_ID_PATTERN
            ),
            "asset_id",
        ));
    }

    match &spec.recipe {
        Recipe::Gradient(gradient) => {
            let mut inner = validate_gradient(gradient);
            if spec.dynamic_range == DynamicRange::Ldr {
                warn_hdr_anchor_colors(gradient, &mut inner);
            }
            result.merge_prefixed(inner, "recipe.params");
        }
        Recipe::Noise(noise) => {
            result.merge_prefixed(validate_noise(noise), "recipe.params");
        }
    }

    result
}

/// Parses a spec document from JSON and validates it.
///
/// Unknown noise kinds are reported as `E104` rather than as a bare JSON
/// error so callers see the same taxonomy for every precondition.
pub fn parse_and_validate(json: &str) -> Result<(TextureSpec, Vec<ValidationWarning>), SpecError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if let Some(error) = check_noise_kind(&value) {
        return Err(SpecError::ValidationFailed(vec![error]));
    }

    let spec: TextureSpec = serde_json::from_value(value)?;
    let warnings = validate_spec(&spec).into_result()?;
    Ok((spec, warnings))
}

fn check_noise_kind(value: &serde_json::Value) -> Option<ValidationError> {
    let recipe = value.get("recipe")?;
    if recipe.get("kind")?.as_str()? != "texture.noise_v1" {
        return None;
    }
    let kind = recipe.get("params")?.get("noise")?.as_str()?;
    match kind.parse::<NoiseKind>() {
        Ok(_) => None,
        Err(message) => Some(ValidationError::with_path(
            ErrorCode::UnsupportedNoiseKind,
            format!(
                "{} (expected one of: {})",
                message,
                NoiseKind::all()
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            "recipe.params.noise",
        )),
    }
}

fn check_dimensions(result: &mut ValidationResult, dims: &[(&str, u32)]) {
    for (name, value) in dims {
        if *value == 0 {
            result.error(ValidationError::with_path(
                ErrorCode::InvalidDimensions,
                format!("{} must be at least 1, got 0", name),
                *name,
            ));
        }
    }
}

fn check_finite(result: &mut ValidationResult, values: &[f64], path: &str) {
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() {
            result.error(ValidationError::with_path(
                ErrorCode::NonFiniteValue,
                format!("value must be finite, got {}", v),
                format!("{}[{}]", path, i),
            ));
        }
    }
}

/// Validates gradient parameters.
pub fn validate_gradient(spec: &GradientSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    check_dimensions(&mut result, &[("width", spec.width), ("height", spec.height)]);
    if (spec.width as usize)
        .checked_mul(spec.height as usize)
        .is_none()
    {
        result.error(ValidationError::with_path(
            ErrorCode::InvalidDimensions,
            format!("resolution {}x{} is too large", spec.width, spec.height),
            "width",
        ));
    }

    if spec.anchors.is_empty() {
        result.error(ValidationError::with_path(
            ErrorCode::EmptyAnchors,
            "gradient requires at least one anchor",
            "anchors",
        ));
        return result;
    }

    let extent = spec.axis_extent();
    for (i, anchor) in spec.anchors.iter().enumerate() {
        let path = format!("anchors[{}]", i);

        if !anchor.position.is_finite() {
            result.error(ValidationError::with_path(
                ErrorCode::NonFiniteValue,
                format!("position must be finite, got {}", anchor.position),
                format!("{}.position", path),
            ));
            continue;
        }
        check_finite(&mut result, &anchor.color, &format!("{}.color", path));

        match spec.position_mode {
            PositionMode::Percent => {
                if !(0.0..=1.0).contains(&anchor.position) {
                    result.error(ValidationError::with_path(
                        ErrorCode::AnchorOutOfRange,
                        format!(
                            "percent position must be in [0, 1], got {}",
                            anchor.position
                        ),
                        format!("{}.position", path),
                    ));
                }
            }
            PositionMode::Pixel => {
                if anchor.position < 0.0 || anchor.position > extent {
                    result.warn(ValidationWarning::with_path(
                        WarningCode::AnchorOutsideAxis,
                        format!(
                            "pixel position {} lies outside the axis [0, {}]",
                            anchor.position, extent
                        ),
                        format!("{}.position", path),
                    ));
                }
            }
        }
    }

    if result.is_ok() {
        warn_duplicate_positions(spec, &mut result);
    }

    result
}

fn warn_duplicate_positions(spec: &GradientSpec, result: &mut ValidationResult) {
    let positions: Vec<f64> = spec
        .anchors
        .iter()
        .map(|a| spec.normalized_position(a.position))
        .collect();

    for i in 1..positions.len() {
        if let Some(first) = positions[..i].iter().position(|p| *p == positions[i]) {
            result.warn(ValidationWarning::with_path(
                WarningCode::DuplicateAnchorPositions,
                format!(
                    "anchor lands on pixel {} like anchors[{}]; the earlier anchor wins the tie",
                    positions[i], first
                ),
                format!("anchors[{}].position", i),
            ));
        }
    }
}

fn warn_hdr_anchor_colors(spec: &GradientSpec, result: &mut ValidationResult) {
    for (i, anchor) in spec.anchors.iter().enumerate() {
        if anchor.color.iter().any(|c| *c > 1.0) {
            result.warn(ValidationWarning::with_path(
                WarningCode::HdrColorInLdrOutput,
                "color exceeds 1.0 and will be clamped by a standard-range encoder",
                format!("anchors[{}].color", i),
            ));
        }
    }
}

/// Validates noise parameters.
pub fn validate_noise(spec: &NoiseSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    let (w, h, d) = spec.size.extent();
    match spec.size {
        NoiseSize::Planar(_) => check_dimensions(&mut result, &[("size[0]", w), ("size[1]", h)]),
        NoiseSize::Volume(_) => check_dimensions(
            &mut result,
            &[("size[0]", w), ("size[1]", h), ("size[2]", d)],
        ),
    }
    if spec.size.sample_count().is_none() {
        result.error(ValidationError::with_path(
            ErrorCode::InvalidDimensions,
            "size is too large",
            "size",
        ));
    }

    if spec.channels == 0 || spec.channels > MAX_CHANNELS {
        result.error(ValidationError::with_path(
            ErrorCode::ChannelCountOutOfRange,
            format!(
                "channels must be in 1..={}, got {}",
                MAX_CHANNELS, spec.channels
            ),
            "channels",
        ));
    }

    check_finite(&mut result, &spec.scale, "scale");
    check_finite(&mut result, &spec.offset, "offset");

    if spec.wrap && matches!(spec.size, NoiseSize::Volume(_)) {
        result.error(ValidationError::with_path(
            ErrorCode::WrapRequires2D,
            "seamless wrapping is only defined for 2D noise",
            "wrap",
        ));
    }

    let active = spec.channels.min(MAX_CHANNELS) as usize;
    for (c, scale) in spec.scale.iter().enumerate().take(active) {
        if *scale == 0.0 && spec.noise != NoiseKind::Random {
            result.warn(ValidationWarning::with_path(
                WarningCode::ZeroScale,
                "zero scale produces a constant channel",
                format!("scale[{}]", c),
            ));
        }
    }

    result
}

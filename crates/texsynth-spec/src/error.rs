//! Error types for spec validation and processing.

use thiserror::Error;

/// Error codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E101: Gradient has no anchors
    EmptyAnchors,
    /// E102: Zero or overflowing dimensions
    InvalidDimensions,
    /// E103: Noise channel count outside 1..=4
    ChannelCountOutOfRange,
    /// E104: Unknown noise kind
    UnsupportedNoiseKind,
    /// E105: NaN or infinite parameter
    NonFiniteValue,
    /// E106: Percent-mode anchor outside [0, 1]
    AnchorOutOfRange,
    /// E107: Seamless wrapping requested for a 3D volume
    WrapRequires2D,
    /// E108: Unsupported spec_version
    UnsupportedSpecVersion,
    /// E109: Invalid asset_id format
    InvalidAssetId,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E101").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyAnchors => "E101",
            ErrorCode::InvalidDimensions => "E102",
            ErrorCode::ChannelCountOutOfRange => "E103",
            ErrorCode::UnsupportedNoiseKind => "E104",
            ErrorCode::NonFiniteValue => "E105",
            ErrorCode::AnchorOutOfRange => "E106",
            ErrorCode::WrapRequires2D => "E107",
            ErrorCode::UnsupportedSpecVersion => "E108",
            ErrorCode::InvalidAssetId => "E109",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W101: Two anchors land on the same pixel
    DuplicateAnchorPositions,
    /// W102: Pixel-mode anchor lies outside the axis
    AnchorOutsideAxis,
    /// W103: Active noise channel with zero scale
    ZeroScale,
    /// W104: Anchor color exceeds 1.0 but output is standard range
    HdrColorInLdrOutput,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W101").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::DuplicateAnchorPositions => "W101",
            WarningCode::AnchorOutsideAxis => "W102",
            WarningCode::ZeroScale => "W103",
            WarningCode::HdrColorInLdrOutput => "W104",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "anchors\[2\].position").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Spec validation failed with one or more errors.
    #[error("spec validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of spec validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Whether validation passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records an error.
    pub fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records a warning.
    pub fn warn(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Appends another result, prefixing its paths.
    pub fn merge_prefixed(&mut self, other: ValidationResult, prefix: &str) {
        let join = |path: Option<String>| match path {
            Some(p) => Some(format!("{}.{}", prefix, p)),
            None => Some(prefix.to_string()),
        };
        for mut e in other.errors {
            e.path = join(e.path.take());
            self.errors.push(e);
        }
        for mut w in other.warnings {
            w.path = join(w.path.take());
            self.warnings.push(w);
        }
    }

    /// Converts into a `Result`, failing if any error was recorded.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, SpecError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(SpecError::ValidationFailed(self.errors))
        }
    }
}

//! Errors reported while reading a color request.

use serde::{Serialize, Serializer};

/// The supported color format tags as listed in error messages.
pub(crate) const SUPPORTED_FORMATS: &str = "hex, rgb, rgba, hsl, hsla, hsv, hsva, cmyk, lab, hwb, lch";

/// The supported image formats as listed in error messages.
pub(crate) const SUPPORTED_EXTENSIONS: &str = "png, jpeg, svg";

/// The kind of problem a [`RequestError`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The color format tag is missing or unknown.
    Format,
    /// The color value is missing or can not be read.
    Value,
    /// The size is malformed or not positive.
    Size,
    /// The download flag is not a boolean literal.
    Flag,
    /// The image format is unknown.
    Extension,
}

/// A problem found in a single field of a request. The display text is meant
/// to be shown to the user as is.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RequestError {
    /// The `format` parameter is not one of the supported tags.
    #[error("Invalid format: {0}. Supported formats: {formats}", formats = SUPPORTED_FORMATS)]
    InvalidFormat(String),

    /// A `formatValue` was given without a `format`.
    #[error("`format` parameter is missing. Supported formats: {formats}", formats = SUPPORTED_FORMATS)]
    MissingFormat,

    /// A valid `format` was given without a `formatValue`.
    #[error("`formatValue` parameter is required.")]
    MissingFormatValue,

    /// The request is active but names no color at all.
    #[error("`format` and `formatValue` parameters are required.")]
    MissingColor,

    /// Fewer numeric values than the format needs.
    #[error("Expected {expected} value(s) but could not parse them from: {input}")]
    TooFewValues {
        /// Number of values the format needs.
        expected: usize,
        /// The raw value as supplied.
        input: String,
    },

    /// A numeric value could not be read.
    #[error("Invalid numeric value in: {0}")]
    InvalidNumber(String),

    /// The parsed values could not be converted to a color.
    #[error("An error occurred while converting the color.")]
    Conversion,

    /// The size does not look like `<width>x<height>`.
    #[error("`size` parameter must follow the `widthxheight` pattern.")]
    SizePattern,

    /// The width or height is zero.
    #[error("`size` parameter must contain positive numbers.")]
    SizeNotPositive,

    /// The width or height does not fit in 32 bits.
    #[error("`size` parameter must not exceed {max} in either dimension.", max = u32::MAX)]
    SizeTooLarge,

    /// The download flag is not one of `true/false/1/0/yes/no`.
    #[error("`download` parameter must be true or false.")]
    InvalidDownload,

    /// The image format is unknown.
    #[error("Invalid extension: {0}. Supported values: {extensions}.", extensions = SUPPORTED_EXTENSIONS)]
    InvalidExtension(String),
}

impl RequestError {
    /// The kind of problem this error describes.
    pub fn kind(&self) -> ErrorKind {
        use RequestError::*;

        match self {
            InvalidFormat(_) | MissingFormat => ErrorKind::Format,
            MissingFormatValue | MissingColor | TooFewValues { .. } | InvalidNumber(_)
            | Conversion => ErrorKind::Value,
            SizePattern | SizeNotPositive | SizeTooLarge => ErrorKind::Size,
            InvalidDownload => ErrorKind::Flag,
            InvalidExtension(_) => ErrorKind::Extension,
        }
    }
}

impl Serialize for RequestError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An error raised when assembling an [`ExportRequest`](crate::ExportRequest).
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ExportError {
    /// There is no color to export.
    #[error("No color to export")]
    MissingColor,

    /// Width or height is zero.
    #[error("Invalid size {0}x{1}, both dimensions must be positive")]
    InvalidSize(u32, u32),

    /// The quality is outside of (0, 1].
    #[error("Invalid quality {0}, expected a value in (0, 1]")]
    InvalidQuality(f64),
}

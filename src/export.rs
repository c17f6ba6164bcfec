//! Image export requests and their defaults.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    color::{Color, Component},
    error::{ExportError, RequestError},
};

/// The image formats a color can be exported as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless raster image.
    #[default]
    Png,
    /// Lossy raster image, encoded with a quality setting.
    Jpeg,
    /// Vector image.
    Svg,
}

impl ImageFormat {
    /// The file extension, also used as the tag in requests.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Svg => "svg",
        }
    }

    /// The MIME type of the encoded image.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Svg => "image/svg+xml",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(RequestError::InvalidExtension(s.to_owned())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Dimensions of an exported image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

static SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\s*x\s*([0-9]+)$").expect("size pattern is valid"));

impl FromStr for Size {
    type Err = RequestError;

    /// Parse `<width>x<height>`, e.g. `1280x720` or `1280 X 720`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let captures = SIZE_PATTERN
            .captures(&normalized)
            .ok_or(RequestError::SizePattern)?;

        let dimension = |i: usize| -> Result<u32, RequestError> {
            let digits = captures.get(i).map_or("", |m| m.as_str());
            // The pattern only admits digits, so a failure means overflow.
            let value = digits
                .parse::<u32>()
                .map_err(|_| RequestError::SizeTooLarge)?;
            if value == 0 {
                return Err(RequestError::SizeNotPositive);
            }
            Ok(value)
        };

        let width = dimension(1);
        let height = dimension(2);

        // A zero dimension is reported before an oversized one.
        match (width, height) {
            (Ok(width), Ok(height)) => Ok(Size::new(width, height)),
            (Err(RequestError::SizeNotPositive), _) | (_, Err(RequestError::SizeNotPositive)) => {
                Err(RequestError::SizeNotPositive)
            }
            (Err(err), _) | (_, Err(err)) => Err(err),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Named sizes offered alongside a custom size.
pub const SIZE_PRESETS: &[(&str, Size)] = &[
    ("Instagram Post", Size::new(1080, 1080)),
    ("Instagram Story", Size::new(1080, 1920)),
    ("Facebook Post", Size::new(1200, 630)),
    ("Twitter Header", Size::new(1500, 500)),
    ("LinkedIn Banner", Size::new(1584, 396)),
    ("YouTube Thumbnail", Size::new(1280, 720)),
    ("Desktop Wallpaper", Size::new(1920, 1080)),
    ("Mobile Wallpaper", Size::new(1080, 1920)),
    ("Square Small", Size::new(512, 512)),
    ("Square Medium", Size::new(1024, 1024)),
    ("Square Large", Size::new(2048, 2048)),
];

/// Return the label of the first preset with the given size.
pub fn preset_for(size: Size) -> Option<&'static str> {
    SIZE_PRESETS
        .iter()
        .find(|(_, preset)| *preset == size)
        .map(|(label, _)| *label)
}

/// Defaults used when a request leaves a field out. Every field is optional
/// when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDefaults {
    /// Width used when no size is requested.
    pub width: u32,
    /// Height used when no size is requested.
    pub height: u32,
    /// Image format used when no extension is requested.
    pub format: ImageFormat,
    /// Quality used for JPEG exports.
    pub quality: Component,
}

impl ExportDefaults {
    /// The default size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check that the defaults describe a valid export.
    pub fn validate(&self) -> Result<(), ExportError> {
        validate(self.size(), Some(self.quality))
    }
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            format: ImageFormat::Png,
            quality: 0.9,
        }
    }
}

fn validate(size: Size, quality: Option<Component>) -> Result<(), ExportError> {
    if size.width == 0 || size.height == 0 {
        return Err(ExportError::InvalidSize(size.width, size.height));
    }

    match quality {
        Some(q) if !(q > 0.0 && q <= 1.0) => Err(ExportError::InvalidQuality(q)),
        _ => Ok(()),
    }
}

/// A fully resolved request to render a color as an image. Every field is
/// guaranteed to be in range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExportRequest {
    color: Color,
    width: u32,
    height: u32,
    #[serde(rename = "imageFormat")]
    format: ImageFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<Component>,
}

impl ExportRequest {
    /// Create a new export request. `quality` is only kept for JPEG.
    pub fn new(
        color: Color,
        size: Size,
        format: ImageFormat,
        quality: Option<Component>,
    ) -> Result<Self, ExportError> {
        let quality = quality.filter(|_| format == ImageFormat::Jpeg);
        validate(size, quality)?;

        Ok(Self {
            color,
            width: size.width,
            height: size.height,
            format,
            quality,
        })
    }

    /// The color to fill the image with.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The image format to encode.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encoding quality in (0, 1], only present for JPEG.
    pub fn quality(&self) -> Option<Component> {
        self.quality
    }

    /// The file name for an export created at `timestamp`.
    pub fn file_name(&self, timestamp: u128) -> String {
        format!("color-{timestamp}.{}", self.format.extension())
    }

    /// Render the request as an SVG document filled with the color.
    pub fn svg_document(&self) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" />\n",
                "</svg>"
            ),
            self.width,
            self.height,
            self.color.to_css_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_format_aliases() {
        assert_eq!("JPG".parse::<ImageFormat>(), Ok(ImageFormat::Jpeg));
        assert_eq!(" jpeg ".parse::<ImageFormat>(), Ok(ImageFormat::Jpeg));
        assert_eq!("Svg".parse::<ImageFormat>(), Ok(ImageFormat::Svg));
        assert_eq!(
            "gif".parse::<ImageFormat>(),
            Err(RequestError::InvalidExtension("gif".into()))
        );
    }

    #[test]
    fn size_parsing() {
        assert_eq!("1280x720".parse::<Size>(), Ok(Size::new(1280, 720)));
        assert_eq!(" 640 X 480 ".parse::<Size>(), Ok(Size::new(640, 480)));
        assert_eq!("abc".parse::<Size>(), Err(RequestError::SizePattern));
        assert_eq!("-1x5".parse::<Size>(), Err(RequestError::SizePattern));
        assert_eq!("1.5x5".parse::<Size>(), Err(RequestError::SizePattern));
        assert_eq!("0x5".parse::<Size>(), Err(RequestError::SizeNotPositive));
        assert_eq!(
            "99999999999x0".parse::<Size>(),
            Err(RequestError::SizeNotPositive)
        );
        assert_eq!(
            "99999999999x5".parse::<Size>(),
            Err(RequestError::SizeTooLarge)
        );
    }

    #[test]
    fn presets() {
        assert_eq!(preset_for(Size::new(512, 512)), Some("Square Small"));
        assert_eq!(preset_for(Size::new(1080, 1920)), Some("Instagram Story"));
        assert_eq!(preset_for(Size::new(3, 4)), None);
    }

    #[test]
    fn quality_is_only_kept_for_jpeg() {
        let color = Color::opaque(1, 2, 3);
        let size = Size::new(10, 20);

        let png = ExportRequest::new(color, size, ImageFormat::Png, Some(0.9)).unwrap();
        assert_eq!(png.quality(), None);

        let jpeg = ExportRequest::new(color, size, ImageFormat::Jpeg, Some(0.9)).unwrap();
        assert_eq!(jpeg.quality(), Some(0.9));
    }

    #[test]
    fn invalid_requests_are_rejected() {
        let color = Color::BLACK;
        assert_eq!(
            ExportRequest::new(color, Size::new(0, 1), ImageFormat::Png, None),
            Err(ExportError::InvalidSize(0, 1))
        );
        assert_eq!(
            ExportRequest::new(color, Size::new(1, 1), ImageFormat::Jpeg, Some(0.0)),
            Err(ExportError::InvalidQuality(0.0))
        );
        assert_eq!(
            ExportRequest::new(color, Size::new(1, 1), ImageFormat::Jpeg, Some(1.5)),
            Err(ExportError::InvalidQuality(1.5))
        );
    }

    #[test]
    fn defaults() {
        let defaults = ExportDefaults::default();
        assert_eq!(defaults.size(), Size::new(512, 512));
        assert_eq!(defaults.format, ImageFormat::Png);
        assert_eq!(defaults.quality, 0.9);
        assert!(defaults.validate().is_ok());

        let loaded: ExportDefaults = serde_json::from_str(r#"{"width": 64, "format": "svg"}"#).unwrap();
        assert_eq!(loaded.size(), Size::new(64, 512));
        assert_eq!(loaded.format, ImageFormat::Svg);

        let broken: ExportDefaults = serde_json::from_str(r#"{"quality": 2}"#).unwrap();
        assert_eq!(broken.validate(), Err(ExportError::InvalidQuality(2.0)));
    }

    #[test]
    fn svg_document() {
        let request = ExportRequest::new(
            Color::new(255, 87, 34, 0.5),
            Size::new(64, 32),
            ImageFormat::Svg,
            None,
        )
        .unwrap();

        assert_eq!(
            request.svg_document(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg width=\"64\" height=\"32\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
             <rect width=\"100%\" height=\"100%\" fill=\"rgba(255, 87, 34, 0.5)\" />\n\
             </svg>"
        );
        assert_eq!(request.file_name(7), "color-7.svg");
    }
}

//! Links that reproduce a color and its export settings.

use serde::Serialize;

use crate::{
    color::Color,
    export::{ImageFormat, Size},
    format::{Format, FormatValue},
};

/// Everything needed to rebuild a request from a URL.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShareLink {
    /// The format the color is written in.
    pub format: Format,
    /// The color to share.
    pub color: Color,
    /// The export size.
    pub size: Size,
    /// Set when opening the link should download the image.
    pub download: bool,
    /// The export image format.
    pub extension: ImageFormat,
}

impl ShareLink {
    /// The `formatValue` written into the link. Hex is upper case and RGBA
    /// always carries its alpha, even when opaque.
    pub fn format_value(&self) -> String {
        match self.color.to_format(self.format) {
            FormatValue::Hex(hex) => hex.to_uppercase(),
            FormatValue::Rgba(c) => format!("rgba({}, {}, {}, {})", c.red, c.green, c.blue, c.alpha),
            value => value.to_string(),
        }
    }

    /// Encode the link as a query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("format", self.format.as_str())
            .append_pair("formatValue", &self.format_value())
            .append_pair("size", &self.size.to_string())
            .append_pair("download", if self.download { "true" } else { "false" })
            .append_pair("extension", self.extension.extension())
            .finish()
    }

    /// Append the query to `base`. An empty base gives a relative link.
    pub fn to_url(&self, base: &str) -> String {
        format!("{base}?{}", self.to_query())
    }
}

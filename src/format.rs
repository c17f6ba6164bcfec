//! The eleven textual color formats and their values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    error::RequestError,
    models::{Cmyk, Hsla, Hsva, Hwb, Lab, Lch},
};

/// A textual color format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Format {
    /// `#rrggbb`
    Hex = 0,
    /// `rgb(r, g, b)`
    Rgb = 1,
    /// `rgba(r, g, b, a)`
    Rgba = 2,
    /// `hsl(h, s%, l%)`
    Hsl = 3,
    /// `hsla(h, s%, l%, a)`
    Hsla = 4,
    /// `hsv(h, s%, v%)`
    Hsv = 5,
    /// `hsva(h, s%, v%, a)`
    Hsva = 6,
    /// `cmyk(c%, m%, y%, k%)`
    Cmyk = 7,
    /// `lab(l, a, b)`
    Lab = 8,
    /// `hwb(h, w%, b%)`
    Hwb = 9,
    /// `lch(l, c, h)`
    Lch = 10,
}

impl Format {
    /// Every format, in the order they are listed to users.
    pub const ALL: [Format; 11] = [
        Format::Hex,
        Format::Rgb,
        Format::Rgba,
        Format::Hsl,
        Format::Hsla,
        Format::Hsv,
        Format::Hsva,
        Format::Cmyk,
        Format::Lab,
        Format::Hwb,
        Format::Lch,
    ];

    /// The lowercase tag of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
            Format::Hsv => "hsv",
            Format::Hsva => "hsva",
            Format::Cmyk => "cmyk",
            Format::Lab => "lab",
            Format::Hwb => "hwb",
            Format::Lch => "lch",
        }
    }

    /// Returns true if values in this format are written with an alpha
    /// component.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Format::Rgba | Format::Hsla | Format::Hsva)
    }

    /// The number of numeric components a value in this format is written
    /// with, or `None` for hex which is not numeric.
    pub fn component_count(&self) -> Option<usize> {
        match self {
            Format::Hex => None,
            Format::Cmyk => Some(4),
            f if f.has_alpha() => Some(4),
            _ => Some(3),
        }
    }
}

impl FromStr for Format {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| RequestError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color value written in one of the [`Format`]s, carrying the components
/// of that format.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatValue {
    /// A hex string, with or without the leading `#`.
    Hex(String),
    /// An opaque RGB color.
    Rgb(Color),
    /// An RGB color with alpha.
    Rgba(Color),
    /// An HSL color; alpha is not written.
    Hsl(Hsla),
    /// An HSL color with alpha.
    Hsla(Hsla),
    /// An HSV color; alpha is not written.
    Hsv(Hsva),
    /// An HSV color with alpha.
    Hsva(Hsva),
    /// A CMYK color.
    Cmyk(Cmyk),
    /// A CIE-Lab color.
    Lab(Lab),
    /// An HWB color.
    Hwb(Hwb),
    /// A CIE-Lch color.
    Lch(Lch),
}

impl FormatValue {
    /// The format this value is written in.
    pub fn format(&self) -> Format {
        match self {
            FormatValue::Hex(_) => Format::Hex,
            FormatValue::Rgb(_) => Format::Rgb,
            FormatValue::Rgba(_) => Format::Rgba,
            FormatValue::Hsl(_) => Format::Hsl,
            FormatValue::Hsla(_) => Format::Hsla,
            FormatValue::Hsv(_) => Format::Hsv,
            FormatValue::Hsva(_) => Format::Hsva,
            FormatValue::Cmyk(_) => Format::Cmyk,
            FormatValue::Lab(_) => Format::Lab,
            FormatValue::Hwb(_) => Format::Hwb,
            FormatValue::Lch(_) => Format::Lch,
        }
    }

    /// Convert the value to a canonical [`Color`]. Formats without alpha
    /// produce opaque colors.
    pub fn to_color(&self) -> Color {
        match self {
            FormatValue::Hex(hex) => Color::from_hex(hex, 1.0),
            FormatValue::Rgb(color) => Color { alpha: 1.0, ..*color },
            FormatValue::Rgba(color) => *color,
            FormatValue::Hsl(hsla) => Color::from_hsla(&Hsla { alpha: 1.0, ..*hsla }),
            FormatValue::Hsla(hsla) => Color::from_hsla(hsla),
            FormatValue::Hsv(hsva) => Color::from_hsva(&Hsva { alpha: 1.0, ..*hsva }),
            FormatValue::Hsva(hsva) => Color::from_hsva(hsva),
            FormatValue::Cmyk(cmyk) => Color::from_cmyk(cmyk, 1.0),
            FormatValue::Lab(lab) => Color::from_lab(lab, 1.0),
            FormatValue::Hwb(hwb) => Color::from_hwb(hwb, 1.0),
            FormatValue::Lch(lch) => Color::from_lch(lch, 1.0),
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Hex(hex) => f.write_str(hex),
            FormatValue::Rgb(c) => write!(f, "rgb({}, {}, {})", c.red, c.green, c.blue),
            FormatValue::Rgba(c) => f.write_str(&c.to_css_string()),
            FormatValue::Hsl(c) => write!(f, "hsl({}, {}%, {}%)", c.hue, c.saturation, c.lightness),
            FormatValue::Hsla(c) => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                c.hue, c.saturation, c.lightness, c.alpha
            ),
            FormatValue::Hsv(c) => write!(f, "hsv({}, {}%, {}%)", c.hue, c.saturation, c.value),
            FormatValue::Hsva(c) => write!(
                f,
                "hsva({}, {}%, {}%, {})",
                c.hue, c.saturation, c.value, c.alpha
            ),
            FormatValue::Cmyk(c) => write!(
                f,
                "cmyk({}%, {}%, {}%, {}%)",
                c.cyan, c.magenta, c.yellow, c.key
            ),
            FormatValue::Lab(c) => write!(f, "lab({}, {}, {})", c.lightness, c.a, c.b),
            FormatValue::Hwb(c) => write!(f, "hwb({}, {}%, {}%)", c.hue, c.whiteness, c.blackness),
            FormatValue::Lch(c) => write!(f, "lch({}, {}, {})", c.lightness, c.chroma, c.hue),
        }
    }
}

impl Color {
    /// Return this color as a value in the given format.
    pub fn to_format(&self, format: Format) -> FormatValue {
        match format {
            Format::Hex => FormatValue::Hex(self.to_hex()),
            Format::Rgb => FormatValue::Rgb(*self),
            Format::Rgba => FormatValue::Rgba(*self),
            Format::Hsl => FormatValue::Hsl(self.to_hsla()),
            Format::Hsla => FormatValue::Hsla(self.to_hsla()),
            Format::Hsv => FormatValue::Hsv(self.to_hsva()),
            Format::Hsva => FormatValue::Hsva(self.to_hsva()),
            Format::Cmyk => FormatValue::Cmyk(self.to_cmyk()),
            Format::Lab => FormatValue::Lab(self.to_lab()),
            Format::Hwb => FormatValue::Hwb(self.to_hwb()),
            Format::Lch => FormatValue::Lch(self.to_lch()),
        }
    }

    /// Format this color as a human readable string in the given format.
    pub fn format_string(&self, format: Format) -> String {
        self.to_format(format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" HSLA ".parse::<Format>(), Ok(Format::Hsla));
        assert_eq!("Lch".parse::<Format>(), Ok(Format::Lch));
        assert_eq!(
            "bogus".parse::<Format>(),
            Err(RequestError::InvalidFormat("bogus".into()))
        );
    }

    #[test]
    fn tags_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn component_counts() {
        assert_eq!(Format::Hex.component_count(), None);
        assert_eq!(Format::Rgb.component_count(), Some(3));
        assert_eq!(Format::Rgba.component_count(), Some(4));
        assert_eq!(Format::Hsva.component_count(), Some(4));
        assert_eq!(Format::Cmyk.component_count(), Some(4));
        assert_eq!(Format::Lch.component_count(), Some(3));
    }

    #[test]
    fn format_strings() {
        let c = Color::opaque(255, 87, 34);
        let expected = [
            (Format::Hex, "#ff5722"),
            (Format::Rgb, "rgb(255, 87, 34)"),
            (Format::Rgba, "rgb(255, 87, 34)"),
            (Format::Hsl, "hsl(14, 100%, 57%)"),
            (Format::Hsla, "hsla(14, 100%, 57%, 1)"),
            (Format::Hsv, "hsv(14, 87%, 100%)"),
            (Format::Hsva, "hsva(14, 87%, 100%, 1)"),
            (Format::Cmyk, "cmyk(0%, 66%, 87%, 0%)"),
            (Format::Lab, "lab(60, 62, 62)"),
            (Format::Hwb, "hwb(14, 13%, 0%)"),
            (Format::Lch, "lch(60, 88, 45)"),
        ];
        for (format, s) in expected {
            assert_eq!(c.format_string(format), s, "{format}");
        }

        let translucent = Color::new(255, 87, 34, 0.5);
        assert_eq!(translucent.format_string(Format::Rgba), "rgba(255, 87, 34, 0.5)");
        assert_eq!(translucent.format_string(Format::Rgb), "rgb(255, 87, 34)");
        assert_eq!(translucent.format_string(Format::Hsl), "hsl(14, 100%, 57%)");
    }

    #[test]
    fn values_know_their_format() {
        let c = Color::new(51, 102, 153, 0.25);
        for format in Format::ALL {
            assert_eq!(c.to_format(format).format(), format);
        }
    }

    #[test]
    fn formats_without_alpha_are_opaque() {
        let c = Color::new(51, 102, 153, 0.25);
        assert_eq!(c.to_format(Format::Rgb).to_color(), Color::opaque(51, 102, 153));
        assert_eq!(c.to_format(Format::Rgba).to_color(), c);
        assert_eq!(c.to_format(Format::Hsl).to_color().alpha, 1.0);
        assert_eq!(c.to_format(Format::Hsla).to_color().alpha, 0.25);
        assert_eq!(c.to_format(Format::Lab).to_color().alpha, 1.0);
    }
}

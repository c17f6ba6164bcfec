//! Reading color and export requests from flat string parameters.
//!
//! Parsing never stops at the first problem. Every field is validated on its
//! own and all failures are collected, so they can be shown to the user at
//! once next to a request filled in with defaults.

mod params;
mod tokens;

use serde::Serialize;

pub use params::{Keys, Params, QueryParams};

use crate::{
    color::{channel, Color, Component},
    error::{ExportError, RequestError},
    export::{ExportDefaults, ExportRequest, ImageFormat, Size},
    format::{Format, FormatValue},
    models::{Cmyk, Hsla, Hsva, Hwb, Lab, Lch},
};
use tokens::Token;

/// The outcome of parsing a set of request parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    /// Set when any recognized key is present.
    pub active: bool,
    /// The requested color, only set when the color was read without errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// The format the color was declared in.
    #[serde(rename = "declaredFormat", skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// The requested size, with defaults substituted.
    pub size: Size,
    /// Set when the image should be downloaded right away.
    pub download: bool,
    /// The requested image format.
    pub extension: ImageFormat,
    /// The quality used when exporting as JPEG.
    pub quality: Component,
    /// Every problem found, in the order the fields are checked.
    pub errors: Vec<RequestError>,
}

impl ParsedRequest {
    /// The user facing message of each error.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns true if no problems were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Build the export request for the parsed color.
    pub fn export_request(&self) -> Result<ExportRequest, ExportError> {
        let color = self.color.ok_or(ExportError::MissingColor)?;
        ExportRequest::new(color, self.size, self.extension, Some(self.quality))
    }

    /// Returns true if the request asks for an immediate download and is
    /// complete enough to honor it.
    pub fn should_download(&self) -> bool {
        self.active && self.download && self.color.is_some() && self.is_valid()
    }
}

/// Collects the errors of every stage without stopping.
#[derive(Default)]
struct Collector {
    errors: Vec<RequestError>,
}

impl Collector {
    fn check<T>(&mut self, key: &str, result: Result<T, RequestError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(key, err);
                None
            }
        }
    }

    fn push(&mut self, key: &str, err: RequestError) {
        log::debug!("rejected `{key}`: {err}");
        self.errors.push(err);
    }

    fn finish(self) -> Vec<RequestError> {
        self.errors
    }
}

/// Parse request parameters with the default [`ExportDefaults`].
pub fn parse_request(params: &impl Params) -> ParsedRequest {
    parse_request_with(params, &ExportDefaults::default())
}

/// Parse request parameters, filling in missing fields from `defaults`.
pub fn parse_request_with(params: &impl Params, defaults: &ExportDefaults) -> ParsedRequest {
    let active = !Keys::present_in(params).is_empty();
    let mut collector = Collector::default();

    // Empty values are treated as missing.
    let value = |key: &str| params.get(key).filter(|v| !v.is_empty());

    let extension = value("extension")
        .and_then(|raw| collector.check("extension", raw.parse::<ImageFormat>()))
        .unwrap_or(defaults.format);

    let download = value("download")
        .and_then(|raw| collector.check("download", parse_download(raw)))
        .unwrap_or(false);

    let size = value("size")
        .and_then(|raw| collector.check("size", raw.parse::<Size>()))
        .unwrap_or_else(|| defaults.size());

    let mut format = None;
    let mut color = None;

    let raw_format = value("format");
    let raw_value = value("formatValue");
    if raw_format.is_some() || raw_value.is_some() {
        let parsed = raw_format
            .ok_or(RequestError::MissingFormat)
            .and_then(str::parse::<Format>);

        if let Some(declared) = collector.check("format", parsed) {
            match raw_value {
                None => collector.push("formatValue", RequestError::MissingFormatValue),
                Some(raw) => {
                    format = Some(declared);
                    color = collector.check("formatValue", parse_color_value(declared, raw));
                }
            }
        }
    } else if active {
        collector.push("format", RequestError::MissingColor);
    }

    if let Some(color) = color {
        log::trace!("requested color {color} as {extension} at {size}");
    }

    ParsedRequest {
        active,
        color,
        format,
        size,
        download,
        extension,
        quality: defaults.quality,
        errors: collector.finish(),
    }
}

fn parse_download(raw: &str) -> Result<bool, RequestError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(RequestError::InvalidDownload),
    }
}

/// Read a `formatValue` written in `format` and convert it to a [`Color`].
///
/// Hex values may omit the `#`. All other formats are read as a list of
/// numbers, each clamped or wrapped into the range of its component. Extra
/// numbers are ignored.
pub fn parse_color_value(format: Format, value: &str) -> Result<Color, RequestError> {
    let value = match format.component_count() {
        None => {
            let hex = value.trim();
            if hex.starts_with('#') {
                FormatValue::Hex(hex.to_owned())
            } else {
                FormatValue::Hex(format!("#{hex}"))
            }
        }
        Some(expected) => {
            let tokens = tokens::extract(value, expected)?;
            from_tokens(format, &tokens).ok_or_else(|| {
                log::error!("{} tokens can not form a {format} value", tokens.len());
                RequestError::Conversion
            })?
        }
    };

    Ok(value.to_color())
}

fn from_tokens(format: Format, tokens: &[Token]) -> Option<FormatValue> {
    let rgb = |r: &Token, g: &Token, b: &Token, alpha: Component| {
        Color::new(
            channel(r.rgb_channel()),
            channel(g.rgb_channel()),
            channel(b.rgb_channel()),
            alpha,
        )
    };

    let value = match (format, tokens) {
        (Format::Rgb, [r, g, b, ..]) => FormatValue::Rgb(rgb(r, g, b, 1.0)),
        (Format::Rgba, [r, g, b, a, ..]) => FormatValue::Rgba(rgb(r, g, b, a.alpha())),
        (Format::Hsl, [h, s, l, ..]) => {
            FormatValue::Hsl(Hsla::new(h.hue(), s.percent(), l.percent(), 1.0))
        }
        (Format::Hsla, [h, s, l, a, ..]) => {
            FormatValue::Hsla(Hsla::new(h.hue(), s.percent(), l.percent(), a.alpha()))
        }
        (Format::Hsv, [h, s, v, ..]) => {
            FormatValue::Hsv(Hsva::new(h.hue(), s.percent(), v.percent(), 1.0))
        }
        (Format::Hsva, [h, s, v, a, ..]) => {
            FormatValue::Hsva(Hsva::new(h.hue(), s.percent(), v.percent(), a.alpha()))
        }
        (Format::Cmyk, [c, m, y, k, ..]) => FormatValue::Cmyk(Cmyk::new(
            c.percent(),
            m.percent(),
            y.percent(),
            k.percent(),
        )),
        (Format::Lab, [l, a, b, ..]) => FormatValue::Lab(Lab::new(
            l.within(0.0, 100.0),
            a.within(-128.0, 127.0),
            b.within(-128.0, 127.0),
        )),
        (Format::Hwb, [h, w, b, ..]) => {
            FormatValue::Hwb(Hwb::new(h.hue(), w.percent(), b.percent()))
        }
        (Format::Lch, [l, c, h, ..]) => FormatValue::Lch(Lch::new(
            l.within(0.0, 100.0),
            c.within(0.0, 150.0),
            h.hue(),
        )),
        _ => return None,
    };

    Some(value)
}

//! swatch converts colors between the notations used by color pickers and
//! reads color export requests from URL query parameters.
//!
//! A [`Color`] is the canonical sRGB value. Every other notation, from HSL
//! to CIE-Lch, is a view computed from it on demand.
//!
//! ```
//! use swatch::{parse_request, Color, Format, QueryParams};
//!
//! let request = parse_request(&QueryParams::parse("?format=hex&formatValue=ff5722"));
//! let color = request.color.unwrap_or_default();
//! assert_eq!(color, Color::opaque(255, 87, 34));
//! assert_eq!(color.format_string(Format::Hsl), "hsl(14, 100%, 57%)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod export;
mod format;
mod hex;
mod math;
mod models;
mod request;
mod share;


pub use color::{Color, Component, Components};
pub use error::{ErrorKind, ExportError, RequestError};
pub use export::{preset_for, ExportDefaults, ExportRequest, ImageFormat, Size, SIZE_PRESETS};
pub use format::{Format, FormatValue};
pub use hex::is_valid_hex;
pub use models::{Cmyk, Hsla, Hsva, Hwb, Lab, Lch, Model};
pub use request::{
    parse_color_value, parse_request, parse_request_with, Keys, ParsedRequest, Params, QueryParams,
};
pub use share::ShareLink;

//! Models are the peer representations of a [`Color`]. They are views
//! computed on demand from the canonical color and never the source of
//! truth.

use crate::color::{Color, Component};

mod cmyk;
mod hsl;
mod hsv;
mod hwb;
mod lab;

pub use cmyk::Cmyk;
pub use hsl::Hsla;
pub use hsv::Hsva;
pub use hwb::Hwb;
pub use lab::{Lab, Lch};

/// A trait implemented for color models that can be converted to and from a
/// canonical [`Color`].
pub trait Model: Copy {
    /// Set when the model carries its own alpha component.
    const HAS_ALPHA: bool;

    /// Convert a canonical [`Color`] to this model.
    fn from_color(color: &Color) -> Self;

    /// Convert this model to a canonical [`Color`]. Models without an alpha
    /// component use `alpha`, the others ignore it.
    fn to_color(&self, alpha: Component) -> Color;
}

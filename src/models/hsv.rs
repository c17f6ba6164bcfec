//! Model a color with the HSV notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with the HSV notation and an alpha component.
    pub struct Hsva {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The saturation in percent, [0, 100].
        saturation: Component,
        /// The value in percent, [0, 100].
        value: Component,
        /// The alpha component, [0, 1].
        alpha: Component,
    }
}

//! Model a color with the HWB notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with the HWB (hue, whiteness, blackness) notation.
    pub struct Hwb {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The whiteness in percent, [0, 100].
        whiteness: Component,
        /// The blackness in percent, [0, 100].
        blackness: Component,
    }
}

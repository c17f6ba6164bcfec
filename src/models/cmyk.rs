//! Model a color with the CMYK notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// components. CMYK has no alpha component.
    pub struct Cmyk {
        /// Cyan in percent, [0, 100].
        cyan: Component,
        /// Magenta in percent, [0, 100].
        magenta: Component,
        /// Yellow in percent, [0, 100].
        yellow: Component,
        /// Key (black) in percent, [0, 100].
        key: Component,
    }
}

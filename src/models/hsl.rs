//! Model a color with the HSL notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with the HSL notation and an alpha component.
    pub struct Hsla {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The saturation in percent, [0, 100].
        saturation: Component,
        /// The lightness in percent, [0, 100].
        lightness: Component,
        /// The alpha component, [0, 1].
        alpha: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_model() {
        let hsla = Hsla::new(10.0, 20.0, 30.0, 0.4);
        assert_eq!(hsla.to_array(), [10.0, 20.0, 30.0, 0.4]);
        assert_eq!(Hsla::from([10.0, 20.0, 30.0, 0.4]), hsla);
        assert_eq!(Hsla::NAME, "hsla");
    }
}

//! Models for the rectangular (Lab) and polar (Lch) forms of CIE-Lab.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color in the CIE-Lab color space relative to a D65 white point.
    pub struct Lab {
        /// The lightness component, [0, 100].
        lightness: Component,
        /// The green-red axis, [-128, 127].
        a: Component,
        /// The blue-yellow axis, [-128, 127].
        b: Component,
    }
}

swatch_macros::gen_model! {
    /// The cylindrical polar form of [`Lab`].
    pub struct Lch {
        /// The lightness component, [0, 100].
        lightness: Component,
        /// The chroma component, [0, 150].
        chroma: Component,
        /// The hue in degrees, [0, 360).
        hue: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. Chroma and hue are not rounded.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = self.b.atan2(self.a).to_degrees();
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        Lch::new(self.lightness, chroma, hue)
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

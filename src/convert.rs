//! Conversions between the canonical [`Color`] and each of its peer models.
//!
//! Every conversion is total: any finite input produces output within the
//! declared domain of the target model. Outputs are rounded to whole numbers,
//! so most round trips are only exact to within a step per channel.
//!
//! ```rust
//! use swatch::{Color, Hsla};
//! let hsla = Color::opaque(255, 87, 34).to_hsla();
//! assert_eq!(hsla, Hsla::new(14.0, 100.0, 57.0, 1.0));
//! ```

use crate::{
    color::{Color, Component, Components},
    math::{clamp, normalize_hue, round},
    models::{Cmyk, Hsla, Hsva, Hwb, Lab, Lch, Model},
};

impl Color {
    /// Convert this color to the HSL notation. Alpha is carried over.
    pub fn to_hsla(&self) -> Hsla {
        let unit = self.to_unit();
        let (hue, min, max) = util::hue_with_min_max(&unit);

        let sum = max + min;
        let delta = max - min;
        let lightness = sum / 2.0;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - sum)
        } else {
            delta / sum
        };

        Hsla::new(
            util::degrees(hue),
            util::percent(saturation),
            util::percent(lightness),
            self.alpha,
        )
    }

    /// Convert a color in the HSL notation to a [`Color`].
    pub fn from_hsla(hsla: &Hsla) -> Self {
        let hue = hsla.hue / 360.0;
        let saturation = hsla.saturation / 100.0;
        let lightness = hsla.lightness / 100.0;

        if saturation == 0.0 {
            return Self::from_unit(Components(lightness, lightness, lightness), hsla.alpha);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Self::from_unit(
            Components(
                util::hue_to_rgb(p, q, hue + 1.0 / 3.0),
                util::hue_to_rgb(p, q, hue),
                util::hue_to_rgb(p, q, hue - 1.0 / 3.0),
            ),
            hsla.alpha,
        )
    }

    /// Convert this color to the HSV notation. Alpha is carried over.
    pub fn to_hsva(&self) -> Hsva {
        let unit = self.to_unit();
        let (hue, min, max) = util::hue_with_min_max(&unit);

        let delta = max - min;
        let saturation = if delta == 0.0 { 0.0 } else { delta / max };

        Hsva::new(
            util::degrees(hue),
            util::percent(saturation),
            util::percent(max),
            self.alpha,
        )
    }

    /// Convert a color in the HSV notation to a [`Color`].
    pub fn from_hsva(hsva: &Hsva) -> Self {
        let hue = hsva.hue / 360.0;
        let saturation = hsva.saturation / 100.0;
        let value = hsva.value / 100.0;

        let sector = (hue * 6.0).floor();
        let f = hue * 6.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        // A non-finite hue saturates to sector 0.
        let components = match (sector as i64).rem_euclid(6) {
            0 => Components(value, t, p),
            1 => Components(q, value, p),
            2 => Components(p, value, t),
            3 => Components(p, q, value),
            4 => Components(t, p, value),
            _ => Components(value, p, q),
        };

        Self::from_unit(components, hsva.alpha)
    }

    /// Convert this color to CMYK. Alpha is dropped.
    pub fn to_cmyk(&self) -> Cmyk {
        let unit = self.to_unit();
        let key = 1.0 - unit.max();

        // Pure black has no defined ink ratios.
        if key == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let Components(cyan, magenta, yellow) = unit.map(|v| (1.0 - v - key) / (1.0 - key));

        Cmyk::new(
            util::percent(cyan),
            util::percent(magenta),
            util::percent(yellow),
            util::percent(key),
        )
    }

    /// Convert a CMYK color to a [`Color`] with the given alpha.
    pub fn from_cmyk(cmyk: &Cmyk, alpha: Component) -> Self {
        let key = cmyk.key / 100.0;
        let ink = Components(cmyk.cyan, cmyk.magenta, cmyk.yellow).map(|v| v / 100.0);

        Self::from_scaled(ink.map(|v| 255.0 * (1.0 - v) * (1.0 - key)), alpha)
    }

    /// Convert this color to CIE-Lab. Alpha is dropped.
    pub fn to_lab(&self) -> Lab {
        let linear = self.to_unit().map(util::to_linear_light);
        let Components(x, y, z) = util::linear_srgb_to_xyz(linear);

        let white = util::D65_WHITE_POINT;
        let Components(fx, fy, fz) = Components(x / white.0, y / white.1, z / white.2).map(|v| {
            if v > util::EPSILON {
                v.powf(1.0 / 3.0)
            } else {
                util::KAPPA * v + util::BIAS
            }
        });

        Lab::new(
            clamp(round(116.0 * fy - 16.0), 0.0, 100.0),
            clamp(round(500.0 * (fx - fy)), -128.0, 127.0),
            clamp(round(200.0 * (fy - fz)), -128.0, 127.0),
        )
    }

    /// Convert a CIE-Lab color to a [`Color`] with the given alpha. Colors
    /// outside of the sRGB gamut are clipped.
    pub fn from_lab(lab: &Lab, alpha: Component) -> Self {
        let fy = (lab.lightness + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;

        let Components(x, y, z) = Components(fx, fy, fz).map(|v| {
            let cubed = v.powf(3.0);
            if cubed > util::EPSILON {
                cubed
            } else {
                (v - util::BIAS) / util::KAPPA
            }
        });

        let white = util::D65_WHITE_POINT;
        let xyz = Components(x * white.0, y * white.1, z * white.2);
        let encoded = util::xyz_to_linear_srgb(xyz).map(util::to_gamma_encoded);

        let clipped = encoded.map(|v| clamp(v, 0.0, 1.0));
        if clipped != encoded {
            log::trace!("{} {:?} is outside of the srgb gamut", Lab::NAME, lab.to_array());
        }

        Self::from_unit(clipped, alpha)
    }

    /// Convert this color to the HWB notation. Alpha is dropped.
    pub fn to_hwb(&self) -> Hwb {
        let hsva = self.to_hsva();
        let whiteness = (100.0 - hsva.saturation) * hsva.value / 100.0;
        let blackness = 100.0 - hsva.value;

        Hwb::new(
            hsva.hue,
            clamp(round(whiteness), 0.0, 100.0),
            clamp(round(blackness), 0.0, 100.0),
        )
    }

    /// Convert a color in the HWB notation to a [`Color`] with the given
    /// alpha.
    pub fn from_hwb(hwb: &Hwb, alpha: Component) -> Self {
        let whiteness = hwb.whiteness / 100.0;
        let blackness = hwb.blackness / 100.0;

        // Whiteness and blackness that add up to more than 100% are
        // normalized to a gray.
        let total = whiteness + blackness;
        if total >= 1.0 {
            let gray = 255.0 * whiteness / total;
            return Self::from_scaled(Components(gray, gray, gray), alpha);
        }

        let value = 1.0 - blackness;
        let saturation = if value == 0.0 {
            0.0
        } else {
            1.0 - whiteness / value
        };

        Self::from_hsva(&Hsva::new(
            hwb.hue,
            saturation * 100.0,
            value * 100.0,
            alpha,
        ))
    }

    /// Convert this color to CIE-Lch. Alpha is dropped.
    pub fn to_lch(&self) -> Lch {
        let polar = self.to_lab().to_polar();

        Lch::new(
            polar.lightness,
            clamp(round(polar.chroma), 0.0, 150.0),
            normalize_hue(round(polar.hue)),
        )
    }

    /// Convert a CIE-Lch color to a [`Color`] with the given alpha.
    pub fn from_lch(lch: &Lch, alpha: Component) -> Self {
        let lab = lch.to_rectangular();
        Self::from_lab(&Lab::new(lab.lightness, round(lab.a), round(lab.b)), alpha)
    }
}

impl From<Hsla> for Color {
    fn from(value: Hsla) -> Self {
        Color::from_hsla(&value)
    }
}

impl From<Hsva> for Color {
    fn from(value: Hsva) -> Self {
        Color::from_hsva(&value)
    }
}

impl Model for Hsla {
    const HAS_ALPHA: bool = true;

    fn from_color(color: &Color) -> Self {
        color.to_hsla()
    }

    fn to_color(&self, _alpha: Component) -> Color {
        Color::from_hsla(self)
    }
}

impl Model for Hsva {
    const HAS_ALPHA: bool = true;

    fn from_color(color: &Color) -> Self {
        color.to_hsva()
    }

    fn to_color(&self, _alpha: Component) -> Color {
        Color::from_hsva(self)
    }
}

impl Model for Cmyk {
    const HAS_ALPHA: bool = false;

    fn from_color(color: &Color) -> Self {
        color.to_cmyk()
    }

    fn to_color(&self, alpha: Component) -> Color {
        Color::from_cmyk(self, alpha)
    }
}

impl Model for Lab {
    const HAS_ALPHA: bool = false;

    fn from_color(color: &Color) -> Self {
        color.to_lab()
    }

    fn to_color(&self, alpha: Component) -> Color {
        Color::from_lab(self, alpha)
    }
}

impl Model for Hwb {
    const HAS_ALPHA: bool = false;

    fn from_color(color: &Color) -> Self {
        color.to_hwb()
    }

    fn to_color(&self, alpha: Component) -> Color {
        Color::from_hwb(self, alpha)
    }
}

impl Model for Lch {
    const HAS_ALPHA: bool = false;

    fn from_color(color: &Color) -> Self {
        color.to_lch()
    }

    fn to_color(&self, alpha: Component) -> Color {
        Color::from_lch(self, alpha)
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp, normalize_hue, round, transform, transform_3x3},
    };

    /// Reference white used to normalize XYZ values.
    #[allow(clippy::excessive_precision)]
    pub const D65_WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);

    /// Below this value the Lab transfer function is linear.
    pub const EPSILON: Component = 0.008856;

    /// Slope of the linear segment of the Lab transfer function.
    pub const KAPPA: Component = 7.787;

    /// Offset of the linear segment of the Lab transfer function.
    pub const BIAS: Component = 16.0 / 116.0;

    /// Calculate the hue as a fraction of a full turn from RGB components and
    /// return it along with the min and max RGB values. Achromatic colors
    /// have a hue of 0.
    pub fn hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        (hue / 6.0, min, max)
    }

    /// Scale a fraction of a turn to whole degrees in [0, 360).
    pub fn degrees(turn: Component) -> Component {
        normalize_hue(round(turn * 360.0))
    }

    /// Scale a fraction to a whole percentage in [0, 100].
    pub fn percent(fraction: Component) -> Component {
        clamp(round(fraction * 100.0), 0.0, 100.0)
    }

    /// Evaluate one channel of an HSL color at hue `t`.
    pub fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    pub fn to_linear_light(value: Component) -> Component {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    pub fn to_gamma_encoded(value: Component) -> Component {
        if value > 0.0031308 {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * value
        }
    }

    pub fn linear_srgb_to_xyz(from: Components) -> Components {
        #[rustfmt::skip]
        let to_xyz = transform_3x3(
            0.4124, 0.3576, 0.1805,
            0.2126, 0.7152, 0.0722,
            0.0193, 0.1192, 0.9505,
        );

        transform(&to_xyz, from)
    }

    pub fn xyz_to_linear_srgb(from: Components) -> Components {
        #[rustfmt::skip]
        let to_srgb = transform_3x3(
             3.2406, -1.5372, -0.4986,
            -0.9689,  1.8758,  0.0415,
             0.0557, -0.2040,  1.0570,
        );

        transform(&to_srgb, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channels_eq;

    fn round_trip<M: Model>(color: &Color) -> Color {
        M::from_color(color).to_color(color.alpha)
    }

    #[test]
    fn test_conversions() {
        let c = Color::opaque(255, 87, 34);

        assert_eq!(c.to_hsla(), Hsla::new(14.0, 100.0, 57.0, 1.0));
        assert_eq!(c.to_hsva(), Hsva::new(14.0, 87.0, 100.0, 1.0));
        assert_eq!(c.to_cmyk(), Cmyk::new(0.0, 66.0, 87.0, 0.0));
        assert_eq!(c.to_lab(), Lab::new(60.0, 62.0, 62.0));
        assert_eq!(c.to_hwb(), Hwb::new(14.0, 13.0, 0.0));
        assert_eq!(c.to_lch(), Lch::new(60.0, 88.0, 45.0));
    }

    #[test]
    fn cmyk_to_rgb() {
        let c = Color::from_cmyk(&Cmyk::new(0.0, 66.0, 87.0, 0.0), 1.0);
        assert_channels_eq!(c, Color::opaque(255, 87, 33));
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn pure_black_has_no_ink() {
        assert_eq!(Color::BLACK.to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn primaries_from_hue() {
        let red = Color::from_hsla(&Hsla::new(0.0, 100.0, 50.0, 1.0));
        let green = Color::from_hsva(&Hsva::new(120.0, 100.0, 100.0, 1.0));
        let blue = Color::from_hsla(&Hsla::new(240.0, 100.0, 50.0, 1.0));
        assert_eq!(red, Color::opaque(255, 0, 0));
        assert_eq!(green, Color::opaque(0, 255, 0));
        assert_eq!(blue, Color::opaque(0, 0, 255));
    }

    #[test]
    fn hue_of_full_turn_is_the_same_as_zero() {
        let a = Color::from_hsva(&Hsva::new(360.0, 100.0, 100.0, 1.0));
        let b = Color::from_hsva(&Hsva::new(0.0, 100.0, 100.0, 1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        for v in [0, 64, 128, 255] {
            let gray = Color::opaque(v, v, v);
            let hsla = gray.to_hsla();
            assert_eq!((hsla.hue, hsla.saturation), (0.0, 0.0));
            let hsva = gray.to_hsva();
            assert_eq!((hsva.hue, hsva.saturation), (0.0, 0.0));
            let lch = gray.to_lch();
            assert_eq!((lch.chroma, lch.hue), (0.0, 0.0));
        }
    }

    #[test]
    fn white_and_black_in_lab() {
        assert_eq!(Color::opaque(255, 255, 255).to_lab(), Lab::new(100.0, 0.0, 0.0));
        assert_eq!(Color::BLACK.to_lab(), Lab::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn lab_outside_of_gamut_is_clipped() {
        let c = Color::from_lab(&Lab::new(100.0, 127.0, -128.0), 1.0);
        assert_eq!(c.red, 255);
        assert_eq!(c.blue, 255);

        let c = Color::from_lab(&Lab::new(0.0, -128.0, 127.0), 0.3);
        assert_eq!((c.red, c.blue, c.alpha), (0, 0, 0.3));
    }

    #[test]
    fn hwb_with_too_much_white_and_black_is_gray() {
        let c = Color::from_hwb(&Hwb::new(0.0, 60.0, 60.0), 1.0);
        assert_eq!(c, Color::opaque(128, 128, 128));

        let c = Color::from_hwb(&Hwb::new(200.0, 100.0, 0.0), 1.0);
        assert_eq!(c, Color::opaque(255, 255, 255));
    }

    #[test]
    fn hwb_without_value_is_black() {
        let c = Color::from_hwb(&Hwb::new(90.0, 0.0, 100.0), 1.0);
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn alpha_survives_hsla_and_hsva() {
        let c = Color::new(51, 102, 153, 0.37);
        assert_eq!(round_trip::<Hsla>(&c).alpha, 0.37);
        assert_eq!(round_trip::<Hsva>(&c).alpha, 0.37);
        assert_eq!(Color::from(c.to_hsla()).alpha, 0.37);
    }

    #[test]
    fn opaque_models_take_alpha_from_the_caller() {
        let c = Color::new(51, 102, 153, 0.37);
        assert_eq!(Color::from_cmyk(&c.to_cmyk(), 1.0).alpha, 1.0);
        assert_eq!(round_trip::<Lab>(&c).alpha, 0.37);
        assert!(!Cmyk::HAS_ALPHA && !Lab::HAS_ALPHA && !Hwb::HAS_ALPHA && !Lch::HAS_ALPHA);
        assert!(Hsla::HAS_ALPHA && Hsva::HAS_ALPHA);
    }

    #[test]
    fn grays_and_primaries_round_trip_within_a_step() {
        let primaries = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
        ];
        let grays = (0..=255).map(|v| (v, v, v));

        for (r, g, b) in grays.chain(primaries) {
            let c = Color::opaque(r, g, b);
            assert_channels_eq!(round_trip::<Hsla>(&c), c);
            assert_channels_eq!(round_trip::<Hsva>(&c), c);
            assert_channels_eq!(round_trip::<Cmyk>(&c), c);
            assert_channels_eq!(round_trip::<Hwb>(&c), c);
        }
    }

    /// Largest difference in any channel after a round trip through `M`.
    fn worst_round_trip<M: Model>() -> u8 {
        let mut worst = 0;
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(3) {
                    let c = Color::opaque(r, g, b);
                    let back = round_trip::<M>(&c);
                    worst = worst
                        .max(back.red.abs_diff(r))
                        .max(back.green.abs_diff(g))
                        .max(back.blue.abs_diff(b));
                }
            }
        }
        worst
    }

    #[test]
    fn round_trip_error_is_bounded() {
        // Whole number components lose more than a step for most colors.
        // Lab and Lch also clip colors that leave the gamut after rounding.
        assert!(worst_round_trip::<Hsla>() <= 5);
        assert!(worst_round_trip::<Hsva>() <= 3);
        assert!(worst_round_trip::<Cmyk>() <= 2);
        assert!(worst_round_trip::<Hwb>() <= 4);
        assert!(worst_round_trip::<Lab>() <= 27);
        assert!(worst_round_trip::<Lch>() <= 39);
    }

    #[test]
    fn outputs_stay_within_their_domains() {
        let in_range = |v: Component, min: Component, max: Component| v >= min && v <= max;
        let hue = |v: Component| (0.0..360.0).contains(&v);

        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let c = Color::new(r as u8, g as u8, b as u8, 0.5);

                    let hsla = c.to_hsla();
                    assert!(hue(hsla.hue));
                    assert!(in_range(hsla.saturation, 0.0, 100.0));
                    assert!(in_range(hsla.lightness, 0.0, 100.0));
                    assert_eq!(hsla.alpha, 0.5);

                    let hsva = c.to_hsva();
                    assert!(hue(hsva.hue));
                    assert!(in_range(hsva.saturation, 0.0, 100.0));
                    assert!(in_range(hsva.value, 0.0, 100.0));

                    let cmyk = c.to_cmyk();
                    for v in cmyk.to_array() {
                        assert!(in_range(v, 0.0, 100.0));
                    }

                    let lab = c.to_lab();
                    assert!(in_range(lab.lightness, 0.0, 100.0));
                    assert!(in_range(lab.a, -128.0, 127.0));
                    assert!(in_range(lab.b, -128.0, 127.0));

                    let hwb = c.to_hwb();
                    assert!(hue(hwb.hue));
                    assert!(in_range(hwb.whiteness, 0.0, 100.0));
                    assert!(in_range(hwb.blackness, 0.0, 100.0));

                    let lch = c.to_lch();
                    assert!(in_range(lch.lightness, 0.0, 100.0));
                    assert!(in_range(lch.chroma, 0.0, 150.0));
                    assert!(hue(lch.hue));
                }
            }
        }
    }
}

//! A [`Color`] is the canonical RGBA value every other color format is
//! derived from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{clamp, round};

/// A 64-bit floating point value that all non-channel components are stored
/// as.
pub type Component = f64;

/// Three components of a color, used for intermediate results while
/// converting between models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

/// A color in the sRGB color space with 8-bit channels and a floating point
/// alpha in the range [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// The red channel.
    #[serde(rename = "r")]
    pub red: u8,
    /// The green channel.
    #[serde(rename = "g")]
    pub green: u8,
    /// The blue channel.
    #[serde(rename = "b")]
    pub blue: u8,
    /// The alpha component of the color.
    #[serde(rename = "a")]
    pub alpha: Component,
}

impl Color {
    /// Opaque black, also used as the fallback for unreadable hex strings.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Create a new [`Color`] from its channels and alpha.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a new [`Color`] with an alpha of 1.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from components in the range [0, 1]. Each channel is
    /// rounded to the nearest integer and clamped into range.
    pub fn from_unit(components: Components, alpha: Component) -> Self {
        Self::from_scaled(components.map(|v| v * 255.0), alpha)
    }

    /// Create a color from components already scaled to the range [0, 255].
    pub(crate) fn from_scaled(components: Components, alpha: Component) -> Self {
        let Components(red, green, blue) = components;
        Self::new(channel(red), channel(green), channel(blue), alpha)
    }

    /// Return the channels as components in the range [0, 1].
    pub fn to_unit(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Returns true if the alpha component is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Format the color as a CSS color. Opaque colors use the `rgb()`
    /// notation and all others `rgba()`.
    pub fn to_css_string(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// Round a value in the range [0, 255] to a channel. NaN maps to 0.
pub(crate) fn channel(value: Component) -> u8 {
    clamp(round(value), 0.0, 255.0) as u8
}

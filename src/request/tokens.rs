//! Numeric tokens inside a `formatValue`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    color::Component,
    error::RequestError,
    math::{clamp, normalize_hue, round},
};

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[0-9]*\.?[0-9]+%?").expect("number pattern is valid"));

/// A signed decimal found in a value, optionally written as a percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Token {
    pub value: Component,
    pub is_percent: bool,
}

impl Token {
    /// An RGB channel: percentages scale [0, 100] onto [0, 255], plain
    /// numbers are rounded and clamped.
    pub fn rgb_channel(&self) -> Component {
        if self.is_percent {
            round(clamp(self.value, 0.0, 100.0) * 2.55)
        } else {
            clamp(round(self.value), 0.0, 255.0)
        }
    }

    /// A percent-style component, the `%` sign is optional.
    pub fn percent(&self) -> Component {
        clamp(self.value, 0.0, 100.0)
    }

    /// An alpha component. Percentages and plain numbers above 1 are read on
    /// a [0, 100] scale, so `50`, `50%` and `0.5` are all half transparent.
    pub fn alpha(&self) -> Component {
        if self.is_percent || self.value > 1.0 {
            clamp(self.value / 100.0, 0.0, 1.0)
        } else {
            clamp(self.value, 0.0, 1.0)
        }
    }

    /// A hue in degrees wrapped into [0, 360).
    pub fn hue(&self) -> Component {
        normalize_hue(self.value)
    }

    /// The raw value clamped into `[min, max]`.
    pub fn within(&self, min: Component, max: Component) -> Component {
        clamp(self.value, min, max)
    }
}

/// Extract every numeric token from `input`, requiring at least `expected`.
pub(crate) fn extract(input: &str, expected: usize) -> Result<Vec<Token>, RequestError> {
    let matches = NUMBER.find_iter(input).map(|m| m.as_str()).collect::<Vec<_>>();
    if matches.len() < expected {
        return Err(RequestError::TooFewValues {
            expected,
            input: input.to_owned(),
        });
    }

    matches
        .into_iter()
        .map(|raw| {
            let (digits, is_percent) = match raw.strip_suffix('%') {
                Some(digits) => (digits, true),
                None => (raw, false),
            };
            digits
                .parse::<Component>()
                .map(|value| Token { value, is_percent })
                .map_err(|_| RequestError::InvalidNumber(input.to_owned()))
        })
        .collect()
}

//! Hexadecimal notation (`#rrggbb` and `#rgb`) for opaque colors.

use crate::color::{Color, Component};

impl Color {
    /// Format the channels as a lowercase `#rrggbb` string. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parse a `#rgb` or `#rrggbb` string, with or without the `#`. Strings
    /// of any other length yield black with the given alpha; use
    /// [`is_valid_hex`] first when strict validation is required.
    pub fn from_hex(hex: &str, alpha: Component) -> Self {
        let digits = hex.replacen('#', "", 1).chars().collect::<Vec<_>>();

        let (red, green, blue) = match digits.as_slice() {
            [r, g, b] => (
                parse_hex_prefix(&[*r, *r]),
                parse_hex_prefix(&[*g, *g]),
                parse_hex_prefix(&[*b, *b]),
            ),
            [r0, r1, g0, g1, b0, b1] => (
                parse_hex_prefix(&[*r0, *r1]),
                parse_hex_prefix(&[*g0, *g1]),
                parse_hex_prefix(&[*b0, *b1]),
            ),
            _ => {
                log::warn!("unreadable hex color {hex:?}, falling back to black");
                return Self::new(0, 0, 0, alpha);
            }
        };

        Self::new(red, green, blue, alpha)
    }
}

/// Returns true if `hex` is exactly 3 or 6 hex digits after stripping an
/// optional leading `#`.
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.replacen('#', "", 1);
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse the leading hex digits of a pair. A pair without a leading hex
/// digit is 0.
fn parse_hex_prefix(pair: &[char; 2]) -> u8 {
    let prefix = pair
        .iter()
        .take_while(|c| c.is_ascii_hexdigit())
        .collect::<String>();
    u8::from_str_radix(&prefix, 16).unwrap_or(0)
}

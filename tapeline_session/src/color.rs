// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Converts a `#rgb` or `#rrggbb` hex color to an `rgba(r, g, b, a)`
/// string with the given alpha, for the translucent interior fill.
///
/// Shorthand digits are doubled (`#08f` reads as `#0088ff`). Returns
/// `None` for anything that is not a 3- or 6-digit hex color; callers
/// degrade to their previous fill rather than erroring.
#[must_use]
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return None;
    }
    let (r, g, b) = match digits.len() {
        3 => {
            let channel = |i| {
                let d = u8::from_str_radix(&digits[i..=i], 16).ok()?;
                Some(d * 16 + d)
            };
            (channel(0)?, channel(1)?, channel(2)?)
        }
        6 => {
            let channel = |i| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            (channel(0)?, channel(2)?, channel(4)?)
        }
        _ => return None,
    };
    Some(format!("rgba({r}, {g}, {b}, {alpha})"))
}

#[cfg(test)]
mod tests {
    use super::hex_to_rgba;

    #[test]
    fn converts_full_hex() {
        assert_eq!(
            hex_to_rgba("#0080ff", 0.2).as_deref(),
            Some("rgba(0, 128, 255, 0.2)")
        );
    }

    #[test]
    fn expands_shorthand_hex() {
        assert_eq!(
            hex_to_rgba("#08f", 0.5).as_deref(),
            Some("rgba(0, 136, 255, 0.5)")
        );
    }

    #[test]
    fn accepts_a_missing_hash() {
        assert_eq!(
            hex_to_rgba("ff0000", 1.0).as_deref(),
            Some("rgba(255, 0, 0, 1)")
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(hex_to_rgba("#08", 0.2), None);
        assert_eq!(hex_to_rgba("#00zzff", 0.2), None);
        assert_eq!(hex_to_rgba("", 0.2), None);
    }
}

//! sRGB colors for the depth/surface gradient.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// 8-bit sRGB color, as edited in the debug panel and written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SrgbColor(pub [u8; 3]);

impl SrgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive)
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Length(text.to_string()));
        }
        // from_str_radix alone would accept a sign such as "+1"
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(text.to_string()));
        }

        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| ColorParseError::Digit(text.to_string()))?;
        }
        Ok(Self(rgb))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Convert to linear-light RGB in [0, 1]
    pub fn to_linear(self) -> [f32; 3] {
        self.0.map(|c| srgb_to_linear(c as f32 / 255.0))
    }
}

impl FromStr for SrgbColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for SrgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// sRGB electro-optical transfer function (IEC 61966-2-1)
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Component-wise linear interpolation
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_colors() {
        assert_eq!(
            SrgbColor::from_hex("#022e50").unwrap(),
            SrgbColor::new(0x02, 0x2e, 0x50)
        );
        assert_eq!(
            "56ADC7".parse::<SrgbColor>().unwrap(),
            SrgbColor::new(0x56, 0xad, 0xc7)
        );
        assert_eq!(SrgbColor::new(0x56, 0xad, 0xc7).to_string(), "#56adc7");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            SrgbColor::from_hex("#fff"),
            Err(ColorParseError::Length("#fff".to_string()))
        );
        assert_eq!(
            SrgbColor::from_hex("#zz0000"),
            Err(ColorParseError::Digit("#zz0000".to_string()))
        );
        assert!(SrgbColor::from_hex("#ééé").is_err());
        assert_eq!(
            SrgbColor::from_hex("#+1+2+3"),
            Err(ColorParseError::Digit("#+1+2+3".to_string()))
        );
        assert!(SrgbColor::from_hex("-10000").is_err());
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(SrgbColor::new(0, 0, 0).to_linear(), [0.0, 0.0, 0.0]);
        let white = SrgbColor::new(255, 255, 255).to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
        // Mid grey is much darker in linear light
        let grey = srgb_to_linear(0.5);
        assert!((grey - 0.214).abs() < 1e-3);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = [0.1, 0.2, 0.3];
        let b = [0.9, 0.8, 0.7];
        assert_eq!(lerp_rgb(a, b, 0.0), a);
        let end = lerp_rgb(a, b, 1.0);
        for (got, want) in end.iter().zip(b) {
            assert!((got - want).abs() < 1e-6);
        }
    }
}

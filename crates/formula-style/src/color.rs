use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ARGB color.
///
/// Serialized as a `#AARRGGBB` hex string for IPC friendliness. `#RRGGBB` is
/// accepted on input and treated as fully opaque.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub argb: u32,
}

impl Color {
    pub const fn new_argb(argb: u32) -> Self {
        Self { argb }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            argb: 0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
        }
    }

    pub const fn black() -> Self {
        Self { argb: 0xFF000000 }
    }

    pub const fn white() -> Self {
        Self { argb: 0xFFFFFFFF }
    }

    pub const fn alpha(self) -> u8 {
        (self.argb >> 24) as u8
    }

    fn to_hex(self) -> String {
        format!("#{:08X}", self.argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Reasons a color string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must be a hex string starting with '#'")]
    MissingHash,
    #[error("color must have 6 (#RRGGBB) or 8 (#AARRGGBB) hex digits")]
    InvalidLength,
    #[error("invalid hex digit in color")]
    InvalidHex,
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if !matches!(hex.len(), 6 | 8) {
            return Err(ColorParseError::InvalidLength);
        }
        // `from_str_radix` alone would accept a leading sign.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidHex)?;
        if hex.len() == 6 {
            Ok(Color::new_argb(0xFF00_0000 | value))
        } else {
            Ok(Color::new_argb(value))
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_as_opaque() {
        assert_eq!("#FF0000".parse::<Color>(), Ok(Color::rgb(0xFF, 0, 0)));
        assert_eq!("#80FF0000".parse::<Color>().map(Color::alpha), Ok(0x80));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!("FF0000".parse::<Color>(), Err(ColorParseError::MissingHash));
        assert_eq!("#F00".parse::<Color>(), Err(ColorParseError::InvalidLength));
        assert_eq!("#GG0000".parse::<Color>(), Err(ColorParseError::InvalidHex));
        assert_eq!("#+FFFFF".parse::<Color>(), Err(ColorParseError::InvalidHex));
        assert_eq!("#+FFFFFFF".parse::<Color>(), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn displays_as_argb_hex() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_string(), "#FF123456");
    }
}

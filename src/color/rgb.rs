//! RGB color value and hex parsing

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("malformed hex color: [{0}]")]
    MalformedHex(String),
    #[error("unknown color: {0}")]
    NotFound(String),
    #[error("color table invariant violated: {0}")]
    InvariantViolation(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Neutral color handed back when a color string cannot be understood
    pub const DEFAULT_GRAY: Color = Color::rgb(0x88, 0x88, 0x88);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` / `RRGGBB` string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bytes = digits.as_bytes();
        if bytes.len() != 6 {
            return Err(ColorError::MalformedHex(s.to_string()));
        }

        let pair = |hi: u8, lo: u8| -> Result<u8, ColorError> {
            let h = nibble(hi).ok_or_else(|| ColorError::MalformedHex(s.to_string()))?;
            let l = nibble(lo).ok_or_else(|| ColorError::MalformedHex(s.to_string()))?;
            Ok(h << 4 | l)
        };

        Ok(Self {
            r: pair(bytes[0], bytes[1])?,
            g: pair(bytes[2], bytes[3])?,
            b: pair(bytes[4], bytes[5])?,
        })
    }

    /// Parse the 3-digit shorthand (`abc` -> `aabbcc`), optional `#`.
    pub(crate) fn from_short_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bytes = digits.as_bytes();
        if bytes.len() != 3 {
            return None;
        }
        let r = nibble(bytes[0])?;
        let g = nibble(bytes[1])?;
        let b = nibble(bytes[2])?;
        Some(Self::rgb(r * 17, g * 17, b * 17))
    }

    /// Sum of the three channels (0..=765)
    pub fn brightness(self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

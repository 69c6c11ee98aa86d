use std::{fmt, str::FromStr};

use crate::foundation::error::{ExprError, ExprResult};

/// Straight (non-premultiplied) RGB color. Opacity lives on the style, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Self = Self::rgb(0x88, 0x88, 0x88);
    pub const BLUE: Self = Self::rgb(0x58, 0xC4, 0xDD);
    pub const TEAL: Self = Self::rgb(0x5C, 0xD0, 0xB3);
    pub const GREEN: Self = Self::rgb(0x83, 0xC1, 0x67);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    pub const GOLD: Self = Self::rgb(0xF0, 0xAC, 0x5F);
    pub const RED: Self = Self::rgb(0xFC, 0x62, 0x55);
    pub const PURPLE: Self = Self::rgb(0x9A, 0x72, 0xAC);
    pub const ORANGE: Self = Self::rgb(0xFF, 0x86, 0x2F);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_uppercase().as_str() {
            "WHITE" => Self::WHITE,
            "BLACK" => Self::BLACK,
            "GRAY" | "GREY" => Self::GRAY,
            "BLUE" => Self::BLUE,
            "TEAL" => Self::TEAL,
            "GREEN" => Self::GREEN,
            "YELLOW" => Self::YELLOW,
            "GOLD" => Self::GOLD,
            "RED" => Self::RED,
            "PURPLE" => Self::PURPLE,
            "ORANGE" => Self::ORANGE,
            _ => return None,
        };
        Some(c)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ExprError;

    fn from_str(s: &str) -> ExprResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(ExprError::config(format!("invalid hex color '{s}'")));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| ExprError::config(format!("invalid hex color '{s}'")))
            };
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        Self::named(s).ok_or_else(|| ExprError::config(format!("unknown color '{s}'")))
    }
}

impl TryFrom<String> for Color {
    type Error = ExprError;

    fn try_from(s: String) -> ExprResult<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;

//! Colors and palettes.

use crate::error::ConfigError;
use crate::math;
use rand::Rng;
use std::fmt;

/// RGB color used for entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A non-empty set of colors to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build a palette from a built-in table. Panics on an empty table.
    pub fn from_static(colors: &'static [Color]) -> Self {
        assert!(!colors.is_empty(), "built-in palette must not be empty");
        Self {
            colors: colors.to_vec(),
        }
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, ConfigError> {
        let parsed = colors
            .iter()
            .map(|c| Color::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// Uniform pick.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        *math::random_choice(rng, &self.colors).expect("palette is non-empty")
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

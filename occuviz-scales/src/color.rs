//! Stable categorical colors derived from a label.
//!
//! A label always maps to the same palette slot: the slot is a pure function of
//! the label's UTF-16 code units, so it does not depend on call order, dataset
//! order or process lifetime.

use crate::error::OccuvizScaleError;
use palette::Srgb;
use serde::Serialize;
use std::str::FromStr;

/// Category10 palette from D3 for categorical data
pub const CATEGORY10: [Srgb<u8>; 10] = [
    Srgb::new(0x1f, 0x77, 0xb4), // Blue
    Srgb::new(0xff, 0x7f, 0x0e), // Orange
    Srgb::new(0x2c, 0xa0, 0x2c), // Green
    Srgb::new(0xd6, 0x27, 0x28), // Red
    Srgb::new(0x94, 0x67, 0xbd), // Purple
    Srgb::new(0x8c, 0x56, 0x4b), // Brown
    Srgb::new(0xe3, 0x77, 0xc2), // Pink
    Srgb::new(0x7f, 0x7f, 0x7f), // Gray
    Srgb::new(0xbc, 0xbd, 0x22), // Olive
    Srgb::new(0x17, 0xbe, 0xcf), // Cyan
];

/// Fixed, ordered, non-empty list of colors
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: Vec<Srgb<u8>>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::category10()
    }
}

impl ColorPalette {
    pub fn category10() -> Self {
        Self {
            colors: CATEGORY10.to_vec(),
        }
    }

    pub fn new(colors: Vec<Srgb<u8>>) -> Result<Self, OccuvizScaleError> {
        if colors.is_empty() {
            return Err(OccuvizScaleError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build a palette from CSS hex strings like `#1f77b4`
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, OccuvizScaleError> {
        let colors = colors
            .iter()
            .map(|c| {
                let c = c.as_ref();
                Srgb::<u8>::from_str(c.trim()).map_err(|e| OccuvizScaleError::InvalidColor {
                    color: c.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> Option<Srgb<u8>> {
        self.colors.get(index).copied()
    }

    pub fn hex(&self, index: usize) -> Option<String> {
        self.color(index).map(to_hex)
    }

    pub fn to_hex_vec(&self) -> Vec<String> {
        self.colors.iter().copied().map(to_hex).collect()
    }
}

fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// 32-bit rolling hash over UTF-16 code units: `hash = code + ((hash << 5) - hash)`
pub fn hash_key(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, code| {
        i32::from(code).wrapping_add((hash << 5).wrapping_sub(hash))
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAssignment {
    pub key: String,
    pub palette_index: usize,
}

/// Maps labels to palette slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssigner {
    palette: ColorPalette,
}

impl ColorAssigner {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }

    pub fn color_index_of(&self, key: &str) -> usize {
        hash_key(key).unsigned_abs() as usize % self.palette.len()
    }

    pub fn assign(&self, key: &str) -> ColorAssignment {
        ColorAssignment {
            key: key.to_string(),
            palette_index: self.color_index_of(key),
        }
    }

    /// Style column value for a palette slot, e.g. `color: #1f77b4`.
    /// Indices wrap around the palette.
    pub fn style_for(&self, index: usize) -> String {
        let color = self.palette.colors[index % self.palette.len()];
        format!("color: {}", to_hex(color))
    }

    pub fn style_for_key(&self, key: &str) -> String {
        self.style_for(self.color_index_of(key))
    }
}

//! Pixel eligibility for recolouring.
//!
//! Item sprites mix a neutral metallic palette (the part that should take
//! the new material colour) with fixed details such as wooden handles.
//! The policy decides which pixels the mapper may touch.

use serde::Deserialize;

use crate::types::Colour;

/// Thresholds identifying warm-brown "wood" pixels that must never be
/// recoloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WoodRule {
    /// Red channel must exceed this floor.
    pub red_floor: u8,
    /// Green channel must exceed this floor.
    pub green_floor: u8,
    /// Blue channel must stay below this ceiling.
    pub blue_ceiling: u8,
}

impl Default for WoodRule {
    fn default() -> Self {
        Self {
            red_floor: 100,
            green_floor: 50,
            blue_ceiling: 50,
        }
    }
}

/// Decides which pixels of a sprite are eligible for recolouring.
///
/// A pixel qualifies when it is grey-like (all pairwise channel differences
/// inside the tolerance band), or when it is bright on all channels and not
/// wood-like. Transparent pixels are the recolour loop's concern; the
/// policy only looks at RGB.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectionPolicy {
    /// Pairwise channel differences strictly below this count as grey.
    pub grey_tolerance: i16,

    /// All channels strictly above this qualify a non-wood pixel.
    pub bright_floor: u8,

    /// Wood detection thresholds.
    pub wood: WoodRule,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            grey_tolerance: 20,
            bright_floor: 100,
            wood: WoodRule::default(),
        }
    }
}

impl SelectionPolicy {
    /// Grey-like: R, G and B all within the tolerance band of each other.
    pub fn is_grey(&self, c: Colour) -> bool {
        let (r, g, b) = (c.r as i16, c.g as i16, c.b as i16);
        (r - g).abs() < self.grey_tolerance
            && (g - b).abs() < self.grey_tolerance
            && (r - b).abs() < self.grey_tolerance
    }

    /// Wood-like: a warm brown, strictly descending R > G > B with R and G
    /// above their floors and B below the ceiling.
    pub fn is_wood(&self, c: Colour) -> bool {
        c.r > c.g
            && c.g > c.b
            && c.r > self.wood.red_floor
            && c.g > self.wood.green_floor
            && c.b < self.wood.blue_ceiling
    }

    /// Whether the mapper may recolour this pixel.
    pub fn eligible(&self, c: Colour) -> bool {
        self.is_grey(c)
            || (!self.is_wood(c)
                && c.r > self.bright_floor
                && c.g > self.bright_floor
                && c.b > self.bright_floor)
    }
}

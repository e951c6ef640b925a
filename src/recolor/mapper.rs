//! Base-colour mapping in HSV space.
//!
//! A `ColourMapper` is built once per generation run from the chosen base
//! colour and converts any input colour into one that carries the base hue
//! while keeping the source sprite's shading readable.

use palette::Hsv;
use serde::Deserialize;

use crate::types::Colour;

/// Blend weights for the mapper.
///
/// Values are clamped to [0, 1] when a mapper is constructed, so any
/// deserialized configuration yields a usable mapper.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToneTuning {
    /// How strongly the input pixel's own saturation perturbs the base
    /// saturation. 0 erases source variation, 1 doubles it.
    pub saturation_spread: f32,

    /// Weight of the input pixel's brightness in the output. The remainder
    /// comes from the base colour. Kept above 0.5 by default so source
    /// highlights and shading stay visible.
    pub value_keep: f32,
}

impl Default for ToneTuning {
    fn default() -> Self {
        Self {
            saturation_spread: 0.2,
            value_keep: 0.6,
        }
    }
}

/// Maps arbitrary colours toward a single base colour.
///
/// Construction never fails; the base colour's alpha is ignored. The map is
/// a pure function: the same input always yields the same output for the
/// lifetime of the mapper.
///
/// Mapping is not idempotent. Feeding an already-mapped colour back through
/// shifts its saturation and brightness again, so a generation run must map
/// each sprite exactly once from its source.
#[derive(Debug, Clone)]
pub struct ColourMapper {
    base: Colour,
    base_hsv: Hsv,
    tuning: ToneTuning,
}

impl ColourMapper {
    /// Create a mapper for a base colour with default tuning.
    pub fn new(base: Colour) -> Self {
        Self::with_tuning(base, ToneTuning::default())
    }

    /// Create a mapper with explicit tuning. Out-of-range tuning values are
    /// clamped to [0, 1].
    pub fn with_tuning(base: Colour, tuning: ToneTuning) -> Self {
        let base = base.opaque();
        let tuning = ToneTuning {
            saturation_spread: tuning.saturation_spread.clamp(0.0, 1.0),
            value_keep: tuning.value_keep.clamp(0.0, 1.0),
        };
        Self {
            base,
            base_hsv: base.to_hsv(),
            tuning,
        }
    }

    /// The base colour this mapper was built from (always opaque).
    pub fn base(&self) -> Colour {
        self.base
    }

    /// Map a colour onto the base hue.
    ///
    /// The output takes the base hue outright; saturation is the base
    /// saturation perturbed by the input's own, and brightness blends the
    /// input with the base, majority weight on the input. Both are clamped
    /// to [0, 1]. Alpha passes through untouched.
    pub fn map(&self, pixel: Colour) -> Colour {
        let hsv = pixel.to_hsv();

        let saturation = (self.base_hsv.saturation
            + (hsv.saturation - 0.5) * self.tuning.saturation_spread)
            .clamp(0.0, 1.0);

        let value = (hsv.value * self.tuning.value_keep
            + self.base_hsv.value * (1.0 - self.tuning.value_keep))
            .clamp(0.0, 1.0);

        Colour::from_hsv(Hsv::new(self.base_hsv.hue, saturation, value), pixel.a)
    }
}

//! Batch recolouring with per-sprite failure isolation.
//!
//! One bad sprite must never block the rest of the library: failures are
//! collected alongside the successes and reported together at the end.

use std::path::{Path, PathBuf};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{Result, RetintError};
use crate::types::{output_file_name, MaterialName};

use super::{ColourMapper, SelectionPolicy, Sprite};

/// A configured generation run over a set of source sprites.
#[derive(Debug)]
pub struct RecolorJob {
    pub mapper: ColourMapper,
    pub policy: SelectionPolicy,
    pub material: MaterialName,
    /// Token substituted with the material in source file names.
    pub placeholder: String,
    pub output_dir: PathBuf,
    /// Integer upscale factor for written sprites.
    pub scale: u32,
}

/// A successfully recoloured and written sprite.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenSprite {
    /// Source file path.
    pub source: PathBuf,
    /// Output file path.
    pub output: PathBuf,
    /// Number of pixels the recolour pass changed.
    pub changed: usize,
}

/// A sprite that failed to decode or write.
#[derive(Debug)]
pub struct SpriteFailure {
    /// Source file path.
    pub source: PathBuf,
    pub error: RetintError,
}

impl Serialize for SpriteFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SpriteFailure", 2)?;
        s.serialize_field("source", &self.source)?;
        s.serialize_field("error", &self.error.to_string())?;
        s.end()
    }
}

/// Outcome of a batch run: everything written, everything that failed.
#[derive(Debug, Default, Serialize)]
pub struct RecolorReport {
    pub written: Vec<WrittenSprite>,
    pub failures: Vec<SpriteFailure>,
}

impl RecolorReport {
    /// True when every sprite was written.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// True when nothing was written at all.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty() && self.failures.is_empty()
    }
}

impl RecolorJob {
    /// Recolour every source sprite, continuing past per-sprite failures.
    ///
    /// Sprites are independent of each other; processing order follows the
    /// input slice but nothing depends on it.
    pub fn run(&self, sources: &[PathBuf]) -> RecolorReport {
        let mut report = RecolorReport::default();

        for source in sources {
            match self.run_one(source) {
                Ok(written) => report.written.push(written),
                Err(error) => report.failures.push(SpriteFailure {
                    source: source.clone(),
                    error,
                }),
            }
        }

        report
    }

    /// Recolour a single sprite: load, transform, derive the output name,
    /// write.
    pub fn run_one(&self, source: &Path) -> Result<WrittenSprite> {
        let mut sprite = Sprite::load(source)?;
        let changed = sprite.recolor(&self.mapper, &self.policy);

        let output_name = output_file_name(sprite.name(), &self.material, &self.placeholder);
        let output = self.output_dir.join(output_name);

        sprite.write_png(&output, self.scale)?;

        Ok(WrittenSprite {
            source: source.to_path_buf(),
            output,
            changed,
        })
    }
}

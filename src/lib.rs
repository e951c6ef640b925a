//! retint - Sprite library recolouring
//!
//! A library for recoloring fixed libraries of item and tool sprites to a
//! chosen base colour, writing the results under a material-specific name.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod recolor;
pub mod types;

pub use discovery::{scan_sprites, Manifest, MANIFEST_FILENAME};
pub use error::{Result, RetintError};
pub use recolor::{
    ColourMapper, RecolorJob, RecolorReport, SelectionPolicy, Sprite, SpriteFailure, ToneTuning,
    WoodRule, WrittenSprite,
};
pub use types::{output_file_name, Colour, MaterialName, DEFAULT_PLACEHOLDER};

//! The recolouring engine.
//!
//! Pure, synchronous, single-threaded: a `ColourMapper` built once per run
//! maps colours toward the base colour, a `SelectionPolicy` decides which
//! pixels it may touch, and `Sprite`/`RecolorJob` drive the per-pixel pass
//! and batch output. Sprites are independent of each other, so callers may
//! process a batch in parallel over disjoint buffers if they want to.

mod batch;
mod mapper;
mod policy;
mod sprite;

pub use batch::{RecolorJob, RecolorReport, SpriteFailure, WrittenSprite};
pub use mapper::{ColourMapper, ToneTuning};
pub use policy::{SelectionPolicy, WoodRule};
pub use sprite::Sprite;

//! Core domain types for retint.
//!
//! - `Colour` - RGBA colour values with hex parsing and HSV conversion
//! - `MaterialName` - lowercase token substituted into output file names

mod colour;
mod material;

pub use colour::Colour;
pub use material::{output_file_name, MaterialName, DEFAULT_PLACEHOLDER};

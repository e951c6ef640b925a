//! Material tokens and output file naming.
//!
//! Source sprites in a library are named after a placeholder material
//! (`iron_pickaxe.png`, `iron_axe.png`, ...). Output files substitute the
//! user's material token into those names.

use std::fmt;
use std::str::FromStr;

use crate::error::{RetintError, Result};

/// Default placeholder token found in source sprite names.
pub const DEFAULT_PLACEHOLDER: &str = "iron";

/// A lowercase material token used for output naming.
///
/// The token is normalized to ASCII lowercase on construction. It is never
/// interpreted beyond naming: the recolour engine treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialName(String);

impl MaterialName {
    /// Create a material name, normalizing to lowercase.
    ///
    /// Rejects empty strings and strings containing whitespace or path
    /// separators, since the token is substituted into file names.
    pub fn new(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();

        if token.is_empty() {
            return Err(RetintError::Parse {
                message: "Material name is empty".to_string(),
                help: Some("Provide a token like 'ruby' or 'steel'".to_string()),
            });
        }

        if token
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(RetintError::Parse {
                message: format!("Invalid material name: {:?}", s),
                help: Some("Material names cannot contain spaces or path separators".to_string()),
            });
        }

        Ok(Self(token))
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MaterialName {
    type Err = RetintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for MaterialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive an output file name from a source sprite file name.
///
/// Three rules, first match wins:
/// 1. The placeholder token occurs in the stem: every occurrence is
///    replaced with the material (`iron_pickaxe.png` -> `ruby_pickaxe.png`).
/// 2. The stem contains an underscore: the first segment is replaced with
///    the material (`steel_axe.png` -> `ruby_axe.png`).
/// 3. Otherwise the material is prefixed (`sword.png` -> `ruby_sword.png`).
///
/// The extension is preserved as-is.
pub fn output_file_name(source: &str, material: &MaterialName, placeholder: &str) -> String {
    let (stem, ext) = match source.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (source, None),
    };

    let new_stem = if !placeholder.is_empty() && stem.contains(placeholder) {
        stem.replace(placeholder, material.as_str())
    } else if let Some((_, rest)) = stem.split_once('_') {
        format!("{}_{}", material, rest)
    } else {
        format!("{}_{}", material, stem)
    };

    match ext {
        Some(ext) => format!("{}.{}", new_stem, ext),
        None => new_stem,
    }
}

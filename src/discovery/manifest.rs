//! Project manifest (retint.yaml) parsing.
//!
//! The manifest holds per-project defaults for the generate command:
//! directories, the placeholder token, and tuning/policy thresholds.
//! Every field is optional; CLI flags override manifest values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, RetintError};
use crate::recolor::{SelectionPolicy, ToneTuning};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "retint.yaml";

/// Project manifest loaded from retint.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory scanned for source sprites. Defaults to `sprites`.
    pub input: Option<PathBuf>,

    /// Output directory. Defaults to the material name.
    pub output: Option<PathBuf>,

    /// Placeholder token in source file names. Defaults to `iron`.
    pub placeholder: Option<String>,

    /// Default material token.
    pub material: Option<String>,

    /// Default base colour as a hex string.
    pub colour: Option<String>,

    /// Default integer upscale factor.
    pub scale: Option<u32>,

    /// Mapper blend weights.
    pub tuning: Option<ToneTuning>,

    /// Pixel eligibility thresholds.
    pub policy: Option<SelectionPolicy>,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RetintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        serde_yaml::from_str(&source).map_err(|e| RetintError::Parse {
            message: format!("Invalid manifest {}: {}", path.display(), e),
            help: Some("See 'retint init' for a valid retint.yaml".to_string()),
        })
    }

    /// Load the manifest next to `dir` if one exists, defaults otherwise.
    pub fn find(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        fs::write(
            &path,
            r##"
input: textures
output: dist
placeholder: iron
material: ruby
colour: "#C81919"
scale: 2
tuning:
  saturation_spread: 0.3
  value_keep: 0.7
policy:
  grey_tolerance: 16
  bright_floor: 110
  wood:
    red_floor: 90
"##,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.input, Some(PathBuf::from("textures")));
        assert_eq!(manifest.placeholder.as_deref(), Some("iron"));
        assert_eq!(manifest.scale, Some(2));

        let tuning = manifest.tuning.unwrap();
        assert_eq!(tuning.saturation_spread, 0.3);
        assert_eq!(tuning.value_keep, 0.7);

        let policy = manifest.policy.unwrap();
        assert_eq!(policy.grey_tolerance, 16);
        assert_eq!(policy.bright_floor, 110);
        // Unset wood fields keep their defaults.
        assert_eq!(policy.wood.red_floor, 90);
        assert_eq!(policy.wood.green_floor, 50);
    }

    #[test]
    fn test_load_empty_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        fs::write(&path, "{}").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.input.is_none());
        assert!(manifest.tuning.is_none());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        fs::write(&path, "scale: [not a number").unwrap();

        assert!(matches!(
            Manifest::load(&path),
            Err(RetintError::Parse { .. })
        ));
    }

    #[test]
    fn test_find_defaults_when_absent() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::find(dir.path()).unwrap();
        assert!(manifest.colour.is_none());
    }
}

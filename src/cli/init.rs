//! Init command implementation.
//!
//! Generates a commented `retint.yaml` with the default thresholds spelled
//! out, so projects can tune them without reading the source.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::MANIFEST_FILENAME;
use crate::error::{Result, RetintError};
use crate::output::{display_path, Printer};

/// Initialize a retint project by generating a retint.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the manifest in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing retint.yaml
    #[arg(long)]
    pub force: bool,
}

const TEMPLATE: &str = "\
# retint project manifest. Every field is optional; CLI flags win.

# Directory scanned for source sprites.
input: sprites

# Output directory. Defaults to the material name when unset.
#output: dist

# Token substituted with the material in source file names.
placeholder: iron

# Defaults for the generate command.
#material: ruby
#colour: \"#C81919\"
#scale: 1

# Mapper blend weights.
tuning:
  # How strongly a pixel's own saturation perturbs the base saturation.
  saturation_spread: 0.2
  # Weight of the pixel's brightness in the output (rest from the base).
  value_keep: 0.6

# Pixel eligibility thresholds.
policy:
  # Channels within this band of each other count as grey.
  grey_tolerance: 20
  # Non-grey pixels need all channels above this to be recoloured.
  bright_floor: 100
  # Warm browns matching these bounds are never recoloured.
  wood:
    red_floor: 100
    green_floor: 50
    blue_ceiling: 50
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(RetintError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, TEMPLATE).map_err(|e| RetintError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}

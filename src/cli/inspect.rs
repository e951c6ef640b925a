//! Inspect command implementation.
//!
//! Classifies every pixel of one sprite and prints a census: how much of
//! the image is transparent, grey-like, wood-like, or otherwise, and how
//! many pixels a given base colour would actually change.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::Manifest;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::recolor::{ColourMapper, SelectionPolicy, Sprite};
use crate::types::Colour;

/// Report how a sprite's pixels classify for recolouring
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Sprite file to inspect
    #[arg(required = true)]
    pub file: PathBuf,

    /// Base colour to preview the recolour against
    #[arg(long, short = 'c')]
    pub colour: Option<String>,

    /// Directory holding retint.yaml (default: current directory)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Print the census as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Pixel classification counts for one sprite.
#[derive(Debug, Default, Serialize)]
pub struct Census {
    pub width: u32,
    pub height: u32,
    pub total: usize,
    pub transparent: usize,
    pub grey: usize,
    pub wood: usize,
    pub eligible: usize,
    pub untouched: usize,
    /// Pixels the mapper would change, when a base colour was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub would_change: Option<usize>,
}

/// Classify every pixel of a sprite under a policy.
pub fn census(sprite: &Sprite, policy: &SelectionPolicy, mapper: Option<&ColourMapper>) -> Census {
    let mut census = Census {
        width: sprite.width(),
        height: sprite.height(),
        ..Census::default()
    };
    let mut would_change = mapper.is_some().then_some(0usize);

    for y in 0..sprite.height() {
        for x in 0..sprite.width() {
            let colour = sprite.pixel(x, y);
            census.total += 1;

            if colour.is_transparent() {
                census.transparent += 1;
                continue;
            }

            if policy.is_grey(colour) {
                census.grey += 1;
            }
            if policy.is_wood(colour) {
                census.wood += 1;
            }

            if policy.eligible(colour) {
                census.eligible += 1;
                if let (Some(mapper), Some(count)) = (mapper, would_change.as_mut()) {
                    if mapper.map(colour) != colour {
                        *count += 1;
                    }
                }
            } else {
                census.untouched += 1;
            }
        }
    }

    census.would_change = would_change;
    census
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let project = args.project.clone().unwrap_or_else(|| PathBuf::from("."));
    let manifest = Manifest::find(&project)?;
    let policy = manifest.policy.unwrap_or_default();
    let tuning = manifest.tuning.unwrap_or_default();

    let mapper = match &args.colour {
        Some(hex) => Some(ColourMapper::with_tuning(Colour::from_hex(hex)?, tuning)),
        None => None,
    };

    let sprite = Sprite::load(&args.file)?;
    let census = census(&sprite, &policy, mapper.as_ref());

    printer.status(
        "Inspected",
        &format!(
            "{} ({}x{})",
            display_path(&args.file),
            census.width,
            census.height
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&census).map_err(|e| {
            crate::error::RetintError::Build {
                message: format!("Failed to serialize census: {}", e),
                help: None,
            }
        })?;
        println!("{}", json);
        return Ok(());
    }

    println!("total: {}", census.total);
    println!("transparent: {}", census.transparent);
    println!("grey: {}", census.grey);
    println!("wood: {}", census.wood);
    println!("eligible: {}", census.eligible);
    println!("untouched: {}", census.untouched);
    if let Some(count) = census.would_change {
        println!("would_change: {}", count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};

    fn tool_sprite() -> Sprite {
        // 3x1: grey, wood, transparent.
        let mut img: RgbaImage = ImageBuffer::new(3, 1);
        img.put_pixel(0, 0, Rgba([128, 128, 128, 255]));
        img.put_pixel(1, 0, Rgba([137, 103, 39, 255]));
        img.put_pixel(2, 0, Rgba([9, 9, 9, 0]));
        Sprite::from_image("iron_axe.png", img)
    }

    #[test]
    fn test_census_classification() {
        let sprite = tool_sprite();
        let census = census(&sprite, &SelectionPolicy::default(), None);

        assert_eq!(census.total, 3);
        assert_eq!(census.transparent, 1);
        assert_eq!(census.grey, 1);
        assert_eq!(census.wood, 1);
        assert_eq!(census.eligible, 1);
        assert_eq!(census.untouched, 1);
        assert_eq!(census.would_change, None);
    }

    #[test]
    fn test_census_would_change() {
        let sprite = tool_sprite();
        let mapper = ColourMapper::new(Colour::rgb(0, 255, 0));
        let census = census(&sprite, &SelectionPolicy::default(), Some(&mapper));

        // The grey pixel shifts; wood and transparent never count.
        assert_eq!(census.would_change, Some(1));
    }

    #[test]
    fn test_census_serializes() {
        let sprite = tool_sprite();
        let census = census(&sprite, &SelectionPolicy::default(), None);
        let json = serde_json::to_value(&census).unwrap();

        assert_eq!(json["total"], 3);
        assert!(json.get("would_change").is_none());
    }
}

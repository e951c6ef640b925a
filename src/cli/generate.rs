//! Generate command implementation.
//!
//! Recolours every sprite in the input library and writes the results under
//! the material's name. One bad sprite is reported and skipped; the rest of
//! the batch still completes.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_sprites, Manifest};
use crate::error::{Result, RetintError};
use crate::output::{display_path, plural, Printer};
use crate::recolor::{ColourMapper, RecolorJob, RecolorReport};
use crate::types::{Colour, MaterialName, DEFAULT_PLACEHOLDER};

/// Recolour a sprite library and write it under a material name
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Base colour as a hex string (e.g. "#C81919")
    #[arg(long, short = 'c')]
    pub colour: Option<String>,

    /// Material token substituted into output file names
    #[arg(long, short = 'm')]
    pub material: Option<String>,

    /// Directory containing the source sprites
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output directory (default: the material name)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale factor for written sprites
    #[arg(long)]
    pub scale: Option<u32>,

    /// Placeholder token replaced in source file names
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Directory holding retint.yaml (default: current directory)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let project = args.project.clone().unwrap_or_else(|| PathBuf::from("."));
    let manifest = Manifest::find(&project)?;

    let colour = resolve_colour(&args, &manifest)?;
    let material = resolve_material(&args, &manifest)?;

    let input = args
        .input
        .clone()
        .or(manifest.input.clone())
        .unwrap_or_else(|| PathBuf::from("sprites"));

    let output = args
        .output
        .clone()
        .or(manifest.output.clone())
        .unwrap_or_else(|| PathBuf::from(material.as_str()));

    let placeholder = args
        .placeholder
        .clone()
        .or(manifest.placeholder.clone())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    let scale = args.scale.or(manifest.scale).unwrap_or(1);
    let tuning = manifest.tuning.unwrap_or_default();
    let policy = manifest.policy.unwrap_or_default();

    let sources = scan_sprites(&input);
    if sources.is_empty() {
        return Err(RetintError::Build {
            message: format!("No sprites found in {}", input.display()),
            help: Some("Point --input at a directory containing PNG sprites".to_string()),
        });
    }

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| RetintError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    printer.status(
        "Recolouring",
        &format!(
            "{} from {} as {} ({})",
            plural(sources.len(), "sprite", "sprites"),
            display_path(&input),
            material,
            colour
        ),
    );

    let job = RecolorJob {
        mapper: ColourMapper::with_tuning(colour, tuning),
        policy,
        material,
        placeholder,
        output_dir: output.clone(),
        scale,
    };

    let report = job.run(&sources);
    print_report(&report, printer);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| RetintError::Build {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    if report.written.is_empty() {
        return Err(RetintError::Build {
            message: "No sprites could be recoloured".to_string(),
            help: None,
        });
    }

    printer.status(
        "Generated",
        &format!(
            "{} to {}",
            plural(report.written.len(), "sprite", "sprites"),
            display_path(&output)
        ),
    );

    Ok(())
}

fn resolve_colour(args: &GenerateArgs, manifest: &Manifest) -> Result<Colour> {
    let hex = args
        .colour
        .as_deref()
        .or(manifest.colour.as_deref())
        .ok_or_else(|| RetintError::Build {
            message: "No base colour given".to_string(),
            help: Some("Pass --colour '#RRGGBB' or set colour in retint.yaml".to_string()),
        })?;

    Colour::from_hex(hex)
}

fn resolve_material(args: &GenerateArgs, manifest: &Manifest) -> Result<MaterialName> {
    let token = args
        .material
        .as_deref()
        .or(manifest.material.as_deref())
        .ok_or_else(|| RetintError::Build {
            message: "No material name given".to_string(),
            help: Some("Pass --material <name> or set material in retint.yaml".to_string()),
        })?;

    MaterialName::new(token)
}

fn print_report(report: &RecolorReport, printer: &Printer) {
    for written in &report.written {
        let source = file_name(&written.source);
        let output = file_name(&written.output);
        printer.status(
            "Recoloured",
            &format!(
                "{} -> {} {}",
                source,
                output,
                printer.dim(&format!("({} px)", written.changed))
            ),
        );
    }

    for failure in &report.failures {
        printer.error("Failed", &format!("{}: {}", file_name(&failure.source), failure.error));
    }

    if !report.failures.is_empty() {
        printer.warning(
            "Skipped",
            &plural(report.failures.len(), "sprite", "sprites"),
        );
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
}

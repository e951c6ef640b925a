pub mod completions;
pub mod generate;
pub mod init;
pub mod inspect;

use clap::{Parser, Subcommand};

/// retint - Recolour sprite libraries to a base colour
#[derive(Parser, Debug)]
#[command(name = "retint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recolour a sprite library and write it under a material name
    Generate(generate::GenerateArgs),

    /// Report how a sprite's pixels classify for recolouring
    Inspect(inspect::InspectArgs),

    /// Initialize a retint project (generates retint.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

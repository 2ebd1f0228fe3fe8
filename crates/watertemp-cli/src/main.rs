// crates/watertemp-cli/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use watertemp_core::{pipeline, AnalysisConfig, CsvUpload};

/// A CLI for the water temperature analysis pipeline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Computes per-location average water temperatures from a CSV file.
    Analyze {
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file } => {
            let contents = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let filename = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();

            let upload = CsvUpload::new(filename, &contents);
            let averages = pipeline::analyze(&upload, &AnalysisConfig::default())?;

            println!("{}", serde_json::to_string_pretty(&averages)?);
            eprintln!("{} locations averaged", averages.len());
        }
    }

    Ok(())
}

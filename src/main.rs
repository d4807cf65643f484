use anyhow::{Context, Result};
use clap::Parser;
use log::*;
use pose_matrix_export::{export, ExportConfig, OutputFormat};
use simplelog::{Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export_poses")]
#[command(about = "Convert a pose trajectory into flattened 4x4 transformation matrices")]
struct Args {
    /// Path to the sequence
    #[arg(long)]
    path: Option<PathBuf>,

    /// Name of the input file [default: poses.txt]
    #[arg(long = "input_file")]
    input_file: Option<String>,

    /// Name of the output file [default: poses_matrix.txt]
    #[arg(long = "output_file")]
    output_file: Option<String>,

    /// JSON file with any of "path", "input_file", "output_file", "format"
    #[arg(long)]
    config: Option<PathBuf>,

    /// What to write per pose
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };
        if let Some(path) = self.path {
            config.path = Some(path);
        }
        if let Some(input_file) = self.input_file {
            config.input_file = input_file;
        }
        if let Some(output_file) = self.output_file {
            config.output_file = output_file;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // stdout is left to the data, everything we log goes to stderr
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr).is_err() {
        WriteLogger::init(level, Config::default(), std::io::stderr())?;
    }

    let config = args.into_config()?;
    debug!("Export config {:?}", config);
    export(&config).context("Failed exporting poses")?;
    Ok(())
}

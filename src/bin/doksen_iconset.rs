//! Doksen Iconset CLI
//!
//! Commands: generate (default), style, validate
//! Logs go to stderr, JSON output to stdout
//! Returns 2 on style validation failure

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use doksen_iconset::{
    IconsetError, IconsetGenerator, StripeStyle, Validator,
    DEFAULT_OUTPUT_DIR, GENERATOR_VERSION,
};

#[derive(Parser)]
#[command(name = "doksen-iconset")]
#[command(about = "Generate the Doksen AppIcon.appiconset (PNGs + Contents.json)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output directory for the icon set
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, global = true)]
    out_dir: PathBuf,

    /// JSON style file overriding the built-in stripe constants
    #[arg(short, long, global = true)]
    style: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render all icon sizes and write Contents.json
    Generate {
        /// Print the generation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective style as JSON
    Style,

    /// Validate a style file
    Validate,
}

fn load_style(path: Option<&Path>) -> Result<StripeStyle, IconsetError> {
    match path {
        Some(p) => StripeStyle::load_from_file(p),
        None => Ok(StripeStyle::default()),
    }
}

fn generate(style: StripeStyle, out_dir: PathBuf, json: bool) -> Result<(), IconsetError> {
    let generator = IconsetGenerator::new(style, out_dir)?;
    log::info!("generating icon set into {}", generator.output_dir().display());
    let report = generator.run()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("doksen-iconset {}", GENERATOR_VERSION);

    let style = match load_style(cli.style.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Commands::Generate { json: false }) {
        Commands::Generate { json } => match generate(style, cli.out_dir, json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Style => match serde_json::to_string_pretty(&style) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Validate => {
            let result = Validator::new().validate(&style);
            match serde_json::to_string_pretty(&result) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    log::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
            if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Validation failure
            }
        }
    }
}

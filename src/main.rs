use clap::Parser;
use std::path::PathBuf;
use anyhow::Result;
use log::{debug, LevelFilter};

mod farm;
mod output;
mod sound;
mod types;

/// FarmSound - every animal on the farm knows how to make a sound
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Farm file (JSON list of {name, species}) to use instead of the default animals
    #[arg(short, long)]
    farm: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short = 'j', long, conflicts_with = "color")]
    json: bool,

    /// Colorize text output
    #[arg(short, long)]
    color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let farm = match &cli.farm {
        Some(path) => farm::load_farm(path)?,
        None => farm::default_farm(),
    };
    debug!("{} animals on the farm", farm.len());
    for animal in &farm {
        debug!("  {} the {}", animal.name, animal.species.as_str());
    }

    colored::control::set_override(cli.color);

    if cli.json {
        output::output_json(&farm)?;
    } else if cli.farm.is_none() {
        output::output_default_text(cli.color)?;
    } else {
        output::output_text(farm, cli.color)?;
    }

    Ok(())
}

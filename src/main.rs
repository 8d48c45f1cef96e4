use anyhow::{Context, Result};
use avpick::config::{AppConfig, OutputFormat};
use avpick::utils::init_logging;
use avpick::{Catalog, Picker, Quality};
use clap::Parser;
use std::path::PathBuf;

/// Pick the best audio/video variants of a catalog for each quality tier
#[derive(Debug, Parser)]
#[command(name = "avpick", version)]
struct Cli {
    /// JSON array of catalog entries
    catalog: PathBuf,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print this tier (best, high, medium, low)
    #[arg(short, long)]
    quality: Option<Quality>,

    /// Output format (text, json), overrides the config
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the effective config back to the config path
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    let _guard = init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load(),
    };

    if cli.write_config {
        let path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
        config.save_to(&path)?;
    }

    let catalog = Catalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog {}", cli.catalog.display()))?;
    let picker = Picker::from_source(&catalog, config.profile.clone());

    let tiers: Vec<Quality> = match cli.quality {
        Some(q) => vec![q],
        None => Quality::TIERS.to_vec(),
    };

    match cli.format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            let json = match cli.quality {
                Some(q) => {
                    let ids: Vec<usize> = picker.get(q).iter().map(|v| v.id).collect();
                    serde_json::to_string_pretty(&ids)?
                }
                None => serde_json::to_string_pretty(&picker.summary())?,
            };
            println!("{}", json);
        }
        OutputFormat::Text => {
            for quality in tiers {
                println!("{}:", quality);
                for variant in picker.get(quality) {
                    let url = catalog.url_for(variant.id).unwrap_or("-");
                    println!("  {} {}", variant, url);
                }
            }
        }
    }

    Ok(())
}

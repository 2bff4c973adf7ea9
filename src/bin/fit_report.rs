//! Fit report for the sample profiles
//!
//! Usage: fit_report [GARMENT] [SIZE] [--svg | --json] [--config PATH]
//!
//! Evaluates GARMENT (default tshirt) in SIZE (default: each profile's
//! recommended size) for the petite/average/tall sample profiles and prints
//! Markdown, SVG or JSON.

use anyhow::{bail, Context, Result};
use garment_fit_rust::profiles::sample_profiles;
use garment_fit_rust::{EngineConfig, FitEngine, JsonFormatter, MarkdownFormatter, SvgFormatter};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Markdown,
    Svg,
    Json,
}

struct Args {
    garment: String,
    size: Option<String>,
    format: OutputFormat,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        garment: "tshirt".to_string(),
        size: None,
        format: OutputFormat::Markdown,
        config: None,
    };
    let mut positional = Vec::new();

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--svg" => args.format = OutputFormat::Svg,
            "--json" => args.format = OutputFormat::Json,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    if let Some(garment) = positional.next() {
        args.garment = garment;
    }
    args.size = positional.next();
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garment_fit_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = FitEngine::with_config(config).context("Fit reference data failed validation")?;

    let profiles = sample_profiles();
    let start = Instant::now();
    for profile in &profiles {
        let size = match &args.size {
            Some(size) => size.clone(),
            None => engine
                .recommend(&args.garment, Some(&profile.measurements))
                .to_string(),
        };
        let report = engine.evaluate_and_visualize(&args.garment, &size, Some(&profile.measurements));

        match args.format {
            OutputFormat::Markdown => {
                println!("{}", "=".repeat(70));
                println!("PROFILE: {}", profile.name);
                println!("{}\n", "=".repeat(70));
                println!("{}", MarkdownFormatter::format(&report));
            }
            OutputFormat::Svg => {
                println!("<!-- {} -->", profile.name);
                print!("{}", SvgFormatter::format(&report.visualization));
            }
            OutputFormat::Json => println!("{}", JsonFormatter::format(&report)?),
        }
    }
    tracing::info!("Rendered {} profiles in {:?}", profiles.len(), start.elapsed());

    Ok(())
}

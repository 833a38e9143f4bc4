//! Full analysis: features, both models, burnout score and advice.

use std::path::PathBuf;

use clap::Args;
use studypulse_core::{Analyzer, Config, ModelBundle};
use tracing::debug;

use super::input::DayArgs;
use crate::render;

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub day: DayArgs,

    /// Directory with the model artifacts (defaults to the configured one)
    #[arg(long = "models-dir")]
    pub models_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let models_dir = match args.models_dir {
        Some(dir) => dir,
        None => config.models_dir()?,
    };
    debug!(models_dir = %models_dir.display(), "loading models");
    let bundle = ModelBundle::load_from_dir(
        &models_dir,
        &config.models.performance_file,
        &config.models.burnout_file,
    )?;

    let record = args.day.to_record();
    let report =
        Analyzer::from_config(&config).analyze(&record, &bundle.performance, &bundle.burnout)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render::summary(report.record()));
    println!();
    println!("{}", render::metrics(&report));
    println!();
    println!("{}", render::advice(&report.advice));

    Ok(())
}

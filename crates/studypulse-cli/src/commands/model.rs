use std::path::PathBuf;

use clap::Subcommand;
use studypulse_core::{Config, ModelArtifact, ModelBundle};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the loaded model artifacts
    Inspect {
        /// Directory with the model artifacts (defaults to the configured one)
        #[arg(long = "models-dir")]
        models_dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Inspect { models_dir, json } => inspect(models_dir, json),
    }
}

fn describe(slot: &str, artifact: &ModelArtifact) -> serde_json::Value {
    serde_json::json!({
        "slot": slot,
        "name": artifact.name,
        "kind": artifact.kind,
        "version": artifact.version,
        "feature_count": artifact.features.len(),
        "intercept": artifact.intercept,
    })
}

fn inspect(models_dir: Option<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let dir = match models_dir {
        Some(dir) => dir,
        None => config.models_dir()?,
    };
    let bundle = ModelBundle::load_from_dir(
        &dir,
        &config.models.performance_file,
        &config.models.burnout_file,
    )?;

    let slots = [
        ("performance", bundle.performance.artifact()),
        ("burnout", bundle.burnout.artifact()),
    ];

    if json {
        let values: Vec<_> = slots.iter().map(|(s, a)| describe(s, a)).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    println!("Models in {}", dir.display());
    for (slot, artifact) in slots {
        println!(
            "  {slot:<12} {} ({}, version {}, {} features)",
            artifact.name,
            artifact.kind,
            if artifact.version.is_empty() { "-" } else { artifact.version.as_str() },
            artifact.features.len()
        );
    }
    Ok(())
}

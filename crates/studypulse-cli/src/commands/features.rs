use clap::Args;
use studypulse_core::{Config, FeatureDeriver};

use super::input::DayArgs;
use crate::render;

#[derive(Args)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub day: DayArgs,

    /// Output as JSON (column name -> value)
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FeaturesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let row = FeatureDeriver::with_config(config.features).derive(&args.day.to_record());

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = row
            .columns()
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        println!("{}", render::features(&row));
    }
    Ok(())
}

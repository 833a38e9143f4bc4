use clap::Args;
use studypulse_core::{Analyzer, Config};

use super::input::DayArgs;
use crate::render;

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub day: DayArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let assessment = Analyzer::from_config(&config).assess(&args.day.to_record());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("{}", render::burnout(&assessment.burnout));
    println!();
    println!("{}", render::advice(&assessment.advice));
    Ok(())
}

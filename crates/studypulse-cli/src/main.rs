use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "studypulse", version, about = "StudyPulse CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a study day with both models
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show the derived feature row
    Features(commands::features::FeaturesArgs),
    /// Rule-based burnout score and advice, no models
    Score(commands::score::ScoreArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Model artifact inspection
    Model {
        #[command(subcommand)]
        action: commands::model::ModelAction,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Features(args) => commands::features::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Model { action } => commands::model::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

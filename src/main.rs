use anyhow::Result;
use clap::Parser;
use gradmap::cli::{Cli, Commands};
use gradmap::commands::{check, init, rank};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Rank {
            path,
            format,
            output,
            config,
            top,
            min_score,
            price_min,
            price_max,
            cities,
            modalities,
            require_internship,
            verbosity,
        } => rank::handle_rank(rank::RankConfig {
            path,
            format,
            output,
            config,
            top,
            min_score,
            price_min,
            price_max,
            cities: non_empty(cities),
            modalities: non_empty(modalities),
            require_internship,
            verbosity,
        }),
        Commands::Check { path, config } => check::handle_check(check::CheckConfig { path, config }),
        Commands::Init { force } => init::init_config(force),
    }
}

fn non_empty(values: Option<Vec<String>>) -> Option<Vec<String>> {
    values.filter(|v| !v.is_empty())
}

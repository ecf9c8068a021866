use anyhow::Result;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config;
use crate::core::RankedPrograms;
use crate::io::{create_writer, SourceCache};
use crate::query::ProgramFilter;
use crate::scoring;

/// Resolved options for the `rank` subcommand.
pub struct RankConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub top: Option<usize>,
    pub min_score: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub cities: Option<Vec<String>>,
    pub modalities: Option<Vec<String>>,
    pub require_internship: bool,
    pub verbosity: u8,
}

pub fn handle_rank(cfg: RankConfig) -> Result<()> {
    let config = config::load(cfg.config.as_deref())?;

    let mut cache = SourceCache::new();
    let programs = cache.load(&cfg.path, &config)?;
    log::info!("loaded {} program(s) from {}", programs.len(), cfg.path.display());

    let scored = scoring::score(programs, &config);
    // Summary figures describe the whole catalog; filters narrow only the
    // listing below them.
    let summary = scoring::summarize(&scored);

    let filter = build_filter(&cfg);
    let mut selected = filter.apply(&scored);
    if let Some(top) = cfg.top {
        selected.truncate(top);
    }
    log::info!("{} program(s) after filtering", selected.len());

    let report = RankedPrograms {
        source: cfg.path.clone(),
        generated_at: Utc::now(),
        summary,
        programs: selected,
    };

    let out: Box<dyn Write> = match &cfg.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(out, cfg.format.into(), cfg.verbosity > 0);
    writer.write_ranking(&report)?;
    Ok(())
}

fn build_filter(cfg: &RankConfig) -> ProgramFilter {
    let mut filter = ProgramFilter::new();
    if cfg.price_min.is_some() || cfg.price_max.is_some() {
        filter = filter.price_between(
            cfg.price_min.unwrap_or(0.0),
            cfg.price_max.unwrap_or(f64::INFINITY),
        );
    }
    if let Some(min_score) = cfg.min_score {
        filter = filter.min_score(min_score);
    }
    if let Some(cities) = &cfg.cities {
        filter = filter.in_cities(cities.iter().cloned());
    }
    if let Some(modalities) = &cfg.modalities {
        filter = filter.with_modalities(modalities.iter().cloned());
    }
    filter.require_internship(cfg.require_internship)
}

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::config;
use crate::io::load_programs;
use crate::scoring::warnings;

/// Resolved options for the `check` subcommand.
pub struct CheckConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
}

/// Load a catalog and report repairs and data-quality findings without
/// producing a ranking. Useful after editing the catalog by hand.
pub fn handle_check(cfg: CheckConfig) -> Result<()> {
    let config = config::load(cfg.config.as_deref())?;
    let programs = load_programs(&cfg.path, &config)?;

    println!(
        "{} {} program(s) loaded from {}",
        "ok:".green().bold(),
        programs.len(),
        cfg.path.display()
    );

    let mut findings = 0usize;
    for program in &programs {
        for field in &program.imputed_fields {
            findings += 1;
            println!(
                "{} {}: {} was missing, imputed from the cohort median",
                "repair:".cyan().bold(),
                display_name(program),
                field
            );
        }
        for warning in warnings::evaluate(program, &config.validation) {
            findings += 1;
            println!(
                "{} {}: {}",
                "warning:".yellow().bold(),
                display_name(program),
                warning
            );
        }
    }

    if findings == 0 {
        println!("{} no data-quality findings", "ok:".green().bold());
    } else {
        println!("{findings} finding(s)");
    }
    Ok(())
}

fn display_name(program: &crate::core::Program) -> &str {
    if program.name.is_empty() {
        &program.id
    } else {
        &program.name
    }
}

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

/// The generated default configuration, tuned for the
/// industrial-engineering persona.
pub const DEFAULT_CONFIG: &str = r#"# gradmap configuration
#
# Weights do not have to sum to 1.0: the final score is the weighted sum
# of the sub-scores divided by the sum of the weights, so it always stays
# on a 0-100 scale. A weight of 0 disables a dimension.
# Tip: scores below ~40 rarely deserve a visit day.

[weights]
profile_fit = 0.30
analytic = 0.25
managerial = 0.15
practical = 0.20
cost = 0.10
# Set above 0 to use the employability columns where the catalog has them.
employability = 0.0

# The persona taxonomy: each category pays out its points when ANY of its
# keywords appears in the program name, curriculum or keyword list
# (case-insensitive). The total is clipped to 100.

[[profile.category]]
name = "operations"
keywords = ["operaciones", "operations", "procesos", "process", "supply chain"]
points = 40

[[profile.category]]
name = "industry-4.0"
keywords = ["industria 4.0", "industry 4.0", "digital"]
points = 30

[[profile.category]]
name = "analytics"
keywords = ["analitica", "analítica", "analytics", "datos", "data"]
points = 30

[cost]
# "per-credit" scores price per ECTS credit; "total-price" scores the
# sticker price alone.
basis = "per-credit"

[practical]
rating = 0.6
internship = 0.4

[employability]
employment_rate = 0.6
partner_network = 0.4

# Missing-value repair per column: "median" (of the current load),
# "zero", or "none" (leave missing; the record scores 0).

[imputation]
total_price_eur = "median"
credits_ects = "median"
duration_months = "median"
analytic_pct = "zero"
managerial_pct = "zero"
practical_focus = "zero"

[validation]
min_combined_focus = 60.0
min_practical_focus = 2.0
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}

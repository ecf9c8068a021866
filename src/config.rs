//! Configuration surface for gradmap.
//!
//! The weight map and the keyword-category taxonomy are the single place
//! persona tuning happens; both load from `.gradmap.toml` so retuning
//! never touches scoring code. Every section has serde defaults, so a
//! partial config file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::errors::GradmapError;

pub const CONFIG_FILE_NAME: &str = ".gradmap.toml";

/// Scoring weights, one per dimension.
///
/// Weights do not have to sum to 1.0: the scorer divides the weighted sum
/// by the declared weight sum, so the final score stays 0-100-scaled
/// whatever the weights add up to. Weights are never silently rescaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the keyword-taxonomy profile-fit score
    #[serde(default = "default_profile_fit_weight")]
    pub profile_fit: f64,

    /// Weight for the analytic-focus percentage (pass-through)
    #[serde(default = "default_analytic_weight")]
    pub analytic: f64,

    /// Weight for the managerial-focus percentage (pass-through)
    #[serde(default = "default_managerial_weight")]
    pub managerial: f64,

    /// Weight for the practical-orientation blend
    #[serde(default = "default_practical_weight")]
    pub practical: f64,

    /// Weight for the cost score
    #[serde(default = "default_cost_weight")]
    pub cost: f64,

    /// Weight for the employability blend. 0 disables the dimension;
    /// it is also skipped when the source has no employability columns.
    #[serde(default)]
    pub employability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            profile_fit: default_profile_fit_weight(),
            analytic: default_analytic_weight(),
            managerial: default_managerial_weight(),
            practical: default_practical_weight(),
            cost: default_cost_weight(),
            employability: 0.0,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("profile_fit", self.profile_fit),
            ("analytic", self.analytic),
            ("managerial", self.managerial),
            ("practical", self.practical),
            ("cost", self.cost),
            ("employability", self.employability),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }

    /// Validate that every weight is a finite non-negative number and at
    /// least one dimension carries weight.
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in self.named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                ));
            }
        }
        if self.sum() <= 0.0 {
            return Err("scoring weights must not all be zero".to_string());
        }
        Ok(())
    }
}

fn default_profile_fit_weight() -> f64 {
    0.30
}
fn default_analytic_weight() -> f64 {
    0.25
}
fn default_managerial_weight() -> f64 {
    0.15
}
fn default_practical_weight() -> f64 {
    0.20
}
fn default_cost_weight() -> f64 {
    0.10
}

/// One category of the profile-fit taxonomy: if the program's searchable
/// text contains ANY of the keywords (case-insensitive substring), the
/// category's points are awarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCategory {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub points: f64,
    /// When set, the category matches on the internship flag instead of
    /// the searchable text.
    #[serde(default)]
    pub requires_internship: bool,
}

/// The persona's keyword taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTaxonomy {
    #[serde(default = "default_categories", rename = "category")]
    pub categories: Vec<ProfileCategory>,
}

impl Default for ProfileTaxonomy {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

impl ProfileTaxonomy {
    pub fn validate(&self) -> Result<(), String> {
        if self.categories.is_empty() {
            return Err("profile taxonomy must define at least one category".to_string());
        }
        for cat in &self.categories {
            if !cat.points.is_finite() || cat.points < 0.0 {
                return Err(format!(
                    "category '{}' points must be a non-negative number",
                    cat.name
                ));
            }
            if cat.keywords.is_empty() && !cat.requires_internship {
                return Err(format!("category '{}' has no keywords", cat.name));
            }
        }
        Ok(())
    }
}

/// Default taxonomy for the industrial-engineering persona: programs that
/// bridge operations, digital technology and data. Keywords are bilingual
/// because the source catalogs mix Spanish and English copy.
fn default_categories() -> Vec<ProfileCategory> {
    vec![
        ProfileCategory {
            name: "operations".to_string(),
            keywords: [
                "operaciones",
                "operations",
                "procesos",
                "process",
                "supply chain",
            ]
            .map(String::from)
            .to_vec(),
            points: 40.0,
            requires_internship: false,
        },
        ProfileCategory {
            name: "industry-4.0".to_string(),
            keywords: ["industria 4.0", "industry 4.0", "digital"]
                .map(String::from)
                .to_vec(),
            points: 30.0,
            requires_internship: false,
        },
        ProfileCategory {
            name: "analytics".to_string(),
            keywords: ["analitica", "analítica", "analytics", "datos", "data"]
                .map(String::from)
                .to_vec(),
            points: 30.0,
            requires_internship: false,
        },
    ]
}

/// What the cost dimension measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostBasis {
    /// Price per ECTS credit, inverse-normalized (cost efficiency).
    #[default]
    PerCredit,
    /// Raw total price, inverse-normalized (the simpler earlier variant).
    TotalPrice,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostConfig {
    #[serde(default)]
    pub basis: CostBasis,
}

/// Blend weights for the practical-orientation score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticalBlend {
    /// Weight of the normalized 0-5 practicality rating
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    /// Weight of the internship flag
    #[serde(default = "default_internship_weight")]
    pub internship: f64,
}

impl Default for PracticalBlend {
    fn default() -> Self {
        Self {
            rating: default_rating_weight(),
            internship: default_internship_weight(),
        }
    }
}

fn default_rating_weight() -> f64 {
    0.6
}
fn default_internship_weight() -> f64 {
    0.4
}

/// Blend weights for the employability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployabilityBlend {
    /// Weight of the normalized six-month employment rate
    #[serde(default = "default_rate_weight")]
    pub employment_rate: f64,
    /// Weight of the normalized partner-network size
    #[serde(default = "default_network_weight")]
    pub partner_network: f64,
}

impl Default for EmployabilityBlend {
    fn default() -> Self {
        Self {
            employment_rate: default_rate_weight(),
            partner_network: default_network_weight(),
        }
    }
}

fn default_rate_weight() -> f64 {
    0.6
}
fn default_network_weight() -> f64 {
    0.4
}

fn validate_blend(name: &str, weights: &[f64]) -> Result<(), String> {
    for w in weights {
        if !w.is_finite() || *w < 0.0 {
            return Err(format!("{name} blend weights must be non-negative numbers"));
        }
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(format!("{name} blend weights must not all be zero"));
    }
    Ok(())
}

/// Repair strategy for a missing numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImputePolicy {
    /// Replace with the median of the attribute across the current load.
    Median,
    /// Replace with zero (used for columns later clamped to a range).
    Zero,
    /// Leave missing; the consuming dimension decides.
    None,
}

/// Per-column missing-value policy.
///
/// The historical variants disagreed on which columns were median-imputed
/// and which zero-filled; the choice is configuration here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImputationConfig {
    #[serde(default = "median_policy")]
    pub total_price_eur: ImputePolicy,
    #[serde(default = "median_policy")]
    pub credits_ects: ImputePolicy,
    #[serde(default = "median_policy")]
    pub duration_months: ImputePolicy,
    #[serde(default = "zero_policy")]
    pub analytic_pct: ImputePolicy,
    #[serde(default = "zero_policy")]
    pub managerial_pct: ImputePolicy,
    #[serde(default = "zero_policy")]
    pub practical_focus: ImputePolicy,
}

impl Default for ImputationConfig {
    fn default() -> Self {
        Self {
            total_price_eur: ImputePolicy::Median,
            credits_ects: ImputePolicy::Median,
            duration_months: ImputePolicy::Median,
            analytic_pct: ImputePolicy::Zero,
            managerial_pct: ImputePolicy::Zero,
            practical_focus: ImputePolicy::Zero,
        }
    }
}

fn median_policy() -> ImputePolicy {
    ImputePolicy::Median
}
fn zero_policy() -> ImputePolicy {
    ImputePolicy::Zero
}

/// Thresholds for the data-quality warning rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Warn when analytic + managerial focus falls below this sum.
    #[serde(default = "default_min_combined_focus")]
    pub min_combined_focus: f64,
    /// Warn when the practicality rating is below this AND no internship
    /// is offered.
    #[serde(default = "default_min_practical_focus")]
    pub min_practical_focus: f64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_combined_focus: default_min_combined_focus(),
            min_practical_focus: default_min_practical_focus(),
        }
    }
}

fn default_min_combined_focus() -> f64 {
    60.0
}
fn default_min_practical_focus() -> f64 {
    2.0
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradmapConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub profile: ProfileTaxonomy,
    #[serde(default)]
    pub cost: CostConfig,
    #[serde(default)]
    pub practical: PracticalBlend,
    #[serde(default)]
    pub employability: EmployabilityBlend,
    #[serde(default)]
    pub imputation: ImputationConfig,
    #[serde(default)]
    pub validation: ValidationRules,
}

impl GradmapConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.profile.validate()?;
        validate_blend(
            "practical",
            &[self.practical.rating, self.practical.internship],
        )?;
        validate_blend(
            "employability",
            &[
                self.employability.employment_rate,
                self.employability.partner_network,
            ],
        )?;
        Ok(())
    }
}

/// Parse and validate a config from its TOML text.
pub fn parse_config(contents: &str) -> Result<GradmapConfig, String> {
    let config: GradmapConfig =
        toml::from_str(contents).map_err(|e| format!("failed to parse config: {e}"))?;
    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Load configuration.
///
/// An explicit `--config` path must exist and parse; failure there is a
/// hard error. Without one, `.gradmap.toml` is searched from the current
/// directory upward, and a broken discovered file degrades to defaults
/// with a logged warning so a stray edit never blocks a ranking run.
pub fn load(explicit: Option<&Path>) -> Result<GradmapConfig, GradmapError> {
    if let Some(path) = explicit {
        let contents = read_config_file(path).map_err(|e| {
            GradmapError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        return parse_config(&contents)
            .map_err(|e| GradmapError::config(format!("{}: {e}", path.display())));
    }

    match discover_config_path() {
        Some(path) => match read_config_file(&path) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("{}: {e}; using defaults", path.display());
                    Ok(GradmapConfig::default())
                }
            },
            Err(e) => {
                log::warn!("cannot read {}: {e}; using defaults", path.display());
                Ok(GradmapConfig::default())
            }
        },
        None => Ok(GradmapConfig::default()),
    }
}

/// Walk from the current directory to the filesystem root looking for a
/// `.gradmap.toml`.
fn discover_config_path() -> Option<PathBuf> {
    let start = std::env::current_dir().ok()?;
    let mut dir: Option<&Path> = Some(start.as_path());
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}

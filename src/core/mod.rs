use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One candidate program as loaded from the data source, after field repair.
///
/// Numeric fields are plain `f64` because missing values have already been
/// imputed by the loader; the two employability signals stay optional since
/// earlier data variants do not carry those columns at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub university: String,
    pub city: String,
    pub modality: String,
    pub language: String,

    pub duration_months: f64,
    pub total_price_eur: f64,
    pub credits_ects: f64,

    pub curriculum: String,
    pub keywords: String,
    /// Practicality rating on a 0-5 scale.
    pub practical_focus: f64,
    pub internship_offered: bool,
    /// Analytic and managerial focus are independent 0-100 measurements,
    /// not a partition of 100%.
    pub analytic_pct: f64,
    pub managerial_pct: f64,

    /// Six-month employment rate (0-100). `None` when the source has no
    /// such column (earlier data variants).
    pub employment_rate_6m: Option<f64>,
    /// Partner-company network size. `None` when the column is absent.
    pub partner_network_size: Option<f64>,

    // Narrative fields, passed through untouched and never scored.
    pub consultant_analysis: String,
    pub career_path: String,
    pub pros: String,
    pub cons: String,
    pub official_link: String,

    /// Names of columns whose value was missing and repaired from the
    /// cohort median during loading.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imputed_fields: Vec<String>,
}

impl Program {
    /// The combined lowercase text the profile-fit matcher searches.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.name, self.curriculum, self.keywords).to_lowercase()
    }

    pub fn was_imputed(&self, field: &str) -> bool {
        self.imputed_fields.iter().any(|f| f == field)
    }
}

/// One 0-100 sub-score per scoring dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub profile_fit: f64,
    pub analytic: f64,
    pub managerial: f64,
    pub practical: f64,
    pub cost: f64,
    /// Present only when the employability dimension is configured and the
    /// source carries employability columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employability: Option<f64>,
}

/// A program together with its sub-scores, final score and any
/// data-quality warnings. Warnings never influence the score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredProgram {
    pub program: Program,
    pub scores: SubScores,
    pub final_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Collection-level figures shown alongside the ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub program_count: usize,
    pub average_price_eur: f64,
    /// The program with the best cost sub-score.
    pub best_value: Option<BestValue>,
    pub warning_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestValue {
    pub name: String,
    pub cost_score: f64,
}

/// The full ranking report handed to output writers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankedPrograms {
    pub source: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub summary: RankingSummary,
    /// Sorted by final score, descending; ties keep input order.
    pub programs: Vec<ScoredProgram>,
}

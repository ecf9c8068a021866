//! Filter/query layer over the ranked collection.
//!
//! Pure selection: predicates combine conjunctively and the scorer's sort
//! order is preserved. No scoring happens here.

use crate::core::ScoredProgram;
use std::collections::HashSet;

/// A filter specification. `None` fields are not applied.
#[derive(Debug, Clone, Default)]
pub struct ProgramFilter {
    /// Inclusive total-price range in EUR.
    pub price_range: Option<(f64, f64)>,
    /// Minimum final score.
    pub min_score: Option<f64>,
    /// Allowed cities, compared case-insensitively.
    pub cities: Option<HashSet<String>>,
    /// Allowed modalities, compared case-insensitively.
    pub modalities: Option<HashSet<String>>,
    /// Keep only programs that offer an internship.
    pub require_internship: bool,
}

impl ProgramFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    pub fn min_score(mut self, score: f64) -> Self {
        self.min_score = Some(score);
        self
    }

    pub fn in_cities<I: IntoIterator<Item = String>>(mut self, cities: I) -> Self {
        self.cities = Some(normalized_set(cities));
        self
    }

    pub fn with_modalities<I: IntoIterator<Item = String>>(mut self, modalities: I) -> Self {
        self.modalities = Some(normalized_set(modalities));
        self
    }

    pub fn require_internship(mut self, required: bool) -> Self {
        self.require_internship = required;
        self
    }

    /// Whether one scored program satisfies every configured predicate.
    pub fn matches(&self, scored: &ScoredProgram) -> bool {
        let program = &scored.program;

        if let Some((min, max)) = self.price_range {
            if program.total_price_eur < min || program.total_price_eur > max {
                return false;
            }
        }
        if let Some(min_score) = self.min_score {
            if scored.final_score < min_score {
                return false;
            }
        }
        if let Some(cities) = &self.cities {
            if !cities.contains(&normalize(&program.city)) {
                return false;
            }
        }
        if let Some(modalities) = &self.modalities {
            if !modalities.contains(&normalize(&program.modality)) {
                return false;
            }
        }
        if self.require_internship && !program.internship_offered {
            return false;
        }
        true
    }

    /// Select the matching subsequence, preserving order. An empty result
    /// is a valid outcome, not an error.
    pub fn apply(&self, ranked: &[ScoredProgram]) -> Vec<ScoredProgram> {
        ranked.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalized_set<I: IntoIterator<Item = String>>(values: I) -> HashSet<String> {
    values.into_iter().map(|v| normalize(&v)).collect()
}

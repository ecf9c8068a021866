//! Weighted aggregation of sub-scores into the final ranking.

use crate::config::GradmapConfig;
use crate::core::{BestValue, Program, RankingSummary, ScoredProgram, SubScores};
use crate::scoring::dimensions::{cost_scores, employability_scores, practical_scores};
use crate::scoring::profile_fit::profile_fit_scores;
use crate::scoring::warnings;

/// Score and rank a program collection.
///
/// Every input record appears in the output exactly once. The final score
/// is the weighted sum of the configured sub-scores divided by the sum of
/// the active weights, so it stays on the 0-100 scale whatever the
/// weights add up to; the weights themselves are never rescaled. The
/// employability dimension drops out of both the numerator and the
/// denominator when the source carries no employability columns.
///
/// The result is sorted by final score descending; `sort_by` is stable,
/// so tied records keep their input order.
pub fn score(programs: &[Program], config: &GradmapConfig) -> Vec<ScoredProgram> {
    let weights = &config.weights;

    let profile_fit = profile_fit_scores(programs, &config.profile.categories);
    let practical = practical_scores(programs, &config.practical);
    let cost = cost_scores(programs, &config.cost);
    let employability = if weights.employability > 0.0 {
        let scores = employability_scores(programs, &config.employability);
        if scores.is_none() {
            log::warn!(
                "employability weight is {} but the source has no employability columns; \
                 dimension skipped",
                weights.employability
            );
        }
        scores
    } else {
        None
    };

    let mut scored: Vec<ScoredProgram> = programs
        .iter()
        .enumerate()
        .map(|(i, program)| {
            let scores = SubScores {
                profile_fit: profile_fit[i],
                // Already 0-100 scaled; the raw percentage is the sub-score.
                analytic: program.analytic_pct,
                managerial: program.managerial_pct,
                practical: practical[i],
                cost: cost[i],
                employability: employability.as_ref().map(|e| e[i]),
            };
            let final_score = final_score(&scores, config);
            let warnings = warnings::evaluate(program, &config.validation);
            ScoredProgram {
                program: program.clone(),
                scores,
                final_score,
                warnings,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    scored
}

fn final_score(scores: &SubScores, config: &GradmapConfig) -> f64 {
    let w = &config.weights;
    let mut weighted = w.profile_fit * scores.profile_fit
        + w.analytic * scores.analytic
        + w.managerial * scores.managerial
        + w.practical * scores.practical
        + w.cost * scores.cost;
    let mut weight_sum = w.profile_fit + w.analytic + w.managerial + w.practical + w.cost;

    if let Some(employability) = scores.employability {
        weighted += w.employability * employability;
        weight_sum += w.employability;
    }

    let score = weighted / weight_sum;
    if score.is_finite() {
        score
    } else {
        // Defensive: imputation upstream should make this unreachable.
        0.0
    }
}

/// Collection-level figures: count, average price and the best-value
/// program (highest cost sub-score; first in ranking order on a tie).
pub fn summarize(scored: &[ScoredProgram]) -> RankingSummary {
    let program_count = scored.len();
    let average_price_eur = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|s| s.program.total_price_eur).sum::<f64>() / program_count as f64
    };
    let best_value = scored
        .iter()
        .max_by(|a, b| {
            a.scores
                .cost
                .total_cmp(&b.scores.cost)
                .then(std::cmp::Ordering::Greater) // keep the earlier record on ties
        })
        .map(|s| BestValue {
            name: s.program.name.clone(),
            cost_score: s.scores.cost,
        });
    let warning_count = scored.iter().map(|s| s.warnings.len()).sum();

    RankingSummary {
        program_count,
        average_price_eur,
        best_value,
        warning_count,
    }
}

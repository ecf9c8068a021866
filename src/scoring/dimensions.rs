//! Per-dimension sub-score computation: cost, practical orientation and
//! the optional employability blend.

use crate::config::{CostBasis, CostConfig, EmployabilityBlend, PracticalBlend};
use crate::core::Program;
use crate::scoring::impute::fill_with_median;
use crate::scoring::normalize::{linear_normalize, linear_normalize_inverse};

/// Cost sub-scores for the whole collection.
///
/// In per-credit mode the measure is price per ECTS credit; records with a
/// zero or missing credit load get the cohort's median price-per-credit
/// before the inverse normalization, so a data gap never turns into a
/// free top score.
pub fn cost_scores(programs: &[Program], config: &CostConfig) -> Vec<f64> {
    match config.basis {
        CostBasis::TotalPrice => {
            let prices: Vec<f64> = programs.iter().map(|p| p.total_price_eur).collect();
            linear_normalize_inverse(&prices)
        }
        CostBasis::PerCredit => {
            let per_credit: Vec<Option<f64>> = programs
                .iter()
                .map(|p| {
                    (p.credits_ects > 0.0).then(|| p.total_price_eur / p.credits_ects)
                })
                .collect();
            let (filled, repaired) = fill_with_median(&per_credit);
            if !repaired.is_empty() {
                log::debug!(
                    "{} record(s) without a usable credit load; price-per-credit imputed",
                    repaired.len()
                );
            }
            linear_normalize_inverse(&filled)
        }
    }
}

/// Practical-orientation sub-scores: the 0-5 rating rescaled to 0-100,
/// blended with the internship flag by the configured weights.
pub fn practical_scores(programs: &[Program], blend: &PracticalBlend) -> Vec<f64> {
    let total = blend.rating + blend.internship;
    programs
        .iter()
        .map(|p| {
            let rating = (p.practical_focus / 5.0 * 100.0).clamp(0.0, 100.0);
            let internship = if p.internship_offered { 100.0 } else { 0.0 };
            (blend.rating * rating + blend.internship * internship) / total
        })
        .collect()
}

/// Employability sub-scores, or `None` when no record carries either
/// employability signal (earlier data variants).
///
/// Per-record gaps within a present column are filled with the column
/// median before normalization, mirroring the load-time repair of the
/// required columns.
pub fn employability_scores(
    programs: &[Program],
    blend: &EmployabilityBlend,
) -> Option<Vec<f64>> {
    let rates: Vec<Option<f64>> = programs.iter().map(|p| p.employment_rate_6m).collect();
    let networks: Vec<Option<f64>> = programs.iter().map(|p| p.partner_network_size).collect();
    if rates.iter().all(Option::is_none) && networks.iter().all(Option::is_none) {
        return None;
    }

    let (rates, _) = fill_with_median(&rates);
    let (networks, _) = fill_with_median(&networks);
    let rate_scores = linear_normalize(&rates);
    let network_scores = linear_normalize(&networks);

    let total = blend.employment_rate + blend.partner_network;
    Some(
        rate_scores
            .iter()
            .zip(&network_scores)
            .map(|(r, n)| (blend.employment_rate * r + blend.partner_network * n) / total)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(price: f64, credits: f64) -> Program {
        Program {
            id: "x".into(),
            name: String::new(),
            university: String::new(),
            city: String::new(),
            modality: String::new(),
            language: String::new(),
            duration_months: 12.0,
            total_price_eur: price,
            credits_ects: credits,
            curriculum: String::new(),
            keywords: String::new(),
            practical_focus: 0.0,
            internship_offered: false,
            analytic_pct: 0.0,
            managerial_pct: 0.0,
            employment_rate_6m: None,
            partner_network_size: None,
            consultant_analysis: String::new(),
            career_path: String::new(),
            pros: String::new(),
            cons: String::new(),
            official_link: String::new(),
            imputed_fields: Vec::new(),
        }
    }

    #[test]
    fn cheapest_per_credit_scores_hundred() {
        let programs = vec![program(6_000.0, 60.0), program(12_000.0, 60.0)];
        let scores = cost_scores(&programs, &CostConfig::default());
        assert_eq!(scores, vec![100.0, 0.0]);
    }

    #[test]
    fn per_credit_mode_ranks_by_efficiency_not_sticker_price() {
        // 20k for 120 credits beats 15k for 60 credits per unit of credit.
        let programs = vec![program(20_000.0, 120.0), program(15_000.0, 60.0)];
        let scores = cost_scores(&programs, &CostConfig::default());
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn zero_credits_takes_the_median_per_credit() {
        // Medians of the two usable ratios: (100, 300) -> 200.
        let programs = vec![
            program(6_000.0, 60.0),  // 100 per credit
            program(18_000.0, 60.0), // 300 per credit
            program(9_999.0, 0.0),   // unusable; imputed to 200
        ];
        let scores = cost_scores(&programs, &CostConfig::default());
        assert_eq!(scores[0], 100.0);
        assert_eq!(scores[1], 0.0);
        assert_eq!(scores[2], 50.0);
    }

    #[test]
    fn total_price_mode_ignores_credit_load() {
        let programs = vec![program(20_000.0, 120.0), program(15_000.0, 60.0)];
        let config = CostConfig {
            basis: CostBasis::TotalPrice,
        };
        let scores = cost_scores(&programs, &config);
        assert_eq!(scores, vec![0.0, 100.0]);
    }

    #[test]
    fn practical_blend_default_sixty_forty() {
        let mut p = program(0.0, 60.0);
        p.practical_focus = 4.0;
        p.internship_offered = true;
        let scores = practical_scores(&[p], &PracticalBlend::default());
        // 0.6 * 80 + 0.4 * 100 = 88
        assert!((scores[0] - 88.0).abs() < 1e-9);
    }

    #[test]
    fn practical_blend_seventy_thirty_variant() {
        let mut p = program(0.0, 60.0);
        p.practical_focus = 5.0;
        p.internship_offered = false;
        let blend = PracticalBlend {
            rating: 0.7,
            internship: 0.3,
        };
        let scores = practical_scores(&[p], &blend);
        // 0.7 * 100 / (0.7 + 0.3) = 70
        assert!((scores[0] - 70.0).abs() < 1e-9);
    }

    #[test]
    fn employability_absent_when_no_record_has_signals() {
        let programs = vec![program(1.0, 1.0), program(2.0, 1.0)];
        assert!(employability_scores(&programs, &EmployabilityBlend::default()).is_none());
    }

    #[test]
    fn employability_blends_rate_and_network() {
        let mut a = program(0.0, 60.0);
        a.employment_rate_6m = Some(90.0);
        a.partner_network_size = Some(200.0);
        let mut b = program(0.0, 60.0);
        b.employment_rate_6m = Some(60.0);
        b.partner_network_size = Some(50.0);
        let scores = employability_scores(&[a, b], &EmployabilityBlend::default()).unwrap();
        assert_eq!(scores[0], 100.0);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn employability_fills_record_gaps_with_the_median() {
        let mut a = program(0.0, 60.0);
        a.employment_rate_6m = Some(90.0);
        let mut b = program(0.0, 60.0);
        b.employment_rate_6m = Some(60.0);
        let mut c = program(0.0, 60.0);
        c.employment_rate_6m = None; // imputed to 75
        let scores = employability_scores(&[a, b, c], &EmployabilityBlend::default()).unwrap();
        assert!(scores[2] > scores[1] && scores[2] < scores[0]);
    }
}

//! Keyword-taxonomy matcher for the profile-fit score.

use crate::config::ProfileCategory;
use crate::core::Program;

/// Score every program against the persona taxonomy.
pub fn profile_fit_scores(programs: &[Program], taxonomy: &[ProfileCategory]) -> Vec<f64> {
    programs
        .iter()
        .map(|p| profile_fit_score(p, taxonomy))
        .collect()
}

/// Additive point buckets: a category whose keyword list intersects the
/// program's searchable text (case-insensitive substring) awards its
/// points once, regardless of how many of its keywords hit. The sum is
/// clipped to [0, 100].
pub fn profile_fit_score(program: &Program, taxonomy: &[ProfileCategory]) -> f64 {
    let text = program.searchable_text();
    taxonomy
        .iter()
        .filter(|cat| category_matches(cat, &text, program.internship_offered))
        .map(|cat| cat.points)
        .sum::<f64>()
        .clamp(0.0, 100.0)
}

fn category_matches(category: &ProfileCategory, text: &str, internship_offered: bool) -> bool {
    if category.requires_internship {
        return internship_offered;
    }
    category
        .keywords
        .iter()
        .any(|kw| text.contains(kw.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(name: &str, keywords: &str, internship: bool) -> Program {
        Program {
            id: "x".into(),
            name: name.into(),
            university: String::new(),
            city: String::new(),
            modality: String::new(),
            language: String::new(),
            duration_months: 12.0,
            total_price_eur: 10_000.0,
            credits_ects: 60.0,
            curriculum: String::new(),
            keywords: keywords.into(),
            practical_focus: 3.0,
            internship_offered: internship,
            analytic_pct: 50.0,
            managerial_pct: 50.0,
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

    fn category(name: &str, keywords: &[&str], points: f64) -> ProfileCategory {
        ProfileCategory {
            name: name.into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            points,
            requires_internship: false,
        }
    }

    #[test]
    fn category_awards_points_once_per_category() {
        let taxonomy = vec![category("ops", &["operaciones", "procesos"], 40.0)];
        // Both keywords hit but the category pays out once.
        let p = program("MSc", "operaciones, procesos", false);
        assert_eq!(profile_fit_score(&p, &taxonomy), 40.0);
    }

    #[test]
    fn matching_is_case_insensitive_both_ways() {
        let taxonomy = vec![category("ops", &["Supply Chain"], 40.0)];
        let p = program("Master in SUPPLY CHAIN management", "", false);
        assert_eq!(profile_fit_score(&p, &taxonomy), 40.0);
    }

    #[test]
    fn points_accumulate_across_categories() {
        let taxonomy = vec![
            category("ops", &["operaciones"], 40.0),
            category("digital", &["digital"], 30.0),
            category("data", &["datos"], 30.0),
        ];
        let p = program("MSc", "operaciones, digital, datos", false);
        assert_eq!(profile_fit_score(&p, &taxonomy), 100.0);
    }

    #[test]
    fn sum_is_clipped_to_hundred() {
        let taxonomy = vec![
            category("a", &["alpha"], 80.0),
            category("b", &["beta"], 80.0),
        ];
        let p = program("alpha beta", "", false);
        assert_eq!(profile_fit_score(&p, &taxonomy), 100.0);
    }

    #[test]
    fn no_hits_scores_zero() {
        let taxonomy = vec![category("ops", &["operaciones"], 40.0)];
        let p = program("MBA General Management", "finanzas", false);
        assert_eq!(profile_fit_score(&p, &taxonomy), 0.0);
    }

    #[test]
    fn internship_category_matches_on_the_flag() {
        let mut cat = category("hands-on", &[], 20.0);
        cat.requires_internship = true;
        let taxonomy = vec![cat];
        assert_eq!(profile_fit_score(&program("x", "", true), &taxonomy), 20.0);
        assert_eq!(profile_fit_score(&program("x", "", false), &taxonomy), 0.0);
    }
}

//! Data-quality warning rules.
//!
//! Each rule is evaluated independently per record; a record can trigger
//! zero, one or many. Warnings annotate the scored record and never feed
//! back into the score.

use crate::config::ValidationRules;
use crate::core::Program;

/// Evaluate every rule against one program.
pub fn evaluate(program: &Program, rules: &ValidationRules) -> Vec<String> {
    let mut warnings = Vec::new();

    let combined = program.analytic_pct + program.managerial_pct;
    if combined < rules.min_combined_focus {
        warnings.push(format!(
            "combined analytic + managerial focus is {combined:.0}%, below {:.0}%",
            rules.min_combined_focus
        ));
    }

    if program.practical_focus < rules.min_practical_focus && !program.internship_offered {
        warnings.push(format!(
            "practicality rating {:.0}/5 with no internship on offer",
            program.practical_focus
        ));
    }

    if program.was_imputed("total_price_eur") {
        warnings.push("total price was missing and imputed from the cohort median".to_string());
    }

    warnings
}

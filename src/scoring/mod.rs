//! The scoring engine: normalization, imputation, dimension sub-scores,
//! weighted aggregation and data-quality warnings.

pub mod dimensions;
pub mod impute;
pub mod normalize;
pub mod profile_fit;
pub mod scorer;
pub mod warnings;

pub use dimensions::{cost_scores, employability_scores, practical_scores};
pub use impute::median;
pub use normalize::{linear_normalize, linear_normalize_inverse};
pub use profile_fit::{profile_fit_score, profile_fit_scores};
pub use scorer::{score, summarize};

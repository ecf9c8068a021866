// Export modules for library usage
pub mod annotations;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod query;
pub mod scoring;

// Re-export commonly used types
pub use crate::annotations::SessionAnnotations;
pub use crate::config::{GradmapConfig, ImputePolicy, ProfileCategory, ScoringWeights};
pub use crate::core::{
    BestValue, Program, RankedPrograms, RankingSummary, ScoredProgram, SubScores,
};
pub use crate::errors::GradmapError;
pub use crate::io::{create_writer, load_programs, OutputWriter, SourceCache};
pub use crate::query::ProgramFilter;
pub use crate::scoring::{linear_normalize, linear_normalize_inverse, score, summarize};

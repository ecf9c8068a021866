pub mod cache;
pub mod loader;
pub mod output;

pub use cache::SourceCache;
pub use loader::load_programs;
pub use output::{create_writer, OutputFormat, OutputWriter};

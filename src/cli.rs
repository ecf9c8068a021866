use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table on stdout
    Terminal,
    /// Pretty-printed JSON report
    Json,
    /// Markdown report
    Markdown,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gradmap")]
#[command(about = "Graduate program ranking and decision analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank programs from a CSV catalog
    Rank {
        /// Path to the program catalog (CSV)
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to discovering .gradmap.toml)
        #[arg(short, long, env = "GRADMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Show only the top N programs
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Keep only programs at or above this final score
        #[arg(long = "min-score")]
        min_score: Option<f64>,

        /// Lower bound of the price filter (inclusive, EUR)
        #[arg(long = "price-min")]
        price_min: Option<f64>,

        /// Upper bound of the price filter (inclusive, EUR)
        #[arg(long = "price-max")]
        price_max: Option<f64>,

        /// Keep only programs in these cities (comma-separated)
        #[arg(long = "city", value_delimiter = ',')]
        cities: Option<Vec<String>>,

        /// Keep only programs with these modalities (comma-separated)
        #[arg(long = "modality", value_delimiter = ',')]
        modalities: Option<Vec<String>>,

        /// Keep only programs that offer an internship
        #[arg(long = "require-internship")]
        require_internship: bool,

        /// Increase verbosity (-v shows sub-score columns)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Load a catalog and report data-quality findings without ranking
    Check {
        /// Path to the program catalog (CSV)
        path: PathBuf,

        /// Configuration file (defaults to discovering .gradmap.toml)
        #[arg(short, long, env = "GRADMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write a default .gradmap.toml into the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "thenlint")]
#[command(about = "Promise anti-pattern analyzer for JavaScript and TypeScript", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze files for promise anti-patterns
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to thenlint.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra callback names exempted from no-callback-in-promise
        #[arg(long, value_delimiter = ',')]
        exceptions: Vec<String>,

        /// Languages to analyze (javascript, typescript)
        #[arg(long, value_delimiter = ',')]
        languages: Option<Vec<String>>,
    },
    /// Write a default thenlint.toml to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

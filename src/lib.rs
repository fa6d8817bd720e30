// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod rules;

// Re-export commonly used types
pub use crate::analyzers::{analyze_file, PromiseAnalyzer};
pub use crate::config::{ConfigError, ThenlintConfig};
pub use crate::core::{Diagnostic, Language, RuleKind, SourceLocation};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::rules::{RuleMeta, REGISTRY};

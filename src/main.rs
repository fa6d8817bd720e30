use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thenlint::analyzers::analyze_file;
use thenlint::cli::{Cli, Commands, OutputFormat};
use thenlint::config::{ThenlintConfig, DEFAULT_CONFIG_FILE};
use thenlint::core::{Diagnostic, Language};
use thenlint::io::output::create_writer;
use thenlint::io::walker::FileWalker;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            exceptions,
            languages,
        } => {
            let diagnostics = run_analysis(path, config, exceptions, languages)?;
            let found_problems = !diagnostics.is_empty();
            write_report(&diagnostics, format, output)?;
            if found_problems {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init { force } => init_config(force),
    }
}

fn run_analysis(
    path: PathBuf,
    config_path: Option<PathBuf>,
    exceptions: Vec<String>,
    languages: Option<Vec<String>>,
) -> Result<Vec<Diagnostic>> {
    let config = ThenlintConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?
        .with_extra_exceptions(exceptions);

    let mut walker = FileWalker::new(path);
    if let Some(names) = languages {
        walker = walker.with_languages(parse_languages(&names)?);
    }

    let mut diagnostics = Vec::new();
    for file in walker.walk()? {
        match analyze_file(&file, &config) {
            Ok(found) => diagnostics.extend(found),
            Err(e) => warn!("Skipping {}: {:#}", file.display(), e),
        }
    }
    Ok(diagnostics)
}

fn parse_languages(names: &[String]) -> Result<Vec<Language>> {
    names
        .iter()
        .map(|name| match name.to_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            other => bail!("Unknown language: {}", other),
        })
        .collect()
}

fn write_report(
    diagnostics: &[Diagnostic],
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            create_writer(file, format.into()).write_diagnostics(diagnostics)
        }
        None => create_writer(std::io::stdout(), format.into()).write_diagnostics(diagnostics),
    }
}

fn init_config(force: bool) -> Result<()> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let mut file = fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(ThenlintConfig::default_toml().as_bytes())?;
    println!("Wrote {}", path.display());
    Ok(())
}

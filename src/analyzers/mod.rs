pub mod walker;

use crate::config::ThenlintConfig;
use crate::core::{Diagnostic, Language};
use anyhow::{bail, Context, Result};
use log::debug;
use std::fs;
use std::path::Path;
use tree_sitter::Parser;

/// Parses a source file and runs the promise rules over the tree.
pub struct PromiseAnalyzer {
    parser: Parser,
    language: Language,
}

impl PromiseAnalyzer {
    pub fn new_javascript() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .context("Failed to set JavaScript language")?;
        Ok(Self {
            parser,
            language: Language::JavaScript,
        })
    }

    pub fn new_typescript() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .context("Failed to set TypeScript language")?;
        Ok(Self {
            parser,
            language: Language::TypeScript,
        })
    }

    pub fn for_language(language: Language) -> Result<Self> {
        match language {
            Language::JavaScript => Self::new_javascript(),
            Language::TypeScript => Self::new_typescript(),
            Language::Unknown => bail!("no analyzer for unrecognized language"),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Parse `source` and return every diagnostic the enabled rules emit,
    /// in traversal order.
    pub fn analyze_source(
        &mut self,
        source: &str,
        path: &Path,
        config: &ThenlintConfig,
    ) -> Result<Vec<Diagnostic>> {
        let tree = self
            .parser
            .parse(source, None)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(walker::run_rules(tree.root_node(), source, path, config))
    }
}

/// Analyze a single file, picking the parser from its extension.
pub fn analyze_file(path: &Path, config: &ThenlintConfig) -> Result<Vec<Diagnostic>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let language = Language::from_extension(&ext);
    debug!("analyzing {} as {:?}", path.display(), language);

    let mut analyzer = PromiseAnalyzer::for_language(language)
        .with_context(|| format!("Unsupported file type: {}", path.display()))?;
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    analyzer.analyze_source(&source, path, config)
}

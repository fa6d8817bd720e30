use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tree_sitter::Node;

/// Languages thenlint knows how to parse.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Language::TypeScript,
            _ => Language::Unknown,
        }
    }
}

/// The two rules this analyzer implements.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RuleKind {
    NoCallbackInPromise,
    PreferAwaitToThen,
}

impl RuleKind {
    pub fn id(&self) -> &'static str {
        match self {
            RuleKind::NoCallbackInPromise => "no-callback-in-promise",
            RuleKind::PreferAwaitToThen => "prefer-await-to-then",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Position of a finding in the source, 1-based lines.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: Option<usize>,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
}

impl SourceLocation {
    pub fn from_node(node: Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();

        SourceLocation {
            line: start.row + 1, // tree-sitter uses 0-based lines
            column: Some(start.column),
            end_line: Some(end.row + 1),
            end_column: Some(end.column),
        }
    }
}

/// A single reported anti-pattern occurrence. Carries no remediation data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub rule: RuleKind,
    pub message_id: String,
    pub message: String,
    pub file: PathBuf,
    pub line: usize,
    pub column: Option<usize>,
}

impl Diagnostic {
    pub fn from_node(
        rule: RuleKind,
        message_id: &str,
        message: &str,
        file: &std::path::Path,
        node: Node,
    ) -> Self {
        let location = SourceLocation::from_node(node);
        Diagnostic {
            rule,
            message_id: message_id.to_string(),
            message: message.to_string(),
            file: file.to_path_buf(),
            line: location.line,
            column: location.column,
        }
    }
}

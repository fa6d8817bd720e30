// Traversal driver.
//
// One pre-order pass over the tree, threading an explicit ancestor stack:
// pushed on descent, popped on exit. Rules are pure functions dispatched by
// node kind; nothing here retains state between nodes, so diagnostics come
// out in traversal order by construction.

use crate::config::ThenlintConfig;
use crate::core::Diagnostic;
use crate::rules::syntax::NodeKind;
use crate::rules::{no_callback_in_promise, prefer_await_to_then};
use std::path::Path;
use tree_sitter::Node;

pub fn run_rules(
    root: Node,
    source: &str,
    path: &Path,
    config: &ThenlintConfig,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut ancestors = Vec::new();
    visit(root, &mut ancestors, source, path, config, &mut diagnostics);
    diagnostics
}

fn visit<'tree>(
    node: Node<'tree>,
    ancestors: &mut Vec<Node<'tree>>,
    source: &str,
    path: &Path,
    config: &ThenlintConfig,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match NodeKind::of(node) {
        NodeKind::CallExpression if config.rules.no_callback_in_promise.enabled => {
            diagnostics.extend(no_callback_in_promise::check(
                node,
                ancestors,
                source,
                path,
                &config.rules.no_callback_in_promise.exceptions,
            ));
        }
        NodeKind::MemberExpression if config.rules.prefer_await_to_then.enabled => {
            diagnostics.extend(prefer_await_to_then::check(node, ancestors, source, path));
        }
        _ => {}
    }

    ancestors.push(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, ancestors, source, path, config, diagnostics);
    }
    ancestors.pop();
}

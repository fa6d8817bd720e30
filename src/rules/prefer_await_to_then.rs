// Rule: prefer-await-to-then
// Discourage then()/catch()/finally() chains where await would read better

use super::ancestry::{is_inside_yield_or_await, is_top_level_scoped};
use super::classify::is_promise_method;
use super::syntax::{callee_of, node_text, property_of};
use crate::core::{Diagnostic, RuleKind};
use std::path::Path;
use tree_sitter::Node;

pub const MESSAGE_ID: &str = "preferAwait";
pub const MESSAGE: &str = "Prefer await to then()/catch()/finally().";

/// Checked on member expressions that are the callee of a call. Top-level
/// chains are exempt (`await` is illegal there), as are chains already
/// wrapped in an await or yield.
pub fn check(member: Node, ancestors: &[Node], source: &str, file: &Path) -> Option<Diagnostic> {
    let parent = ancestors.last()?;
    if parent.kind() != "call_expression" || callee_of(*parent) != Some(member) {
        return None;
    }

    if is_top_level_scoped(ancestors) || is_inside_yield_or_await(ancestors) {
        return None;
    }

    // if you're a then/catch/finally expression then you're probably a promise
    let property = property_of(member)?;
    if is_promise_method(node_text(property, source)) {
        return Some(Diagnostic::from_node(
            RuleKind::PreferAwaitToThen,
            MESSAGE_ID,
            MESSAGE,
            file,
            property,
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::walker::run_rules;
    use crate::config::ThenlintConfig;
    use std::path::PathBuf;
    use tree_sitter::Parser;

    fn lint(source: &str) -> Vec<Diagnostic> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        run_rules(
            tree.root_node(),
            source,
            &PathBuf::from("test.js"),
            &ThenlintConfig::default(),
        )
        .into_iter()
        .filter(|d| d.rule == RuleKind::PreferAwaitToThen)
        .collect()
    }

    #[test]
    fn test_then_inside_function_reported() {
        let diags = lint("function f() { promise.then(x => x); }");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, MESSAGE);
    }

    #[test]
    fn test_top_level_then_exempt() {
        assert!(lint("promise.then(x => x);").is_empty());
    }

    #[test]
    fn test_awaited_chain_exempt() {
        assert!(lint("async function f() { await promise.then(x => x); }").is_empty());
    }

    #[test]
    fn test_yielded_chain_exempt() {
        assert!(lint("function* g() { yield promise.then(x => x); }").is_empty());
    }

    #[test]
    fn test_catch_and_finally_reported() {
        let diags = lint("function f() { p.catch(log); p.finally(cleanup); }");
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_chained_calls_report_each_link() {
        let diags = lint("function f() { p.then(a).catch(b); }");
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_member_access_without_call_not_reported() {
        assert!(lint("function f() { const t = p.then; }").is_empty());
    }

    #[test]
    fn test_unrelated_method_not_reported() {
        assert!(lint("function f() { list.map(x => x); }").is_empty());
    }

    #[test]
    fn test_report_targets_property_node() {
        let source = "function f() { promise.then(x => x); }";
        let diags = lint(source);
        assert_eq!(diags[0].column, Some(source.find("then").unwrap()));
    }

    #[test]
    fn test_arrow_body_is_not_top_level() {
        let diags = lint("const f = () => p.then(x => x);");
        assert_eq!(diags.len(), 1);
    }
}

// Rule: no-callback-in-promise
// Avoid calling back inside of a promise

use super::ancestry::is_inside_promise;
use super::classify::{has_promise_callback, is_callback, is_callback_name};
use super::syntax::{first_argument, node_text};
use crate::core::{Diagnostic, RuleKind};
use std::collections::HashSet;
use std::path::Path;
use tree_sitter::Node;

pub const MESSAGE_ID: &str = "callback";
pub const MESSAGE: &str = "Avoid calling back inside of a promise.";

/// Checked on every call expression. Two independent branches: a callback
/// passed straight through as the continuation (`promise.then(cb)`), and a
/// callback invocation nested inside a continuation body. Neither subsumes
/// the other.
pub fn check(
    call: Node,
    ancestors: &[Node],
    source: &str,
    file: &Path,
    exceptions: &HashSet<String>,
) -> Option<Diagnostic> {
    if !is_callback(call, source, exceptions) {
        // not a callback invocation, but watch out for whatever.then(cb)
        if has_promise_callback(call, source) {
            let arg = first_argument(call)?;
            if arg.kind() == "identifier" && is_callback_name(node_text(arg, source)) {
                return Some(report(arg, file));
            }
        }
        return None;
    }

    if is_inside_promise(ancestors, source) {
        return Some(report(call, file));
    }
    None
}

fn report(node: Node, file: &Path) -> Diagnostic {
    Diagnostic::from_node(RuleKind::NoCallbackInPromise, MESSAGE_ID, MESSAGE, file, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::walker::run_rules;
    use crate::config::ThenlintConfig;
    use std::path::PathBuf;
    use tree_sitter::Parser;

    fn lint(source: &str) -> Vec<Diagnostic> {
        lint_with(source, ThenlintConfig::default())
    }

    fn lint_with(source: &str, config: ThenlintConfig) -> Vec<Diagnostic> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        run_rules(
            tree.root_node(),
            source,
            &PathBuf::from("test.js"),
            &config,
        )
        .into_iter()
        .filter(|d| d.rule == RuleKind::NoCallbackInPromise)
        .collect()
    }

    #[test]
    fn test_callback_inside_then_body() {
        let diags = lint("promise.then(function(err, data) { callback(err, data); });");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message_id, "callback");
        assert_eq!(diags[0].message, MESSAGE);
    }

    #[test]
    fn test_callback_passed_directly_to_then() {
        let diags = lint("promise.then(callback);");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_next_passed_directly_to_catch() {
        let diags = lint("promise.catch(next);");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_non_callback_argument_not_reported() {
        assert!(lint("promise.then(handleResult);").is_empty());
    }

    #[test]
    fn test_callback_outside_promise_not_reported() {
        assert!(lint("function f(cb) { cb(null); }").is_empty());
    }

    #[test]
    fn test_member_callback_inside_promise() {
        let diags = lint("promise.then(res => { ctx.done(res); });");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_exceptions_suppress_invocation() {
        let mut config = ThenlintConfig::default();
        config
            .rules
            .no_callback_in_promise
            .exceptions
            .insert("next".to_string());
        let diags = lint_with("promise.then(() => { next(); });", config);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_exceptions_do_not_affect_other_names() {
        let mut config = ThenlintConfig::default();
        config
            .rules
            .no_callback_in_promise
            .exceptions
            .insert("next".to_string());
        let diags = lint_with("promise.then(() => { done(); });", config);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_reports_once_per_invocation() {
        let diags = lint("p.then(() => { cb(1); cb(2); });");
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_report_location_is_the_argument_for_passthrough() {
        let source = "promise.then(cb);";
        let diags = lint(source);
        assert_eq!(diags.len(), 1);
        // column of `cb`, not of the whole call
        assert_eq!(diags[0].column, Some(source.find("cb").unwrap()));
    }

    #[test]
    fn test_disabled_rule_reports_nothing() {
        let mut config = ThenlintConfig::default();
        config.rules.no_callback_in_promise.enabled = false;
        assert!(lint_with("promise.then(callback);", config).is_empty());
    }
}

// Ancestor-chain predicates.
//
// The walker threads an explicit ancestor stack (root first, immediate
// parent last) through the traversal; everything here is a pure function of
// that stack, so a node's classification never depends on traversal state.

use super::classify::has_promise_callback;
use super::syntax::is_function_like;
use tree_sitter::Node;

/// True iff the node owning `ancestors` sits inside a continuation passed to
/// `then`/`catch`/`finally`. The chain shape to look for is
/// attachment call -> argument list -> function-like body; any occurrence
/// along the stack qualifies, so extending the chain upward can only keep a
/// true result true.
pub fn is_inside_promise(ancestors: &[Node], source: &str) -> bool {
    ancestors.windows(3).any(|window| {
        is_function_like(window[2].kind())
            && window[1].kind() == "arguments"
            && has_promise_callback(window[0], source)
    })
}

/// True iff some ancestor is an await or yield expression, meaning the
/// inspected expression is already the operand being waited upon.
pub fn is_inside_yield_or_await(ancestors: &[Node]) -> bool {
    ancestors
        .iter()
        .any(|node| matches!(node.kind(), "await_expression" | "yield_expression"))
}

/// True iff the node is in the program's top-level scope, i.e. not nested in
/// any function body. `await` is only legal inside a function, so top-level
/// code is exempt from the await-rewrite suggestion.
pub fn is_top_level_scoped(ancestors: &[Node]) -> bool {
    !ancestors.iter().any(|node| is_function_like(node.kind()))
}

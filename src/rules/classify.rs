// Call-shape classification for the promise rules.

use super::syntax::{callee_of, node_text, property_name};
use std::collections::HashSet;
use tree_sitter::Node;

/// Parameter/callee names conventionally used for node-style callbacks.
pub const CALLBACK_NAMES: &[&str] = &["callback", "cb", "next", "done"];

/// Methods that attach a continuation to a promise-like receiver.
pub const PROMISE_METHODS: &[&str] = &["then", "catch", "finally"];

pub fn is_callback_name(name: &str) -> bool {
    CALLBACK_NAMES.contains(&name)
}

pub fn is_promise_method(name: &str) -> bool {
    PROMISE_METHODS.contains(&name)
}

/// True iff `call` invokes a conventionally-named callback (`callback()`,
/// `obj.cb()`, ...) whose name is not exempted. Callees that are neither
/// identifiers nor member accesses classify false.
pub fn is_callback(call: Node, source: &str, exceptions: &HashSet<String>) -> bool {
    let Some(callee) = callee_of(call) else {
        return false;
    };

    let name = match callee.kind() {
        "identifier" => node_text(callee, source),
        "member_expression" => match property_name(callee, source) {
            Some(name) => name,
            None => return false,
        },
        _ => return false,
    };

    is_callback_name(name) && !exceptions.contains(name)
}

/// True iff `call` is itself a continuation attachment: its callee is a
/// member access named `then`/`catch`/`finally`. Independent of arguments.
pub fn has_promise_callback(call: Node, source: &str) -> bool {
    let Some(callee) = callee_of(call) else {
        return false;
    };
    if callee.kind() != "member_expression" {
        return false;
    }
    property_name(callee, source).is_some_and(is_promise_method)
}

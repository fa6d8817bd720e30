// Node-kind classification over the tree-sitter grammar.
//
// The JS and TS grammars tag nodes with kind strings; the rules only care
// about a handful of categories, captured here as a tagged union. Accessors
// are total: unexpected shapes yield None/false instead of failing, so an
// unusual tree never aborts a run.

use tree_sitter::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    CallExpression,
    MemberExpression,
    Identifier,
    Arguments,
    AwaitExpression,
    YieldExpression,
    FunctionLike,
    Other,
}

impl NodeKind {
    pub fn of(node: Node) -> Self {
        match node.kind() {
            "program" => NodeKind::Program,
            "call_expression" => NodeKind::CallExpression,
            "member_expression" => NodeKind::MemberExpression,
            "identifier" => NodeKind::Identifier,
            "arguments" => NodeKind::Arguments,
            "await_expression" => NodeKind::AwaitExpression,
            "yield_expression" => NodeKind::YieldExpression,
            kind if is_function_like(kind) => NodeKind::FunctionLike,
            _ => NodeKind::Other,
        }
    }
}

/// Kinds that introduce a function body, and with it a scope where `await`
/// is (potentially) legal.
pub fn is_function_like(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "function_expression"
            | "generator_function"
            | "generator_function_declaration"
            | "arrow_function"
            | "method_definition"
    )
}

/// Text of a node, empty on any decoding issue.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// The callee of a call expression, if the node has one.
pub fn callee_of(call: Node) -> Option<Node> {
    call.child_by_field_name("function")
}

/// Property name of a member-expression node (`obj.prop` -> "prop").
pub fn property_name<'a>(member: Node, source: &'a str) -> Option<&'a str> {
    let property = member.child_by_field_name("property")?;
    Some(node_text(property, source))
}

/// Property node of a member expression.
pub fn property_of(member: Node) -> Option<Node> {
    member.child_by_field_name("property")
}

/// First argument of a call expression, skipping punctuation.
pub fn first_argument(call: Node) -> Option<Node> {
    call.child_by_field_name("arguments")
        .and_then(|args| args.named_child(0))
}

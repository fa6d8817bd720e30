// The two promise rules plus the pattern-classification helpers they share.

pub mod ancestry;
pub mod classify;
pub mod no_callback_in_promise;
pub mod prefer_await_to_then;
pub mod syntax;

use crate::core::RuleKind;
use serde_json::{json, Value};

/// Static descriptor for a rule: documentation plus its message templates
/// and options schema, keyed the way lint hosts expect them.
#[derive(Debug, Clone, Copy)]
pub struct RuleMeta {
    pub kind: RuleKind,
    pub description: &'static str,
    pub messages: &'static [(&'static str, &'static str)],
}

impl RuleMeta {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn docs_url(&self) -> String {
        format!(
            "https://github.com/iepathos/thenlint/blob/master/docs/rules/{}.md",
            self.id()
        )
    }

    /// JSON schema for the rule's options array.
    pub fn schema(&self) -> Value {
        match self.kind {
            RuleKind::NoCallbackInPromise => json!([
                {
                    "type": "object",
                    "properties": {
                        "exceptions": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "additionalProperties": false
                }
            ]),
            RuleKind::PreferAwaitToThen => json!([]),
        }
    }
}

pub const REGISTRY: &[RuleMeta] = &[
    RuleMeta {
        kind: RuleKind::NoCallbackInPromise,
        description: "Disallow calling cb() inside of a then() (use nodeify instead)",
        messages: &[(
            no_callback_in_promise::MESSAGE_ID,
            no_callback_in_promise::MESSAGE,
        )],
    },
    RuleMeta {
        kind: RuleKind::PreferAwaitToThen,
        description: "Prefer await to then()/catch()/finally() for reading Promise values",
        messages: &[(
            prefer_await_to_then::MESSAGE_ID,
            prefer_await_to_then::MESSAGE,
        )],
    },
];

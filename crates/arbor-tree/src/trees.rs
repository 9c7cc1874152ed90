//! Turning a single node into text.

use std::borrow::Cow;

use tracing::warn;

use crate::{NodeKind, RuleNames, Tree};

/// Renders one node to text using a rule-name table.
///
/// Implementations must be total: every node yields some text.
pub trait NodeTextResolver {
    fn resolve<N: Tree + ?Sized>(&self, node: &N, rule_names: &RuleNames) -> String;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Whitespace {
    #[default]
    Keep,
    Escape {
        spaces: bool,
    },
}

/// Labels rule nodes by name and tokens by their text.
///
/// A rule node with a recorded alternative renders as `name:alt`. A rule id
/// missing from the table renders as the bare id.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RuleNameResolver {
    whitespace: Whitespace,
}

impl RuleNameResolver {
    pub const fn new() -> Self {
        Self { whitespace: Whitespace::Keep }
    }

    /// A resolver that runs token text through [`escape_whitespace`].
    pub const fn escaping(escape_spaces: bool) -> Self {
        Self { whitespace: Whitespace::Escape { spaces: escape_spaces } }
    }

    fn token_text(&self, text: &str) -> String {
        match self.whitespace {
            Whitespace::Keep => text.to_owned(),
            Whitespace::Escape { spaces } => escape_whitespace(text, spaces).into_owned(),
        }
    }
}

impl NodeTextResolver for RuleNameResolver {
    fn resolve<N: Tree + ?Sized>(&self, node: &N, rule_names: &RuleNames) -> String {
        match node.kind() {
            NodeKind::Rule { rule_index, alt_number } => {
                let Some(name) = rule_names.get(rule_index) else {
                    warn!(rule_index, rule_count = rule_names.len(), "rule index has no name");
                    return rule_index.to_string();
                };
                match alt_number {
                    Some(alt) => format!("{name}:{alt}"),
                    None => name.to_owned(),
                }
            }
            NodeKind::Terminal { text } | NodeKind::Error { text } => self.token_text(text),
        }
    }
}

/// Text for `node` using the default [`RuleNameResolver`].
pub fn node_text<N: Tree + ?Sized>(node: &N, rule_names: &RuleNames) -> String {
    RuleNameResolver::new().resolve(node, rule_names)
}

/// Replaces tabs, newlines and carriage returns with their escapes, and
/// spaces with `·` when `escape_spaces` is set.
pub fn escape_whitespace(text: &str, escape_spaces: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '\t' | '\n' | '\r') || (escape_spaces && c == ' ');
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            ' ' if escape_spaces => escaped.push('\u{00B7}'),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

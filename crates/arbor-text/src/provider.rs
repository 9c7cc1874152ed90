use arbor_tree::{NodeTextResolver, RuleNameResolver, RuleNames, Tree};
use tracing::trace;

/// Label given to an absent node.
pub const NULL_TEXT: &str = "null";

/// Supplies the text a tree viewer shows for each node.
pub trait TreeTextProvider {
    /// Returns the label for `node`, or [`NULL_TEXT`] when there is none.
    fn text<N: Tree + ?Sized>(&self, node: Option<&N>) -> String;
}

/// Labels nodes using a fixed table of rule names.
///
/// Error nodes are wrapped as `<error ...>` around the resolved text, every
/// other node shows the resolved text as is.
#[derive(Clone, Debug, Default)]
pub struct RuleTreeTextProvider<R = RuleNameResolver> {
    rule_names: RuleNames,
    resolver: R,
}

impl RuleTreeTextProvider {
    pub fn new(rule_names: impl Into<RuleNames>) -> Self {
        Self::with_resolver(rule_names, RuleNameResolver::new())
    }
}

impl<R: NodeTextResolver> RuleTreeTextProvider<R> {
    pub fn with_resolver(rule_names: impl Into<RuleNames>, resolver: R) -> Self {
        Self { rule_names: rule_names.into(), resolver }
    }

    #[inline]
    pub fn rule_names(&self) -> &RuleNames {
        &self.rule_names
    }
}

impl<R: NodeTextResolver> TreeTextProvider for RuleTreeTextProvider<R> {
    fn text<N: Tree + ?Sized>(&self, node: Option<&N>) -> String {
        let Some(node) = node else {
            return NULL_TEXT.to_owned();
        };

        let text = self.resolver.resolve(node, &self.rule_names);
        let text = if node.is_error() { format!("<error {text}>") } else { text };
        trace!(%text, "labelled node");
        text
    }
}

//! Display labels for parse tree nodes, as shown by tree viewers and
//! console dumps.

mod provider;


pub use arbor_tree::{NodeKind, NodeTextResolver, RuleNameResolver, RuleNames, Tree};
/// Label providers.
pub use provider::{NULL_TEXT, RuleTreeTextProvider, TreeTextProvider};

//! Read-only view of parse tree nodes and the routines that turn them into
//! short display text.
//!
//! Trees are built and owned elsewhere. This crate only reads the kind of a
//! node and resolves rule ids against a rule-name table.

mod rule_names;
mod tree;
/// Node-to-text resolution.
pub mod trees;


/// Immutable table of rule names indexed by rule id.
pub use rule_names::RuleNames;
/// Node contract and its kinds.
pub use tree::{NodeKind, Tree};
/// Default resolver and helpers.
pub use trees::{NodeTextResolver, RuleNameResolver, escape_whitespace, node_text};

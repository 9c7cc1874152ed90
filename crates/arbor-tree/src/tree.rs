use std::num::NonZeroUsize;

/// The kind of a parse tree node, carrying what is needed to label it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind<'a> {
    /// Invocation of the grammar rule `rule_index`.
    ///
    /// `alt_number` is the alternative the rule matched, if the parser
    /// recorded one.
    Rule { rule_index: usize, alt_number: Option<NonZeroUsize> },
    /// A matched token.
    Terminal { text: &'a str },
    /// Placeholder inserted where recognition failed. `text` is the text of
    /// the offending or conjured token, e.g. `<missing 'expr'>`.
    Error { text: &'a str },
}

impl NodeKind<'_> {
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error { .. })
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal { .. } | Self::Error { .. })
    }
}

/// A node of a parse tree, seen from the labelling side.
pub trait Tree {
    fn kind(&self) -> NodeKind<'_>;

    /// Returns `true` if this node is an error placeholder.
    #[inline]
    fn is_error(&self) -> bool {
        self.kind().is_error()
    }
}

impl<T: Tree + ?Sized> Tree for &T {
    #[inline]
    fn kind(&self) -> NodeKind<'_> {
        (**self).kind()
    }
}

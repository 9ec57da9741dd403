//! Resource categories for fetches.

/// What a fetch retrieves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A view's markup fragment.
    ViewFragment,
    /// A JSON collection rendered by a list widget.
    ListData,
}

impl ResourceKind {
    /// Get the name of this resource kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewFragment => "view_fragment",
            Self::ListData => "list_data",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

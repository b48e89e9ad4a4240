//! Render target selection and the fixed element ids shared by both adapters.

/// Where a component render will run.
///
/// Chosen by the caller rather than detected, so both paths are testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// A live script runtime will hydrate the page; the toggle is bound.
    Interactive,
    /// A prerendered snapshot; the toggle is inert and the list collapsed.
    Snapshot,
}

impl RenderTarget {
    pub fn is_interactive(self) -> bool {
        matches!(self, RenderTarget::Interactive)
    }
}

/// DOM ids the inline scripts key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementIds {
    /// Disclosure button.
    pub toggle: &'static str,
    /// Disclosure arrow.
    pub arrow: &'static str,
    /// Collapsible list region.
    pub content: &'static str,
    /// JSON hydration state block (interactive pages only).
    pub state: &'static str,
}

pub const ELEMENT_IDS: ElementIds = ElementIds {
    toggle: "troubleshoot-toggle",
    arrow: "arrow",
    content: "content",
    state: "__ERROR_PAGE_STATE__",
};

//! Component adapter: a stateful error page with one toggle.
//!
//! The component owns a [`RenderContext`] for as long as it lives. Its markup
//! is a deterministic function of the expanded flag; in
//! [`RenderTarget::Interactive`] the page ships a hydration script that keeps
//! toggling client-side, in [`RenderTarget::Snapshot`] the toggle is inert and
//! the page carries the same inline script the standalone files use.

use askama::Template;
use errpages_core::{Catalogue, ContentTree, DisclosureStyle, ErrorEntry, RenderContext};

use crate::{
    document::{ComponentDocument, PageMeta},
    error::Result,
    inline::hydration_state_json,
    target::{ElementIds, RenderTarget, ELEMENT_IDS},
};

#[derive(Template)]
#[template(path = "component.html")]
struct ComponentTemplate<'a> {
    meta: PageMeta,
    stylesheet_href: Option<&'a str>,
    tree: ContentTree<'a>,
    style: DisclosureStyle,
    interactive: bool,
    ids: ElementIds,
    collapsed: DisclosureStyle,
    expanded: DisclosureStyle,
    hydration_state: String,
}

/// An error page bound to live toggle state.
#[derive(Debug, Clone)]
pub struct ErrorPageComponent<'a> {
    context: RenderContext<'a>,
    target: RenderTarget,
}

impl<'a> ErrorPageComponent<'a> {
    /// Mount a component for a resolved entry, collapsed.
    pub fn new(entry: &'a ErrorEntry, target: RenderTarget) -> Self {
        Self {
            context: RenderContext::new(entry),
            target,
        }
    }

    /// Mount a component for `code`, falling back to the 404 entry.
    pub fn for_code(catalogue: &Catalogue, code: &str, target: RenderTarget) -> Self {
        Self::new(catalogue.lookup(code), target)
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    pub fn is_expanded(&self) -> bool {
        self.context.is_expanded()
    }

    /// Flip the troubleshooting list.
    ///
    /// Returns `false` without touching state when rendering a snapshot.
    pub fn toggle(&mut self) -> bool {
        if !self.target.is_interactive() {
            return false;
        }
        self.context.toggle();
        true
    }

    /// Current content tree.
    pub fn view(&self) -> ContentTree<'a> {
        self.context.render()
    }

    /// Visual state of the disclosure (list height and arrow rotation).
    pub fn style(&self) -> DisclosureStyle {
        DisclosureStyle::for_state(self.is_expanded())
    }

    /// Render the full page document.
    pub fn render_html(&self, document: &ComponentDocument) -> Result<String> {
        let tree = self.view();
        let hydration_state = if self.target.is_interactive() {
            hydration_state_json(&tree)?
        } else {
            String::new()
        };

        let template = ComponentTemplate {
            meta: document
                .meta
                .clone()
                .unwrap_or_else(|| PageMeta::for_tree(&tree)),
            stylesheet_href: document.stylesheet_href.as_deref(),
            style: self.style(),
            interactive: self.target.is_interactive(),
            ids: ELEMENT_IDS,
            collapsed: DisclosureStyle::COLLAPSED,
            expanded: DisclosureStyle::EXPANDED,
            hydration_state,
            tree,
        };

        Ok(template.render()?)
    }
}

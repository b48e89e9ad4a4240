//! Static adapter: self-contained HTML documents.
//!
//! A standalone page needs nothing else to render: compiled CSS is inlined,
//! the full troubleshooting list is in the markup (collapsed), and a vanilla
//! inline script toggles it by writing inline styles on two fixed elements.
//! Output is byte-identical for identical input.

use askama::Template;
use errpages_core::{render, Catalogue, ContentTree, DisclosureStyle, ErrorEntry};

use crate::{
    document::PageMeta,
    error::Result,
    inline::inline_css,
    target::{ElementIds, ELEMENT_IDS},
};

#[derive(Template)]
#[template(path = "standalone.html")]
struct StandaloneTemplate<'a> {
    meta: PageMeta,
    styles: String,
    tree: ContentTree<'a>,
    style: DisclosureStyle,
    interactive: bool,
    ids: ElementIds,
    collapsed: DisclosureStyle,
    expanded: DisclosureStyle,
}

/// Renders standalone pages from one catalogue and one compiled stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct StandaloneRenderer<'a> {
    catalogue: &'a Catalogue,
    styles: &'a str,
}

impl<'a> StandaloneRenderer<'a> {
    pub fn new(catalogue: &'a Catalogue, styles: &'a str) -> Self {
        Self { catalogue, styles }
    }

    /// Render the page for `code`; unknown codes render the 404 page.
    pub fn render_standalone(&self, code: &str) -> Result<String> {
        self.render_entry(self.catalogue.lookup(code))
    }

    pub fn render_entry(&self, entry: &ErrorEntry) -> Result<String> {
        // No persisted state: standalone pages always start collapsed.
        let tree = render(entry, false);

        let template = StandaloneTemplate {
            meta: PageMeta::for_tree(&tree),
            styles: inline_css(self.styles),
            style: tree.troubleshooting.style(),
            interactive: false,
            ids: ELEMENT_IDS,
            collapsed: DisclosureStyle::COLLAPSED,
            expanded: DisclosureStyle::EXPANDED,
            tree,
        };

        Ok(template.render()?)
    }
}

/// Render a standalone page from the built-in catalogue.
pub fn render_standalone(code: &str, styles: &str) -> Result<String> {
    StandaloneRenderer::new(Catalogue::builtin(), styles).render_standalone(code)
}

//! Document-level metadata shared by component and standalone pages.

use errpages_core::ContentTree;

/// `<title>` and description meta for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Meta of the site root, which shows the 404 content under its own title.
    pub fn for_root() -> Self {
        Self {
            title: "404 - Page Not Found".to_string(),
            description: "Error response page".to_string(),
        }
    }

    pub fn for_tree(tree: &ContentTree<'_>) -> Self {
        Self {
            title: format!("{} Error", tree.code),
            description: format!("Error {} response page", tree.code),
        }
    }
}

/// Options for a component page document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDocument {
    /// Linked compiled stylesheet. Component pages never inline CSS.
    pub stylesheet_href: Option<String>,
    /// Overrides the meta derived from the rendered entry.
    pub meta: Option<PageMeta>,
}

impl ComponentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = Some(href.into());
        self
    }

    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

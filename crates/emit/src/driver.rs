//! Emission driver: renders one page per code plus the root page.
//!
//! Rendering is pure and synchronous; writing the result to disk lives in
//! [`crate::writer`].

use std::{collections::BTreeMap, fmt};

use errpages_core::{Catalogue, DEFAULT_CODE};
use errpages_render::{ComponentDocument, ErrorPageComponent, RenderTarget, StandaloneRenderer};

use crate::error::{EmitError, Result};

/// Which adapter produces the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitTarget {
    /// Prerendered component snapshots linking the compiled stylesheet.
    Component,
    /// Standalone documents with inlined stylesheet.
    Static,
}

impl fmt::Display for EmitTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitTarget::Component => f.write_str("component"),
            EmitTarget::Static => f.write_str("static"),
        }
    }
}

/// One output unit of an emission.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// The page for a requested code.
    Code(String),
    /// The root page, rendered with the default (404) content.
    Root,
}

impl Slot {
    /// Code whose content fills this slot.
    pub fn code(&self) -> &str {
        match self {
            Slot::Code(code) => code,
            Slot::Root => DEFAULT_CODE,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Code(code) => write!(f, "code {code}"),
            Slot::Root => f.write_str("root"),
        }
    }
}

/// Renderer inputs that come from the client build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAssets {
    /// Compiled CSS inlined into static pages.
    pub css: String,
    /// Stylesheet URL linked from component pages.
    pub stylesheet_href: Option<String>,
}

impl PageAssets {
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            stylesheet_href: None,
        }
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = Some(href.into());
        self
    }
}

/// Rendered pages of one target, keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    target: EmitTarget,
    pages: BTreeMap<Slot, String>,
}

impl Emission {
    pub fn target(&self) -> EmitTarget {
        self.target
    }

    pub fn get(&self, slot: &Slot) -> Option<&str> {
        self.pages.get(slot).map(String::as_str)
    }

    pub fn code(&self, code: &str) -> Option<&str> {
        self.get(&Slot::Code(code.to_string()))
    }

    pub fn root(&self) -> Option<&str> {
        self.get(&Slot::Root)
    }

    /// Whether the root page equals the default code's page.
    pub fn root_matches_default(&self) -> bool {
        matches!((self.root(), self.code(DEFAULT_CODE)), (Some(root), Some(default)) if root == default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> {
        self.pages.iter().map(|(slot, html)| (slot, html.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn into_pages(self) -> BTreeMap<Slot, String> {
        self.pages
    }
}

/// Render every code in `codes` plus the root page with `target`.
///
/// Stops at the first failing slot and reports it; no partial emission is
/// returned. Duplicate codes collapse into one slot.
pub fn emit_all(
    catalogue: &Catalogue,
    codes: &[&str],
    target: EmitTarget,
    assets: &PageAssets,
) -> Result<Emission> {
    emit_with(codes, target, |slot| render_slot(catalogue, slot, target, assets))
}

/// Render each slot in order with `render`, stopping at the first failure.
fn emit_with<F>(codes: &[&str], target: EmitTarget, mut render: F) -> Result<Emission>
where
    F: FnMut(&Slot) -> errpages_render::Result<String>,
{
    let slots = codes
        .iter()
        .map(|code| Slot::Code((*code).to_string()))
        .chain(std::iter::once(Slot::Root));

    let mut pages = BTreeMap::new();
    for slot in slots {
        let html = render(&slot).map_err(|source| EmitError::Render {
            slot: slot.clone(),
            source,
        })?;
        pages.insert(slot, html);
    }

    tracing::debug!(target_kind = %target, pages = pages.len(), "Emission rendered");

    Ok(Emission { target, pages })
}

fn render_slot(
    catalogue: &Catalogue,
    slot: &Slot,
    target: EmitTarget,
    assets: &PageAssets,
) -> errpages_render::Result<String> {
    match target {
        EmitTarget::Static => {
            StandaloneRenderer::new(catalogue, &assets.css).render_standalone(slot.code())
        }
        EmitTarget::Component => {
            let document = match &assets.stylesheet_href {
                Some(href) => ComponentDocument::new().with_stylesheet(href.as_str()),
                None => ComponentDocument::new(),
            };
            ErrorPageComponent::for_code(catalogue, slot.code(), RenderTarget::Snapshot)
                .render_html(&document)
        }
    }
}

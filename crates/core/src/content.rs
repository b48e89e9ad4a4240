//! Renderer core: turns a catalogue entry into a target-agnostic content tree.
//!
//! Nothing here knows about HTML. Adapters in `errpages_render` bind the
//! [`ContentTree`] to markup; the only state they may vary is the
//! troubleshooting `expanded` flag carried by a [`RenderContext`].

use serde::Serialize;

use crate::catalogue::ErrorEntry;

/// Label of the disclosure control.
pub const TROUBLESHOOTING_LABEL: &str = "Troubleshooting";

/// Structured page content, independent of the render target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTree<'a> {
    /// Large heading text (the status code).
    pub code: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub troubleshooting: Disclosure<'a>,
}

/// The collapsible troubleshooting list.
///
/// The items are always present; `expanded` only drives visibility so that
/// snapshot renders ship the whole list and toggle it client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Disclosure<'a> {
    pub label: &'a str,
    pub items: &'a [&'a str],
    pub expanded: bool,
}

impl Disclosure<'_> {
    pub fn is_hidden(&self) -> bool {
        !self.expanded
    }

    pub fn style(&self) -> DisclosureStyle {
        DisclosureStyle::for_state(self.expanded)
    }
}

/// Build the content tree for `entry`.
pub fn render(entry: &ErrorEntry, expanded: bool) -> ContentTree<'_> {
    ContentTree {
        code: entry.code,
        title: entry.title,
        description: entry.description,
        troubleshooting: Disclosure {
            label: TROUBLESHOOTING_LABEL,
            items: entry.troubleshooting,
            expanded,
        },
    }
}

/// Per-render state: the resolved entry plus the expanded flag.
///
/// Owned by exactly one render or component; never shared between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    entry: &'a ErrorEntry,
    troubleshooting_expanded: bool,
}

impl<'a> RenderContext<'a> {
    /// New context, collapsed.
    pub fn new(entry: &'a ErrorEntry) -> Self {
        Self {
            entry,
            troubleshooting_expanded: false,
        }
    }

    pub fn entry(&self) -> &'a ErrorEntry {
        self.entry
    }

    pub fn is_expanded(&self) -> bool {
        self.troubleshooting_expanded
    }

    /// Flip the expanded flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.troubleshooting_expanded = !self.troubleshooting_expanded;
        self.troubleshooting_expanded
    }

    pub fn render(&self) -> ContentTree<'a> {
        render(self.entry, self.troubleshooting_expanded)
    }
}

/// Visual presentation of one disclosure state.
///
/// Inline-style values are used by the standalone script, utility classes by
/// component markup. Both describe the same two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureStyle {
    pub max_height: &'static str,
    pub margin_top: &'static str,
    pub arrow_rotation_deg: u16,
    pub content_class: &'static str,
    pub arrow_class: &'static str,
}

const ARROW_BASE_CLASS: &str = "w-5 h-5 transition-transform duration-200";

impl DisclosureStyle {
    pub const COLLAPSED: Self = Self {
        max_height: "0px",
        margin_top: "0px",
        arrow_rotation_deg: 0,
        content_class: "overflow-hidden transition-all duration-200 max-h-0",
        arrow_class: ARROW_BASE_CLASS,
    };

    pub const EXPANDED: Self = Self {
        max_height: "24rem",
        margin_top: "1rem",
        arrow_rotation_deg: 180,
        content_class: "overflow-hidden transition-all duration-200 max-h-96 mt-4",
        arrow_class: "w-5 h-5 transition-transform duration-200 rotate-180",
    };

    pub fn for_state(expanded: bool) -> Self {
        if expanded {
            Self::EXPANDED
        } else {
            Self::COLLAPSED
        }
    }

    /// CSS `transform` value for the disclosure arrow.
    pub fn arrow_transform(&self) -> String {
        format!("rotate({}deg)", self.arrow_rotation_deg)
    }
}

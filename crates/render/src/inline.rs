//! Pure helpers that prepare text for embedding inside `<script>` and `<style>`.

use errpages_core::{ContentTree, DisclosureStyle};
use serde::Serialize;

use crate::error::{RenderError, Result};

/// Client-side state handed to the hydration script.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HydrationState<'a> {
    code: &'a str,
    expanded: bool,
    styles: StateStyles,
}

#[derive(Debug, Serialize)]
struct StateStyles {
    collapsed: DisclosureStyle,
    expanded: DisclosureStyle,
}

/// Serialize the hydration state for a JSON `<script>` block.
///
/// `</` is escaped so the payload can never close the surrounding element.
pub fn hydration_state_json(tree: &ContentTree<'_>) -> Result<String> {
    let state = HydrationState {
        code: tree.code,
        expanded: tree.troubleshooting.expanded,
        styles: StateStyles {
            collapsed: DisclosureStyle::COLLAPSED,
            expanded: DisclosureStyle::EXPANDED,
        },
    };

    let json =
        serde_json::to_string(&state).map_err(|e| RenderError::Serialization(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

/// Prepare compiled CSS for an inline `<style>` element.
pub fn inline_css(css: &str) -> String {
    css.replace("</style", "<\\/style")
}

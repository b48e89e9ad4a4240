//! Pure error-page content - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - The error catalogue, the single source of page content
//! - The renderer core that turns an entry into a target-agnostic content tree
//! - Validation errors for custom catalogues
//!
//! # Example
//!
//! ```
//! use errpages_core::{lookup, render, RenderContext};
//!
//! // Unknown codes resolve to the 404 entry
//! assert_eq!(lookup("nonexistent").code, "404");
//!
//! let tree = render(lookup("500"), false);
//! assert!(tree.troubleshooting.is_hidden());
//!
//! let mut context = RenderContext::new(lookup("500"));
//! context.toggle();
//! assert!(!context.render().troubleshooting.is_hidden());
//! ```

mod catalogue;
mod content;
mod entries;
mod error;

pub use catalogue::{all_codes, lookup, Catalogue, ErrorEntry, DEFAULT_CODE};
pub use content::{
    render, ContentTree, Disclosure, DisclosureStyle, RenderContext, TROUBLESHOOTING_LABEL,
};
pub use error::{CoreError, Result};

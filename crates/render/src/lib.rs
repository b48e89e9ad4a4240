//! Pure page rendering - no I/O, no async, no side effects.
//!
//! This crate binds the content tree from `errpages_core` to HTML:
//! - [`ErrorPageComponent`]: stateful component pages, interactive or snapshot
//! - [`StandaloneRenderer`]: self-contained static documents with inline CSS and script
//!
//! Both adapters include the same card markup partial, so their visible
//! output only differs in how the toggle is wired.
//!
//! # Example
//!
//! ```
//! use errpages_core::Catalogue;
//! use errpages_render::{ComponentDocument, ErrorPageComponent, RenderTarget, render_standalone};
//!
//! let mut page = ErrorPageComponent::for_code(Catalogue::builtin(), "404", RenderTarget::Interactive);
//! page.toggle();
//! assert!(page.is_expanded());
//! let html = page.render_html(&ComponentDocument::new()).unwrap();
//! assert!(html.contains("Page Not Found"));
//!
//! let standalone = render_standalone("nonexistent", "body{}").unwrap();
//! assert_eq!(standalone, render_standalone("404", "body{}").unwrap());
//! ```

mod component;
mod document;
mod error;
mod inline;
mod standalone;
mod target;

pub use component::ErrorPageComponent;
pub use document::{ComponentDocument, PageMeta};
pub use error::{RenderError, Result};
pub use inline::{hydration_state_json, inline_css};
pub use standalone::{render_standalone, StandaloneRenderer};
pub use target::{ElementIds, RenderTarget, ELEMENT_IDS};

//! Emission driver - Imperative Shell.
//!
//! This crate produces page artifacts using the pure renderers from
//! `errpages_render`. It reads the compiled stylesheet from the client build,
//! renders one page per catalogue code (plus the root page) for each target,
//! and writes the results to disk.
//!
//! # Architecture
//!
//! - **Functional Core** (`errpages_core`, `errpages_render`): catalogue, content tree, markup
//! - **Imperative Shell** (this crate): build-asset reads, file writes, the generator binary
//!
//! # Example
//!
//! ```ignore
//! use errpages_emit::{GenerateConfig, Generator};
//!
//! // Reads ERRPAGES_BUILD_DIR / ERRPAGES_OUT_DIR / ERRPAGES_ASSET_BASE
//! let config = GenerateConfig::from_env();
//!
//! // I/O: reads build/client/assets/*.css, writes {code}.html, {code}/index.html, index.html
//! let report = Generator::new(config).run().await.unwrap();
//! println!("{} files", report.total());
//! ```

mod assets;
mod config;
mod driver;
mod error;
mod generator;
mod writer;

pub use assets::{read_build_assets, BuildAssets, ASSETS_DIR};
pub use config::GenerateConfig;
pub use driver::{emit_all, EmitTarget, Emission, PageAssets, Slot};
pub use error::{EmitError, Result};
pub use generator::{GenerateReport, Generator};
pub use writer::{artifact_path, write_emission};

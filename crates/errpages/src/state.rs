use std::{path::PathBuf, sync::Arc};

use errpages_core::Catalogue;
use errpages_emit::{read_build_assets, BuildAssets, EmitError, GenerateConfig, ASSETS_DIR};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The error catalogue every page is rendered from.
    pub catalogue: &'static Catalogue,
    /// Stylesheet inlined into standalone pages.
    pub styles: Arc<str>,
    /// Linked stylesheet for interactive pages, when the build provides one.
    pub stylesheet_href: Option<Arc<str>>,
    /// Directory served under `/assets`.
    pub assets_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create state over the built-in catalogue from already-read build assets.
    pub fn new(config: &GenerateConfig, assets: Option<BuildAssets>) -> Self {
        let (styles, stylesheet_href) = match assets {
            Some(assets) => {
                let href = assets.stylesheet_href(&config.asset_base);
                (Arc::from(assets.css), Some(Arc::from(href)))
            }
            None => (Arc::from(""), None),
        };

        Self {
            catalogue: Catalogue::builtin(),
            styles,
            stylesheet_href,
            assets_dir: Arc::new(config.build_dir.join(ASSETS_DIR)),
        }
    }

    /// Read the client build and create state from it.
    ///
    /// A missing stylesheet is not fatal for the server: pages are still
    /// served, just unstyled. Any other read failure is returned.
    pub async fn load(config: &GenerateConfig) -> Result<Self, EmitError> {
        let assets = match read_build_assets(&config.build_dir).await {
            Ok(assets) => {
                tracing::info!(stylesheet = %assets.stylesheet_file, "Loaded build assets");
                Some(assets)
            }
            Err(EmitError::MissingArtifact { path }) => {
                tracing::warn!(%path, "No compiled stylesheet found, serving unstyled pages");
                None
            }
            Err(err) => return Err(err),
        };

        Ok(Self::new(config, assets))
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = GenerateConfig {
            build_dir: PathBuf::from("build/client"),
            out_dir: PathBuf::from("build/client"),
            asset_base: "/".to_string(),
        };
        Self::new(&config, None)
    }
}

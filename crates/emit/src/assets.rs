//! Build-asset reader: locates the compiled stylesheet to inline.

use std::path::Path;

use crate::{
    driver::PageAssets,
    error::{EmitError, Result},
};

/// Directory under the build output holding compiled assets.
pub const ASSETS_DIR: &str = "assets";

/// Compiled assets read from the client build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildAssets {
    /// File name of the stylesheet under `assets/`.
    pub stylesheet_file: String,
    /// Stylesheet contents.
    pub css: String,
}

impl BuildAssets {
    /// Public URL of the stylesheet under `asset_base` (which ends in `/`).
    pub fn stylesheet_href(&self, asset_base: &str) -> String {
        format!("{asset_base}{ASSETS_DIR}/{}", self.stylesheet_file)
    }

    /// Inputs for the page renderers.
    pub fn page_assets(&self, asset_base: &str) -> PageAssets {
        PageAssets::new(self.css.clone()).with_stylesheet(self.stylesheet_href(asset_base))
    }
}

/// Read the compiled stylesheet from `{build_dir}/assets`.
///
/// When several stylesheets exist the first by file name wins, so repeated
/// runs inline the same file. A missing directory, no `.css` file, or an
/// empty stylesheet is a [`EmitError::MissingArtifact`].
pub async fn read_build_assets(build_dir: &Path) -> Result<BuildAssets> {
    let assets_dir = build_dir.join(ASSETS_DIR);

    let mut dir = tokio::fs::read_dir(&assets_dir)
        .await
        .map_err(|_| EmitError::missing(&assets_dir))?;

    let mut stylesheets = Vec::new();
    while let Some(entry) = dir.next_entry().await.map_err(|e| EmitError::AssetRead {
        path: assets_dir.display().to_string(),
        reason: e.to_string(),
    })? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".css") {
            stylesheets.push(name);
        }
    }
    stylesheets.sort();

    let Some(stylesheet_file) = stylesheets.into_iter().next() else {
        return Err(EmitError::missing(&assets_dir.join("*.css")));
    };

    let path = assets_dir.join(&stylesheet_file);
    let css = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| EmitError::AssetRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    if css.trim().is_empty() {
        return Err(EmitError::missing(&path));
    }

    tracing::debug!(
        stylesheet = %path.display(),
        bytes = css.len(),
        "Loaded compiled stylesheet"
    );

    Ok(BuildAssets {
        stylesheet_file,
        css,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_first_stylesheet_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join(ASSETS_DIR);
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(assets.join("root-b2.css"), ".b{}").unwrap();
        std::fs::write(assets.join("root-a1.css"), ".a{}").unwrap();
        std::fs::write(assets.join("entry.client-x.js"), "console.log(1)").unwrap();

        let build = read_build_assets(dir.path()).await.unwrap();
        assert_eq!(build.stylesheet_file, "root-a1.css");
        assert_eq!(build.css, ".a{}");
    }

    #[tokio::test]
    async fn test_missing_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_build_assets(dir.path()).await.unwrap_err();

        match err {
            EmitError::MissingArtifact { path } => assert!(path.ends_with(ASSETS_DIR)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_no_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join(ASSETS_DIR);
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(assets.join("app.js"), "").unwrap();

        let err = read_build_assets(dir.path()).await.unwrap_err();
        assert!(matches!(err, EmitError::MissingArtifact { .. }));
    }

    #[tokio::test]
    async fn test_empty_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join(ASSETS_DIR);
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(assets.join("root.css"), "  \n").unwrap();

        let err = read_build_assets(dir.path()).await.unwrap_err();
        assert!(matches!(err, EmitError::MissingArtifact { .. }));
    }

    #[test]
    fn test_stylesheet_href() {
        let build = BuildAssets {
            stylesheet_file: "root-abc.css".to_string(),
            css: "body{}".to_string(),
        };
        assert_eq!(build.stylesheet_href("/"), "/assets/root-abc.css");
        assert_eq!(
            build.stylesheet_href("https://cdn.example.com/"),
            "https://cdn.example.com/assets/root-abc.css"
        );
        assert_eq!(
            build.page_assets("/").stylesheet_href.as_deref(),
            Some("/assets/root-abc.css")
        );
    }
}

//! The full generation pipeline behind `errpages-generate`.

use std::path::PathBuf;

use errpages_core::{Catalogue, DEFAULT_CODE};

use crate::{
    assets::read_build_assets,
    config::GenerateConfig,
    driver::{emit_all, EmitTarget, Emission},
    error::{EmitError, Result},
    writer::write_emission,
};

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Stylesheet that was inlined into static pages.
    pub stylesheet: String,
    /// Written standalone files (`{code}.html`, `index.html`).
    pub standalone: Vec<PathBuf>,
    /// Written prerendered files (`{code}/index.html`).
    pub prerendered: Vec<PathBuf>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.standalone.len() + self.prerendered.len()
    }
}

/// Renders and writes every page of a catalogue.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenerateConfig,
    catalogue: &'static Catalogue,
}

impl Generator {
    /// Generator over the built-in catalogue.
    pub fn new(config: GenerateConfig) -> Self {
        Self::with_catalogue(config, Catalogue::builtin())
    }

    pub fn with_catalogue(config: GenerateConfig, catalogue: &'static Catalogue) -> Self {
        Self { config, catalogue }
    }

    /// Run the pipeline: read build assets, render both targets, write files.
    ///
    /// Nothing is written unless both targets rendered completely.
    pub async fn run(&self) -> Result<GenerateReport> {
        let assets = read_build_assets(&self.config.build_dir).await?;
        let page_assets = assets.page_assets(&self.config.asset_base);
        let codes: Vec<&str> = self.catalogue.all_codes().collect();

        tracing::info!(
            codes = ?codes,
            stylesheet = %assets.stylesheet_file,
            out_dir = %self.config.out_dir.display(),
            "Generating error pages"
        );

        let standalone = emit_all(self.catalogue, &codes, EmitTarget::Static, &page_assets)?;
        let prerendered = emit_all(self.catalogue, &codes, EmitTarget::Component, &page_assets)?;
        check_root(&standalone)?;
        check_root(&prerendered)?;

        tokio::fs::create_dir_all(&self.config.out_dir)
            .await
            .map_err(|source| EmitError::OutputDir {
                path: self.config.out_dir.display().to_string(),
                source,
            })?;

        let standalone = write_emission(&self.config.out_dir, &standalone).await?;
        let prerendered = write_emission(&self.config.out_dir, &prerendered).await?;

        let report = GenerateReport {
            stylesheet: assets.stylesheet_file,
            standalone,
            prerendered,
        };

        tracing::info!(files = report.total(), "All error pages generated");
        Ok(report)
    }
}

fn check_root(emission: &Emission) -> Result<()> {
    if emission.root_matches_default() {
        Ok(())
    } else {
        Err(EmitError::RootMismatch(DEFAULT_CODE))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::assets::ASSETS_DIR;

    fn write_build(dir: &Path, css: &str) {
        let assets = dir.join(ASSETS_DIR);
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(assets.join("root-4f2a.css"), css).unwrap();
    }

    fn config(build: &Path, out: &Path) -> GenerateConfig {
        GenerateConfig {
            build_dir: build.to_path_buf(),
            out_dir: out.to_path_buf(),
            asset_base: "/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generates_full_layout() {
        let build = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_build(build.path(), ".max-h-0{max-height:0}");

        let report = Generator::new(config(build.path(), out.path()))
            .run()
            .await
            .unwrap();

        assert_eq!(report.stylesheet, "root-4f2a.css");
        assert_eq!(report.standalone.len(), 8);
        assert_eq!(report.prerendered.len(), 7);
        assert_eq!(report.total(), 15);

        for code in Catalogue::builtin().all_codes() {
            let standalone = std::fs::read_to_string(out.path().join(format!("{code}.html"))).unwrap();
            assert!(standalone.contains(".max-h-0{max-height:0}"));

            let prerendered =
                std::fs::read_to_string(out.path().join(code).join("index.html")).unwrap();
            assert!(prerendered.contains(r#"href="/assets/root-4f2a.css""#));
        }

        assert_eq!(
            std::fs::read_to_string(out.path().join("index.html")).unwrap(),
            std::fs::read_to_string(out.path().join("404.html")).unwrap()
        );
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let build = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_build(build.path(), "body{margin:0}");
        let generator = Generator::new(config(build.path(), out.path()));

        generator.run().await.unwrap();
        let first = std::fs::read(out.path().join("500.html")).unwrap();
        generator.run().await.unwrap();
        let second = std::fs::read(out.path().join("500.html")).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_css_writes_nothing() {
        let build = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let err = Generator::new(config(build.path(), out.path()))
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, EmitError::MissingArtifact { .. }));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }
}

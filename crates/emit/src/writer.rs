//! Writes an emission to disk.
//!
//! Layout under the output directory:
//! - static: `{code}.html` and `index.html` (the root)
//! - component: `{code}/index.html`
//!
//! The component root has no file of its own; `index.html` belongs to the
//! static target so the root page works without a script runtime.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::{
    driver::{EmitTarget, Emission, Slot},
    error::{EmitError, Result},
};

/// Relative artifact path for `slot`, or `None` when the slot is not written.
pub fn artifact_path(target: EmitTarget, slot: &Slot) -> Option<PathBuf> {
    match (target, slot) {
        (EmitTarget::Static, Slot::Code(code)) => Some(PathBuf::from(format!("{code}.html"))),
        (EmitTarget::Static, Slot::Root) => Some(PathBuf::from("index.html")),
        (EmitTarget::Component, Slot::Code(code)) => Some(Path::new(code).join("index.html")),
        (EmitTarget::Component, Slot::Root) => None,
    }
}

/// Write every page of `emission` under `out_dir`, concurrently.
///
/// The first failure aborts the remaining writes and is returned with the
/// failing slot and path. Returns the written paths in slot order.
pub async fn write_emission(out_dir: &Path, emission: &Emission) -> Result<Vec<PathBuf>> {
    let target = emission.target();
    let mut tasks = JoinSet::new();

    for (slot, html) in emission.iter() {
        let Some(relative) = artifact_path(target, slot) else {
            continue;
        };
        let path = out_dir.join(relative);
        let slot = slot.clone();
        let html = html.to_owned();

        tasks.spawn(async move {
            write_page(&path, html.as_bytes())
                .await
                .map_err(|source| EmitError::Write {
                    slot: slot.clone(),
                    path: path.display().to_string(),
                    source,
                })?;
            tracing::info!(%slot, path = %path.display(), "Generated page");
            Ok::<_, EmitError>((slot, path))
        });
    }

    let mut written = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => Err(EmitError::Join(e.to_string())),
        };
        match outcome {
            Ok(page) => written.push(page),
            Err(e) => {
                tasks.abort_all();
                tracing::error!(error = %e, "Aborting emission");
                return Err(e);
            }
        }
    }

    written.sort();
    Ok(written.into_iter().map(|(_, path)| path).collect())
}

async fn write_page(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await
}

#[cfg(test)]
mod tests {
    use errpages_core::Catalogue;

    use super::*;
    use crate::driver::{emit_all, PageAssets};

    fn emission(target: EmitTarget) -> Emission {
        let codes: Vec<&str> = Catalogue::builtin().all_codes().collect();
        emit_all(
            Catalogue::builtin(),
            &codes,
            target,
            &PageAssets::new("body{}").with_stylesheet("/assets/root.css"),
        )
        .unwrap()
    }

    #[test]
    fn test_artifact_paths() {
        let code = Slot::Code("500".to_string());
        assert_eq!(
            artifact_path(EmitTarget::Static, &code),
            Some(PathBuf::from("500.html"))
        );
        assert_eq!(
            artifact_path(EmitTarget::Static, &Slot::Root),
            Some(PathBuf::from("index.html"))
        );
        assert_eq!(
            artifact_path(EmitTarget::Component, &code),
            Some(PathBuf::from("500/index.html"))
        );
        assert_eq!(artifact_path(EmitTarget::Component, &Slot::Root), None);
    }

    #[tokio::test]
    async fn test_writes_static_layout() {
        let dir = tempfile::tempdir().unwrap();
        let emission = emission(EmitTarget::Static);

        let written = write_emission(dir.path(), &emission).await.unwrap();
        assert_eq!(written.len(), 8);

        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        let not_found = std::fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert_eq!(index, not_found);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("502.html")).unwrap(),
            emission.code("502").unwrap()
        );
    }

    #[tokio::test]
    async fn test_writes_component_layout() {
        let dir = tempfile::tempdir().unwrap();
        let emission = emission(EmitTarget::Component);

        let written = write_emission(dir.path(), &emission).await.unwrap();
        assert_eq!(written.len(), 7);
        assert!(dir.path().join("401/index.html").is_file());
        assert!(!dir.path().join("index.html").exists());
    }

    #[tokio::test]
    async fn test_rewrite_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let emission = emission(EmitTarget::Static);

        write_emission(dir.path(), &emission).await.unwrap();
        let first = std::fs::read(dir.path().join("503.html")).unwrap();
        write_emission(dir.path(), &emission).await.unwrap();
        let second = std::fs::read(dir.path().join("503.html")).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_write_failure_reports_slot_and_path() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the output directory should be makes every write fail.
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "not a directory").unwrap();

        let err = write_emission(&blocked, &emission(EmitTarget::Static))
            .await
            .unwrap_err();
        match err {
            EmitError::Write { path, .. } => assert!(path.starts_with(&*blocked.to_string_lossy())),
            other => panic!("unexpected error: {other}"),
        }
    }
}

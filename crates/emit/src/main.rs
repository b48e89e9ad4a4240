//! errpages-generate: writes every error page artifact for the client build.
//!
//! Takes no arguments; configuration comes from the environment
//! (see [`errpages_emit::GenerateConfig`]). Exits non-zero when a build
//! artifact is missing or any page fails to render or write.

use anyhow::{bail, Result};
use errpages_emit::{GenerateConfig, Generator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "errpages_emit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if std::env::args_os().len() > 1 {
        bail!("errpages-generate takes no arguments");
    }

    let config = GenerateConfig::from_env();
    let report = Generator::new(config).run().await?;

    tracing::info!(
        standalone = report.standalone.len(),
        prerendered = report.prerendered.len(),
        stylesheet = %report.stylesheet,
        "Done"
    );

    Ok(())
}

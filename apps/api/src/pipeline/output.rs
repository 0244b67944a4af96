use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Creates the artifact directory if it is missing. No-op when it already exists.
pub async fn ensure_output_directory(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;
    info!("Ensured that the output directory '{}' exists", dir.display());
    Ok(())
}

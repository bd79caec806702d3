//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::io::ErrorKind;

use tracing::{info, warn};

/// Ensure the data directory exists, creating it when missing.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(data_dir).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(anyhow::anyhow!("{data_dir} exists but is not a directory")),
        Err(e) if e.kind() == ErrorKind::NotFound => warn!(%data_dir, "data directory not found; creating it"),
        Err(e) => return Err(anyhow::anyhow!("cannot inspect {data_dir}: {e}")),
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    info!(%data_dir, "data directory created");
    Ok(())
}

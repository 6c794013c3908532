//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the asset root and its sub-directories exist, creating them when missing.
pub async fn ensure_env(asset_root: &str, sub_dirs: &[&str]) -> anyhow::Result<()> {
    if tokio::fs::metadata(asset_root).await.is_err() {
        warn!(%asset_root, "asset root not found; creating it");
    }
    tokio::fs::create_dir_all(asset_root)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {asset_root}: {e}"))?;
    for sub in sub_dirs {
        let dir = std::path::Path::new(asset_root).join(sub);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    info!(%asset_root, "asset directories ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_root_and_subdirs() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("wwwroot");
        let root_str = root.to_string_lossy().to_string();
        ensure_env(&root_str, &["img", "uploads"]).await.unwrap();
        assert!(root.join("img").is_dir());
        assert!(root.join("uploads").is_dir());
        // idempotent
        ensure_env(&root_str, &["img"]).await.unwrap();
    }
}

//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server only needs to know the asset layout here.

use crate::assets::{BANNER_DIR, CATALOG_DIR};

/// Ensure the asset root and the upload sub-directories exist.
pub async fn ensure_env(asset_root: &str) -> anyhow::Result<()> {
    common::env::ensure_env(asset_root, &[CATALOG_DIR, BANNER_DIR]).await
}

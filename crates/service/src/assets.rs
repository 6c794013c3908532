//! Asset store: the directory that holds uploaded images and is served back as static files.
//!
//! Relative paths handed to [`AssetStore`] are resolved against its root; anything that would
//! leave the root (`..`, absolute paths, drive prefixes) is refused.

use std::io;
use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Sub-directory for service-catalog images.
pub const CATALOG_DIR: &str = "img";
/// Prefix recorded in `service.image_path`.
pub const CATALOG_PATH_PREFIX: &str = "./img/";
/// Sub-directory for banner images.
pub const BANNER_DIR: &str = "uploads";

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const MAX_FILE_NAME_LEN: usize = 100;

static INVALID_FILE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F]+"#).expect("invalid file chars regex"));

/// A file part read from a multipart request.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content_type: None, bytes }
    }

    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    pub fn len(&self) -> usize { self.bytes.len() }

    /// Lower-cased extension including the dot, e.g. `.png`.
    pub fn extension(&self) -> Option<String> {
        split_extension(base_name(&self.file_name)).1.map(|e| e.to_lowercase())
    }
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    /// Resolve a relative path under the root, refusing traversal.
    pub fn resolve(&self, rel: &str) -> Option<PathBuf> {
        let rel = rel.trim_start_matches("./");
        let mut out = self.root.clone();
        let mut any = false;
        for c in Path::new(rel).components() {
            match c {
                Component::Normal(part) => {
                    out.push(part);
                    any = true;
                }
                Component::CurDir => {}
                _ => return None,
            }
        }
        any.then_some(out)
    }

    pub async fn ensure_dir(&self, sub: &str) -> io::Result<PathBuf> {
        let dir = if sub.is_empty() {
            self.root.clone()
        } else {
            self.resolve(sub).ok_or_else(|| invalid_path(sub))?
        };
        tokio::fs::create_dir_all(&dir).await?;
        Ok(dir)
    }

    /// Write `bytes` at `rel`, creating parent directories. Existing files are overwritten.
    pub async fn write(&self, rel: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.resolve(rel).ok_or_else(|| invalid_path(rel))?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "asset written");
        Ok(path)
    }

    pub async fn exists(&self, rel: &str) -> bool {
        match self.resolve(rel) {
            Some(p) => tokio::fs::try_exists(&p).await.unwrap_or(false),
            None => false,
        }
    }

    pub async fn is_dir(&self, rel: &str) -> bool {
        match self.resolve(rel) {
            Some(p) => tokio::fs::metadata(&p).await.map(|m| m.is_dir()).unwrap_or(false),
            None => false,
        }
    }

    /// Delete a file, swallowing every failure. Returns whether a file was removed.
    pub async fn remove_best_effort(&self, rel: &str) -> bool {
        let Some(path) = self.resolve(rel) else {
            warn!(%rel, "refusing to delete asset outside the store");
            return false;
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "best-effort asset delete failed");
                false
            }
        }
    }

    /// First free name in `dir`: `name`, then `stem_1.ext`, `stem_2.ext`, ...
    pub async fn unique_name_in(&self, dir: &str, name: &str) -> io::Result<String> {
        let dir_path = self.ensure_dir(dir).await?;
        if !tokio::fs::try_exists(dir_path.join(name)).await? {
            return Ok(name.to_string());
        }
        let (stem, ext) = split_extension(name);
        let ext = ext.unwrap_or("");
        let mut n = 1u32;
        loop {
            let candidate = format!("{stem}_{n}{ext}");
            if !tokio::fs::try_exists(dir_path.join(&candidate)).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

fn invalid_path(rel: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("invalid asset path: {rel}"))
}

/// Last path component, treating both `/` and `\` as separators.
pub fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Split `name.ext` into (`name`, Some(`.ext`)). Dot-files keep their leading dot in the stem.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(i) if i > 0 => (&name[..i], Some(&name[i..])),
        _ => (name, None),
    }
}

/// Portfolio uploads: drop directory parts and spaces, nothing else.
pub fn portfolio_file_name(original: &str) -> String {
    base_name(original).chars().filter(|c| *c != ' ').collect()
}

/// Banner uploads: a uuid prefix keeps every stored name distinct.
pub fn prefixed_unique_name(original: &str) -> String {
    let base = base_name(original).replace(' ', "_");
    format!("{}_{}", Uuid::new_v4(), base)
}

/// Catalog uploads: invalid characters and spaces become `_`, lower-cased,
/// at most [`MAX_FILE_NAME_LEN`] characters with the extension preserved.
pub fn sanitize_catalog_file_name(original: &str) -> String {
    let cleaned = INVALID_FILE_CHARS.replace_all(original.trim(), "_");
    let cleaned = cleaned.replace(' ', "_").to_lowercase();
    let (stem, ext) = split_extension(&cleaned);
    let ext = ext.unwrap_or("");
    let stem = if stem.is_empty() { "image" } else { stem };

    let budget = MAX_FILE_NAME_LEN.saturating_sub(ext.chars().count());
    let stem: String = stem.chars().take(budget).collect();
    format!("{stem}{ext}")
}

/// Extension allow-list, then the size cap. An empty or missing file is "required".
pub fn validate_catalog_image(file: Option<&UploadedFile>) -> Result<&UploadedFile, ServiceError> {
    let file = match file {
        Some(f) if !f.is_empty() => f,
        _ => return Err(ServiceError::Validation("Image is required.".into())),
    };
    let allowed = file
        .extension()
        .map(|e| ALLOWED_IMAGE_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false);
    if !allowed {
        return Err(ServiceError::Validation(format!(
            "Invalid file type. Allowed types: {}",
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )));
    }
    if file.len() > MAX_IMAGE_BYTES {
        return Err(ServiceError::Validation("File size exceeds the 5MB limit.".into()));
    }
    Ok(file)
}

/// Map a stored `./img/<name>` path to its store-relative location; `None` for anything else.
pub fn catalog_rel_path(image_path: &str) -> Option<String> {
    let name = image_path.strip_prefix(CATALOG_PATH_PREFIX)?;
    let name = base_name(name);
    if name.is_empty() || name == ".." || name == "." {
        return None;
    }
    Some(format!("{CATALOG_DIR}/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_sanitized() {
        assert_eq!(sanitize_catalog_file_name("My Photo.JPG"), "my_photo.jpg");
        assert_eq!(sanitize_catalog_file_name("a<b>c:d.png"), "a_b_c_d.png");
        assert_eq!(sanitize_catalog_file_name("..\\..\\evil.png"), ".._.._evil.png");
        assert_eq!(sanitize_catalog_file_name(".png"), ".png");

        let long = format!("{}.webp", "x".repeat(300));
        let out = sanitize_catalog_file_name(&long);
        assert_eq!(out.chars().count(), MAX_FILE_NAME_LEN);
        assert!(out.ends_with(".webp"));
    }

    #[test]
    fn portfolio_names_drop_dirs_and_spaces() {
        assert_eq!(portfolio_file_name("C:\\pics\\big stage.jpg"), "bigstage.jpg");
        assert_eq!(portfolio_file_name("../x y.png"), "xy.png");
    }

    #[test]
    fn banner_names_get_unique_prefix() {
        let a = prefixed_unique_name("hero.jpg");
        let b = prefixed_unique_name("hero.jpg");
        assert_ne!(a, b);
        assert!(a.ends_with("_hero.jpg"));
    }

    #[test]
    fn catalog_validation_order() {
        let err = validate_catalog_image(None).unwrap_err();
        assert_eq!(err.client_message(), "Image is required.");

        let empty = UploadedFile::new("a.png", vec![]);
        assert_eq!(validate_catalog_image(Some(&empty)).unwrap_err().client_message(), "Image is required.");

        let bmp = UploadedFile::new("a.bmp", vec![1]);
        assert!(validate_catalog_image(Some(&bmp)).unwrap_err().client_message().starts_with("Invalid file type"));

        let big = UploadedFile::new("a.PNG", vec![0; MAX_IMAGE_BYTES + 1]);
        assert!(validate_catalog_image(Some(&big)).unwrap_err().client_message().contains("5MB"));

        let ok = UploadedFile::new("a.JpEg", vec![0; 10]);
        assert!(validate_catalog_image(Some(&ok)).is_ok());
    }

    #[test]
    fn catalog_paths_only_inside_img() {
        assert_eq!(catalog_rel_path("./img/a.png").as_deref(), Some("img/a.png"));
        assert_eq!(catalog_rel_path("./img/../../etc/passwd").as_deref(), Some("img/passwd"));
        assert!(catalog_rel_path("/uploads/a.png").is_none());
        assert!(catalog_rel_path("./img/..").is_none());
    }

    #[test]
    fn resolve_refuses_traversal() {
        let store = AssetStore::new("/srv/www");
        assert_eq!(store.resolve("img/a.png"), Some(PathBuf::from("/srv/www/img/a.png")));
        assert_eq!(store.resolve("./a.png"), Some(PathBuf::from("/srv/www/a.png")));
        assert!(store.resolve("../a.png").is_none());
        assert!(store.resolve("/etc/passwd").is_none());
        assert!(store.resolve("").is_none());
    }

    #[tokio::test]
    async fn unique_names_count_up() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AssetStore::new(tmp.path());
        assert_eq!(store.unique_name_in("img", "a.png").await.unwrap(), "a.png");
        store.write("img/a.png", b"1").await.unwrap();
        assert_eq!(store.unique_name_in("img", "a.png").await.unwrap(), "a_1.png");
        store.write("img/a_1.png", b"2").await.unwrap();
        assert_eq!(store.unique_name_in("img", "a.png").await.unwrap(), "a_2.png");
    }

    #[tokio::test]
    async fn best_effort_remove_never_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AssetStore::new(tmp.path());
        store.write("x.jpg", b"data").await.unwrap();
        assert!(store.exists("x.jpg").await);
        assert!(store.remove_best_effort("x.jpg").await);
        assert!(!store.exists("x.jpg").await);
        assert!(!store.remove_best_effort("x.jpg").await);
        assert!(!store.remove_best_effort("../outside.jpg").await);
    }
}

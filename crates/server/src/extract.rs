//! Request helpers shared by handlers: the caller's origin and multipart form collection.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequestParts, Multipart},
    http::{header, request::Parts, HeaderMap},
};
use service::assets::UploadedFile;

/// `scheme://host` of the current request, honouring reverse-proxy headers.
#[derive(Debug, Clone)]
pub struct RequestOrigin(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = first_header_value(&parts.headers, "x-forwarded-proto")
            .or_else(|| parts.uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());
        let host = first_header_value(&parts.headers, "x-forwarded-host")
            .or_else(|| {
                parts
                    .headers
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| "localhost".to_string());
        Ok(RequestOrigin(format!("{scheme}://{host}")))
    }
}

fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Text fields and file parts of a multipart body. Field names are lower-cased.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = MultipartForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_lowercase();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?.to_vec();
                    form.files.insert(name, UploadedFile { file_name, content_type, bytes });
                }
                None => {
                    let text = field.text().await?;
                    form.fields.insert(name, text);
                }
            }
        }
        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Remove the named file part.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Remove any file part, preferring the given names in order.
    pub fn take_any_file(&mut self, preferred: &[&str]) -> Option<UploadedFile> {
        for name in preferred {
            if let Some(f) = self.files.remove(*name) {
                return Some(f);
            }
        }
        let key = self.files.keys().next().cloned()?;
        self.files.remove(&key)
    }
}

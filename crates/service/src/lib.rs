//! Service layer providing business-oriented operations on top of models.
//! - One module per site component; each is a leaf against the content store and/or asset store.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod assets;
pub mod auth;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod banner_service;
pub mod contact_service;
pub mod event_service;
pub mod portfolio_service;
pub mod catalog_service;

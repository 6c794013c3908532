//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Staff login against the seeded roster. The issued token is opaque and is not
//! verified by any other endpoint.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;

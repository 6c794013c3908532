use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("file system error: {0}")]
    Io(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// True for failures the client caused (bad input).
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)))
    }

    /// Message suitable for the `message` field of a response envelope.
    pub fn client_message(&self) -> String {
        match self {
            ServiceError::Validation(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Model(ModelError::Validation(msg)) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self { ServiceError::Io(e.to_string()) }
}

//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{DomainError, RouteId};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("resolver reported unknown route: {0}")]
    UnknownRoute(RouteId),

    #[error("resolver failed: {message}")]
    Resolver { message: String },

    #[error("resolver returned an invalid match: {message}")]
    InvalidMatch { message: String },

    #[error("root is already mounted")]
    AlreadyMounted,

    #[error("render target failed: {context}")]
    Target {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route file {path}: {message}")]
    RouteFile { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

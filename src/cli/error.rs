//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) | ApplicationError::RouteFile { .. } => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::UnknownRoute(_) => crate::exitcode::USAGE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::NOINPUT,
                    ApplicationError::Target { .. } => crate::exitcode::IOERR,
                    ApplicationError::Resolver { .. }
                    | ApplicationError::InvalidMatch { .. }
                    | ApplicationError::AlreadyMounted => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, RouteId};

    #[test]
    fn test_exit_codes() {
        let unknown: CliError = ApplicationError::UnknownRoute(RouteId::from("x")).into();
        assert_eq!(unknown.exit_code(), crate::exitcode::USAGE);

        let invalid: CliError = ApplicationError::Domain(DomainError::EmptyRouteId).into();
        assert_eq!(invalid.exit_code(), crate::exitcode::DATAERR);
    }
}

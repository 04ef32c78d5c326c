//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.

use es_client::ClientError;

/// Structured exit codes for es-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// HTTP 401 from the cluster.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// The addressed index does not exist.
    NotFound = 4,

    /// Bad input: no index could be inferred, the cluster rejected the
    /// request, or the response was not understood.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 403 from the cluster.
    PermissionDenied = 6,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502, 503 or 504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Nothing was sent; the selection or settings need fixing
            ClientError::NameInference(_) => ExitCode::ValidationError,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

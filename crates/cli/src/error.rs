//! Process exit codes.
//!
//! Scripts driving `splunk-modinput` branch on these: 2 means fix the
//! credentials, 4 means the collection or entity does not exist, and so on.
//! Anything not traced back to a [`ClientError`] exits with 1.

use splunk_client::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Bad configuration, unreadable input or any unclassified failure.
    GeneralError = 1,
    /// Login rejected, or Splunk answered 401.
    AuthenticationFailed = 2,
    /// The management port could not be reached.
    ConnectionError = 3,
    /// Splunk answered 404.
    NotFound = 4,
    /// Too few path segments, a 400, or a body that could not be decoded.
    ValidationError = 5,
    /// Splunk answered 403.
    PermissionDenied = 6,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status, .. } => match status {
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                400 => ExitCode::ValidationError,
                _ => ExitCode::GeneralError,
            },
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::MalformedRequest(_)
            | ClientError::InvalidResponse(_)
            | ClientError::Json(_) => ExitCode::ValidationError,
        }
    }
}

/// Exit code for an error returned by a command.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    /// Uses the first [`ClientError`] in the context chain.
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}

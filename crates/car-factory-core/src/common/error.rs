//! Error types for the car factory client and service.
//!
//! This module defines the central `Error` enum, which captures every failure
//! a caller of the `Factory` service can observe. It implements
//! `From<Error>` for `tonic::Status` so the same taxonomy can be propagated
//! over gRPC with matching status codes.
//!
//! ## Error Cases
//! - `InvalidEndpoint`: The configured server URL could not be parsed.
//! - `Transport`: The connection to the server could not be established.
//! - `DeadlineExceeded`: The call did not complete before its deadline.
//! - `Status`: The server answered with a non-OK gRPC status.

use core::time::Duration;
use tonic::{Code, Status};

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the car factory.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The endpoint URL is not a valid URI.
    #[error("Invalid endpoint `{url}`: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// Connection establishment failed.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// The deadline elapsed before a response arrived.
    #[error("Deadline of {timeout:?} exceeded")]
    DeadlineExceeded { timeout: Duration },

    /// The handler answered with an error status.
    #[error("Status error: {}: {}", .0.code(), .0.message())]
    Status(Status),
}

impl Error {
    /// Maps a status returned for a call bound to `timeout` onto the
    /// taxonomy, given the time `elapsed` since the deadline started.
    ///
    /// `DEADLINE_EXCEEDED`, and any status that arrives once the deadline has
    /// passed, become [`Error::DeadlineExceeded`]. The latter covers the
    /// server enforcing the propagated `grpc-timeout`, which tonic reports as
    /// `CANCELLED` ("Timeout expired").
    pub fn from_status(status: Status, timeout: Duration, elapsed: Duration) -> Self {
        if elapsed >= timeout || status.code() == Code::DeadlineExceeded {
            return Error::DeadlineExceeded { timeout };
        }
        Error::Status(status)
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Error::DeadlineExceeded { .. })
    }
}

/// Lets the same taxonomy be propagated over gRPC.
impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidEndpoint { url, source } => {
                Status::invalid_argument(format!("Invalid endpoint `{}`: {}", url, source))
            }
            Error::Transport(e) => Status::unavailable(format!("Transport error: {}", e)),
            Error::DeadlineExceeded { timeout } => {
                Status::deadline_exceeded(format!("Deadline of {:?} exceeded", timeout))
            }
            Error::Status(status) => status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_status_folds_into_deadline_exceeded() {
        let timeout = Duration::from_secs(1);
        let early = Duration::from_millis(10);
        let err = Error::from_status(Status::deadline_exceeded("too slow"), timeout, early);
        assert!(err.is_deadline_exceeded());

        let err = Error::from_status(Status::not_found("missing"), timeout, early);
        assert!(matches!(err, Error::Status(ref s) if s.code() == Code::NotFound));
    }

    #[test]
    fn server_side_timeout_folds_into_deadline_exceeded() {
        let timeout = Duration::from_millis(100);

        // tonic's server answers an expired `grpc-timeout` with CANCELLED
        let err = Error::from_status(
            Status::cancelled("Timeout expired"),
            timeout,
            Duration::from_millis(101),
        );
        assert!(err.is_deadline_exceeded());

        // before the deadline a cancellation is just a status
        let err = Error::from_status(
            Status::cancelled("Timeout expired"),
            timeout,
            Duration::from_millis(5),
        );
        assert!(matches!(err, Error::Status(ref s) if s.code() == Code::Cancelled));
    }

    #[test]
    fn error_converts_to_matching_status_code() {
        let status: Status = Error::DeadlineExceeded {
            timeout: Duration::from_millis(250),
        }
        .into();
        assert_eq!(status.code(), Code::DeadlineExceeded);

        let status: Status = Error::Status(Status::internal("boom")).into();
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "boom");
    }
}

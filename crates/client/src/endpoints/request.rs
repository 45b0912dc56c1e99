//! Request execution and status handling.
//!
//! Every REST call goes through [`send_request`]: one attempt, no retries.
//! Anything but `200 OK` becomes [`ClientError::ApiError`] whose message
//! starts with the HTTP status line, e.g. `401 Unauthorized`, followed by
//! Splunk's own message text when the body carries one.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::endpoints::parsing::parse_error_messages;
use crate::error::{ClientError, Result};

/// Value of the `Authorization` header for a session key.
pub(crate) fn splunk_auth_header(session_key: &str) -> String {
    format!("Splunk {}", session_key)
}

/// Send a request and turn any non-200 response into an error.
///
/// The response body of a failed request is read to extract Splunk's
/// message and then dropped; a successful response is handed back with its
/// body unread.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status == StatusCode::OK {
        return Ok(response);
    }

    let url = response.url().to_string();
    debug!(status = status.as_u16(), url = %url, "Request failed");

    let body = response.text().await.unwrap_or_default();
    let details = parse_error_messages(&body)
        .iter()
        .map(|m| m.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    let message = if details.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, details)
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_format() {
        assert_eq!(splunk_auth_header("abc123"), "Splunk abc123");
    }
}

//! Failure classification shared by the vendor adapters.

use std::time::Duration;

use crate::ports::AIError;

const RETRY_HINT: &str = "try again in ";

/// `reqwest` failed before a status line arrived.
pub(crate) fn send_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::TimedOut {
            after_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::Transport(format!("connect: {}", err))
    } else {
        AIError::Transport(err.to_string())
    }
}

/// Non-2xx status plus whatever body came with it.
pub(crate) fn status_error(status: u16, body: &str, fallback_retry_secs: u32) -> AIError {
    match status {
        401 | 403 => AIError::Unauthorized,
        429 => AIError::RateLimited {
            retry_after_secs: retry_hint(body).unwrap_or(fallback_retry_secs),
        },
        400 if mentions_context_limit(body) => AIError::PromptTooLong(body.to_string()),
        400..=499 => AIError::Rejected {
            status,
            body: body.to_string(),
        },
        500..=599 => AIError::Unavailable(format!("{}: {}", status, body)),
        _ => AIError::Transport(format!("unexpected status {}", status)),
    }
}

pub(crate) fn malformed(err: reqwest::Error) -> AIError {
    AIError::MalformedReply(err.to_string())
}

fn mentions_context_limit(body: &str) -> bool {
    ["maximum context length", "context_length_exceeded", "prompt is too long"]
        .iter()
        .any(|needle| body.contains(needle))
}

/// Seconds from an `{"error":{"message":"... try again in 20s"}}` body.
fn retry_hint(body: &str) -> Option<u32> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = parsed.pointer("/error/message")?.as_str()?;
    let start = message.find(RETRY_HINT)? + RETRY_HINT.len();
    let digits: String = message[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_and_unauthorized_mean_bad_key() {
        assert_eq!(status_error(401, "", 30), AIError::Unauthorized);
        assert_eq!(status_error(403, "", 30), AIError::Unauthorized);
    }

    #[test]
    fn throttling_honours_retry_hint() {
        let body = r#"{"error":{"message":"Rate limit reached. Please try again in 20s."}}"#;
        assert_eq!(
            status_error(429, body, 30),
            AIError::RateLimited { retry_after_secs: 20 }
        );
        assert_eq!(
            status_error(429, "quota", 60),
            AIError::RateLimited { retry_after_secs: 60 }
        );
    }

    #[test]
    fn context_overflow_is_told_apart_from_other_client_errors() {
        assert!(matches!(
            status_error(400, "context_length_exceeded", 30),
            AIError::PromptTooLong(_)
        ));
        assert_eq!(
            status_error(404, "no model", 30),
            AIError::Rejected {
                status: 404,
                body: "no model".to_string()
            }
        );
    }

    #[test]
    fn server_side_failures_are_transient() {
        let err = status_error(503, "overloaded", 30);
        assert_eq!(err, AIError::Unavailable("503: overloaded".to_string()));
        assert!(err.is_transient());
    }
}

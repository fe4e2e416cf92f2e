use std::time::{Duration, UNIX_EPOCH};

use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::error::TwitterError;

static RESET_HEADER: &str = "x-rate-limit-reset";

const USER_NOT_FOUND: i64 = 50;
const RATE_LIMIT_EXCEEDED: i64 = 88;
const BAD_AUTHENTICATION: &[i64] = &[32, 89, 135];

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    code: i64,
    message: String,
}

/// Pass successful responses through, turn everything else into a [`TwitterError`]
pub(crate) async fn check(resp: Response) -> Result<Response, TwitterError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let reset_in = rate_limit_reset(&resp);
    let body = resp.text().await.unwrap_or_default();
    Err(classify(status, &body, reset_in))
}

fn rate_limit_reset(resp: &Response) -> Option<Duration> {
    let rate_reset_at = resp.headers().get(RESET_HEADER)?.to_str().ok()?;
    Duration::from_secs(rate_reset_at.parse::<u64>().ok()?).checked_sub(UNIX_EPOCH.elapsed().ok()?)
}

pub(crate) fn classify(status: StatusCode, body: &str, reset_in: Option<Duration>) -> TwitterError {
    let (code, message) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { errors }) if !errors.is_empty() => {
            let first = &errors[0];
            (Some(first.code), first.message.clone())
        }
        _ => (None, status.canonical_reason().unwrap_or("unknown error").to_owned()),
    };

    match (status, code) {
        (StatusCode::NOT_FOUND, _) | (_, Some(USER_NOT_FOUND)) => TwitterError::NotFound(message),
        (StatusCode::UNAUTHORIZED, _) => TwitterError::Authorization(message),
        (_, Some(c)) if BAD_AUTHENTICATION.contains(&c) => TwitterError::Authorization(message),
        (StatusCode::TOO_MANY_REQUESTS, _) | (_, Some(RATE_LIMIT_EXCEEDED)) => {
            TwitterError::RateLimited { reset_in }
        }
        _ => TwitterError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

//! Request plumbing shared by every Launch Library 2 endpoint: status
//! checks, JSON decoding, and unwrapping paginated `results`.

use serde_json::Value;

use crate::error::ApiError;

/// Pass a successful response through; turn throttling (429) into
/// [`ApiError::RateLimited`] and any other non-2xx status into
/// [`ApiError::Api`] carrying the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// GET `url` and decode the body as JSON.
pub async fn get_json(http: &reqwest::Client, url: &str) -> Result<Value, ApiError> {
    tracing::debug!(%url, "GET");
    let resp = check_response(http.get(url).send().await?).await?;
    let body = resp.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ApiError::Parse(format!("{url}: body is not JSON: {e}")))
}

/// Pull the `results` array out of a paginated list response.
pub fn take_results(body: Value, url: &str) -> Result<Vec<Value>, ApiError> {
    let Value::Object(mut map) = body else {
        return Err(ApiError::Parse(format!("{url}: body is not a JSON object")));
    };
    match map.remove("results") {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ApiError::Parse(format!("{url}: 'results' is not an array"))),
        None => Err(ApiError::Parse(format!("{url}: missing 'results'"))),
    }
}

/// `Retry-After` in seconds. HTTP-date values are not interpreted; they and
/// a missing header fall back to a minute.
fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

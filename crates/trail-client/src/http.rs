//! Shared HTTP response helpers.
//!
//! Read operations gate on status before decoding: 429 becomes
//! [`TrailError::RateLimited`], any other non-success becomes
//! [`TrailError::Api`], and only a success body is decoded.

use trail_core::AuditTrailEntry;

use crate::error::TrailError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. `Retry-After` falls back to
/// 60 s when absent or unparseable.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, TrailError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = parse_retry_after(&resp);
        tracing::warn!(retry_after_secs, "audit trail server rate limited the request");
        return Err(TrailError::RateLimited { retry_after_secs });
    }
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "audit trail read failed");
        return Err(TrailError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Buffer the whole body and decode it as a list of entries.
pub async fn read_entries(resp: reqwest::Response) -> Result<Vec<AuditTrailEntry>, TrailError> {
    let resp = check_response(resp).await?;
    let body = resp.bytes().await?;
    decode_entries(&body)
}

fn decode_entries(body: &[u8]) -> Result<Vec<AuditTrailEntry>, TrailError> {
    serde_json::from_slice(body).map_err(TrailError::Decode)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

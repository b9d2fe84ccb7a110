use crate::shared::Result;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Base delay between retries; the n-th retry waits `n` times this long.
const RETRY_DELAY_MS: u64 = 250;

/// Builds the shared async HTTP client
///
/// Every request made through it is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Whether a status code is worth another attempt
///
/// Retries on server errors, 429 Too Many Requests and 408 Request Timeout.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
}

fn retry_delay(attempt: u32) -> Duration {
    Duration::from_millis(RETRY_DELAY_MS * u64::from(attempt))
}

/// Sends a GET request, retrying transport errors and retryable statuses
///
/// The final response is returned whatever its status, so callers can treat
/// 404 and other client errors as they see fit. Only a transport error on the
/// last attempt is returned as `Err`.
pub async fn get_with_retry(client: &Client, url: &str, max_retries: u32) -> Result<Response> {
    let mut attempt = 0;

    loop {
        debug!(url, attempt, "GET");
        match client.get(url).send().await {
            Ok(response) if is_retryable_status(response.status()) && attempt < max_retries => {
                debug!(url, status = %response.status(), "retryable status, retrying");
            }
            Ok(response) => return Ok(response),
            Err(err) if attempt < max_retries => {
                debug!(url, error = %err, "request failed, retrying");
            }
            Err(err) => return Err(err.into()),
        }

        attempt += 1;
        tokio::time::sleep(retry_delay(attempt)).await;
    }
}

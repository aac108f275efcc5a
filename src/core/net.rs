// src/core/net.rs

// Single blocking HTTP(S) GET. No retries: one failed attempt ends the run.

use reqwest::{StatusCode, blocking::Client};
use tracing::{debug, info, warn};

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// GET `url` and return the body as text.
///
/// Anything other than a final `200 OK` is a [`FetchError`]. Redirects are
/// followed by the client before the status is checked.
pub fn get_raw_html(url: &str) -> Result<String, FetchError> {
    let request_err = |source| FetchError::Request { url: url.to_owned(), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(request_err)?;

    debug!(%url, "GET");
    let resp = client.get(url).send().map_err(request_err)?;

    let status = resp.status();
    if status != StatusCode::OK {
        warn!(%url, %status, "non-200 response");
        return Err(FetchError::Status { url: url.to_owned(), status });
    }

    let body = resp
        .text()
        .map_err(|source| FetchError::Body { url: url.to_owned(), source })?;
    info!(%url, bytes = body.len(), "fetched page");
    Ok(body)
}

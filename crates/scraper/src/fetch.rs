// ABOUTME: HTTP fetch layer returning decoded page text for the parsers.
// ABOUTME: Enforces the scheme allow-list, the 200-only policy, and a response size cap.

use crate::error::ScrapeError;

/// Upper bound on a fetched page body. Ranking and detail pages run well
/// under a megabyte; anything past this is not a page we can use.
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Fetches `url` and returns the response body as text.
///
/// Rejects empty or malformed URLs and non-http(s) schemes before any
/// request goes out, any non-200 status after, and bodies beyond
/// [`MAX_CONTENT_LENGTH`].
///
/// # Arguments
/// * `client` - Configured HTTP client to send the request with
/// * `url` - Absolute URL of the page to fetch
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "empty URL"));
    }
    let parsed = url::Url::parse(url)
        .map_err(|source| ScrapeError::invalid_url(url, source.to_string()))?;
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            format!("unsupported scheme {scheme:?}"),
        ));
    }

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::fetch(url, source))?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(ScrapeError::status(url, status));
    }

    if let Some(length) = response.content_length() {
        if length as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                anyhow::anyhow!("content too large ({length} bytes)"),
            ));
        }
    }

    let body = response
        .text()
        .await
        .map_err(|source| ScrapeError::fetch(url, source))?;
    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url,
            anyhow::anyhow!("content too large ({} bytes)", body.len()),
        ));
    }
    Ok(body)
}

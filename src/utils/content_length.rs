//! Content length extraction.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::Response;

/// Size announced by the server through the `Content-Length` header.
///
/// Returns `None` when the header is missing or not an integer. The value
/// is advisory: the body may turn out shorter or longer.
///
/// # Example
///
/// ```rust,no_run
/// use attribute_util::utils::announced_length;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = reqwest::get("https://example.com/out.bin").await?;
/// if let Some(length) = announced_length(&response) {
///     println!("{} bytes", length);
/// }
/// # Ok(())
/// # }
/// ```
pub fn announced_length(response: &Response) -> Option<u64> {
    header_length(response.headers())
}

/// Parse `Content-Length` out of a header map.
pub fn header_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

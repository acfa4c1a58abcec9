//! Blocking HTTP GET for one page.
//!
//! Uses the curl crate (libcurl) to fetch the full response body into memory.
//! Session credentials travel as caller-supplied headers (e.g. `Cookie`).
//! No overall timeout is set: the sequence waits as long as the server does.

use crate::error::PageError;

/// Fetches `url` with a single GET and returns the response body.
///
/// Follows redirects. Custom headers are sent in the order given, duplicates
/// included. A non-2xx final status is an error; the body is discarded in
/// that case.
pub fn fetch_page(url: &str, custom_headers: &[(String, String)]) -> Result<Vec<u8>, PageError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    let mut list = curl::easy::List::new();
    for (k, v) in custom_headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !custom_headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(PageError::Status(code));
    }

    Ok(body)
}

//! HTTP operations against the remote registration endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: stubs returning errors, since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and unparsable bodies both map to `Error::Network`;
//! callers turn those into user-facing messages. No timeouts, no retries,
//! and no cancellation; a late response simply loses to whatever wrote the
//! state after it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::Endpoint;
use crate::error::Error;
use crate::net::types::{CountResponse, DrawResponse, ListResponse, RegistrationRequest};

#[cfg(any(test, feature = "hydrate"))]
fn count_url(base: &str) -> String {
    format!("{base}?action=count")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_url(base: &str) -> String {
    format!("{base}?action=list_participants")
}

#[cfg(any(test, feature = "hydrate"))]
fn draw_url(base: &str, product: Option<&str>) -> String {
    match product {
        Some(product) => format!("{base}?action=random&product={}", percent_encode(product)),
        None => format!("{base}?action=random"),
    }
}

/// Percent-encode a query value byte-for-byte the way `encodeURIComponent`
/// does, so Thai product names round-trip through the query string.
#[cfg(any(test, feature = "hydrate"))]
fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'~'
            | b'!'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(feature = "hydrate")]
fn net_err(err: impl std::fmt::Display) -> Error {
    Error::Network(err.to_string())
}

/// Submit one registration as a fire-and-forget POST.
///
/// The request is sent in `no-cors` mode, so the response is opaque and never
/// read: `Ok(())` means "the transport did not fail", not "the service
/// accepted the row".
///
/// # Errors
///
/// [`Error::Unconfigured`] when no endpoint URL is set, [`Error::Network`]
/// when the body cannot be built or the fetch itself fails.
pub async fn submit_registration(
    endpoint: &Endpoint,
    request: &RegistrationRequest,
) -> Result<(), Error> {
    let base = endpoint.url()?;
    #[cfg(feature = "hydrate")]
    {
        // No content-type header: anything beyond the CORS-safelisted set
        // would force a preflight the script host does not answer.
        let body = serde_json::to_string(request).map_err(net_err)?;
        gloo_net::http::Request::post(base)
            .mode(web_sys::RequestMode::NoCors)
            .body(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request);
        Err(Error::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch the aggregate registrant count.
///
/// # Errors
///
/// [`Error::Unconfigured`] or [`Error::Network`]; an explicit
/// `success: false` is not an error here; the caller decides what a
/// refused count means for display.
pub async fn fetch_count(endpoint: &Endpoint) -> Result<CountResponse, Error> {
    let base = endpoint.url()?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&count_url(base))
            .send()
            .await
            .map_err(net_err)?;
        resp.json::<CountResponse>().await.map_err(net_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(Error::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch the full participant list.
///
/// # Errors
///
/// [`Error::Unconfigured`] or [`Error::Network`].
pub async fn fetch_participants(endpoint: &Endpoint) -> Result<ListResponse, Error> {
    let base = endpoint.url()?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&list_url(base))
            .send()
            .await
            .map_err(net_err)?;
        resp.json::<ListResponse>().await.map_err(net_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(Error::Network("not available outside the browser".to_owned()))
    }
}

/// Request a random winner, optionally scoped to one product option.
///
/// # Errors
///
/// [`Error::Unconfigured`] or [`Error::Network`]. A `success: false`
/// response parses cleanly and is returned as-is with its server message.
pub async fn draw_winner(
    endpoint: &Endpoint,
    product: Option<&str>,
) -> Result<DrawResponse, Error> {
    let base = endpoint.url()?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&draw_url(base, product))
            .send()
            .await
            .map_err(net_err)?;
        resp.json::<DrawResponse>().await.map_err(net_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, product);
        Err(Error::Network("not available outside the browser".to_owned()))
    }
}

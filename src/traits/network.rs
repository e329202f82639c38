//! Network abstraction for the HTTP control surface.
//!
//! The display is driven by a tiny REST surface:
//!
//! ```text
//! GET  /               - static control page
//! POST /update-number  - render a number: {"number": 42}
//! ```
//!
//! [`HttpServer`] is the abstract dispatch loop: one call to
//! `recv_request` yields one event, and the caller handles it to
//! completion before asking for the next. The core never assumes a
//! particular loop implementation: axum on desktop, esp-idf-svc on
//! device, and [`MockHttp`](crate::hal::MockHttp) in tests all fit
//! behind it.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// HTTP request methods seen by the dispatch loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET request (static page).
    Get,
    /// HTTP POST request (render command).
    Post,
    /// HTTP PUT request.
    Put,
    /// HTTP DELETE request.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as it appears in the 404 diagnostic.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request received by the server.
#[derive(Debug)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, ...).
    pub method: HttpMethod,
    /// Request path, possibly with a query string (e.g. "/foo?a=1").
    pub path: String,
    /// Request body, if present (for POST/PUT).
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Returns the body as a UTF-8 string, if valid.
    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| core::str::from_utf8(b).ok())
    }

    /// Returns the path without its query string.
    pub fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or(&self.path)
    }

    /// Returns the raw query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, q)| q)
    }
}

/// An HTTP response to send back to the client.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code (e.g. 201, 400, 404).
    pub status: u16,
    /// Content-Type header value.
    pub content_type: &'static str,
    /// Response body as bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response with the given status, content type and body.
    pub fn new(status: u16, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type,
            body: body.as_bytes().to_vec(),
        }
    }

    /// Returns the body as a UTF-8 string, if valid.
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }
}

/// Abstract single-request-at-a-time HTTP dispatch loop.
///
/// One `recv_request` call is one "process next event" step; the render,
/// response, and any device-side blink all run to completion before the
/// loop asks for the next request. There is no queuing or backpressure.
pub trait HttpServer {
    /// Error type for HTTP operations.
    type Error;

    /// Waits for and receives the next HTTP request.
    ///
    /// Returns `None` if the server is shutting down.
    fn recv_request(&mut self) -> impl core::future::Future<Output = Option<HttpRequest>>;

    /// Sends an HTTP response, completing the current transaction.
    fn send_response(
        &mut self,
        response: HttpResponse,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}

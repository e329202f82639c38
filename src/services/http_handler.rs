//! Shared HTTP handler logic for both desktop and ESP32.
//!
//! This module contains the platform-agnostic request handling for the
//! display API. Platform-specific HTTP servers (Axum, esp-idf-svc) call
//! these methods and translate the results to their native response
//! formats, so both platforms answer byte-identically.
//!
//! # Endpoints
//!
//! - GET `/` - static control page
//! - POST `/update-number` - render a number, body `{"number": 42}`
//! - anything else - plaintext 404 diagnostic
//!
//! # Example
//!
//! ```ignore
//! use quadseg::services::UpdateHandler;
//!
//! let handler = UpdateHandler::new(shared_display);
//!
//! // In an Axum handler:
//! let reply = handler.handle_update(body_str);
//!
//! // In an ESP-IDF handler:
//! let reply = handler.handle_update(body_str);
//! resp.write_all(reply.body.as_bytes())?;
//! ```

extern crate alloc;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::messages::{StatusReply, UpdateNumberRequest};
use crate::traits::{HttpMethod, HttpRequest, HttpResponse, HttpServer};

use super::shared::DisplayProvider;

/// Rejection reason for a body that parses as JSON but carries no usable
/// `number` field.
pub const MSG_BAD_NUMBER: &str = "No data found, or incorrect!";

/// Prefix of the HTML diagnostic for bodies that are not valid JSON.
pub const MSG_PARSE_ERROR_PREFIX: &str = "Error in parsing json body! <br>";

/// The static control page served at `/`.
pub const INDEX_HTML: &str = include_str!("../../www/index.html");

// ============================================================================
// API Reply
// ============================================================================

/// A fully formed reply, independent of the HTTP server in use.
#[derive(Debug)]
pub struct ApiReply {
    /// HTTP status code.
    pub status: u16,
    /// Content-Type header value.
    pub content_type: &'static str,
    /// Response body.
    pub body: String,
}

impl ApiReply {
    /// 201 with `{"status":"OK"}`.
    pub fn created() -> Self {
        Self {
            status: 201,
            content_type: "application/json",
            body: serde_json::to_string(&StatusReply::ok()).unwrap_or_default(),
        }
    }

    /// 400 with the KO body for a missing or non-numeric `number` field.
    pub fn rejected() -> Self {
        Self {
            status: 400,
            content_type: "application/json",
            body: serde_json::to_string(&StatusReply::ko(MSG_BAD_NUMBER)).unwrap_or_default(),
        }
    }

    /// 400 HTML carrying the JSON parser diagnostic verbatim.
    pub fn parse_error(detail: &str) -> Self {
        Self {
            status: 400,
            content_type: "text/html",
            body: format!("{MSG_PARSE_ERROR_PREFIX}{detail}"),
        }
    }

    /// 500 for a display that failed to render.
    pub fn display_error() -> Self {
        Self {
            status: 500,
            content_type: "application/json",
            body: serde_json::to_string(&StatusReply::ko("Display error")).unwrap_or_default(),
        }
    }

    /// 200 with the static control page.
    pub fn index() -> Self {
        Self {
            status: 200,
            content_type: "text/html",
            body: INDEX_HTML.into(),
        }
    }

    /// 404 plaintext diagnostic for an unknown route.
    pub fn not_found(request: &HttpRequest) -> Self {
        Self {
            status: 404,
            content_type: "text/plain",
            body: not_found_body(
                request.route(),
                request.method.as_str(),
                &parse_query(request.query().unwrap_or("")),
            ),
        }
    }
}

impl From<ApiReply> for HttpResponse {
    fn from(reply: ApiReply) -> Self {
        HttpResponse::new(reply.status, reply.content_type, &reply.body)
    }
}

// Axum integration: allow ApiReply to be returned directly from handlers
#[cfg(feature = "web")]
impl axum::response::IntoResponse for ApiReply {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{header, StatusCode};
        use axum::response::Response;

        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, self.content_type)
            .body(axum::body::Body::from(self.body))
            .unwrap()
    }
}

// ============================================================================
// 404 Diagnostics
// ============================================================================

/// Split a raw query string into name/value pairs.
///
/// A pair without `=` becomes a name with an empty value.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (name.into(), value.into()),
            None => (pair.into(), String::new()),
        })
        .collect()
}

/// Build the plaintext 404 body listing the request details.
pub fn not_found_body(uri: &str, method: &str, args: &[(String, String)]) -> String {
    let mut message = String::from("File Not Found\n\n");
    message.push_str("URI: ");
    message.push_str(uri);
    message.push_str("\nMethod: ");
    message.push_str(method);
    message.push_str(&format!("\nArguments: {}\n", args.len()));
    for (name, value) in args {
        message.push_str(&format!(" {name}: {value}\n"));
    }
    message
}

// ============================================================================
// Update Handler
// ============================================================================

/// Shared handler for the display API.
///
/// Contains the business logic for all endpoints; the Axum router and the
/// ESP-IDF server both delegate here.
pub struct UpdateHandler<P: DisplayProvider> {
    display: P,
}

impl<P: DisplayProvider> UpdateHandler<P> {
    /// Create a handler rendering through the given provider.
    pub fn new(display: P) -> Self {
        Self { display }
    }

    /// POST /update-number - parse the body and render the number.
    ///
    /// The body must be a JSON object with a numeric `number` field.
    /// A body that is not valid JSON gets the HTML parse diagnostic; a
    /// valid object without a usable `number` gets the JSON KO reply.
    pub fn handle_update(&self, body: &str) -> ApiReply {
        // Parse to a Value first so malformed bodies surface the parser
        // diagnostic; field validation happens on the typed request.
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(err) => return ApiReply::parse_error(&err.to_string()),
        };

        let Ok(request) = serde_json::from_value::<UpdateNumberRequest>(value) else {
            return ApiReply::rejected();
        };

        match self.display.show_number(request.number) {
            Ok(()) => ApiReply::created(),
            Err(()) => ApiReply::display_error(),
        }
    }

    /// Route one request to the matching endpoint.
    pub fn dispatch(&self, request: &HttpRequest) -> ApiReply {
        match (request.method, request.route()) {
            (HttpMethod::Get, "/") => ApiReply::index(),
            (HttpMethod::Post, "/update-number") => {
                self.handle_update(request.body_str().unwrap_or(""))
            }
            _ => ApiReply::not_found(request),
        }
    }

    /// Borrow the display provider.
    pub fn display(&self) -> &P {
        &self.display
    }
}

/// Receive and answer one request on an abstract HTTP server.
///
/// Returns `Ok(false)` once the server reports shutdown. This is the
/// whole event loop: each request is handled to completion before the
/// next is received.
pub async fn serve_next<S, P>(server: &mut S, handler: &UpdateHandler<P>) -> Result<bool, S::Error>
where
    S: HttpServer,
    P: DisplayProvider,
{
    let Some(request) = server.recv_request().await else {
        return Ok(false);
    };
    let reply = handler.dispatch(&request);
    server.send_response(reply.into()).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ========================================================================
    // Mock provider
    // ========================================================================

    struct MockProvider {
        shown: Mutex<Vec<f64>>,
        fail: bool,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                shown: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                shown: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn shown(&self) -> Vec<f64> {
            self.shown.lock().unwrap().clone()
        }
    }

    impl DisplayProvider for MockProvider {
        fn show_number(&self, value: f64) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.shown.lock().unwrap().push(value);
            Ok(())
        }
    }

    fn get(path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    fn post(path: &str, body: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body.as_bytes().to_vec()),
        }
    }

    // ========================================================================
    // handle_update
    // ========================================================================

    #[test]
    fn update_with_valid_number_renders_and_replies_created() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.handle_update(r#"{"number": 42}"#);
        assert_eq!(reply.status, 201);
        assert_eq!(reply.content_type, "application/json");
        assert_eq!(reply.body, r#"{"status":"OK"}"#);
        assert_eq!(handler.display().shown(), [42.0]);
    }

    #[test]
    fn update_accepts_negative_and_fractional_values() {
        let handler = UpdateHandler::new(MockProvider::new());

        assert_eq!(handler.handle_update(r#"{"number": -3.5}"#).status, 201);
        assert_eq!(handler.display().shown(), [-3.5]);
    }

    #[test]
    fn update_without_number_field_is_rejected() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.handle_update("{}");
        assert_eq!(reply.status, 400);
        assert_eq!(reply.content_type, "application/json");
        assert_eq!(
            reply.body,
            r#"{"status":"KO","message":"No data found, or incorrect!"}"#
        );
        assert!(handler.display().shown().is_empty());
    }

    #[test]
    fn update_with_non_numeric_number_is_rejected() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.handle_update(r#"{"number": "forty-two"}"#);
        assert_eq!(reply.status, 400);
        assert!(reply.body.contains("KO"));
    }

    #[test]
    fn update_with_null_number_is_rejected() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.handle_update(r#"{"number": null}"#);
        assert_eq!(reply.status, 400);
        assert_eq!(reply.content_type, "application/json");
        assert!(handler.display().shown().is_empty());
    }

    #[test]
    fn update_with_invalid_json_returns_html_diagnostic() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.handle_update("not json at all");
        assert_eq!(reply.status, 400);
        assert_eq!(reply.content_type, "text/html");
        assert!(reply.body.starts_with(MSG_PARSE_ERROR_PREFIX));
        // The parser diagnostic follows the prefix.
        assert!(reply.body.len() > MSG_PARSE_ERROR_PREFIX.len());
    }

    #[test]
    fn update_display_failure_is_a_server_error() {
        let handler = UpdateHandler::new(MockProvider::failing());

        let reply = handler.handle_update(r#"{"number": 1}"#);
        assert_eq!(reply.status, 500);
    }

    // ========================================================================
    // dispatch
    // ========================================================================

    #[test]
    fn dispatch_serves_the_index_page() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.dispatch(&get("/"));
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "text/html");
        assert!(reply.body.contains("<html"));
    }

    #[test]
    fn dispatch_routes_update_posts() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.dispatch(&post("/update-number", r#"{"number": 9}"#));
        assert_eq!(reply.status, 201);
        assert_eq!(handler.display().shown(), [9.0]);
    }

    #[test]
    fn dispatch_unknown_route_lists_request_details() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.dispatch(&get("/missing?a=1&b=2"));
        assert_eq!(reply.status, 404);
        assert_eq!(reply.content_type, "text/plain");
        assert_eq!(
            reply.body,
            "File Not Found\n\nURI: /missing\nMethod: GET\nArguments: 2\n a: 1\n b: 2\n"
        );
    }

    #[test]
    fn dispatch_get_on_update_route_is_not_found() {
        let handler = UpdateHandler::new(MockProvider::new());

        let reply = handler.dispatch(&get("/update-number"));
        assert_eq!(reply.status, 404);
    }

    // ========================================================================
    // helpers
    // ========================================================================

    #[test]
    fn parse_query_handles_empty_and_bare_names() {
        assert!(parse_query("").is_empty());
        assert_eq!(parse_query("flag"), [("flag".into(), String::new())]);
        assert_eq!(
            parse_query("a=1&b=two"),
            [("a".into(), "1".into()), ("b".into(), "two".into())]
        );
    }

    #[test]
    fn not_found_body_without_arguments() {
        let body = not_found_body("/nope", "POST", &[]);
        assert_eq!(body, "File Not Found\n\nURI: /nope\nMethod: POST\nArguments: 0\n");
    }

    // ========================================================================
    // serve_next
    // ========================================================================

    #[tokio::test]
    async fn serve_next_answers_queued_requests_until_shutdown() {
        use crate::hal::MockHttp;

        let handler = UpdateHandler::new(MockProvider::new());
        let mut server = MockHttp::new();
        server.push_request(post("/update-number", r#"{"number": 12}"#));
        server.push_request(get("/nowhere"));

        assert!(serve_next(&mut server, &handler).await.unwrap());
        assert!(serve_next(&mut server, &handler).await.unwrap());
        assert!(!serve_next(&mut server, &handler).await.unwrap());

        assert_eq!(server.sent.len(), 2);
        assert_eq!(server.sent[0].status, 201);
        assert_eq!(server.sent[1].status, 404);
        assert_eq!(handler.display().shown(), [12.0]);
    }
}

//! On-device HTTP server for the display API.
//!
//! Provides a lightweight HTTP server using esp-idf-svc with the same
//! endpoints as the desktop server. All request handling goes through the
//! shared [`UpdateHandler`] logic so the wire behavior matches byte for
//! byte.
//!
//! The status LED blink after an update runs inline in the handler with
//! blocking FreeRTOS delays; the httpd task serves one request at a time,
//! which matches the blink's purpose of signaling each handled command.
//!
//! # Example
//!
//! ```ignore
//! use quadseg::hal::esp32::{Esp32HttpServer, Esp32SharedDisplay};
//! use quadseg::config::Config;
//! use std::sync::Arc;
//!
//! let display = Arc::new(Esp32SharedDisplay::new(renderer, status_led));
//! let server = Esp32HttpServer::new(&config, display)?;
//! ```

use std::sync::Arc;

use esp_idf_hal::io::Write;
use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use esp_idf_svc::io::EspIOError;

use crate::config::Config;
use crate::driver::ShiftRegisterDriver;
use crate::services::http_handler::{ApiReply, UpdateHandler};
use crate::services::shared::SharedDisplay;
use crate::traits::{HttpMethod, HttpRequest};

use super::gpio::{Esp32Pin, FreeRtosDelay};

/// The display bus as wired on the deployed board.
pub type Esp32DisplayBus =
    ShiftRegisterDriver<Esp32Pin<'static>, Esp32Pin<'static>, Esp32Pin<'static>>;

/// Shared display state with the on-device pin types filled in.
pub type Esp32SharedDisplay = SharedDisplay<Esp32DisplayBus, Esp32Pin<'static>>;

/// Largest accepted request body. The update payload is a single small
/// JSON object.
const MAX_BODY: usize = 256;

/// HTTP server for the display API.
///
/// Runs an embedded HTTP server exposing the update endpoint, the control
/// page, and the plaintext 404 diagnostic.
pub struct Esp32HttpServer {
    _server: EspHttpServer<'static>,
}

impl Esp32HttpServer {
    /// Create a new HTTP server rendering through the shared display.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP server fails to start.
    pub fn new(config: &Config, display: Arc<Esp32SharedDisplay>) -> anyhow::Result<Self> {
        let server_config = Configuration {
            http_port: config.web.port,
            // Required for the catch-all 404 handlers below.
            uri_match_wildcard: true,
            ..Default::default()
        };

        let mut server = EspHttpServer::new(&server_config)?;

        let blink_on_ms = config.display.blink_on_ms;
        let blink_off_ms = config.display.blink_off_ms;

        // GET / - Serve the control page (shared with desktop)
        server.fn_handler("/", esp_idf_svc::http::Method::Get, move |req| {
            let reply = ApiReply::index();
            let mut resp =
                req.into_response(200, None, &[("Content-Type", reply.content_type)])?;
            resp.write_all(reply.body.as_bytes())?;
            Ok::<_, EspIOError>(())
        })?;

        // POST /update-number - Render a number, then blink the LED
        let display_for_update = display.clone();
        server.fn_handler(
            "/update-number",
            esp_idf_svc::http::Method::Post,
            move |mut req| {
                let mut buf = [0u8; MAX_BODY];
                let len = req.read(&mut buf).unwrap_or(0);
                let body = core::str::from_utf8(&buf[..len]).unwrap_or("");

                let handler = UpdateHandler::new(Arc::clone(&display_for_update));
                let reply = handler.handle_update(body);

                let mut resp = req.into_response(
                    reply.status,
                    None,
                    &[("Content-Type", reply.content_type)],
                )?;
                resp.write_all(reply.body.as_bytes())?;
                drop(resp);

                // Blink once per handled update. Blocking is fine here:
                // the httpd task serves one request at a time.
                let _ = display_for_update.blink_indicator(
                    &mut FreeRtosDelay,
                    blink_on_ms,
                    blink_off_ms,
                );

                Ok::<_, EspIOError>(())
            },
        )?;

        // Catch-all 404 diagnostics. Registered last so the specific
        // routes above match first.
        for method in [esp_idf_svc::http::Method::Get, esp_idf_svc::http::Method::Post] {
            server.fn_handler("/*", method, move |req| {
                let request = HttpRequest {
                    method: match method {
                        esp_idf_svc::http::Method::Post => HttpMethod::Post,
                        _ => HttpMethod::Get,
                    },
                    path: req.uri().into(),
                    body: None,
                };
                let reply = ApiReply::not_found(&request);
                let mut resp = req.into_response(
                    reply.status,
                    None,
                    &[("Content-Type", reply.content_type)],
                )?;
                resp.write_all(reply.body.as_bytes())?;
                Ok::<_, EspIOError>(())
            })?;
        }

        println!("[HTTP] Server started on port {}", config.web.port);

        Ok(Self { _server: server })
    }
}

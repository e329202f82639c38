//! Axum-based HTTP server for the display API.
//!
//! Provides the same surface as the on-device server:
//! - GET `/` - static control page
//! - POST `/update-number` - render a number
//! - anything else - plaintext 404 diagnostic
//!
//! After each `/update-number` response the status LED blinks once. On
//! desktop the blink runs as a spawned task so the response is not held
//! up by the on/off delays.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::{Config, WebConfig};
use crate::traits::{DigitalOutput, DisplayBus};

use super::http_handler::{not_found_body, parse_query, ApiReply, UpdateHandler};
use super::shared::SharedDisplay;

// ============================================================================
// Web State
// ============================================================================

/// Per-server state handed to every route handler.
pub struct WebState<B, L> {
    /// The shared display driven by update requests.
    pub display: Arc<SharedDisplay<B, L>>,
    /// Status LED on time after a handled update (milliseconds).
    pub blink_on_ms: u64,
    /// Status LED off time after the on phase (milliseconds).
    pub blink_off_ms: u64,
}

impl<B, L> WebState<B, L> {
    /// Create state with the default half-second blink phases.
    pub fn new(display: Arc<SharedDisplay<B, L>>) -> Self {
        Self {
            display,
            blink_on_ms: 500,
            blink_off_ms: 500,
        }
    }

    /// Set the blink phase durations.
    pub fn with_blink(mut self, on_ms: u64, off_ms: u64) -> Self {
        self.blink_on_ms = on_ms;
        self.blink_off_ms = off_ms;
        self
    }
}

/// Blink the status LED once: on, wait, off, wait.
async fn blink<B, L>(display: Arc<SharedDisplay<B, L>>, on_ms: u64, off_ms: u64)
where
    B: DisplayBus + Send + 'static,
    L: DigitalOutput + Send + 'static,
{
    let _ = display.set_indicator(true);
    tokio::time::sleep(Duration::from_millis(on_ms)).await;
    let _ = display.set_indicator(false);
    tokio::time::sleep(Duration::from_millis(off_ms)).await;
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET / - Serve the control page
async fn index() -> ApiReply {
    ApiReply::index()
}

/// POST /update-number - Render a number
///
/// Accepts JSON: `{"number": 42}`. The status LED blink is spawned after
/// the reply is built, matching the on-device behavior without delaying
/// the response.
async fn update_number<B, L>(
    State(state): State<Arc<WebState<B, L>>>,
    body: Bytes,
) -> impl IntoResponse
where
    B: DisplayBus + Send + 'static,
    L: DigitalOutput + Send + 'static,
{
    let body_str = std::str::from_utf8(&body).unwrap_or("");

    let handler = UpdateHandler::new(Arc::clone(&state.display));
    let reply = handler.handle_update(body_str);

    tokio::spawn(blink(
        Arc::clone(&state.display),
        state.blink_on_ms,
        state.blink_off_ms,
    ));

    reply
}

/// Fallback handler listing the request details in plaintext
async fn not_found(method: Method, uri: Uri) -> ApiReply {
    let args = parse_query(uri.query().unwrap_or(""));
    ApiReply {
        status: 404,
        content_type: "text/plain",
        body: not_found_body(uri.path(), method.as_str(), &args),
    }
}

// ============================================================================
// Server Builder
// ============================================================================

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    /// Address to bind to
    pub addr: SocketAddr,
    /// Whether to enable CORS for all origins
    pub cors_permissive: bool,
    /// Status LED blink phase durations (on, off) in milliseconds
    pub blink_ms: (u64, u64),
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors_permissive: true,
            blink_ms: (500, 500),
        }
    }
}

impl WebServerConfig {
    /// Create a new config with the given address
    pub fn new(addr: impl Into<SocketAddr>) -> Self {
        Self {
            addr: addr.into(),
            ..Default::default()
        }
    }

    /// Set whether CORS should be permissive
    pub fn cors(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }

    /// Set the blink phase durations
    pub fn blink(mut self, on_ms: u64, off_ms: u64) -> Self {
        self.blink_ms = (on_ms, off_ms);
        self
    }

    /// Create from shared WebConfig
    pub fn from_config(config: &WebConfig) -> Self {
        Self {
            addr: ([0, 0, 0, 0], config.port).into(),
            ..Default::default()
        }
        .cors(config.cors_permissive)
    }

    /// Create from the complete application config, including blink timing
    pub fn from_app_config(config: &Config) -> Self {
        Self::from_config(&config.web).blink(
            u64::from(config.display.blink_on_ms),
            u64::from(config.display.blink_off_ms),
        )
    }
}

/// Build the Axum router with all routes
pub fn build_router<B, L>(
    display: Arc<SharedDisplay<B, L>>,
    config: &WebServerConfig,
) -> Router
where
    B: DisplayBus + Send + 'static,
    L: DigitalOutput + Send + 'static,
{
    let state = Arc::new(
        WebState::new(display).with_blink(config.blink_ms.0, config.blink_ms.1),
    );

    let mut router = Router::new()
        .route("/", get(index))
        .route("/update-number", post(update_number::<B, L>))
        .fallback(not_found)
        .with_state(state);

    // Add CORS if requested
    if config.cors_permissive {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Start the web server
///
/// This function blocks until the server is shut down.
pub async fn run_server<B, L>(
    display: Arc<SharedDisplay<B, L>>,
    config: WebServerConfig,
) -> Result<(), std::io::Error>
where
    B: DisplayBus + Send + 'static,
    L: DigitalOutput + Send + 'static,
{
    let router = build_router(display, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    println!("[Web] Listening on http://{}", config.addr);

    axum::serve(listener, router).await
}

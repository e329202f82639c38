//! Network services for the display HTTP API.
//!
//! - `web` feature: Axum-based HTTP server for desktop development
//! - `esp32-http` feature: on-device server in `hal::esp32`
//!
//! Both servers route through the same [`UpdateHandler`] logic, so the
//! wire behavior is identical on desktop and device. State is shared via
//! [`SharedDisplay`] wrapped in `Arc`:
//!
//! ```ignore
//! use std::sync::Arc;
//! use quadseg::services::{build_router, SharedDisplay, WebServerConfig};
//!
//! let display = Arc::new(SharedDisplay::new(renderer, status_led));
//! let router = build_router(Arc::clone(&display), &WebServerConfig::default());
//! ```

// Shared state (needs std for Arc/Mutex)
#[cfg(any(feature = "web", feature = "esp32-http"))]
pub mod shared;

// HTTP handler logic (shared between desktop and ESP32)
#[cfg(any(feature = "web", feature = "esp32-http"))]
pub mod http_handler;

#[cfg(feature = "web")]
pub mod web;

// Re-exports
#[cfg(any(feature = "web", feature = "esp32-http"))]
pub use shared::*;

#[cfg(any(feature = "web", feature = "esp32-http"))]
pub use http_handler::*;

#[cfg(feature = "web")]
pub use web::*;

//! # quadseg
//!
//! A Wi-Fi connected 4-digit 7-segment LED display with an HTTP control
//! API. POST a number and the digits light up.
//!
//! ## Features
//!
//! - **Hardware abstraction**: Traits for GPIO output, the shift-register
//!   bus, and the HTTP event loop
//! - **Bit-exact rendering**: A canonical glyph table and a driver that
//!   reproduces the shift/latch protocol of the register chain
//! - **One API, two servers**: The same handler logic backs the Axum
//!   desktop server and the esp-idf on-device server
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `segments` - Segment patterns and the digit glyph table
//! - `driver` - Bit-banged shift-register bus driver
//! - `renderer` - Number to four-digit frame rendering
//! - `traits` - Hardware and network abstractions
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//! - `services` - HTTP handler logic and the Axum server
//!
//! ## Example
//!
//! ```rust
//! use quadseg::{
//!     hal::{MockBus, MockPin},
//!     NumberRenderer, ShiftRegisterDriver,
//! };
//!
//! // Render through a mock bus for testing
//! let mut renderer = NumberRenderer::new(MockBus::new());
//! renderer.render(1234.0).unwrap();
//! assert_eq!(renderer.bus().latch_count, 1);
//!
//! // Or through the real bit-banged driver over three GPIO lines
//! let driver = ShiftRegisterDriver::new(MockPin::new(), MockPin::new(), MockPin::new());
//! let mut renderer = NumberRenderer::new(driver);
//! renderer.render(42.0).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Bit-banged driver for the shift-register display chain.
pub mod driver;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Frame rendering from numbers to segment patterns.
pub mod renderer;
/// Segment patterns and the digit glyph table.
pub mod segments;
/// Core traits for hardware and network abstraction.
pub mod traits;

/// Shared configuration system for desktop and ESP32.
pub mod config;

/// Message types for the HTTP control API (serde-based).
#[cfg(feature = "serde")]
pub mod messages;

/// HTTP services (feature-gated).
#[cfg(any(feature = "web", feature = "esp32-http"))]
pub mod services;

// Re-exports for convenience
pub use driver::ShiftRegisterDriver;
pub use renderer::{NumberRenderer, DIGIT_COUNT};
pub use segments::{encode, encode_with_dp, Glyph, SegmentPattern};
pub use traits::{
    // Hardware
    Delay,
    DigitalOutput,
    DisplayBus,
    // Network
    HttpMethod,
    HttpRequest,
    HttpResponse,
    HttpServer,
};

// Config re-exports
pub use config::{Config, DeviceConfig, DisplayConfig, WebConfig, WifiConfig};

// Message re-exports (for the HTTP API)
#[cfg(feature = "serde")]
pub use messages::{Status, StatusReply, UpdateNumberRequest};

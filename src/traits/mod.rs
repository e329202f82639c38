//! Trait definitions for hardware abstraction and networking.
//!
//! This module defines the abstractions that allow quadseg to:
//! - Run on different hardware (ESP32, desktop mock)
//! - Use different HTTP server implementations
//!
//! # Submodules
//!
//! - `hardware`: GPIO output, display bus, and delay traits
//! - `network`: HTTP request/response types and the dispatch-loop trait
//!
//! # Hardware Abstraction
//!
//! The key hardware traits are:
//!
//! - [`DigitalOutput`]: one push-pull GPIO line
//! - [`DisplayBus`]: shift/latch access to the register chain
//! - [`Delay`]: blocking millisecond delay for device-side timing

pub mod hardware;
pub mod network;

pub use hardware::*;
pub use network::*;

//! ESP32 hardware abstraction layer for the shift-register display.
//!
//! This module provides hardware implementations for an esp-idf based
//! board driving four daisy-chained 7-segment shift registers.
//!
//! # Hardware Configuration
//!
//! - **MCU**: any esp-idf target (originally deployed on a small Wi-Fi SoC)
//! - **Display**: 4x 7-segment cells behind serial-in/parallel-out shift
//!   registers sharing clock, data, and latch lines
//! - **Status LED**: onboard LED, blinked once per handled update
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for the GPIO numbers matching the wiring.

mod gpio;

pub use gpio::{Esp32Pin, FreeRtosDelay};

#[cfg(feature = "wifi")]
mod wifi;
#[cfg(feature = "wifi")]
pub use wifi::Esp32Wifi;

#[cfg(feature = "wifi")]
mod mdns;
#[cfg(feature = "wifi")]
pub use mdns::Esp32Mdns;

#[cfg(feature = "esp32-http")]
mod http;
#[cfg(feature = "esp32-http")]
pub use http::{Esp32HttpServer, Esp32SharedDisplay};

/// Pin assignments for the display wiring.
///
/// These constants match the deployed board:
/// - Shift-register bus on GPIO12-14
/// - Onboard status LED on GPIO16
pub mod pins {
    /// Shift clock line (SH_CP)
    pub const CLOCK: i32 = 13;

    /// Storage latch line (ST_CP)
    pub const LATCH: i32 = 12;

    /// Serial data line (DS)
    pub const DATA: i32 = 14;

    /// Onboard status LED (active high)
    pub const STATUS_LED: i32 = 16;
}

//! Hardware abstraction layer implementations.
//!
//! - [`mock`]: in-memory pins, buses and HTTP servers for tests and the
//!   desktop demo server. Always available.
//! - `esp32`: real GPIO, Wi-Fi and HTTP on esp-idf hardware. Requires
//!   the `esp32` feature (Wi-Fi and HTTP behind `wifi` / `esp32-http`).

pub mod mock;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::{BusLine, MockBus, MockDelay, MockHttp, MockPin, PinEvent, TraceLog, TracePin};

//! Hardware abstraction traits for the display bus and GPIO lines.
//!
//! This module defines the hardware interfaces that allow quadseg to run
//! on real shift-register hardware (ESP32) and on desktop mocks.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`DigitalOutput`] | One push-pull GPIO output line |
//! | [`DisplayBus`] | Shift/latch access to the register chain |
//! | [`Delay`] | Blocking millisecond delay for device-side timing |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations from
//! [`crate::hal::mock`]. For ESP32 hardware, use the implementations from
//! `hal::esp32` (requires the `esp32` feature).

use crate::SegmentPattern;

/// A single digital output line (clock, data, latch, or status LED).
///
/// The error type exists because platform GPIO writes are fallible at the
/// HAL level; the shift/latch protocol itself has no error conditions.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use quadseg::traits::DigitalOutput;
///
/// struct MyPin { /* hardware handle */ }
///
/// impl DigitalOutput for MyPin {
///     type Error = ();
///
///     fn set_state(&mut self, high: bool) -> Result<(), ()> {
///         // Drive the pin...
///         Ok(())
///     }
/// }
/// ```
pub trait DigitalOutput {
    /// Error type for pin operations.
    type Error;

    /// Drives the line high (`true`) or low (`false`).
    fn set_state(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Drives the line high.
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_state(true)
    }

    /// Drives the line low.
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_state(false)
    }
}

/// Serial access to the shift-register chain behind the display.
///
/// This is the seam between [`NumberRenderer`](crate::NumberRenderer) and
/// the physical pins: the renderer shifts one pattern per display cell and
/// commits the whole frame with a single latch.
///
/// # Contract
///
/// - `shift_digit` clocks all 8 bits of one pattern into the chain; the
///   new data stays invisible until latched.
/// - `latch` must be called exactly once per full 4-digit frame, after all
///   four shifts, never between them. The latch edge is the only moment
///   the displayed image changes.
pub trait DisplayBus {
    /// Error type for bus operations.
    type Error;

    /// Shifts one cell's segment pattern into the chain.
    fn shift_digit(&mut self, pattern: SegmentPattern) -> Result<(), Self::Error>;

    /// Commits the shifted frame to the display outputs.
    fn latch(&mut self) -> Result<(), Self::Error>;
}

// Forwarding impl so the renderer can drive a borrowed bus.
impl<B: DisplayBus + ?Sized> DisplayBus for &mut B {
    type Error = B::Error;

    fn shift_digit(&mut self, pattern: SegmentPattern) -> Result<(), Self::Error> {
        (**self).shift_digit(pattern)
    }

    fn latch(&mut self) -> Result<(), Self::Error> {
        (**self).latch()
    }
}

/// Blocking millisecond delay.
///
/// Used by device-side code for the status-indicator blink; desktop code
/// uses the tokio timer instead.
pub trait Delay {
    /// Blocks for the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPin {
        state: bool,
        writes: usize,
    }

    impl DigitalOutput for TestPin {
        type Error = ();

        fn set_state(&mut self, high: bool) -> Result<(), ()> {
            self.state = high;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn set_high_low_default_impls() {
        let mut pin = TestPin {
            state: false,
            writes: 0,
        };
        pin.set_high().unwrap();
        assert!(pin.state);
        pin.set_low().unwrap();
        assert!(!pin.state);
        assert_eq!(pin.writes, 2);
    }
}

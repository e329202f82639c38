//! Bit-banged driver for the cascaded shift-register display chain.
//!
//! The display is four 7-segment cells, each behind a serial-in/parallel-out
//! shift register; the registers are daisy-chained, so shifting 32 bits and
//! pulsing the latch updates all four cells at once. Three GPIO lines drive
//! the chain: clock, data, and latch.
//!
//! The bit protocol is fixed by the register part, not by style:
//!
//! - data is sampled on the **rising** clock edge, so the data line must be
//!   driven while the clock is low and only then clocked high;
//! - the storage stage moves to the output stage on the **rising** latch
//!   edge, which is the single moment the visible image changes.

use crate::traits::{DigitalOutput, DisplayBus};
use crate::SegmentPattern;

/// Number of segment bits per display cell.
const BITS_PER_DIGIT: u8 = 8;

/// Drives the clock/data/latch lines of the shift-register chain.
///
/// Owns its three pins exclusively; no other component may touch the bus.
/// All three pins must share an error type (on real hardware they come
/// from the same GPIO peripheral).
///
/// # Example
///
/// ```
/// use quadseg::hal::MockPin;
/// use quadseg::traits::DisplayBus;
/// use quadseg::{encode, Glyph, ShiftRegisterDriver};
///
/// let mut driver = ShiftRegisterDriver::new(MockPin::new(), MockPin::new(), MockPin::new());
/// driver.shift_digit(encode(Glyph::Digit(7))).unwrap();
/// ```
pub struct ShiftRegisterDriver<C, D, L> {
    clock: C,
    data: D,
    latch: L,
}

impl<C, D, L> ShiftRegisterDriver<C, D, L>
where
    C: DigitalOutput,
    D: DigitalOutput<Error = C::Error>,
    L: DigitalOutput<Error = C::Error>,
{
    /// Creates a driver over the three bus lines.
    ///
    /// The lines are expected to idle low (the device binary initializes
    /// them low before constructing the driver).
    pub fn new(clock: C, data: D, latch: L) -> Self {
        Self { clock, data, latch }
    }

    /// Releases the pins.
    pub fn into_pins(self) -> (C, D, L) {
        (self.clock, self.data, self.latch)
    }
}

impl<C, D, L> DisplayBus for ShiftRegisterDriver<C, D, L>
where
    C: DigitalOutput,
    D: DigitalOutput<Error = C::Error>,
    L: DigitalOutput<Error = C::Error>,
{
    type Error = C::Error;

    /// Clocks the 8 bits of `pattern` into the chain, most-significant bit
    /// first.
    ///
    /// For each bit: clock low, data to the bit value, clock high. Data
    /// transfers to the register on the rising clock edge, so this order
    /// is a hard protocol requirement.
    fn shift_digit(&mut self, pattern: SegmentPattern) -> Result<(), Self::Error> {
        let bits = pattern.bits();
        for x in 0..BITS_PER_DIGIT {
            self.clock.set_low()?;
            self.data.set_state(bits & (1 << (7 - x)) != 0)?;
            self.clock.set_high()?;
        }
        Ok(())
    }

    /// Pulses the latch line low then high, committing the shifted frame.
    ///
    /// The storage register moves to the output stage on the rising edge;
    /// callers must latch exactly once per full 4-digit frame.
    fn latch(&mut self) -> Result<(), Self::Error> {
        self.latch.set_low()?;
        self.latch.set_high()?;
        Ok(())
    }
}

//! Frame rendering: number to segment patterns to bus writes.
//!
//! The renderer owns the policy side of the display: how a value becomes
//! four glyphs, in what order the glyphs go onto the wire, and when the
//! frame is committed. The electrical side lives in
//! [`ShiftRegisterDriver`](crate::ShiftRegisterDriver).

use crate::segments::{encode, Glyph};
use crate::traits::DisplayBus;

/// Number of display cells in the chain.
pub const DIGIT_COUNT: usize = 4;

/// Truncated magnitude of a value, wrapped to the displayable range.
///
/// Negative values render as their absolute value and fractions are
/// dropped. Values with more than four digits keep only the low four
/// (12345 shows as 2345). Non-finite input renders as 0.
fn truncated_magnitude(value: f64) -> u16 {
    if !value.is_finite() {
        return 0;
    }
    (value.abs().floor() % 10_000.0) as u16
}

/// Renders numbers onto a 4-digit display bus.
///
/// Each render produces exactly one frame: four `shift_digit` calls
/// followed by one `latch`. Digits go onto the wire least-significant
/// first, because the last pattern shifted ends up in the register
/// closest to the serial input, which drives the leftmost cell.
pub struct NumberRenderer<B> {
    bus: B,
}

impl<B: DisplayBus> NumberRenderer<B> {
    /// Creates a renderer over the given display bus.
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Renders `value` on the display, zero-padded to four digits.
    ///
    /// The value is reduced with [`truncated_magnitude`] semantics first,
    /// so `render(-42.9)` and `render(42.0)` produce the same frame.
    pub fn render(&mut self, value: f64) -> Result<(), B::Error> {
        let mut remaining = truncated_magnitude(value);
        for _ in 0..DIGIT_COUNT {
            let digit = (remaining % 10) as u8;
            self.bus.shift_digit(encode(Glyph::Digit(digit)))?;
            remaining /= 10;
        }
        self.bus.latch()
    }

    /// Shows an arbitrary row of glyphs, leftmost first in `glyphs`.
    ///
    /// Useful for symbol output like `-` or a blank display. Shifts the
    /// rightmost glyph first to match the chain ordering.
    pub fn show_glyphs(&mut self, glyphs: [Glyph; DIGIT_COUNT]) -> Result<(), B::Error> {
        for glyph in glyphs.iter().rev() {
            self.bus.shift_digit(encode(*glyph))?;
        }
        self.bus.latch()
    }

    /// Blanks all four cells.
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.show_glyphs([Glyph::Blank; DIGIT_COUNT])
    }

    /// Borrows the underlying bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrows the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the renderer and returns the bus.
    pub fn into_bus(self) -> B {
        self.bus
    }
}

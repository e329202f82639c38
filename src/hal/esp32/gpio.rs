//! GPIO output and delay implementations over esp-idf-hal.

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_sys::EspError;

use crate::traits::{Delay, DigitalOutput};

/// Push-pull GPIO output line.
///
/// Wraps an esp-idf `PinDriver` so the display driver and the status LED
/// both go through the same [`DigitalOutput`] trait as the mocks.
///
/// # Example
///
/// ```ignore
/// use esp_idf_hal::gpio::AnyOutputPin;
/// use quadseg::hal::esp32::Esp32Pin;
///
/// let clock = Esp32Pin::new(unsafe { AnyOutputPin::new(pins::CLOCK) })?;
/// ```
pub struct Esp32Pin<'d> {
    pin: PinDriver<'d, AnyOutputPin, Output>,
}

impl<'d> Esp32Pin<'d> {
    /// Take ownership of a pin and configure it as a low output.
    pub fn new(pin: impl Peripheral<P = AnyOutputPin> + 'd) -> Result<Self, EspError> {
        let mut pin = PinDriver::output(pin)?;
        pin.set_low()?;
        Ok(Self { pin })
    }
}

impl DigitalOutput for Esp32Pin<'_> {
    type Error = EspError;

    fn set_state(&mut self, high: bool) -> Result<(), EspError> {
        if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

/// Blocking delay backed by the FreeRTOS tick.
pub struct FreeRtosDelay;

impl Delay for FreeRtosDelay {
    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}

//! Shared display state for the HTTP services.
//!
//! `SharedDisplay` wraps the renderer and the status LED behind mutexes so
//! the web server (or the on-device HTTP server) can drive them from any
//! handler while keeping the render/latch sequence atomic per request.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quadseg::services::SharedDisplay;
//!
//! let display = Arc::new(SharedDisplay::new(renderer, status_led));
//!
//! // HTTP handlers render through the provider trait
//! display.show_number(42.0).unwrap();
//!
//! // The blink task toggles the status LED
//! display.set_indicator(true).unwrap();
//! ```

use std::sync::{Arc, Mutex};

use crate::renderer::NumberRenderer;
use crate::traits::{Delay, DigitalOutput, DisplayBus};

// ============================================================================
// Display Provider Trait
// ============================================================================

/// Trait for rendering numbers from HTTP handlers.
///
/// This abstraction lets the handler logic stay independent of which bus
/// and pin types the platform wired up.
pub trait DisplayProvider: Send + Sync {
    /// Render `value` on the display.
    fn show_number(&self, value: f64) -> Result<(), ()>;
}

// ============================================================================
// Shared Display
// ============================================================================

/// Thread-safe wrapper around the renderer and status indicator.
///
/// # Thread Safety
///
/// The renderer lock is held for one full frame (four shifts plus latch),
/// so concurrent update requests serialize and the chain never sees two
/// interleaved frames. The status LED has its own lock because the blink
/// task toggles it after the response is already gone.
pub struct SharedDisplay<B, L> {
    renderer: Mutex<NumberRenderer<B>>,
    indicator: Mutex<L>,
}

impl<B: DisplayBus, L: DigitalOutput> SharedDisplay<B, L> {
    /// Create shared state wrapping a renderer and the status LED pin.
    pub fn new(renderer: NumberRenderer<B>, indicator: L) -> Self {
        Self {
            renderer: Mutex::new(renderer),
            indicator: Mutex::new(indicator),
        }
    }

    /// Render a number, holding the renderer lock for the whole frame.
    pub fn show_number(&self, value: f64) -> Result<(), ()> {
        let mut renderer = self.renderer.lock().unwrap();
        renderer.render(value).map_err(|_| ())
    }

    /// Drive the status LED high or low.
    pub fn set_indicator(&self, on: bool) -> Result<(), ()> {
        let mut indicator = self.indicator.lock().unwrap();
        indicator.set_state(on).map_err(|_| ())
    }

    /// Blink the status LED once with blocking delays: on, wait, off, wait.
    ///
    /// The on-device server calls this after each handled update; the
    /// desktop server uses a spawned timer instead.
    pub fn blink_indicator(&self, delay: &mut impl Delay, on_ms: u32, off_ms: u32) -> Result<(), ()> {
        self.set_indicator(true)?;
        delay.delay_ms(on_ms);
        self.set_indicator(false)?;
        delay.delay_ms(off_ms);
        Ok(())
    }

    /// Access the renderer with a mutable lock.
    ///
    /// The closure pattern prevents accidentally holding the lock across
    /// await points.
    pub fn with_renderer<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut NumberRenderer<B>) -> R,
    {
        let mut guard = self.renderer.lock().unwrap();
        f(&mut *guard)
    }
}

// ============================================================================
// DisplayProvider Implementation for Arc<SharedDisplay>
// ============================================================================

impl<B, L> DisplayProvider for Arc<SharedDisplay<B, L>>
where
    B: DisplayBus + Send + 'static,
    L: DigitalOutput + Send + 'static,
{
    fn show_number(&self, value: f64) -> Result<(), ()> {
        SharedDisplay::show_number(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{MockBus, MockPin};
    use crate::segments::{encode, Glyph};

    fn shared() -> SharedDisplay<MockBus, MockPin> {
        SharedDisplay::new(NumberRenderer::new(MockBus::new()), MockPin::new())
    }

    #[test]
    fn show_number_renders_one_frame() {
        let display = shared();
        display.show_number(42.0).unwrap();

        display.with_renderer(|r| {
            assert_eq!(r.bus().latch_count, 1);
            assert_eq!(
                r.bus().last_frame(),
                Some([
                    encode(Glyph::Digit(0)),
                    encode(Glyph::Digit(0)),
                    encode(Glyph::Digit(4)),
                    encode(Glyph::Digit(2)),
                ])
            );
        });
    }

    #[test]
    fn set_indicator_drives_the_led() {
        let display = shared();
        display.set_indicator(true).unwrap();
        display.set_indicator(false).unwrap();

        let history = {
            let led = display.indicator.lock().unwrap();
            led.history.clone()
        };
        assert_eq!(history, [true, false]);
    }

    #[test]
    fn blink_indicator_pulses_led_with_both_delays() {
        use crate::hal::MockDelay;

        let display = shared();
        let mut delay = MockDelay::new();
        display.blink_indicator(&mut delay, 500, 500).unwrap();

        assert_eq!(delay.delays, [500, 500]);
        let history = {
            let led = display.indicator.lock().unwrap();
            led.history.clone()
        };
        assert_eq!(history, [true, false]);
    }

    #[test]
    fn provider_impl_renders_through_arc() {
        let display = Arc::new(shared());
        DisplayProvider::show_number(&display, 7.0).unwrap();

        display.with_renderer(|r| {
            assert_eq!(r.bus().frames.len(), 1);
        });
    }

    #[test]
    fn concurrent_updates_do_not_interleave_frames() {
        use std::thread;

        let display = Arc::new(shared());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let display = Arc::clone(&display);
                thread::spawn(move || {
                    for _ in 0..10 {
                        display.show_number(f64::from(i) * 111.0).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        display.with_renderer(|r| {
            assert_eq!(r.bus().latch_count, 40);
            // Every committed frame must be one of the four rendered values.
            for frame in &r.bus().frames {
                let value = frame
                    .iter()
                    .map(|p| {
                        (0..10u8)
                            .find(|d| encode(Glyph::Digit(*d)) == *p)
                            .unwrap() as u32
                    })
                    .fold(0u32, |acc, d| acc * 10 + d);
                assert!(value % 111 == 0 && value <= 333, "torn frame: {value}");
            }
        });
    }
}

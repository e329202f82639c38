//! Mock hardware implementations for testing and desktop development.
//!
//! All mocks expose their observed state as public fields so tests can
//! assert on exactly what the core wrote: pin levels, the order of bus
//! edges, shifted patterns, and committed frames.

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::convert::Infallible;

use crate::renderer::DIGIT_COUNT;
use crate::traits::{Delay, DigitalOutput, DisplayBus, HttpRequest, HttpResponse, HttpServer};
use crate::SegmentPattern;

// ============================================================================
// Pins
// ============================================================================

/// Mock GPIO output that records every level written to it.
#[derive(Debug, Default)]
pub struct MockPin {
    /// Current pin level.
    pub state: bool,
    /// Every level written, in order.
    pub history: Vec<bool>,
}

impl MockPin {
    /// Creates a pin idling low with no history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DigitalOutput for MockPin {
    type Error = Infallible;

    fn set_state(&mut self, high: bool) -> Result<(), Infallible> {
        self.state = high;
        self.history.push(high);
        Ok(())
    }
}

/// Which bus line a traced pin write landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusLine {
    /// Shift clock line.
    Clock,
    /// Serial data line.
    Data,
    /// Storage latch line.
    Latch,
}

/// One pin write captured by a [`TracePin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinEvent {
    /// The line that was written.
    pub line: BusLine,
    /// The level it was driven to.
    pub high: bool,
}

impl PinEvent {
    /// Creates an event record.
    pub const fn new(line: BusLine, high: bool) -> Self {
        Self { line, high }
    }
}

/// Shared event log capturing writes across several [`TracePin`]s.
///
/// Clones share the same log, so one log threaded through clock, data
/// and latch pins preserves the relative ordering of all bus edges.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    events: Rc<RefCell<Vec<PinEvent>>>,
}

impl TraceLog {
    /// Appends one event.
    pub fn push(&self, event: PinEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Drains and returns all recorded events.
    pub fn take(&self) -> Vec<PinEvent> {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

/// Mock GPIO output that reports each write to a shared [`TraceLog`].
#[derive(Debug)]
pub struct TracePin {
    line: BusLine,
    log: TraceLog,
}

impl TracePin {
    /// Creates a traced pin labeled with its bus line.
    pub fn new(line: BusLine, log: TraceLog) -> Self {
        Self { line, log }
    }
}

impl DigitalOutput for TracePin {
    type Error = Infallible;

    fn set_state(&mut self, high: bool) -> Result<(), Infallible> {
        self.log.push(PinEvent::new(self.line, high));
        Ok(())
    }
}

/// Mock delay that records each requested pause instead of sleeping.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Requested delays in order, in milliseconds.
    pub delays: Vec<u32>,
}

impl MockDelay {
    /// Creates a delay recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}

// ============================================================================
// Display bus
// ============================================================================

/// Mock display bus that records shifts and committed frames.
///
/// `shifted` keeps every pattern ever shifted, in wire order. On each
/// latch the patterns shifted since the previous latch are committed to
/// `frames` in left-to-right display order (the last pattern shifted
/// lands in the leftmost cell).
#[derive(Debug, Default)]
pub struct MockBus {
    /// Every pattern shifted, in wire order.
    pub shifted: Vec<SegmentPattern>,
    /// Number of latch pulses seen.
    pub latch_count: usize,
    /// Committed frames in left-to-right display order.
    pub frames: Vec<[SegmentPattern; DIGIT_COUNT]>,
    pending: Vec<SegmentPattern>,
}

impl MockBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently committed frame, left to right.
    pub fn last_frame(&self) -> Option<[SegmentPattern; DIGIT_COUNT]> {
        self.frames.last().copied()
    }
}

impl DisplayBus for MockBus {
    type Error = Infallible;

    fn shift_digit(&mut self, pattern: SegmentPattern) -> Result<(), Infallible> {
        self.shifted.push(pattern);
        self.pending.push(pattern);
        Ok(())
    }

    fn latch(&mut self) -> Result<(), Infallible> {
        self.latch_count += 1;
        let mut frame = [SegmentPattern::BLANK; DIGIT_COUNT];
        // Reverse wire order into display order; extra shifts fall off
        // the far end of the chain, like on real hardware.
        for (cell, pattern) in frame.iter_mut().zip(self.pending.iter().rev()) {
            *cell = *pattern;
        }
        self.frames.push(frame);
        self.pending.clear();
        Ok(())
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// Mock HTTP server fed from a queue of canned requests.
///
/// `recv_request` pops the queue; once empty the server reports
/// shutdown. Responses are recorded in `sent` for inspection.
#[derive(Debug, Default)]
pub struct MockHttp {
    queue: VecDeque<HttpRequest>,
    /// Responses sent, in order.
    pub sent: Vec<HttpResponse>,
}

impl MockHttp {
    /// Creates a server with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a request for a later `recv_request` call.
    pub fn push_request(&mut self, request: HttpRequest) {
        self.queue.push_back(request);
    }

    /// The most recently sent response.
    pub fn last_response(&self) -> Option<&HttpResponse> {
        self.sent.last()
    }
}

impl HttpServer for MockHttp {
    type Error = Infallible;

    async fn recv_request(&mut self) -> Option<HttpRequest> {
        self.queue.pop_front()
    }

    async fn send_response(&mut self, response: HttpResponse) -> Result<(), Infallible> {
        self.sent.push(response);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode, Glyph};

    #[test]
    fn mock_pin_records_history() {
        let mut pin = MockPin::new();
        pin.set_high().unwrap();
        pin.set_low().unwrap();
        pin.set_high().unwrap();
        assert!(pin.state);
        assert_eq!(pin.history, [true, false, true]);
    }

    #[test]
    fn trace_log_is_shared_between_clones() {
        let log = TraceLog::default();
        let mut clock = TracePin::new(BusLine::Clock, log.clone());
        let mut data = TracePin::new(BusLine::Data, log.clone());

        clock.set_low().unwrap();
        data.set_high().unwrap();

        assert_eq!(
            log.take(),
            [
                PinEvent::new(BusLine::Clock, false),
                PinEvent::new(BusLine::Data, true),
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn mock_bus_commits_frames_in_display_order() {
        let mut bus = MockBus::new();
        for d in [4u8, 3, 2, 1] {
            bus.shift_digit(encode(Glyph::Digit(d))).unwrap();
        }
        bus.latch().unwrap();

        assert_eq!(bus.latch_count, 1);
        assert_eq!(
            bus.last_frame(),
            Some([
                encode(Glyph::Digit(1)),
                encode(Glyph::Digit(2)),
                encode(Glyph::Digit(3)),
                encode(Glyph::Digit(4)),
            ])
        );
    }

    #[test]
    fn mock_bus_clears_pending_between_frames() {
        let mut bus = MockBus::new();
        for d in [1u8, 1, 1, 1] {
            bus.shift_digit(encode(Glyph::Digit(d))).unwrap();
        }
        bus.latch().unwrap();
        for d in [2u8, 2, 2, 2] {
            bus.shift_digit(encode(Glyph::Digit(d))).unwrap();
        }
        bus.latch().unwrap();

        assert_eq!(bus.frames.len(), 2);
        assert_eq!(bus.frames[0], [encode(Glyph::Digit(1)); DIGIT_COUNT]);
        assert_eq!(bus.frames[1], [encode(Glyph::Digit(2)); DIGIT_COUNT]);
    }

    #[tokio::test]
    async fn mock_http_round_trip() {
        use crate::traits::HttpMethod;

        let mut http = MockHttp::new();
        http.push_request(HttpRequest {
            method: HttpMethod::Get,
            path: "/".into(),
            body: None,
        });

        let req = http.recv_request().await.unwrap();
        assert_eq!(req.route(), "/");

        http.send_response(HttpResponse::new(200, "text/html", "<html></html>"))
            .await
            .unwrap();
        assert_eq!(http.last_response().unwrap().status, 200);

        assert!(http.recv_request().await.is_none());
    }
}

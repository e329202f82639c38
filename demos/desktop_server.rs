//! Desktop server example for testing the web UI without hardware.
//!
//! Runs the HTTP API against a mock display bus, allowing you to:
//! - Access the control page at http://localhost:8080
//! - POST numbers to /update-number
//! - Watch the "display" update in the terminal
//!
//! # Usage
//!
//! ```sh
//! cargo run --example desktop_server --features web
//! ```

use std::sync::Arc;
use std::time::Duration;

use quadseg::hal::{MockBus, MockPin};
use quadseg::services::{build_router, SharedDisplay, WebServerConfig};
use quadseg::{encode, Config, Glyph, NumberRenderer, SegmentPattern, DIGIT_COUNT};

fn main() {
    // Initialize the tokio runtime
    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");

    rt.block_on(async {
        println!("=================================");
        println!("  quadseg Desktop Server");
        println!("=================================");
        println!();

        // Central configuration - modify this for your setup
        let config = Config::default();
        // Example of customization:
        // let config = Config::default()
        //     .with_web(quadseg::WebConfig::default().with_port(3000))
        //     .with_display(quadseg::DisplayConfig::default().with_blink(250, 250));

        let web_config = WebServerConfig::from_app_config(&config);

        println!("Starting web server...");
        println!("  Web UI: http://{}", web_config.addr);
        println!("  Update: POST http://{}/update-number  {{\"number\": 42}}", web_config.addr);
        println!();
        println!("Press Ctrl+C to stop.");
        println!();

        // Mock display shared between the server and the terminal echo
        let renderer = NumberRenderer::new(MockBus::new());
        let display = Arc::new(SharedDisplay::new(renderer, MockPin::new()));

        spawn_frame_echo(Arc::clone(&display));

        let router = build_router(Arc::clone(&display), &web_config);
        let listener = tokio::net::TcpListener::bind(web_config.addr)
            .await
            .unwrap();
        axum::serve(listener, router).await.unwrap();
    });
}

/// Print each newly committed frame as the four characters it would show.
fn spawn_frame_echo(display: Arc<SharedDisplay<MockBus, MockPin>>) {
    tokio::spawn(async move {
        let mut seen = 0usize;
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            let frame = display.with_renderer(|r| {
                let frames = &r.bus().frames;
                if frames.len() > seen {
                    seen = frames.len();
                    frames.last().copied()
                } else {
                    None
                }
            });
            if let Some(frame) = frame {
                println!("[Display] {}", frame_to_string(&frame));
            }
        }
    });
}

/// Decode a frame back to displayable characters for the terminal.
fn frame_to_string(frame: &[SegmentPattern; DIGIT_COUNT]) -> String {
    frame
        .iter()
        .map(|pattern| {
            (0..10u8)
                .find(|d| encode(Glyph::Digit(*d)) == *pattern)
                .map(|d| char::from(b'0' + d))
                .unwrap_or(' ')
        })
        .collect()
}

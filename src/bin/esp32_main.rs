//! Network-addressable 7-segment display, device entry point.
//!
//! Brings up the display bus, Wi-Fi, mDNS, and the HTTP server, then
//! idles; the esp-idf httpd task drives all rendering through the shared
//! display state.
//!
//! # Build
//!
//! ```bash
//! WIFI_SSID=MyNetwork WIFI_PASSWORD=secret \
//!     cargo build --bin esp32_main --features esp32-http --target riscv32imc-esp-espidf
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::AnyOutputPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use quadseg::hal::esp32::{pins, Esp32HttpServer, Esp32Mdns, Esp32Pin, Esp32Wifi};
use quadseg::services::SharedDisplay;
use quadseg::{Config, NumberRenderer, ShiftRegisterDriver, WifiConfig};

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();

    println!();
    println!("================================");
    println!("  quadseg display controller");
    println!("================================");
    println!();

    // =========================================================================
    // Configuration
    // =========================================================================
    let config = Config::default().with_wifi(
        WifiConfig::default()
            .with_ssid(option_env!("WIFI_SSID").unwrap_or(""))
            .with_password(option_env!("WIFI_PASSWORD").unwrap_or("")),
    );

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize Display Bus (shift registers on GPIO13/12/14)
    // =========================================================================
    let clock = Esp32Pin::new(unsafe { AnyOutputPin::new(pins::CLOCK) })?;
    let latch = Esp32Pin::new(unsafe { AnyOutputPin::new(pins::LATCH) })?;
    let data = Esp32Pin::new(unsafe { AnyOutputPin::new(pins::DATA) })?;
    let status_led = Esp32Pin::new(unsafe { AnyOutputPin::new(pins::STATUS_LED) })?;

    let driver = ShiftRegisterDriver::new(clock, data, latch);
    let mut renderer = NumberRenderer::new(driver);

    // Show zero on boot so the cells are in a known state.
    renderer.render(0.0)?;
    println!("[OK] Display initialized (GPIO{}/{}/{})", pins::CLOCK, pins::LATCH, pins::DATA);

    let display = Arc::new(SharedDisplay::new(renderer, status_led));

    // =========================================================================
    // Initialize WiFi
    // =========================================================================
    if !config.wifi.is_configured() {
        anyhow::bail!("WiFi not configured (set WIFI_SSID/WIFI_PASSWORD at build time)");
    }

    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let wifi = Esp32Wifi::new(peripherals.modem, sysloop, Some(nvs), &config.wifi)?;
    println!("[OK] WiFi connected: {:?}", wifi.ip_addr());

    // =========================================================================
    // Initialize mDNS and HTTP Server
    // =========================================================================
    let _mdns = Esp32Mdns::new(&config.device, config.web.port)?;
    let _server = Esp32HttpServer::new(&config, Arc::clone(&display))?;

    println!();
    println!("Ready:");
    if let Some(ip) = wifi.ip_addr() {
        println!("  Web UI:  http://{}/", ip);
    }
    println!("  mDNS:    http://{}.local/", config.device.hostname);
    println!("  Update:  POST /update-number  {{\"number\": 42}}");
    println!();

    // The httpd task owns all the work from here.
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}

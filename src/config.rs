//! Shared configuration system for desktop and ESP32.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use quadseg::config::{Config, DisplayConfig, WebConfig};
//!
//! // Use defaults
//! let config = Config::default();
//!
//! // Or customize
//! let config = Config::default()
//!     .with_display(DisplayConfig::default().with_blink(250, 250))
//!     .with_web(WebConfig::default().with_port(3000));
//! ```

use heapless::String as HString;

/// Maximum length for short config strings (hostnames, device names)
pub const MAX_SHORT_STRING: usize = 64;

/// Maximum length for longer config strings (paths, messages)
pub const MAX_LONG_STRING: usize = 128;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Type alias for longer config strings
pub type LongString = HString<MAX_LONG_STRING>;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Take only what fits
    let take = s.len().min(MAX_SHORT_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, _)| *i < take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

/// Create a LongString from a &str, truncating if too long
pub fn long_string(s: &str) -> LongString {
    let mut hs = LongString::new();
    let take = s.len().min(MAX_LONG_STRING);
    let valid_end = s
        .char_indices()
        .take_while(|(i, _)| *i < take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// WiFi connection configuration
    pub wifi: WifiConfig,
    /// Web server configuration
    pub web: WebConfig,
    /// Display wiring and blink timing
    pub display: DisplayConfig,
    /// Device identification
    pub device: DeviceConfig,
}

impl Config {
    /// Set WiFi configuration
    pub fn with_wifi(mut self, wifi: WifiConfig) -> Self {
        self.wifi = wifi;
        self
    }

    /// Set web configuration
    pub fn with_web(mut self, web: WebConfig) -> Self {
        self.web = web;
        self
    }

    /// Set display configuration
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Set device configuration
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Display wiring and status-indicator configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// GPIO number driving the shift clock
    pub clock_pin: u8,
    /// GPIO number driving the storage latch
    pub latch_pin: u8,
    /// GPIO number driving the serial data line
    pub data_pin: u8,
    /// GPIO number driving the status LED
    pub status_led_pin: u8,
    /// Status LED on time after a handled request (milliseconds)
    pub blink_on_ms: u32,
    /// Status LED off time after the on phase (milliseconds)
    pub blink_off_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock_pin: 13,
            latch_pin: 12,
            data_pin: 14,
            status_led_pin: 16,
            blink_on_ms: 500,
            blink_off_ms: 500,
        }
    }
}

impl DisplayConfig {
    /// Set the three bus pins (clock, latch, data)
    pub fn with_bus_pins(mut self, clock: u8, latch: u8, data: u8) -> Self {
        self.clock_pin = clock;
        self.latch_pin = latch;
        self.data_pin = data;
        self
    }

    /// Set the status LED pin
    pub fn with_status_led_pin(mut self, pin: u8) -> Self {
        self.status_led_pin = pin;
        self
    }

    /// Set the blink on/off durations
    pub fn with_blink(mut self, on_ms: u32, off_ms: u32) -> Self {
        self.blink_on_ms = on_ms;
        self.blink_off_ms = off_ms;
        self
    }
}

// ============================================================================
// Web Config
// ============================================================================

/// Web server configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WebConfig {
    /// Port to listen on
    pub port: u16,
    /// Whether to enable CORS for all origins
    pub cors_permissive: bool,
    /// Whether web server is enabled
    pub enabled: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cors_permissive: true,
            enabled: true,
        }
    }
}

impl WebConfig {
    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS mode
    pub fn with_cors(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }

    /// Enable or disable web server
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

// ============================================================================
// WiFi Config
// ============================================================================

/// WiFi connection configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WifiConfig {
    /// WiFi network SSID
    pub ssid: ShortString,
    /// WiFi password
    pub password: ShortString,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u32,
    /// Whether WiFi is enabled
    pub enabled: bool,
    /// Maximum connection retry attempts (0 = unlimited)
    pub max_retries: u8,
}

impl Default for WifiConfig {
    fn default() -> Self {
        Self {
            ssid: ShortString::new(),
            password: ShortString::new(),
            connect_timeout_ms: 30_000,
            enabled: true,
            max_retries: 5,
        }
    }
}

impl WifiConfig {
    /// Set the SSID
    pub fn with_ssid(mut self, ssid: &str) -> Self {
        self.ssid = short_string(ssid);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = short_string(password);
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout_ms(mut self, ms: u32) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Enable or disable WiFi
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the maximum retry count
    pub fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Check if WiFi credentials are configured
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

// ============================================================================
// Device Config
// ============================================================================

/// Device identification configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Human-readable device name
    pub name: ShortString,
    /// mDNS hostname (device is reachable as `<hostname>.local`)
    pub hostname: ShortString,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: short_string("quadseg"),
            hostname: short_string("quadseg"),
        }
    }
}

impl DeviceConfig {
    /// Set the device name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }

    /// Set the mDNS hostname
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = short_string(hostname);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.display.clock_pin, 13);
        assert_eq!(config.display.latch_pin, 12);
        assert_eq!(config.display.data_pin, 14);
        assert_eq!(config.display.status_led_pin, 16);
    }

    #[test]
    fn display_blink_defaults_to_half_second_each_phase() {
        let display = DisplayConfig::default();
        assert_eq!(display.blink_on_ms, 500);
        assert_eq!(display.blink_off_ms, 500);
    }

    #[test]
    fn display_config_builder() {
        let display = DisplayConfig::default()
            .with_bus_pins(5, 6, 7)
            .with_status_led_pin(2)
            .with_blink(100, 400);

        assert_eq!(display.clock_pin, 5);
        assert_eq!(display.latch_pin, 6);
        assert_eq!(display.data_pin, 7);
        assert_eq!(display.status_led_pin, 2);
        assert_eq!(display.blink_on_ms, 100);
        assert_eq!(display.blink_off_ms, 400);
    }

    #[test]
    fn short_string_truncation() {
        let long_input = "a".repeat(100);
        let s = short_string(&long_input);
        assert!(s.len() <= MAX_SHORT_STRING);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::default()
            .with_web(WebConfig::default().with_port(3000))
            .with_display(DisplayConfig::default().with_blink(250, 250))
            .with_device(DeviceConfig::default().with_name("Hall Display"));

        assert_eq!(config.web.port, 3000);
        assert_eq!(config.display.blink_on_ms, 250);
        assert_eq!(config.device.name.as_str(), "Hall Display");
    }

    // =========================================================================
    // WifiConfig Tests
    // =========================================================================

    #[test]
    fn wifi_config_default() {
        let wifi = WifiConfig::default();
        assert!(wifi.ssid.is_empty());
        assert!(wifi.password.is_empty());
        assert_eq!(wifi.connect_timeout_ms, 30_000);
        assert!(wifi.enabled);
        assert_eq!(wifi.max_retries, 5);
    }

    #[test]
    fn wifi_config_is_configured() {
        let unconfigured = WifiConfig::default();
        assert!(!unconfigured.is_configured());

        let configured = WifiConfig::default().with_ssid("MyNetwork");
        assert!(configured.is_configured());

        let empty_ssid = WifiConfig::default().with_ssid("");
        assert!(!empty_ssid.is_configured());
    }

    #[test]
    fn wifi_config_builder() {
        let wifi = WifiConfig::default()
            .with_ssid("TestNetwork")
            .with_password("secret123")
            .with_connect_timeout_ms(15_000)
            .with_max_retries(3)
            .with_enabled(false);

        assert_eq!(wifi.ssid.as_str(), "TestNetwork");
        assert_eq!(wifi.password.as_str(), "secret123");
        assert_eq!(wifi.connect_timeout_ms, 15_000);
        assert_eq!(wifi.max_retries, 3);
        assert!(!wifi.enabled);
    }

    // =========================================================================
    // DeviceConfig Tests
    // =========================================================================

    #[test]
    fn device_config_default() {
        let device = DeviceConfig::default();
        assert_eq!(device.name.as_str(), "quadseg");
        assert_eq!(device.hostname.as_str(), "quadseg");
    }

    #[test]
    fn device_config_builder() {
        let device = DeviceConfig::default()
            .with_name("Lobby Counter")
            .with_hostname("lobby-counter");

        assert_eq!(device.name.as_str(), "Lobby Counter");
        assert_eq!(device.hostname.as_str(), "lobby-counter");
    }

    // =========================================================================
    // WebConfig Tests
    // =========================================================================

    #[test]
    fn web_config_builder() {
        let web = WebConfig::default()
            .with_port(3000)
            .with_cors(false)
            .with_enabled(false);

        assert_eq!(web.port, 3000);
        assert!(!web.cors_permissive);
        assert!(!web.enabled);
    }

    // =========================================================================
    // String Helper Tests
    // =========================================================================

    #[test]
    fn long_string_truncation() {
        let long_input = "b".repeat(200);
        let s = long_string(&long_input);
        assert!(s.len() <= MAX_LONG_STRING);
    }

    #[test]
    fn string_helpers_utf8_boundary() {
        // Multi-byte UTF-8 characters must not be split
        let input = "àéîõü".repeat(20);
        let s = short_string(&input);
        assert!(s.len() <= MAX_SHORT_STRING);
        assert!(core::str::from_utf8(s.as_bytes()).is_ok());
    }
}

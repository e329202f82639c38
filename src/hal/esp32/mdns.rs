//! mDNS responder so the display is reachable as `<hostname>.local`.

use crate::config::DeviceConfig;
use esp_idf_svc::mdns::EspMdns;

/// mDNS responder handle.
///
/// The responder runs as long as this struct is alive.
pub struct Esp32Mdns {
    _mdns: EspMdns,
}

impl Esp32Mdns {
    /// Start the responder advertising the configured hostname and the
    /// HTTP service.
    pub fn new(config: &DeviceConfig, http_port: u16) -> anyhow::Result<Self> {
        let mut mdns = EspMdns::take()?;
        mdns.set_hostname(config.hostname.as_str())?;
        mdns.set_instance_name(config.name.as_str())?;
        mdns.add_service(None, "_http", "_tcp", http_port, &[])?;

        println!("[mDNS] Responder started as '{}.local'", config.hostname);

        Ok(Self { _mdns: mdns })
    }
}

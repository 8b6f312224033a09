//! WiFi module for the ESP32-C3 telemetry board
//!
//! Handles station-mode association and DHCP using esp-wifi 0.14.1 with an
//! embassy-net stack. Bring-up happens once at startup; there is no
//! reconnection path if the association is lost later.

use crate::BoardError;
use embassy_net::Stack;
use embassy_time::{Duration, Instant, Timer};
use esp_println::println;
use esp_wifi::wifi::{AuthMethod, ClientConfiguration, Configuration, WifiController};

/// How often association and DHCP status are polled during bring-up
const BRING_UP_POLL_MS: u64 = 100;

/// WiFi manager owning the station controller and the network stack handle.
pub struct WiFiManager<'a> {
    controller: WifiController<'a>,
    stack: Stack<'a>,
}

impl<'a> WiFiManager<'a> {
    pub fn new(controller: WifiController<'a>, stack: Stack<'a>) -> Self {
        Self { controller, stack }
    }

    /// Associate with the configured network and wait for a DHCP lease,
    /// both under one bounded deadline.
    ///
    /// Configuration and start failures are `WifiInit`; not reaching an
    /// associated, addressed state within `timeout_ms` is `WifiAssociation`.
    pub async fn bring_up(
        &mut self,
        ssid: &str,
        password: &str,
        timeout_ms: u64,
    ) -> Result<(), BoardError> {
        println!("[WIFI] Connecting to WiFi network: {}", ssid);

        let client_config = ClientConfiguration {
            ssid: ssid.try_into().map_err(|_| BoardError::WifiInit)?,
            password: password.try_into().map_err(|_| BoardError::WifiInit)?,
            auth_method: AuthMethod::WPA2Personal,
            ..Default::default()
        };

        self.controller
            .set_configuration(&Configuration::Client(client_config))
            .map_err(|_| BoardError::WifiInit)?;
        self.controller.start().map_err(|_| BoardError::WifiInit)?;
        self.controller
            .connect()
            .map_err(|_| BoardError::WifiAssociation)?;

        let deadline = Instant::now() + Duration::from_millis(timeout_ms);

        while !self.controller.is_connected().unwrap_or(false) {
            if Instant::now() >= deadline {
                println!("[WIFI] Association timed out after {} ms", timeout_ms);
                return Err(BoardError::WifiAssociation);
            }
            Timer::after(Duration::from_millis(BRING_UP_POLL_MS)).await;
        }

        println!("[WIFI] Associated, waiting for DHCP lease...");

        // An association without an address is not usable; the DHCP wait
        // shares the association deadline.
        while self.stack.config_v4().is_none() {
            if Instant::now() >= deadline {
                println!("[WIFI] DHCP timed out after {} ms", timeout_ms);
                return Err(BoardError::WifiAssociation);
            }
            Timer::after(Duration::from_millis(BRING_UP_POLL_MS)).await;
        }

        Ok(())
    }

    /// Current DHCP-assigned IPv4 address, for diagnostic display.
    pub fn ip_address(&self) -> Option<[u8; 4]> {
        self.stack
            .config_v4()
            .map(|config| config.address.address().octets())
    }

    /// Network stack handle for socket creation.
    pub fn stack(&self) -> Stack<'a> {
        self.stack
    }
}

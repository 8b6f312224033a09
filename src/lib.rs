#![cfg_attr(not(test), no_std)]

//! ESP32-C3 Joystick Telemetry Transmitter Library
//!
//! This library provides modules for implementing a WiFi-enabled joystick
//! telemetry sender that samples analog axes and buttons at a fixed cadence
//! and streams the readings as UDP text datagrams to a fixed receiver.
//!
//! The decision logic (sampling snapshot, indicator rules, telemetry
//! grammar, address parsing) is hardware-free and host-testable; the
//! hardware-facing modules are gated behind the `embedded` feature.

pub mod endpoint;
pub mod indicator;
pub mod sample;
pub mod telemetry;

#[cfg(feature = "embedded")]
pub mod link;
#[cfg(feature = "embedded")]
pub mod wifi;

/// Project version information
pub const VERSION: &str = "0.1.0-dev";

/// Default configuration constants
pub mod config {
    /// Remote UDP port the telemetry receiver listens on
    pub const REMOTE_PORT: u16 = 8081;

    /// Local UDP port the sender binds to (any fixed free port works;
    /// the receiver never replies)
    pub const LOCAL_PORT: u16 = 47081;

    /// Sampling cadence between telemetry iterations in milliseconds
    pub const SAMPLE_INTERVAL_MS: u64 = 100;

    /// WiFi association + DHCP timeout in milliseconds
    pub const WIFI_CONNECT_TIMEOUT_MS: u64 = 20_000;

    /// WiFi configuration and remote receiver address
    /// Read from environment variables at compile time
    pub const WIFI_SSID: &str = env!("WIFI_SSID");
    pub const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");
    pub const REMOTE_ADDR: &str = env!("REMOTE_ADDR");

    /// GPIO assignments (ESP32-C3).
    /// Joystick axes must be ADC1-capable pins (GPIO0-GPIO4).
    pub const JOY_X_PIN: u8 = 2;
    pub const JOY_Y_PIN: u8 = 3;
    pub const JOY_SW_PIN: u8 = 5;
    pub const ZOOM_BTN_PIN: u8 = 6;
    pub const VOICE_BTN_PIN: u8 = 7;
    pub const LED_PRIMARY_PIN: u8 = 8;
    pub const LED_ERROR_PIN: u8 = 9;
    pub const LED_STATUS_PIN: u8 = 10;
}

/// Error types for the telemetry board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// WiFi stack could not be initialized or configured
    WifiInit,
    /// Association or DHCP did not complete within the timeout
    WifiAssociation,
    /// Remote address text is not a well-formed IPv4 address
    AddressParse,
    /// UDP socket could not be allocated or bound
    SocketAllocation,
    /// A datagram could not be handed to the transport
    Send,
}

impl BoardError {
    /// Fatal errors halt the device at startup; a send failure only costs
    /// the current iteration.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BoardError::Send)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardError;

    #[test]
    fn send_errors_are_non_fatal() {
        assert!(!BoardError::Send.is_fatal());
    }

    #[test]
    fn startup_errors_are_fatal() {
        for err in [
            BoardError::WifiInit,
            BoardError::WifiAssociation,
            BoardError::AddressParse,
            BoardError::SocketAllocation,
        ] {
            assert!(err.is_fatal(), "{:?} must halt startup", err);
        }
    }
}

//! Remote endpoint address parsing
//!
//! The receiver address arrives as text from the build-time configuration;
//! parsing it is the first thing that can go wrong at startup.

use core::net::Ipv4Addr;

use crate::BoardError;

/// Parse the configured remote address text into a structured IPv4 address.
pub fn parse_remote_addr(text: &str) -> Result<Ipv4Addr, BoardError> {
    text.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| BoardError::AddressParse)
}

#[cfg(test)]
mod tests {
    use super::parse_remote_addr;
    use crate::BoardError;
    use core::net::Ipv4Addr;

    #[test]
    fn parses_well_formed_address() {
        assert_eq!(
            parse_remote_addr("192.168.0.42"),
            Ok(Ipv4Addr::new(192, 168, 0, 42))
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            parse_remote_addr(" 10.0.0.1 "),
            Ok(Ipv4Addr::new(10, 0, 0, 1))
        );
    }

    #[test]
    fn rejects_malformed_address() {
        for text in ["", "Ip", "notebook.local", "256.1.1.1", "10.0.0", "10.0.0.1:8081"] {
            assert_eq!(
                parse_remote_addr(text),
                Err(BoardError::AddressParse),
                "{:?} must not parse",
                text
            );
        }
    }
}

//! Telemetry message encoding
//!
//! Renders one [`InputSample`] into the single-line ASCII wire format the
//! receiver parses. The grammar is a byte-for-byte contract:
//!
//! ```text
//! VRX=<x> VRY=<y> BTN=<Pressionado|Solto> ZOOM=<Ativo|Inativo> comandoVoz=<Ativo|Inativo>
//! ```
//!
//! No trailing newline, no escaping: the fields are decimal numbers or words
//! from a closed vocabulary.

use core::fmt::Write;

use crate::sample::InputSample;
use heapless::String;

/// Worst-case rendering: two axes at 10 unsigned digits each plus the fixed
/// literal text ("Pressionado"/"Inativo" arms) is 77 bytes.
pub const MAX_MESSAGE_LEN: usize = 96;

/// One encoded telemetry line, consumed by the transmitter within the same
/// iteration.
pub type TelemetryMessage = String<MAX_MESSAGE_LEN>;

/// Encode a snapshot into the wire format.
pub fn encode(sample: &InputSample) -> TelemetryMessage {
    let mut message = TelemetryMessage::new();

    // The buffer is sized for the worst case, so the write cannot fail;
    // running out of capacity here would be a sizing bug, not a runtime
    // condition.
    let _ = write!(
        message,
        "VRX={} VRY={} BTN={} ZOOM={} comandoVoz={}",
        sample.x,
        sample.y,
        if sample.joystick_pressed {
            "Pressionado"
        } else {
            "Solto"
        },
        if sample.zoom_pressed { "Ativo" } else { "Inativo" },
        if sample.voice_pressed { "Ativo" } else { "Inativo" },
    );

    message
}

#[cfg(test)]
mod tests {
    use super::{MAX_MESSAGE_LEN, encode};
    use crate::sample::InputSample;

    fn sample(x: u16, y: u16, joystick: bool, zoom: bool, voice: bool) -> InputSample {
        InputSample {
            x,
            y,
            joystick_pressed: joystick,
            zoom_pressed: zoom,
            voice_pressed: voice,
        }
    }

    #[test]
    fn encodes_lower_boundary() {
        let message = encode(&sample(0, 0, false, false, false));
        assert_eq!(
            message.as_str(),
            "VRX=0 VRY=0 BTN=Solto ZOOM=Inativo comandoVoz=Inativo"
        );
    }

    #[test]
    fn encodes_upper_boundary() {
        let message = encode(&sample(4095, 4095, true, true, true));
        assert_eq!(
            message.as_str(),
            "VRX=4095 VRY=4095 BTN=Pressionado ZOOM=Ativo comandoVoz=Ativo"
        );
    }

    #[test]
    fn encodes_mixed_buttons() {
        let message = encode(&sample(2048, 2048, false, true, true));
        assert_eq!(
            message.as_str(),
            "VRX=2048 VRY=2048 BTN=Solto ZOOM=Ativo comandoVoz=Ativo"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let message = encode(&sample(1, 2, true, false, true));
        assert!(!message.as_str().ends_with('\n'));
    }

    #[test]
    fn worst_case_fits_capacity() {
        // Longest literal arms with maximal axis widths.
        let message = encode(&sample(4095, 4095, true, false, false));
        assert!(message.len() <= MAX_MESSAGE_LEN);
        assert_eq!(
            message.as_str(),
            "VRX=4095 VRY=4095 BTN=Pressionado ZOOM=Inativo comandoVoz=Inativo"
        );
    }
}

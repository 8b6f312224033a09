//! Input sampling module
//!
//! Reads the joystick axes and the three buttons into an immutable
//! per-iteration snapshot. The active-low button inversion lives in
//! [`InputSample::from_raw`] so it can be verified on the host.

/// Snapshot of all physical inputs for one sampling iteration.
///
/// `x` and `y` are raw 12-bit ADC readings (0..=4095). The button flags are
/// logical (pressed = true), already inverted from the active-low pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSample {
    pub x: u16,
    pub y: u16,
    pub joystick_pressed: bool,
    pub zoom_pressed: bool,
    pub voice_pressed: bool,
}

impl InputSample {
    /// Build a snapshot from raw pin levels.
    ///
    /// All three buttons are wired active-low (pulled up, pressed shorts to
    /// ground), so a pressed flag is the negation of the raw level.
    pub fn from_raw(x: u16, y: u16, joystick_raw: bool, zoom_raw: bool, voice_raw: bool) -> Self {
        Self {
            x,
            y,
            joystick_pressed: !joystick_raw,
            zoom_pressed: !zoom_raw,
            voice_pressed: !voice_raw,
        }
    }
}

#[cfg(feature = "embedded")]
mod hardware {
    use super::InputSample;
    use esp_hal::Blocking;
    use esp_hal::analog::adc::{Adc, AdcPin};
    use esp_hal::gpio::Input;
    use esp_hal::peripherals::{ADC1, GPIO2, GPIO3};

    /// Owns the ADC and the button inputs; produces one [`InputSample`]
    /// per call. Purely a read: no retries, no debouncing.
    pub struct InputSampler<'d> {
        adc: Adc<'d, ADC1<'d>, Blocking>,
        x_pin: AdcPin<GPIO2<'d>, ADC1<'d>>,
        y_pin: AdcPin<GPIO3<'d>, ADC1<'d>>,
        joystick_btn: Input<'d>,
        zoom_btn: Input<'d>,
        voice_btn: Input<'d>,
    }

    impl<'d> InputSampler<'d> {
        pub fn new(
            adc: Adc<'d, ADC1<'d>, Blocking>,
            x_pin: AdcPin<GPIO2<'d>, ADC1<'d>>,
            y_pin: AdcPin<GPIO3<'d>, ADC1<'d>>,
            joystick_btn: Input<'d>,
            zoom_btn: Input<'d>,
            voice_btn: Input<'d>,
        ) -> Self {
            Self {
                adc,
                x_pin,
                y_pin,
                joystick_btn,
                zoom_btn,
                voice_btn,
            }
        }

        /// Read all inputs for one iteration.
        pub fn sample(&mut self) -> InputSample {
            // Oneshot reads report WouldBlock while the conversion runs;
            // spin until the value is ready.
            let x = loop {
                if let Ok(value) = self.adc.read_oneshot(&mut self.x_pin) {
                    break value;
                }
            };
            let y = loop {
                if let Ok(value) = self.adc.read_oneshot(&mut self.y_pin) {
                    break value;
                }
            };

            InputSample::from_raw(
                x,
                y,
                self.joystick_btn.is_high(),
                self.zoom_btn.is_high(),
                self.voice_btn.is_high(),
            )
        }
    }
}

#[cfg(feature = "embedded")]
pub use hardware::InputSampler;

#[cfg(test)]
mod tests {
    use super::InputSample;

    #[test]
    fn raw_low_reads_as_pressed() {
        // Active-low: a low pin level is a press, for all three buttons.
        let sample = InputSample::from_raw(0, 0, false, false, false);
        assert!(sample.joystick_pressed);
        assert!(sample.zoom_pressed);
        assert!(sample.voice_pressed);
    }

    #[test]
    fn raw_high_reads_as_released() {
        let sample = InputSample::from_raw(0, 0, true, true, true);
        assert!(!sample.joystick_pressed);
        assert!(!sample.zoom_pressed);
        assert!(!sample.voice_pressed);
    }

    #[test]
    fn inversion_is_per_channel() {
        let sample = InputSample::from_raw(100, 200, true, false, true);
        assert!(!sample.joystick_pressed);
        assert!(sample.zoom_pressed);
        assert!(!sample.voice_pressed);
    }

    #[test]
    fn axes_pass_through_unchanged() {
        let sample = InputSample::from_raw(4095, 0, true, true, true);
        assert_eq!(sample.x, 4095);
        assert_eq!(sample.y, 0);
    }
}

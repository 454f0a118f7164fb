//! Parallel write bus
//!
//! An 8080-style write-only interface: a bank of data lines, a
//! data/command selector, a write strobe, chip select and reset. Each
//! word is latched by pulsing the strobe low then high. Nothing ever comes
//! back from the panel, so no operation here can fail.

use strobe_hal::{OutputPin, PinState};

use crate::color::Rgb565;

/// Word-level access to the panel bus
///
/// Implementations must latch exactly one word per `write_word` call.
pub trait BusChannel {
    /// Put `value` on the data lines with the selector set and strobe it
    fn write_word(&mut self, value: u16, is_data: bool);

    /// Assert (`true`) or release (`false`) chip select
    fn set_chip_select(&mut self, selected: bool);

    /// Drive the reset line
    fn set_reset(&mut self, state: PinState);

    /// Send a command word
    fn write_command(&mut self, command: u8) {
        self.write_word(command as u16, false);
    }

    /// Send a data word
    fn write_data(&mut self, byte: u8) {
        self.write_word(byte as u16, true);
    }

    /// Send a 16-bit parameter, high byte first
    fn write_data_u16(&mut self, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.write_data(hi);
        self.write_data(lo);
    }

    /// Stream one pixel colour, high byte first
    fn write_color(&mut self, color: Rgb565) {
        self.write_data_u16(color.raw());
    }
}

/// Bit-banged bus over `N` data lines
///
/// Bit `i` of every word goes to `data[i]`. Chip select and the write
/// strobe are active low.
pub struct ParallelBus<P, const N: usize> {
    data: [P; N],
    dc: P,
    wr: P,
    cs: P,
    reset: P,
}

impl<P: OutputPin, const N: usize> ParallelBus<P, N> {
    /// Create a new bus; leaves strobe and chip select idle (high)
    ///
    /// # Arguments
    /// - `data`: data lines, least significant bit first
    /// - `dc`: data/command selector (high = data)
    /// - `wr`: write strobe
    /// - `cs`: chip select
    /// - `reset`: panel reset
    pub fn new(data: [P; N], dc: P, mut wr: P, mut cs: P, reset: P) -> Self {
        wr.set_high();
        cs.set_high();
        Self {
            data,
            dc,
            wr,
            cs,
            reset,
        }
    }

    /// Number of data lines
    pub const fn width(&self) -> usize {
        N
    }

    /// Get access to the data lines
    pub fn data_pins(&self) -> &[P; N] {
        &self.data
    }

    /// Give the pins back
    pub fn release(self) -> ([P; N], P, P, P, P) {
        (self.data, self.dc, self.wr, self.cs, self.reset)
    }
}

impl<P: OutputPin, const N: usize> BusChannel for ParallelBus<P, N> {
    fn write_word(&mut self, value: u16, is_data: bool) {
        self.dc.set_state(PinState::from(is_data));
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(PinState::of_bit(value as u32, bit as u32));
        }
        self.wr.set_low();
        self.wr.set_high();
    }

    fn set_chip_select(&mut self, selected: bool) {
        if selected {
            self.cs.set_low();
        } else {
            self.cs.set_high();
        }
    }

    fn set_reset(&mut self, state: PinState) {
        self.reset.set_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Mock GPIO pin that keeps its level history
    struct MockPin {
        high: bool,
        history: Vec<bool>,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                history: Vec::new(),
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.history.push(true);
        }

        fn set_low(&mut self) {
            self.high = false;
            self.history.push(false);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn bus() -> ParallelBus<MockPin, 9> {
        ParallelBus::new(
            core::array::from_fn(|_| MockPin::new()),
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
        )
    }

    #[test]
    fn test_new_bus_is_idle() {
        let bus = bus();
        let (_, _, wr, cs, _) = bus.release();
        assert!(wr.is_set_high());
        assert!(cs.is_set_high());
    }

    #[test]
    fn test_word_bits_on_lines() {
        let mut bus = bus();
        bus.write_word(0x1A5, true);

        let expected = [true, false, true, false, false, true, false, true, true];
        for (pin, level) in bus.data_pins().iter().zip(expected) {
            assert_eq!(pin.is_set_high(), level);
        }

        let (_, dc, _, _, _) = bus.release();
        assert!(dc.is_set_high());
    }

    #[test]
    fn test_strobe_pulses_low_then_high() {
        let mut bus = bus();
        bus.write_command(0x2C);
        bus.write_data(0x55);

        let (_, dc, wr, _, _) = bus.release();
        // Idle high from `new`, then one low/high pulse per word
        assert_eq!(wr.history, [true, false, true, false, true]);
        assert_eq!(dc.history, [false, true]);
    }

    #[test]
    fn test_color_high_byte_first() {
        let mut bus = bus();
        bus.write_color(Rgb565::new(0xF81F));

        let lines: Vec<Vec<bool>> = bus
            .data_pins()
            .iter()
            .map(|pin| pin.history.clone())
            .collect();
        // First word 0xF8, second word 0x1F
        let first: u16 = lines
            .iter()
            .enumerate()
            .map(|(bit, h)| (h[0] as u16) << bit)
            .sum();
        let second: u16 = lines
            .iter()
            .enumerate()
            .map(|(bit, h)| (h[1] as u16) << bit)
            .sum();
        assert_eq!(first, 0xF8);
        assert_eq!(second, 0x1F);
    }

    #[test]
    fn test_chip_select_active_low() {
        let mut bus = bus();
        bus.set_chip_select(true);
        bus.set_chip_select(false);
        bus.set_reset(PinState::Low);

        let (_, _, _, cs, reset) = bus.release();
        assert_eq!(cs.history, [true, false, true]);
        assert_eq!(reset.history, [false]);
    }
}

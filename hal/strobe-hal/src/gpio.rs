//! GPIO pin abstractions
//!
//! Provides the digital output trait that chip-specific HALs implement.

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        if high {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl PinState {
    /// Level of bit `bit` in `value` (bits past the word width read low)
    pub const fn of_bit(value: u32, bit: u32) -> Self {
        let shifted = match value.checked_shr(bit) {
            Some(v) => v,
            None => 0,
        };
        if shifted & 1 != 0 {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, state: PinState) {
        match state {
            PinState::High => self.set_high(),
            PinState::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

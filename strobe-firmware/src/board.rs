//! Board wiring for the RP2040 reference board
//!
//! | Signal      | GPIO   |
//! |-------------|--------|
//! | D0..D8      | 0..8   |
//! | DC          | 9      |
//! | WR          | 10     |
//! | CS          | 11     |
//! | RESET       | 12     |
//! | Backlight   | 13     |
//! | Buttons     | 16..21 |

use embassy_rp::gpio::{Level, Output, Pin as GpioPin};
use embassy_rp::Peri;
use strobe_display::{Display, FontBlob, ParallelBus};

/// Number of panel data lines
pub const DATA_LINES: usize = 9;

/// Push-pull output usable as a panel bus line
pub struct Pin<'d>(Output<'d>);

impl<'d> Pin<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, impl GpioPin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl strobe_hal::OutputPin for Pin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

pub type PanelBus = ParallelBus<Pin<'static>, DATA_LINES>;

/// The panel driver as wired on this board
pub type Panel = Display<PanelBus, FontBlob<'static>>;

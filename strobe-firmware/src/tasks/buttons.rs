//! Front-panel button task
//!
//! Buttons are active low with pull-ups. An event is reported when the
//! button is released, once per press.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use strobe_ui::Button;

use crate::channels::BUTTON_CHANNEL;

/// Contact bounce settle time
const DEBOUNCE_MS: u64 = 20;

/// One task per button
#[embassy_executor::task(pool_size = 6)]
pub async fn button_task(mut input: Input<'static>, button: Button) {
    info!("Button task started: {}", button.name());

    loop {
        input.wait_for_low().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        if input.is_high() {
            // Bounce, not a press
            continue;
        }

        input.wait_for_high().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        trace!("Button released: {}", button.name());
        BUTTON_CHANNEL.send(button).await;
    }
}

//! Inter-task communication channels
//!
//! The display task is the only context that touches the panel; everything
//! else reaches it through these channels.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use strobe_ui::Button;

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Button releases from the button tasks
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, Button, BUTTON_CHANNEL_SIZE> =
    Channel::new();

//! Embassy async tasks
//!
//! Tasks never touch the panel; they report to the display loop in
//! `main` through channels.

pub mod buttons;

pub use buttons::button_task;

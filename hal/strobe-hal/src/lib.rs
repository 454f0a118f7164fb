//! Strobe Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits the panel driver is written
//! against. Board crates implement them for their GPIO types, which keeps
//! the bus protocol and rendering engine testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  strobe-firmware (board wiring)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strobe-display (bus + rendering)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strobe-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//!
//! Pin writes are infallible: the panel bus is open-loop and a bit-banged
//! line has no way to report a failed write.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{OutputPin, PinState};

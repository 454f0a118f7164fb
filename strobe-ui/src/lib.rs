//! User-facing layer on top of the panel driver
//!
//! Everything here draws through [`strobe_display::Canvas`] and only ever
//! calls the widget entry points (`draw`, `erase`, `update`):
//!
//! - Runtime configuration (panel geometry, menu layout and colours)
//! - Tagged menu model and navigation with diff-based selection updates
//! - Settings store interface
//! - Link status icon
//! - Button events

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod config;
pub mod menu;
pub mod settings;
pub mod status;

pub use button::Button;
pub use config::{parse_config, AppConfig, PanelConfig, ParseError, UiConfig};
pub use menu::{ActionId, Menu, MenuError, MenuEvent, MenuItem, MenuLayout};
pub use settings::{MemorySettings, SettingKey, SettingsError, SettingsStore};
pub use status::{LinkStatus, StatusIcon};

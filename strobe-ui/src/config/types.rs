//! Configuration type definitions

use strobe_display::{Geometry, InitTiming, Rotation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppConfig {
    pub panel: PanelConfig,
    pub ui: UiConfig,
}

/// Panel wiring and power-up timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Logical width in pixels
    pub width: u16,
    /// Logical height in pixels
    pub height: u16,
    /// Mounting orientation
    pub rotation: Rotation,
    /// Reset pulse low and high time (ms)
    pub reset_hold_ms: u32,
    /// Delay after software reset (ms)
    pub swreset_delay_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            rotation: Rotation::SwapFlip,
            reset_hold_ms: 100,
            swreset_delay_ms: 200,
        }
    }
}

impl PanelConfig {
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.width, self.height, self.rotation)
    }

    pub fn init_timing(&self) -> InitTiming {
        InitTiming {
            reset_hold_ms: self.reset_hold_ms,
            swreset_delay_ms: self.swreset_delay_ms,
        }
    }
}

/// Menu layout and colours (RGB565)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Left edge of menu rows
    pub origin_x: u16,
    /// Top of the first menu row
    pub origin_y: u16,
    /// Vertical distance between rows
    pub row_spacing: u16,
    /// Plain and value rows
    pub foreground: u16,
    pub background: u16,
    /// Rows that trigger an action
    pub action_color: u16,
    /// Rows that open a submenu
    pub submenu_color: u16,
    /// First character of the selected row
    pub selection_marker: char,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            origin_x: 10,
            origin_y: 10,
            row_spacing: 20,
            foreground: 0xFFFF,
            background: 0x0000,
            action_color: 0x07E0,
            submenu_color: 0x001F,
            selection_marker: '>',
        }
    }
}

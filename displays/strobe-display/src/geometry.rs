//! Panel geometry and the logical-to-physical coordinate transform

use crate::error::DisplayError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the panel is mounted relative to the controller's native axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rotation {
    /// 180° rotation with axis swap: `(x, y) -> (H-1-y, W-1-x)`
    #[default]
    SwapFlip,
    /// Native orientation: `(x, y) -> (x, y)`
    Identity,
}

/// Immutable panel geometry
///
/// `width` and `height` are logical (what widgets address). The physical
/// extents the controller sees depend on the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    width: u16,
    height: u16,
    rotation: Rotation,
}

impl Geometry {
    /// Create a new panel geometry
    pub const fn new(width: u16, height: u16, rotation: Rotation) -> Self {
        Self {
            width,
            height,
            rotation,
        }
    }

    /// Logical width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Logical height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Mounting rotation
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Number of pixels on the panel
    pub const fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Physical (columns, rows) as addressed by the controller
    pub const fn physical_size(&self) -> (u16, u16) {
        match self.rotation {
            Rotation::SwapFlip => (self.height, self.width),
            Rotation::Identity => (self.width, self.height),
        }
    }

    /// Check that a logical point lies inside `[0,W)×[0,H)`
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Raw transform, no bounds checking
    ///
    /// For `SwapFlip` this is not an involution: applying it twice only
    /// returns the original point when `W == H`.
    pub const fn transform(&self, x: i32, y: i32) -> (i32, i32) {
        match self.rotation {
            Rotation::SwapFlip => (self.height as i32 - 1 - y, self.width as i32 - 1 - x),
            Rotation::Identity => (x, y),
        }
    }

    /// Map a logical point to physical controller coordinates
    ///
    /// This is the only place logical coordinates become physical ones.
    pub fn to_physical(&self, x: u16, y: u16) -> Result<(u16, u16), DisplayError> {
        if !self.contains(x, y) {
            return Err(DisplayError::InvalidCoordinates);
        }
        let (px, py) = self.transform(x as i32, y as i32);
        Ok((px as u16, py as u16))
    }

    /// Window covering the whole panel
    pub const fn full_window(&self) -> Window {
        let (cols, rows) = self.physical_size();
        Window {
            x0: 0,
            y0: 0,
            x1: cols.saturating_sub(1),
            y1: rows.saturating_sub(1),
        }
    }

    /// Check that a physical window is ordered and inside the panel
    pub fn check_window(&self, window: &Window) -> Result<(), DisplayError> {
        let (cols, rows) = self.physical_size();
        if window.x0 > window.x1 || window.y0 > window.y1 || window.x1 >= cols || window.y1 >= rows
        {
            return Err(DisplayError::InvalidCoordinates);
        }
        Ok(())
    }
}

/// Controller-side write window, in physical coordinates (inclusive)
///
/// The controller keeps the last window until the next address command
/// and fills it row-major from the colour stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Create a window from inclusive corners
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// 1×1 window around a single physical pixel
    pub const fn single(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Number of pixels the window holds
    pub const fn pixel_count(&self) -> u32 {
        (self.x1 as u32 - self.x0 as u32 + 1) * (self.y1 as u32 - self.y0 as u32 + 1)
    }
}

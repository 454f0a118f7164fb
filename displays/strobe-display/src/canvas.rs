//! Drawing surface seen by widgets
//!
//! Widgets only ever talk to a [`Canvas`]; the panel driver is one
//! implementation. Keeping the seam here lets widget logic run against a
//! recording canvas in tests.

use crate::color::Rgb565;
use crate::error::DisplayError;
use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// What happens to the unset bits of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackgroundMode {
    /// Unset bits are painted with the background colour
    #[default]
    Opaque,
    /// Unset bits are skipped; earlier content shows through
    Transparent,
}

/// Colours and background handling for one glyph render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub fg: Rgb565,
    pub bg: Rgb565,
    pub mode: BackgroundMode,
}

impl TextStyle {
    /// Opaque style
    pub const fn new(fg: Rgb565, bg: Rgb565) -> Self {
        Self {
            fg,
            bg,
            mode: BackgroundMode::Opaque,
        }
    }

    /// Same style with a different background mode
    pub const fn with_mode(self, mode: BackgroundMode) -> Self {
        Self { mode, ..self }
    }

    /// Background-on-background variant used to erase a cell
    pub const fn erased(&self) -> Self {
        Self {
            fg: self.bg,
            bg: self.bg,
            mode: self.mode,
        }
    }
}

/// Logical drawing surface
pub trait Canvas {
    /// Logical (width, height)
    fn size(&self) -> (u16, u16);

    /// Plot one pixel
    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError>;

    /// Render one character cell with its top-left corner at (`x`, `y`)
    fn draw_char(&mut self, x: u16, y: u16, ch: char, style: &TextStyle)
        -> Result<(), DisplayError>;

    /// Character cell (width, height)
    fn cell_size(&self) -> (u16, u16) {
        (GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    /// Check that a `width`×`height` rectangle at (`x`, `y`) fits the surface
    fn check_area(&self, x: u16, y: u16, width: u32, height: u32) -> Result<(), DisplayError> {
        let (w, h) = self.size();
        if x as u32 + width > w as u32 || y as u32 + height > h as u32 {
            return Err(DisplayError::InvalidCoordinates);
        }
        Ok(())
    }
}

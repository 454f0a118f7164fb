//! Panel driver
//!
//! Stateless transaction executor: every primitive frames itself with chip
//! select, programs a write window, and streams colours into it. The only
//! state kept is the bus, the fixed geometry, the glyph source and a
//! diagnostic counter.

use embedded_hal::delay::DelayNs;
use strobe_hal::PinState;

use crate::bus::BusChannel;
use crate::canvas::{BackgroundMode, Canvas, TextStyle};
use crate::color::Rgb565;
use crate::command;
use crate::error::DisplayError;
use crate::font::{Glyph, GlyphSource, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::geometry::{Geometry, Window};
use crate::line::{Bresenham, Point};

/// Power-up delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitTiming {
    /// Time the reset line is held low, then high, before commands
    pub reset_hold_ms: u32,
    /// Settle time after the software reset command
    pub swreset_delay_ms: u32,
}

impl Default for InitTiming {
    fn default() -> Self {
        Self {
            reset_hold_ms: 100,
            swreset_delay_ms: 200,
        }
    }
}

/// Parallel-bus panel driver
pub struct Display<B, F> {
    bus: B,
    geometry: Geometry,
    font: F,
    missing_glyphs: u32,
}

impl<B: BusChannel, F: GlyphSource> Display<B, F> {
    /// Create a new driver; the panel is not touched until [`Self::init`]
    pub fn new(bus: B, geometry: Geometry, font: F) -> Self {
        Self {
            bus,
            geometry,
            font,
            missing_glyphs: 0,
        }
    }

    /// Hardware reset followed by the power-up command sequence
    pub fn init<D: DelayNs>(&mut self, delay: &mut D, timing: InitTiming) {
        self.bus.set_reset(PinState::Low);
        delay.delay_ms(timing.reset_hold_ms);
        self.bus.set_reset(PinState::High);
        delay.delay_ms(timing.reset_hold_ms);

        self.bus.set_chip_select(true);
        for (word, is_data) in command::INIT_SEQUENCE {
            self.bus.write_word(word as u16, is_data);
            if word == command::SOFT_RESET && !is_data {
                delay.delay_ms(timing.swreset_delay_ms);
            }
        }
        self.bus.set_chip_select(false);
    }

    /// Panel geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Number of glyph lookups that fell back to a blank cell
    pub fn missing_glyphs(&self) -> u32 {
        self.missing_glyphs
    }

    /// Give the bus and glyph source back
    pub fn release(self) -> (B, F) {
        (self.bus, self.font)
    }

    /// Program the controller's write window and arm memory write
    ///
    /// Costs 11 bus words regardless of the window size. The caller owns
    /// chip select.
    fn set_window(&mut self, window: Window) -> Result<(), DisplayError> {
        self.geometry.check_window(&window)?;

        self.bus.write_command(command::COLUMN_ADDRESS_SET);
        self.bus.write_data_u16(window.x0);
        self.bus.write_data_u16(window.x1);
        self.bus.write_command(command::ROW_ADDRESS_SET);
        self.bus.write_data_u16(window.y0);
        self.bus.write_data_u16(window.y1);
        self.bus.write_command(command::MEMORY_WRITE);
        Ok(())
    }

    /// Draw one pixel
    ///
    /// Every call programs its own 1×1 window, so N pixels cost N window
    /// programs. Use [`Self::fill`] for large areas.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        let (px, py) = self.geometry.to_physical(x, y)?;

        self.bus.set_chip_select(true);
        let result = self.set_window(Window::single(px, py));
        if result.is_ok() {
            self.bus.write_color(color);
        }
        self.bus.set_chip_select(false);
        result
    }

    /// Draw a line from `start` to `end` with `thickness` pixels per step
    ///
    /// Thickness extends along +x at every step regardless of the line's
    /// direction. The whole footprint is bounds-checked before any pixel is
    /// sent; a thickness of zero draws nothing.
    pub fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: Rgb565,
        thickness: u16,
    ) -> Result<(), DisplayError> {
        if thickness == 0 {
            return Ok(());
        }

        let min_x = i64::from(start.x.min(end.x));
        let max_x = i64::from(start.x.max(end.x)) + i64::from(thickness) - 1;
        let min_y = i64::from(start.y.min(end.y));
        let max_y = i64::from(start.y.max(end.y));
        if min_x < 0
            || min_y < 0
            || max_x >= i64::from(self.geometry.width())
            || max_y >= i64::from(self.geometry.height())
        {
            return Err(DisplayError::InvalidCoordinates);
        }

        for point in Bresenham::new(start, end) {
            for offset in 0..thickness {
                self.draw_pixel(point.x as u16 + offset, point.y as u16, color)?;
            }
        }
        Ok(())
    }

    /// Expand a glyph into pixels with its top-left corner at (`x`, `y`)
    ///
    /// Set bits get `style.fg`; unset bits get `style.bg` in opaque mode and
    /// are skipped in transparent mode.
    pub fn render_glyph(
        &mut self,
        x: u16,
        y: u16,
        glyph: &Glyph,
        style: &TextStyle,
    ) -> Result<(), DisplayError> {
        self.check_area(x, y, GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32)?;

        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                let color = if glyph.is_set(col, row) {
                    style.fg
                } else if style.mode == BackgroundMode::Opaque {
                    style.bg
                } else {
                    continue;
                };
                self.draw_pixel(x + col, y + row, color)?;
            }
        }
        Ok(())
    }

    /// Look up and render one character
    ///
    /// A character the font cannot supply renders as a blank cell and is
    /// counted in [`Self::missing_glyphs`].
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        style: &TextStyle,
    ) -> Result<(), DisplayError> {
        let glyph = match self.font.get_glyph(ch as u32) {
            Ok(glyph) => glyph,
            Err(_) => {
                self.missing_glyphs = self.missing_glyphs.saturating_add(1);
                Glyph::BLANK
            }
        };
        self.render_glyph(x, y, &glyph, style)
    }

    /// Start a whole-panel fill that can be streamed in chunks
    ///
    /// The window is programmed once here. The returned job borrows the
    /// driver, so nothing else can reprogram the window until it is done
    /// or dropped.
    pub fn begin_fill(&mut self, color: Rgb565) -> Result<FillJob<'_, B, F>, DisplayError> {
        let window = self.geometry.full_window();
        let remaining = window.pixel_count();

        self.bus.set_chip_select(true);
        if let Err(e) = self.set_window(window) {
            self.bus.set_chip_select(false);
            return Err(e);
        }

        Ok(FillJob {
            display: self,
            color,
            remaining,
        })
    }

    /// Fill the whole panel: one window, then W×H colour words
    ///
    /// Runs to completion. Ignores widget state: every widget on screen is
    /// effectively hidden afterwards.
    pub fn fill(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        let mut job = self.begin_fill(color)?;
        job.step(u32::MAX);
        Ok(())
    }
}

impl<B: BusChannel, F: GlyphSource> Canvas for Display<B, F> {
    fn size(&self) -> (u16, u16) {
        (self.geometry.width(), self.geometry.height())
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        Display::draw_pixel(self, x, y, color)
    }

    fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        style: &TextStyle,
    ) -> Result<(), DisplayError> {
        Display::draw_char(self, x, y, ch, style)
    }
}

/// In-progress whole-panel fill
///
/// Chip select stays asserted for the lifetime of the job and is released
/// on drop.
pub struct FillJob<'d, B: BusChannel, F> {
    display: &'d mut Display<B, F>,
    color: Rgb565,
    remaining: u32,
}

impl<B: BusChannel, F> FillJob<'_, B, F> {
    /// Stream up to `max_pixels` more pixels; returns true once complete
    pub fn step(&mut self, max_pixels: u32) -> bool {
        let count = self.remaining.min(max_pixels);
        for _ in 0..count {
            self.display.bus.write_color(self.color);
        }
        self.remaining -= count;
        self.is_done()
    }

    /// Pixels still to be streamed
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Check whether every pixel has been streamed
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

impl<B: BusChannel, F> Drop for FillJob<'_, B, F> {
    fn drop(&mut self) {
        self.display.bus.set_chip_select(false);
    }
}

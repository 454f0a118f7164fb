//! Recording doubles for host tests
//!
//! Built for this crate's tests and, with the `test-utils` feature, for
//! crates that render through [`Canvas`].

use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use strobe_hal::PinState;

use crate::bus::BusChannel;
use crate::canvas::{Canvas, TextStyle};
use crate::color::Rgb565;
use crate::command;
use crate::error::DisplayError;
use crate::geometry::{Geometry, Rotation, Window};

/// One latched bus word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Command(u16),
    Data(u16),
}

/// Bus that records every word and control-line change
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub words: Vec<Word>,
    pub resets: Vec<PinState>,
    pub selected: bool,
    pub selects: u32,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn data_after(&self, index: usize, count: usize) -> Option<Vec<u16>> {
        let mut out = Vec::with_capacity(count);
        for word in self.words.get(index + 1..index + 1 + count)? {
            match word {
                Word::Data(value) => out.push(*value),
                Word::Command(_) => return None,
            }
        }
        Some(out)
    }

    /// Every window programmed, in order
    pub fn windows(&self) -> Vec<Window> {
        let mut windows = Vec::new();
        for (i, word) in self.words.iter().enumerate() {
            if *word != Word::Command(command::COLUMN_ADDRESS_SET as u16) {
                continue;
            }
            let cols = self.data_after(i, 4).expect("column bounds");
            let rows = self.data_after(i + 5, 4).expect("row bounds");
            assert_eq!(self.words[i + 5], Word::Command(command::ROW_ADDRESS_SET as u16));
            windows.push(Window::new(
                cols[0] << 8 | cols[1],
                rows[0] << 8 | rows[1],
                cols[2] << 8 | cols[3],
                rows[2] << 8 | rows[3],
            ));
        }
        windows
    }

    /// Number of data words sent after a memory-write command
    pub fn pixel_words(&self) -> usize {
        let mut streaming = false;
        let mut count = 0;
        for word in &self.words {
            match word {
                Word::Command(c) => streaming = *c == command::MEMORY_WRITE as u16,
                Word::Data(_) if streaming => count += 1,
                Word::Data(_) => {}
            }
        }
        count
    }

    /// Decode the colour stream back into logical (x, y, colour) triples
    pub fn logical_pixels(&self, geometry: &Geometry) -> Vec<(u16, u16, Rgb565)> {
        let (cols, rows) = geometry.physical_size();
        let windows = self.windows();
        let mut window_index = 0;
        let mut pixels = Vec::new();

        let mut i = 0;
        while i < self.words.len() {
            if self.words[i] != Word::Command(command::MEMORY_WRITE as u16) {
                i += 1;
                continue;
            }
            let window = windows[window_index];
            window_index += 1;
            let width = (window.x1 - window.x0 + 1) as usize;

            let mut k = 0;
            i += 1;
            while let (Some(Word::Data(hi)), Some(Word::Data(lo))) =
                (self.words.get(i), self.words.get(i + 1))
            {
                let px = window.x0 + (k % width) as u16;
                let py = window.y0 + (k / width) as u16;
                let (x, y) = match geometry.rotation() {
                    Rotation::SwapFlip => (rows - 1 - py, cols - 1 - px),
                    Rotation::Identity => (px, py),
                };
                pixels.push((x, y, Rgb565::new(hi << 8 | lo)));
                k += 1;
                i += 2;
            }
        }
        pixels
    }
}

impl BusChannel for RecordingBus {
    fn write_word(&mut self, value: u16, is_data: bool) {
        assert!(self.selected, "word written without chip select");
        self.words.push(if is_data {
            Word::Data(value)
        } else {
            Word::Command(value)
        });
    }

    fn set_chip_select(&mut self, selected: bool) {
        if selected && !self.selected {
            self.selects += 1;
        }
        self.selected = selected;
    }

    fn set_reset(&mut self, state: PinState) {
        self.resets.push(state);
    }
}

/// Delay that records requested milliseconds
#[derive(Debug, Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Canvas-level operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Pixel(u16, u16, Rgb565),
    Char(u16, u16, char, TextStyle),
}

/// Canvas that records operations instead of driving a bus
#[derive(Debug)]
pub struct RecordingCanvas {
    pub width: u16,
    pub height: u16,
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Forget recorded operations
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Character operations only
    pub fn chars(&self) -> Vec<(u16, u16, char, TextStyle)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Char(x, y, ch, style) => Some((x, y, ch, style)),
                Op::Pixel(..) => None,
            })
            .collect()
    }

    /// Pixel operations only
    pub fn pixels(&self) -> Vec<(u16, u16, Rgb565)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Pixel(x, y, color) => Some((x, y, color)),
                Op::Char(..) => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        if x >= self.width || y >= self.height {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.ops.push(Op::Pixel(x, y, color));
        Ok(())
    }

    fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        style: &TextStyle,
    ) -> Result<(), DisplayError> {
        self.check_area(x, y, 8, 8)?;
        self.ops.push(Op::Char(x, y, ch, *style));
        Ok(())
    }
}

/// 128-glyph font where every row of glyph `c` is the byte `c`
pub const fn test_font() -> [u8; 1024] {
    let mut data = [0u8; 1024];
    let mut i = 0;
    while i < data.len() {
        data[i] = (i / 8) as u8;
        i += 1;
    }
    data
}

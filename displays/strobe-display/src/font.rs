//! Glyph lookup
//!
//! Fonts are fixed-stride 1-bit bitmaps: glyph `c` occupies bytes
//! `[c * H, c * H + H)` of the resource, one byte per row, bit 7 being the
//! leftmost column.

use embedded_io::{Read, Seek, SeekFrom};

use crate::error::DisplayError;

/// Glyph cell width in pixels
pub const GLYPH_WIDTH: u16 = 8;

/// Glyph cell height in pixels (also the record stride in bytes)
pub const GLYPH_HEIGHT: u16 = 8;

const STRIDE: usize = GLYPH_HEIGHT as usize;

/// One 8×8 glyph, row-major, MSB = leftmost column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; STRIDE],
}

impl Glyph {
    /// Glyph with no pixels set
    pub const BLANK: Self = Self { rows: [0; STRIDE] };

    /// Build a glyph from its row bytes
    pub const fn from_rows(rows: [u8; STRIDE]) -> Self {
        Self { rows }
    }

    /// Row bytes
    pub const fn rows(&self) -> &[u8; STRIDE] {
        &self.rows
    }

    /// Check whether the pixel at (`col`, `row`) is set
    pub const fn is_set(&self, col: u16, row: u16) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.rows[row as usize] & (0x80 >> col) != 0
    }

    /// Number of set pixels
    pub fn set_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }
}

/// Source of glyph bitmaps, held once by the renderer
pub trait GlyphSource {
    /// Fetch the glyph for a character code
    ///
    /// Returns [`DisplayError::MissingGlyph`] when the resource has no
    /// complete record at the code's offset.
    fn get_glyph(&mut self, code: u32) -> Result<Glyph, DisplayError>;
}

/// Byte range of a character's record, if it fits the address space
fn record_range(code: u32) -> Option<core::ops::Range<usize>> {
    let start = (code as usize).checked_mul(STRIDE)?;
    let end = start.checked_add(STRIDE)?;
    Some(start..end)
}

/// Font preloaded in memory (e.g. `include_bytes!`)
#[derive(Debug, Clone, Copy)]
pub struct FontBlob<'a> {
    data: &'a [u8],
}

impl<'a> FontBlob<'a> {
    /// Wrap a fixed-stride font resource
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of complete glyph records
    pub const fn glyph_count(&self) -> usize {
        self.data.len() / STRIDE
    }
}

impl GlyphSource for FontBlob<'_> {
    fn get_glyph(&mut self, code: u32) -> Result<Glyph, DisplayError> {
        let range = record_range(code).ok_or(DisplayError::MissingGlyph)?;
        let record = self.data.get(range).ok_or(DisplayError::MissingGlyph)?;

        let mut rows = [0u8; STRIDE];
        rows.copy_from_slice(record);
        Ok(Glyph::from_rows(rows))
    }
}

/// Font read through a single long-lived handle
///
/// The handle is opened once by the caller and kept; each lookup seeks to
/// the record and reads it.
pub struct SeekFont<R> {
    handle: R,
}

impl<R: Read + Seek> SeekFont<R> {
    /// Wrap an open font handle
    pub fn new(handle: R) -> Self {
        Self { handle }
    }

    /// Give the handle back
    pub fn into_inner(self) -> R {
        self.handle
    }
}

impl<R: Read + Seek> GlyphSource for SeekFont<R> {
    fn get_glyph(&mut self, code: u32) -> Result<Glyph, DisplayError> {
        let range = record_range(code).ok_or(DisplayError::MissingGlyph)?;
        self.handle
            .seek(SeekFrom::Start(range.start as u64))
            .map_err(|_| DisplayError::MissingGlyph)?;

        let mut rows = [0u8; STRIDE];
        self.handle
            .read_exact(&mut rows)
            .map_err(|_| DisplayError::MissingGlyph)?;
        Ok(Glyph::from_rows(rows))
    }
}

//! Two-colour bitmap picture

use crate::canvas::Canvas;
use crate::color::Rgb565;
use crate::error::DisplayError;

use super::Visibility;

/// Row-major grid of 0/1 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u16,
    height: u16,
    cells: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wrap `cells`, which must hold exactly `width * height` entries
    pub fn new(width: u16, height: u16, cells: &'a [u8]) -> Result<Self, DisplayError> {
        if cells.len() != width as usize * height as usize {
            return Err(DisplayError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Check if the cell at (`col`, `row`) is set; out of range reads as unset
    pub fn get(&self, col: u16, row: u16) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let index = row as usize * self.width as usize + col as usize;
        self.cells.get(index).is_some_and(|&cell| cell != 0)
    }
}

/// Bitmap placed on the panel
///
/// Pictures have no incremental update: changing one means erase then draw.
#[derive(Debug, Clone)]
pub struct Picture<'a> {
    x: u16,
    y: u16,
    bitmap: Bitmap<'a>,
    fg: Rgb565,
    bg: Rgb565,
    visibility: Visibility,
}

impl<'a> Picture<'a> {
    /// Create a hidden picture
    pub fn new(x: u16, y: u16, bitmap: Bitmap<'a>, fg: Rgb565, bg: Rgb565) -> Self {
        Self {
            x,
            y,
            bitmap,
            fg,
            bg,
            visibility: Visibility::Hidden,
        }
    }

    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn bitmap(&self) -> &Bitmap<'a> {
        &self.bitmap
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    fn check_extent<C: Canvas>(&self, canvas: &C) -> Result<(), DisplayError> {
        canvas.check_area(
            self.x,
            self.y,
            self.bitmap.width as u32,
            self.bitmap.height as u32,
        )
    }

    /// Mark hidden without touching the panel
    ///
    /// For after a bulk fill has already painted over the picture.
    pub fn invalidate(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Plot every cell in `fg` (set) or `bg` (unset); Hidden → Visible
    pub fn draw<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), DisplayError> {
        self.visibility.require_hidden()?;
        self.check_extent(canvas)?;

        for row in 0..self.bitmap.height {
            for col in 0..self.bitmap.width {
                let color = if self.bitmap.get(col, row) {
                    self.fg
                } else {
                    self.bg
                };
                canvas.draw_pixel(self.x + col, self.y + row, color)?;
            }
        }
        self.visibility = Visibility::Visible;
        Ok(())
    }

    /// Paint the whole bounding rectangle with `bg`; Visible → Hidden
    pub fn erase<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), DisplayError> {
        self.visibility.require_visible()?;

        for row in 0..self.bitmap.height {
            for col in 0..self.bitmap.width {
                canvas.draw_pixel(self.x + col, self.y + row, self.bg)?;
            }
        }
        self.visibility = Visibility::Hidden;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateViolation;
    use crate::mock::RecordingCanvas;

    #[rustfmt::skip]
    const CHECKER: [u8; 6] = [
        1, 0, 1,
        0, 1, 0,
    ];

    #[test]
    fn test_bitmap_dimension_check() {
        assert_eq!(
            Bitmap::new(4, 2, &CHECKER).unwrap_err(),
            DisplayError::InvalidDimensions
        );
        let bitmap = Bitmap::new(3, 2, &CHECKER).unwrap();
        assert!(bitmap.get(0, 0));
        assert!(!bitmap.get(1, 0));
        assert!(bitmap.get(1, 1));
        assert!(!bitmap.get(3, 0));
    }

    #[test]
    fn test_draw_plots_fg_and_bg() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let bitmap = Bitmap::new(3, 2, &CHECKER).unwrap();
        let mut picture = Picture::new(5, 7, bitmap, Rgb565::WHITE, Rgb565::BLACK);
        picture.draw(&mut canvas).unwrap();

        let (w, b) = (Rgb565::WHITE, Rgb565::BLACK);
        assert_eq!(
            canvas.pixels(),
            [
                (5, 7, w),
                (6, 7, b),
                (7, 7, w),
                (5, 8, b),
                (6, 8, w),
                (7, 8, b)
            ]
        );
        assert!(picture.is_visible());
    }

    #[test]
    fn test_erase_fills_rectangle_with_bg() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let bitmap = Bitmap::new(3, 2, &CHECKER).unwrap();
        let mut picture = Picture::new(0, 0, bitmap, Rgb565::WHITE, Rgb565::BLUE);
        picture.draw(&mut canvas).unwrap();
        canvas.ops.clear();

        picture.erase(&mut canvas).unwrap();
        let pixels = canvas.pixels();
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|&(_, _, c)| c == Rgb565::BLUE));
        assert!(!picture.is_visible());
    }

    #[test]
    fn test_lifecycle_guards() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let bitmap = Bitmap::new(3, 2, &CHECKER).unwrap();
        let mut picture = Picture::new(0, 0, bitmap, Rgb565::WHITE, Rgb565::BLACK);

        assert_eq!(
            picture.erase(&mut canvas),
            Err(DisplayError::InvalidWidgetState(StateViolation::NotVisible))
        );
        picture.draw(&mut canvas).unwrap();
        assert_eq!(
            picture.draw(&mut canvas),
            Err(DisplayError::InvalidWidgetState(StateViolation::AlreadyVisible))
        );
    }

    #[test]
    fn test_invalidate_allows_redraw() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let bitmap = Bitmap::new(3, 2, &CHECKER).unwrap();
        let mut picture = Picture::new(0, 0, bitmap, Rgb565::WHITE, Rgb565::BLACK);
        picture.draw(&mut canvas).unwrap();
        canvas.ops.clear();

        picture.invalidate();
        assert!(!picture.is_visible());
        assert!(canvas.ops.is_empty());
        picture.draw(&mut canvas).unwrap();
    }

    #[test]
    fn test_off_panel_rejected() {
        let mut canvas = RecordingCanvas::new(8, 8);
        let bitmap = Bitmap::new(3, 2, &CHECKER).unwrap();
        let mut picture = Picture::new(6, 0, bitmap, Rgb565::WHITE, Rgb565::BLACK);
        assert_eq!(
            picture.draw(&mut canvas),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(canvas.ops.is_empty());
    }
}

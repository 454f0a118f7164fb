//! Text label with diff-based updates

use heapless::String;

use crate::canvas::{BackgroundMode, Canvas, TextStyle};
use crate::color::Rgb565;
use crate::error::DisplayError;

use super::Visibility;

/// A single line of text in fixed 8×8 cells
///
/// Character `i` occupies the cell at `x + i * cell_width`. `N` is the
/// capacity in bytes of UTF-8 text.
#[derive(Debug, Clone)]
pub struct Label<const N: usize> {
    x: u16,
    y: u16,
    text: String<N>,
    style: TextStyle,
    visibility: Visibility,
}

impl<const N: usize> Label<N> {
    /// Create a hidden label
    pub fn new(x: u16, y: u16, text: &str, fg: Rgb565, bg: Rgb565) -> Result<Self, DisplayError> {
        let text = String::try_from(text).map_err(|_| DisplayError::TextTooLong)?;
        Ok(Self {
            x,
            y,
            text,
            style: TextStyle::new(fg, bg),
            visibility: Visibility::Hidden,
        })
    }

    /// Switch background handling
    pub fn with_mode(mut self, mode: BackgroundMode) -> Self {
        self.style = self.style.with_mode(mode);
        self
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner of the first cell
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Change colours of a hidden label
    pub fn set_colors(&mut self, fg: Rgb565, bg: Rgb565) -> Result<(), DisplayError> {
        self.visibility.require_hidden()?;
        self.style = TextStyle { fg, bg, ..self.style };
        Ok(())
    }

    fn cell_x<C: Canvas>(&self, canvas: &C, index: usize) -> u16 {
        let (cell_width, _) = canvas.cell_size();
        self.x + index as u16 * cell_width
    }

    fn check_extent<C: Canvas>(&self, canvas: &C, cells: usize) -> Result<(), DisplayError> {
        let (cell_width, cell_height) = canvas.cell_size();
        canvas.check_area(
            self.x,
            self.y,
            cells as u32 * cell_width as u32,
            cell_height as u32,
        )
    }

    /// Mark hidden without touching the panel
    ///
    /// For after a bulk fill has already painted over the label.
    pub fn invalidate(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Render every character; Hidden → Visible
    pub fn draw<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), DisplayError> {
        self.visibility.require_hidden()?;
        self.check_extent(canvas, self.text.chars().count())?;

        for (i, ch) in self.text.chars().enumerate() {
            let x = self.cell_x(canvas, i);
            canvas.draw_char(x, self.y, ch, &self.style)?;
        }
        self.visibility = Visibility::Visible;
        Ok(())
    }

    /// Paint every cell with the background; Visible → Hidden
    pub fn erase<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), DisplayError> {
        self.visibility.require_visible()?;

        let erased = self.style.erased();
        for (i, ch) in self.text.chars().enumerate() {
            let x = self.cell_x(canvas, i);
            canvas.draw_char(x, self.y, ch, &erased)?;
        }
        self.visibility = Visibility::Hidden;
        Ok(())
    }

    /// Replace the text, re-rendering only the cells that changed
    ///
    /// A cell whose character is the same before and after costs nothing.
    /// A changed cell has its old character erased (if any) and its new
    /// character drawn (if any).
    pub fn update<C: Canvas>(&mut self, canvas: &mut C, text: &str) -> Result<(), DisplayError> {
        self.visibility.require_visible()?;
        let new_text: String<N> = String::try_from(text).map_err(|_| DisplayError::TextTooLong)?;
        self.check_extent(canvas, new_text.chars().count())?;

        let erased = self.style.erased();
        let mut old_chars = self.text.chars();
        let mut new_chars = new_text.chars();
        let mut index = 0;
        loop {
            let (old, new) = match (old_chars.next(), new_chars.next()) {
                (None, None) => break,
                pair => pair,
            };
            if old != new {
                let x = self.cell_x(canvas, index);
                if let Some(ch) = old {
                    canvas.draw_char(x, self.y, ch, &erased)?;
                }
                if let Some(ch) = new {
                    canvas.draw_char(x, self.y, ch, &self.style)?;
                }
            }
            index += 1;
        }

        self.text = new_text;
        Ok(())
    }
}

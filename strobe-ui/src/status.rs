//! Link status icon
//!
//! Two pictures sharing one spot on the panel; only one is ever visible.

use strobe_display::{Canvas, DisplayError, Picture};

/// Network link state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    Down,
    Up,
}

/// Status icon that redraws only when the status changes
pub struct StatusIcon<'a> {
    up: Picture<'a>,
    down: Picture<'a>,
    shown: Option<LinkStatus>,
}

impl<'a> StatusIcon<'a> {
    pub fn new(up: Picture<'a>, down: Picture<'a>) -> Self {
        Self {
            up,
            down,
            shown: None,
        }
    }

    /// Status currently on screen
    pub fn shown(&self) -> Option<LinkStatus> {
        self.shown
    }

    fn picture(&mut self, status: LinkStatus) -> &mut Picture<'a> {
        match status {
            LinkStatus::Up => &mut self.up,
            LinkStatus::Down => &mut self.down,
        }
    }

    /// Show `status`, swapping pictures if it differs from what is shown
    pub fn show<C: Canvas>(
        &mut self,
        canvas: &mut C,
        status: LinkStatus,
    ) -> Result<(), DisplayError> {
        if self.shown == Some(status) {
            return Ok(());
        }
        self.hide(canvas)?;
        self.picture(status).draw(canvas)?;
        self.shown = Some(status);
        Ok(())
    }

    /// Remove the icon from the panel
    pub fn hide<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), DisplayError> {
        if let Some(current) = self.shown {
            self.picture(current).erase(canvas)?;
            self.shown = None;
        }
        Ok(())
    }

    /// Forget what is on screen after the panel was cleared behind our back
    pub fn invalidate(&mut self) {
        if let Some(current) = self.shown.take() {
            self.picture(current).invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_display::mock::RecordingCanvas;
    use strobe_display::{Bitmap, Rgb565};

    const UP: [u8; 4] = [1, 1, 1, 1];
    const DOWN: [u8; 4] = [1, 0, 0, 1];

    fn icon() -> StatusIcon<'static> {
        let up = Bitmap::new(2, 2, &UP).unwrap();
        let down = Bitmap::new(2, 2, &DOWN).unwrap();
        StatusIcon::new(
            Picture::new(300, 0, up, Rgb565::GREEN, Rgb565::BLACK),
            Picture::new(300, 0, down, Rgb565::RED, Rgb565::BLACK),
        )
    }

    #[test]
    fn test_first_show_draws_only() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut icon = icon();
        icon.show(&mut canvas, LinkStatus::Down).unwrap();

        assert_eq!(canvas.pixels().len(), 4);
        assert_eq!(canvas.pixels()[0], (300, 0, Rgb565::RED));
        assert_eq!(icon.shown(), Some(LinkStatus::Down));
    }

    #[test]
    fn test_same_status_is_free() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut icon = icon();
        icon.show(&mut canvas, LinkStatus::Up).unwrap();
        canvas.ops.clear();

        icon.show(&mut canvas, LinkStatus::Up).unwrap();
        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn test_change_swaps_pictures() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut icon = icon();
        icon.show(&mut canvas, LinkStatus::Down).unwrap();
        canvas.ops.clear();

        icon.show(&mut canvas, LinkStatus::Up).unwrap();
        // Erase the old picture then draw the new one
        assert_eq!(canvas.pixels().len(), 8);
        assert!(canvas.pixels()[..4].iter().all(|p| p.2 == Rgb565::BLACK));
        assert!(canvas.pixels()[4..].iter().all(|p| p.2 == Rgb565::GREEN));
        assert_eq!(icon.shown(), Some(LinkStatus::Up));
    }

    #[test]
    fn test_failed_hide_keeps_icon_shown() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut icon = icon();
        icon.show(&mut canvas, LinkStatus::Up).unwrap();

        // Too small to hold the icon, so the erase is rejected
        let mut small = RecordingCanvas::new(8, 8);
        assert_eq!(
            icon.hide(&mut small),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(icon.shown(), Some(LinkStatus::Up));

        canvas.ops.clear();
        icon.show(&mut canvas, LinkStatus::Down).unwrap();
        let pixels = canvas.pixels();
        assert_eq!(pixels.len(), 8);
        assert!(pixels[..4].iter().all(|p| p.2 == Rgb565::BLACK));
        assert!(pixels[4..].iter().all(|p| p.2 != Rgb565::GREEN));
    }

    #[test]
    fn test_invalidate_allows_redraw_without_erase() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut icon = icon();
        icon.show(&mut canvas, LinkStatus::Up).unwrap();
        canvas.ops.clear();

        icon.invalidate();
        icon.show(&mut canvas, LinkStatus::Up).unwrap();
        assert_eq!(canvas.pixels().len(), 4);
    }
}

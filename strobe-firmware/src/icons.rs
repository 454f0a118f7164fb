//! Link status icon bitmaps

use strobe_display::{Bitmap, DisplayError, Geometry, Picture, Rgb565};
use strobe_ui::StatusIcon;

const ICON_WIDTH: u16 = 12;
const ICON_HEIGHT: u16 = 10;

/// Distance from the top-right corner
const MARGIN: u16 = 4;

#[rustfmt::skip]
static LINK_UP: [u8; (ICON_WIDTH * ICON_HEIGHT) as usize] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1,
    0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1,
    0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1,
    0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1,
    0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1,
    0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1,
    0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1,
];

#[rustfmt::skip]
static LINK_DOWN: [u8; (ICON_WIDTH * ICON_HEIGHT) as usize] = [
    0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0,
    0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0,
    0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0,
    0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Status icon in the top-right corner of the panel
pub fn status_icon(geometry: &Geometry, bg: Rgb565) -> Result<StatusIcon<'static>, DisplayError> {
    let x = geometry
        .width()
        .checked_sub(ICON_WIDTH + MARGIN)
        .ok_or(DisplayError::InvalidCoordinates)?;
    let y = MARGIN;

    let up = Bitmap::new(ICON_WIDTH, ICON_HEIGHT, &LINK_UP)?;
    let down = Bitmap::new(ICON_WIDTH, ICON_HEIGHT, &LINK_DOWN)?;

    Ok(StatusIcon::new(
        Picture::new(x, y, up, Rgb565::GREEN, bg),
        Picture::new(x, y, down, Rgb565::RED, bg),
    ))
}

//! Panel controller command set
//!
//! Only the commands the driver issues are listed. Every command word is
//! sent with the data/command selector low; its parameters follow as data
//! words.

pub const SOFT_RESET: u8 = 0x01;
pub const SLEEP_OUT: u8 = 0x11;
pub const DISPLAY_OFF: u8 = 0x28;
pub const DISPLAY_ON: u8 = 0x29;
/// Column address set: x0 hi, x0 lo, x1 hi, x1 lo
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
/// Row address set: y0 hi, y0 lo, y1 hi, y1 lo
pub const ROW_ADDRESS_SET: u8 = 0x2B;
/// Memory write: arms the controller for a row-major colour stream
pub const MEMORY_WRITE: u8 = 0x2C;
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

/// Pixel format parameter for 16 bits per pixel
pub const PIXEL_FORMAT_RGB565: u8 = 0x55;

/// Power-up sequence as (word, is_data) pairs
///
/// The software reset needs a settle delay before the next word; the
/// driver inserts it after [`SOFT_RESET`].
pub const INIT_SEQUENCE: [(u8, bool); 6] = [
    (SOFT_RESET, false),
    (DISPLAY_OFF, false),
    (PIXEL_FORMAT_SET, false),
    (PIXEL_FORMAT_RGB565, true),
    (SLEEP_OUT, false),
    (DISPLAY_ON, false),
];

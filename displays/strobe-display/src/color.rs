//! RGB565 colour

/// 16-bit packed colour: bits 15-11 red, 10-5 green, 4-0 blue
///
/// There is no alpha channel; whatever is written last to a pixel wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Wrap a raw packed value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit components, dropping the low bits of each
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Raw packed value
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Wire order: high byte first, then low byte
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// 5-bit red component
    pub const fn r(&self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// 6-bit green component
    pub const fn g(&self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// 5-bit blue component
    pub const fn b(&self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_layout() {
        assert_eq!(Rgb565::RED.r(), 0x1F);
        assert_eq!(Rgb565::RED.g(), 0);
        assert_eq!(Rgb565::GREEN.g(), 0x3F);
        assert_eq!(Rgb565::BLUE.b(), 0x1F);
        assert_eq!(Rgb565::BLUE.r(), 0);
    }

    #[test]
    fn test_from_rgb888() {
        assert_eq!(Rgb565::from_rgb888(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb888(255, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb888(0, 255, 0), Rgb565::GREEN);
        assert_eq!(Rgb565::from_rgb888(7, 3, 7), Rgb565::BLACK);
    }

    #[test]
    fn test_wire_order() {
        assert_eq!(Rgb565::new(0x07E0).to_be_bytes(), [0x07, 0xE0]);
        assert_eq!(Rgb565::new(0xABCD).to_be_bytes(), [0xAB, 0xCD]);
    }
}

/// An RGBA colour. Packs into a 32-bit `0xRRGGBBAA` word, the RGBA8888 layout
/// presenters upload directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const OPAQUE: u8 = 0xFF;

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: OPAQUE }
    }

    #[must_use]
    pub const fn to_rgba8888(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    #[must_use]
    pub const fn from_rgba8888(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self { r, g, b, a }
    }
}

use crate::colour::Colour;

/// One pixel packed into 32 bits: `r << 24 | g << 16 | b << 8 | a`
///
/// Read as raw little-endian memory this is `[a, b, g, r]`, which is SDL's
/// RGBA8888 layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Pixel(u32);

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel(0);

    /// Pack any colour
    #[inline]
    pub fn new(colour: &impl Colour) -> Self {
        Self::from_channels(colour.r(), colour.g(), colour.b(), colour.a())
    }

    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// The packed word
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Presentation byte order, see [`crate::display::FrameBuffer::to_bytes`]
    #[inline]
    pub const fn to_abgr(self) -> [u8; 4] {
        [self.a(), self.b(), self.g(), self.r()]
    }

    #[inline]
    pub const fn from_abgr(bytes: [u8; 4]) -> Self {
        Self::from_channels(bytes[3], bytes[2], bytes[1], bytes[0])
    }
}

impl Colour for Pixel {
    fn r(&self) -> u8 {
        Pixel::r(*self)
    }
    fn g(&self) -> u8 {
        Pixel::g(*self)
    }
    fn b(&self) -> u8 {
        Pixel::b(*self)
    }
    fn a(&self) -> u8 {
        Pixel::a(*self)
    }
}

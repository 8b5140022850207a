//! Colour input boundary
//!
//! Anything with four 8-bit channels can be drawn with. The rasterizers only
//! ever read the channels through [`Colour`].

use serde::{Deserialize, Serialize};

/// A colour with red, green, blue and alpha channels in 0-255
pub trait Colour {
    fn r(&self) -> u8;
    fn g(&self) -> u8;
    fn b(&self) -> u8;
    fn a(&self) -> u8;
}

/// Plain 8-bit-per-channel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Copy of the colour with a different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Copy any colour into an `Rgba`
    pub fn from_colour(c: &impl Colour) -> Self {
        Self::new(c.r(), c.g(), c.b(), c.a())
    }
}

impl Colour for Rgba {
    fn r(&self) -> u8 {
        self.r
    }
    fn g(&self) -> u8 {
        self.g
    }
    fn b(&self) -> u8 {
        self.b
    }
    fn a(&self) -> u8 {
        self.a
    }
}

impl Colour for (u8, u8, u8, u8) {
    fn r(&self) -> u8 {
        self.0
    }
    fn g(&self) -> u8 {
        self.1
    }
    fn b(&self) -> u8 {
        self.2
    }
    fn a(&self) -> u8 {
        self.3
    }
}

/// RGB tuples are opaque
impl Colour for (u8, u8, u8) {
    fn r(&self) -> u8 {
        self.0
    }
    fn g(&self) -> u8 {
        self.1
    }
    fn b(&self) -> u8 {
        self.2
    }
    fn a(&self) -> u8 {
        255
    }
}

// Common colour set
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const LIME: Rgba = Rgba::rgb(0, 255, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
pub const MAGENTA: Rgba = Rgba::rgb(255, 0, 255);
pub const GREY: Rgba = Rgba::rgb(128, 128, 128);
pub const GREEN: Rgba = Rgba::rgb(0, 128, 0);
pub const NAVY: Rgba = Rgba::rgb(0, 0, 128);
pub const ORANGE: Rgba = Rgba::rgb(255, 165, 0);
pub const FOREST_GREEN: Rgba = Rgba::rgb(34, 139, 34);
pub const MIDNIGHT_BLUE: Rgba = Rgba::rgb(25, 25, 112);
pub const HOT_PINK: Rgba = Rgba::rgb(255, 105, 180);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_colours() {
        let c = (1, 2, 3);
        assert_eq!(Rgba::from_colour(&c), Rgba::new(1, 2, 3, 255));
        let c = (1, 2, 3, 4);
        assert_eq!(Rgba::from_colour(&c), Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_alpha_defaults_to_opaque_in_json() {
        let c: Rgba = serde_json::from_str(r#"{"r": 10, "g": 20, "b": 30}"#).unwrap();
        assert_eq!(c, Rgba::rgb(10, 20, 30));
        assert_eq!(RED.with_alpha(7).a, 7);
    }
}

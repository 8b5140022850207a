//! rasterkit: a software 2D rasterizer
//!
//! Shapes are rasterized on the CPU into a [`FrameBuffer`] of packed
//! [`Pixel`]s, composited with Porter-Duff source-over (or additive blending
//! for bloom halos), and handed to a presentation surface as bytes.
//! Polygons are filled through ear-clipping triangulation.
//!
//! The SDL2 window used by the demo binary sits behind the `window` feature.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod colour;
pub mod display;
pub mod error;
pub mod geometry;
pub mod math2d;
pub mod scene;
pub mod shapes;
pub mod spline;
pub mod triangulate;
pub mod util;

pub use colour::{Colour, Rgba};
pub use display::{additive_blend, alpha_blend, BlendFn, BlendMode, FrameBuffer, GlyphMask, Pixel};
pub use error::{Error, Result};
pub use math2d::Vec2;
pub use scene::Scene;
pub use shapes::{is_colliding, Circle, CurvedRect, Polygon, Rect, Shape, Style, Triangle};
pub use spline::catmull_rom;
pub use triangulate::{triangulate, Diagnostic, Triangulation};

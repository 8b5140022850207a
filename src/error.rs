use thiserror::Error;

/// Errors reported by rasterkit
#[derive(Debug, Error)]
pub enum Error {
    /// Frame buffers need at least one pixel in each direction
    #[error("invalid frame buffer size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A bounds-checked read outside the frame buffer
    #[error("pixel ({x}, {y}) is outside the {width}x{height} frame buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("margin {margin} must lie within 0..={limit} (half the smaller frame dimension)")]
    MarginTooLarge { margin: f32, limit: f32 },

    #[error("glyph mask of {width}x{height} needs {expected} pixels, got {actual}")]
    MaskSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Two non-adjacent polygon edges cross each other
    #[error("polygon edges {0} and {1} intersect")]
    SelfIntersecting(usize, usize),

    #[error("scene io: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene format: {0}")]
    Json(#[from] serde_json::Error),

    /// SDL reports its failures as plain strings
    #[cfg(feature = "window")]
    #[error("display: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::colour::{Rgba, BLACK};
use crate::display::FrameBuffer;
use crate::error::Result;
use crate::math2d::Vec2;
use crate::shapes::Shape;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_background() -> Rgba {
    BLACK
}

/// An ordered list of styled shapes over a background colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: BLACK,
            shapes: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Topmost shape containing a point (if any)
    pub fn shape_at(&self, point: Vec2) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.contains(point))
    }

    /// Fill with the background, then draw every shape in order
    pub fn draw(&self, buf: &mut FrameBuffer) {
        buf.fill(&self.background);
        for shape in &self.shapes {
            shape.draw(buf);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a scene; polygons are retriangulated and invalid ones are errors
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::debug!("saved scene '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let scene = Self::from_json(&fs::read_to_string(path)?)?;
        log::debug!(
            "loaded scene '{}' ({} shapes) from {}",
            scene.name,
            scene.shapes.len(),
            path.display()
        );
        Ok(scene)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

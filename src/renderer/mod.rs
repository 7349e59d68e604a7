//! Presentation contract
//!
//! The simulation never touches a window. Each frame the host hands a
//! `Surface` to `draw_frame`, which issues one call per visible entity.

pub mod commands;
pub mod scene;

pub use commands::{CommandBuffer, DrawCommand};
pub use scene::draw_frame;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE: Color = [1.0, 1.0, 0.0, 1.0];
    pub const COUNTDOWN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const COUNTDOWN_WARNING: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Images the host must be able to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// Ship image, drawn centered on the given point
    Ship,
}

/// Text styles the host must be able to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// In-race score counters, left-aligned
    Score,
    /// "GAME OVER" banner, centered
    Banner,
    /// Winner line under the banner, centered
    Subtitle,
}

impl Font {
    /// Point size
    pub fn size(&self) -> f32 {
        match self {
            Font::Score => 40.0,
            Font::Banner => 60.0,
            Font::Subtitle => 40.0,
        }
    }

    /// Whether (x, y) is the text's center rather than its baseline origin
    pub fn centered(&self) -> bool {
        !matches!(self, Font::Score)
    }
}

/// Drawing primitives a host provides
pub trait Surface {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font);
}

//! Rendering module
//!
//! The simulation never draws directly. Everything visible goes through the
//! `Surface` primitives (circle, rectangle, line, text) so any backend that
//! can paint those can show the game.

pub mod draw_list;
pub mod scene;
pub mod shapes;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::draw_frame;

use glam::Vec2;

use crate::palette::Color;

/// 2D camera: world point `target` appears at screen point `offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
}

impl Camera {
    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        p - self.target + self.offset
    }
}

/// Drawing primitives provided by a graphics backend
pub trait Surface {
    /// Start a frame filled with `color`
    fn clear(&mut self, color: Color);
    /// Coordinates of following calls are world space seen through `camera`,
    /// or screen space when `None`
    fn set_camera(&mut self, camera: Option<Camera>);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn rect_outline(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// `pos` is the top-left of the text; `size` is the font height
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// Something that knows how to paint itself
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

//! Recording surface
//!
//! Captures a frame as a flat list of screen-space commands. Backends replay
//! the list; tests inspect it.

use glam::Vec2;

use super::{Camera, Surface};
use crate::palette::Color;

/// One screen-space drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    RectOutline {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    camera: Option<Camera>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    #[inline]
    fn to_screen(&self, p: Vec2) -> Vec2 {
        match &self.camera {
            Some(camera) => camera.world_to_screen(p),
            None => p,
        }
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.camera = None;
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_camera(&mut self, camera: Option<Camera>) {
        self.camera = camera;
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let center = self.to_screen(center);
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        let pos = self.to_screen(pos);
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn rect_outline(&mut self, pos: Vec2, size: Vec2, color: Color) {
        let pos = self.to_screen(pos);
        self.commands.push(DrawCommand::RectOutline { pos, size, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (from, to) = (self.to_screen(from), self.to_screen(to));
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        let pos = self.to_screen(pos);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

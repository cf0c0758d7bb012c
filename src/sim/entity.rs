//! Shared attributes of every simulated object

use glam::Vec2;

use super::collision::circles_overlap;
use crate::palette::Color;

/// Cardinal orientation (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Facing {
    /// Unit vector pointing this way
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Right => Vec2::new(1.0, 0.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
        }
    }

    /// Dominant axis of `v`: horizontal only when |x| is strictly larger
    pub fn from_vector(v: Vec2) -> Self {
        if v.x.abs() > v.y.abs() {
            if v.x > 0.0 { Facing::Right } else { Facing::Left }
        } else if v.y > 0.0 {
            Facing::Down
        } else {
            Facing::Up
        }
    }
}

/// Position, size, health and liveness of a circle-shaped object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
    /// Inactive entities are skipped by update, draw and collision
    pub active: bool,
    pub facing: Facing,
    pub color: Color,
}

impl Entity {
    pub fn new(pos: Vec2, radius: f32, health: i32, color: Color) -> Self {
        Self {
            pos,
            radius,
            health,
            max_health: health,
            active: true,
            facing: Facing::Right,
            color,
        }
    }

    /// Subtract health; at zero the entity is pinned to 0 and deactivated
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            self.active = false;
        }
    }

    pub fn is_colliding(&self, other: &Entity) -> bool {
        circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }

    pub fn is_damaged(&self) -> bool {
        self.health < self.max_health
    }

    /// Remaining health in 0..=1
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }
}

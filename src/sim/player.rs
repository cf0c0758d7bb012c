//! The player-controlled actor

use glam::Vec2;

use super::entity::{Entity, Facing};
use super::tick::Controls;
use crate::palette::BLUE;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Entity,
    pub vel: Vec2,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Entity::new(pos, tuning.player_radius, tuning.player_health, BLUE),
            vel: Vec2::ZERO,
            shoot_cooldown: 0.0,
        }
    }

    /// Steer from held keys, integrate, and tick the shot cooldown
    ///
    /// Keys are polled in W, S, A, D order; the last pressed key sets
    /// `facing`. Opposite keys cancel on their axis. Diagonals are not
    /// normalized.
    pub fn update(&mut self, dt: f32, controls: &Controls, tuning: &Tuning) {
        let speed = tuning.player_speed;
        self.vel = Vec2::ZERO;

        if controls.up {
            self.vel.y -= speed;
            self.body.facing = Facing::Up;
        }
        if controls.down {
            self.vel.y += speed;
            self.body.facing = Facing::Down;
        }
        if controls.left {
            self.vel.x -= speed;
            self.body.facing = Facing::Left;
        }
        if controls.right {
            self.vel.x += speed;
            self.body.facing = Facing::Right;
        }

        self.body.pos += self.vel * dt;

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0
    }

    pub fn reset_shoot_cooldown(&mut self, tuning: &Tuning) {
        self.shoot_cooldown = tuning.player_shoot_cooldown;
    }
}

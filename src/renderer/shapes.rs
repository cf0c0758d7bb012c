//! How each game object paints itself

use glam::Vec2;

use super::{Draw, Surface};
use crate::palette::{GREEN, RED, WHITE, YELLOW};
use crate::sim::{Boss, Enemy, Entity, Hostile, Player, Projectile, Room};

const FONT_SIZE: f32 = 20.0;

/// Red background with a green fill proportional to remaining health, just
/// above the circle
fn health_bar(surface: &mut dyn Surface, body: &Entity, height: f32) {
    let pos = Vec2::new(body.pos.x - body.radius, body.pos.y - body.radius - 10.0);
    let width = 2.0 * body.radius;
    surface.rect(pos, Vec2::new(width, height), RED);
    surface.rect(pos, Vec2::new(width * body.health_fraction(), height), GREEN);
}

impl Draw for Entity {
    fn draw(&self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }
        surface.circle(self.pos, self.radius, self.color);
        if self.is_damaged() {
            health_bar(surface, self, 5.0);
        }
    }
}

impl Draw for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        self.body.draw(surface);
        if !self.body.active {
            return;
        }
        let tip = self.body.pos + self.body.facing.unit() * (self.body.radius + 10.0);
        surface.line(self.body.pos, tip, WHITE);
    }
}

impl Draw for Projectile {
    fn draw(&self, surface: &mut dyn Surface) {
        self.body.draw(surface);
    }
}

impl Draw for Enemy {
    fn draw(&self, surface: &mut dyn Surface) {
        self.body.draw(surface);
    }
}

impl Draw for Boss {
    fn draw(&self, surface: &mut dyn Surface) {
        let body = &self.base.body;
        if !body.active {
            return;
        }
        surface.circle(body.pos, body.radius, body.color);
        health_bar(surface, body, 8.0);
        surface.text(
            "BOSS",
            Vec2::new(body.pos.x - 20.0, body.pos.y - body.radius - 25.0),
            FONT_SIZE,
            YELLOW,
        );
    }
}

impl Draw for Hostile {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Hostile::Grunt(enemy) => enemy.draw(surface),
            Hostile::Boss(boss) => boss.draw(surface),
        }
    }
}

impl Draw for Room {
    fn draw(&self, surface: &mut dyn Surface) {
        let b = &self.bounds;
        let border = if self.cleared { GREEN } else { RED };
        surface.rect_outline(Vec2::new(b.x, b.y), Vec2::new(b.width, b.height), border);

        for hostile in &self.enemies {
            hostile.draw(surface);
        }

        if self.cleared {
            surface.text(
                "NEXT ROOM -->",
                Vec2::new(b.right() - 150.0, b.y + b.height / 2.0),
                FONT_SIZE,
                GREEN,
            );
        } else {
            surface.text(
                &format!("Enemies: {}", self.remaining()),
                Vec2::new(b.x + b.width / 2.0 - 50.0, b.y + 20.0),
                FONT_SIZE,
                RED,
            );
        }
    }
}

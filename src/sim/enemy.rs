//! Enemies and the boss
//!
//! An enemy wanders on a timer until the player comes within aggro range,
//! then turns to face the player and may fire. The boss runs the regular
//! enemy step and then blends a slow oscillation into its velocity.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, Facing};
use crate::palette::{PURPLE, RED};
use crate::tuning::Tuning;

/// Per-frame inputs shared by every enemy in a room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyFrame {
    pub dt: f32,
    /// Seconds since the game was created (drives the boss pattern)
    pub time: f64,
    /// Player position
    pub target: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Entity,
    pub vel: Vec2,
    pub shoot_cooldown: f32,
    /// Player within aggro radius as of the last update
    pub aggro: bool,
    /// Seconds spent on the current wander heading
    pub wander_timer: f32,
}

impl Enemy {
    /// A stationary enemy; draws nothing from the RNG
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Entity::new(pos, tuning.enemy_radius, tuning.enemy_health, RED),
            vel: Vec2::ZERO,
            shoot_cooldown: 0.0,
            aggro: false,
            wander_timer: 0.0,
        }
    }

    /// An enemy already moving along a random heading (one RNG draw)
    pub fn spawn<R: Rng + ?Sized>(pos: Vec2, rng: &mut R, tuning: &Tuning) -> Self {
        let mut enemy = Self::new(pos, tuning);
        enemy.change_direction(rng, tuning);
        enemy
    }

    /// Pick a uniform heading in [0, 2π) and face along it
    pub fn change_direction<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        let angle: f32 = rng.random_range(0.0..TAU);
        self.vel = Vec2::new(angle.cos(), angle.sin()) * tuning.enemy_speed;
        self.body.facing = Facing::from_vector(self.vel);
    }

    /// Aggro is recomputed from scratch every call; there is no hysteresis.
    pub fn update<R: Rng + ?Sized>(&mut self, frame: &EnemyFrame, rng: &mut R, tuning: &Tuning) {
        let to_player = frame.target - self.body.pos;
        self.aggro = to_player.length() <= tuning.aggro_radius;

        if self.aggro {
            self.body.facing = Facing::from_vector(to_player);
        } else {
            self.wander_timer += frame.dt;
            if self.wander_timer >= tuning.wander_interval {
                self.change_direction(rng, tuning);
                self.wander_timer = 0.0;
            }
        }

        self.body.pos += self.vel * frame.dt;

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= frame.dt;
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0 && self.aggro
    }

    pub fn reset_shoot_cooldown(&mut self, tuning: &Tuning) {
        self.shoot_cooldown = tuning.enemy_shoot_cooldown;
    }
}

/// The final-room enemy: bigger, tougher, and drifting in a slow pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub base: Enemy,
}

impl Boss {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        let mut base = Enemy::new(pos, tuning);
        base.body.radius = tuning.boss_radius;
        base.body.health = tuning.boss_health;
        base.body.max_health = tuning.boss_health;
        base.body.color = PURPLE;
        Self { base }
    }

    pub fn spawn<R: Rng + ?Sized>(pos: Vec2, rng: &mut R, tuning: &Tuning) -> Self {
        let mut boss = Self::new(pos, tuning);
        boss.base.change_direction(rng, tuning);
        boss
    }

    /// Regular enemy step, then half-and-half blend with a sinusoid
    pub fn update<R: Rng + ?Sized>(&mut self, frame: &EnemyFrame, rng: &mut R, tuning: &Tuning) {
        self.base.update(frame, rng, tuning);

        let swing = tuning.enemy_speed * 0.5;
        let vel = &mut self.base.vel;
        vel.x = (frame.time * 0.5).cos() as f32 * swing + vel.x * 0.5;
        vel.y = (frame.time * 0.3).sin() as f32 * swing + vel.y * 0.5;
    }
}

/// Anything a room can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Hostile {
    Grunt(Enemy),
    Boss(Boss),
}

impl Hostile {
    pub fn enemy(&self) -> &Enemy {
        match self {
            Hostile::Grunt(e) => e,
            Hostile::Boss(b) => &b.base,
        }
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        match self {
            Hostile::Grunt(e) => e,
            Hostile::Boss(b) => &mut b.base,
        }
    }

    #[inline]
    pub fn body(&self) -> &Entity {
        &self.enemy().body
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.body().active
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, Hostile::Boss(_))
    }

    pub fn update<R: Rng + ?Sized>(&mut self, frame: &EnemyFrame, rng: &mut R, tuning: &Tuning) {
        match self {
            Hostile::Grunt(e) => e.update(frame, rng, tuning),
            Hostile::Boss(b) => b.update(frame, rng, tuning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn frame(dt: f32, target: Vec2) -> EnemyFrame {
        EnemyFrame {
            dt,
            time: 0.0,
            target,
        }
    }

    #[test]
    fn test_enemy_creation() {
        let t = Tuning::default();
        let e = Enemy::new(Vec2::new(200.0, 200.0), &t);
        assert_eq!(e.body.pos, Vec2::new(200.0, 200.0));
        assert_eq!(e.body.health, 30);
        assert_eq!(e.body.radius, 12.0);
        assert_eq!(e.body.color, RED);
        assert!(!e.aggro);
    }

    #[test]
    fn test_enemy_aggro_and_shooting() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut e = Enemy::new(Vec2::new(200.0, 200.0), &t);

        e.update(&frame(0.1, Vec2::new(500.0, 500.0)), &mut rng, &t);
        assert!(!e.aggro);
        assert!(!e.can_shoot());

        e.update(&frame(0.1, Vec2::new(220.0, 220.0)), &mut rng, &t);
        assert!(e.aggro);
        assert!(e.can_shoot());

        e.reset_shoot_cooldown(&t);
        assert_eq!(e.shoot_cooldown, 1.5);
        assert!(!e.can_shoot());
    }

    #[test]
    fn test_aggro_boundary_is_inclusive_and_memoryless() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = Enemy::new(Vec2::ZERO, &t);

        e.update(&frame(0.0, Vec2::new(150.0, 0.0)), &mut rng, &t);
        assert!(e.aggro);
        e.update(&frame(0.0, Vec2::new(150.5, 0.0)), &mut rng, &t);
        assert!(!e.aggro);
        e.update(&frame(0.0, Vec2::new(0.0, -150.0)), &mut rng, &t);
        assert!(e.aggro);
    }

    #[test]
    fn test_aggro_faces_player_on_dominant_axis() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = Enemy::new(Vec2::new(100.0, 100.0), &t);

        e.update(&frame(0.0, Vec2::new(40.0, 120.0)), &mut rng, &t);
        assert_eq!(e.body.facing, Facing::Left);
        e.update(&frame(0.0, Vec2::new(110.0, 20.0)), &mut rng, &t);
        assert_eq!(e.body.facing, Facing::Up);
    }

    #[test]
    fn test_aggro_keeps_velocity() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut e = Enemy::new(Vec2::ZERO, &t);
        e.vel = Vec2::new(10.0, 0.0);
        e.wander_timer = 5.0;

        e.update(&frame(1.0, Vec2::new(0.0, 50.0)), &mut rng, &t);
        assert_eq!(e.vel, Vec2::new(10.0, 0.0));
        assert_eq!(e.body.pos, Vec2::new(10.0, 0.0));
        assert_eq!(e.wander_timer, 5.0);
    }

    #[test]
    fn test_wander_changes_heading_on_interval() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let far = Vec2::new(5000.0, 5000.0);
        let mut e = Enemy::new(Vec2::ZERO, &t);

        e.update(&frame(1.5, far), &mut rng, &t);
        assert_eq!(e.vel, Vec2::ZERO);
        assert_eq!(e.wander_timer, 1.5);

        e.update(&frame(0.5, far), &mut rng, &t);
        assert_eq!(e.wander_timer, 0.0);
        assert!((e.vel.length() - t.enemy_speed).abs() < 1e-3);
        assert_eq!(e.body.facing, Facing::from_vector(e.vel));
    }

    #[test]
    fn test_wander_heading_follows_rng_stream() {
        let t = Tuning::default();
        let mut a = Pcg32::seed_from_u64(77);
        let mut b = Pcg32::seed_from_u64(77);

        let e = Enemy::spawn(Vec2::ZERO, &mut a, &t);
        let angle: f32 = b.random_range(0.0..TAU);
        assert_eq!(e.vel, Vec2::new(angle.cos(), angle.sin()) * t.enemy_speed);
    }

    #[test]
    fn test_boss_creation() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let boss = Boss::spawn(Vec2::new(400.0, 400.0), &mut rng, &t);
        assert_eq!(boss.base.body.health, 150);
        assert_eq!(boss.base.body.max_health, 150);
        assert_eq!(boss.base.body.radius, 25.0);
        assert_eq!(boss.base.body.color, PURPLE);
        assert!(Hostile::Boss(boss).is_boss());
    }

    #[test]
    fn test_boss_velocity_blend() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut boss = Boss::new(Vec2::ZERO, &t);
        boss.base.vel = Vec2::new(20.0, -10.0);

        // Player in range so the base step leaves velocity alone
        let f = EnemyFrame {
            dt: 0.0,
            time: 2.0,
            target: Vec2::new(30.0, 0.0),
        };
        boss.update(&f, &mut rng, &t);

        let expected_x = (1.0f64).cos() as f32 * 40.0 + 10.0;
        let expected_y = (0.6f64).sin() as f32 * 40.0 - 5.0;
        assert!((boss.base.vel.x - expected_x).abs() < 1e-4);
        assert!((boss.base.vel.y - expected_y).abs() < 1e-4);
    }

    #[test]
    fn test_hostile_dispatch() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut grunt = Hostile::Grunt(Enemy::new(Vec2::ZERO, &t));
        assert!(!grunt.is_boss());
        grunt.update(&frame(0.1, Vec2::new(10.0, 0.0)), &mut rng, &t);
        assert!(grunt.enemy().aggro);

        grunt.enemy_mut().body.take_damage(100);
        assert!(!grunt.is_active());
    }
}

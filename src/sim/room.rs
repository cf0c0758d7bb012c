//! Rooms: rectangular arenas that own their enemies

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::enemy::{Boss, Enemy, EnemyFrame, Hostile};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub bounds: Rect,
    /// Owned enemies, in the order they were added
    pub enemies: Vec<Hostile>,
    /// True once an update finds no active enemy
    pub cleared: bool,
    /// Descriptive only; the boss is an ordinary member of `enemies`
    pub has_boss: bool,
}

impl Room {
    pub fn new(bounds: Rect, has_boss: bool) -> Self {
        Self {
            bounds,
            enemies: Vec::new(),
            cleared: false,
            has_boss,
        }
    }

    pub fn add_enemy<R: Rng + ?Sized>(&mut self, pos: Vec2, rng: &mut R, tuning: &Tuning) {
        self.enemies.push(Hostile::Grunt(Enemy::spawn(pos, rng, tuning)));
    }

    pub fn add_boss<R: Rng + ?Sized>(&mut self, pos: Vec2, rng: &mut R, tuning: &Tuning) {
        self.enemies.push(Hostile::Boss(Boss::spawn(pos, rng, tuning)));
    }

    /// Move every live enemy, keep it inside the walls, then recompute
    /// clearance
    pub fn update<R: Rng + ?Sized>(&mut self, frame: &EnemyFrame, rng: &mut R, tuning: &Tuning) {
        for hostile in self.enemies.iter_mut().filter(|h| h.is_active()) {
            hostile.update(frame, rng, tuning);

            let body = &mut hostile.enemy_mut().body;
            body.pos = self.bounds.clamp_circle(body.pos, body.radius);
        }

        self.cleared = self.enemies.iter().all(|h| !h.is_active());
    }

    /// Inclusive bounding-box test
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.bounds.contains_point(p)
    }

    pub fn remaining(&self) -> usize {
        self.enemies.iter().filter(|h| h.is_active()).count()
    }

    /// x beyond which the player counts as leaving through the right wall
    pub fn exit_threshold(&self, tuning: &Tuning) -> f32 {
        self.bounds.right() - tuning.exit_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn still(dt: f32, target: Vec2) -> EnemyFrame {
        EnemyFrame {
            dt,
            time: 0.0,
            target,
        }
    }

    #[test]
    fn test_room_creation() {
        let room = Room::new(Rect::new(0.0, 0.0, 800.0, 600.0), false);
        assert_eq!(room.bounds, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(!room.cleared);
        assert!(!room.has_boss);
        assert!(room.enemies.is_empty());
    }

    #[test]
    fn test_room_clears_when_enemies_die() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut room = Room::new(Rect::new(0.0, 0.0, 800.0, 600.0), false);
        room.add_enemy(Vec2::new(100.0, 100.0), &mut rng, &t);
        room.add_enemy(Vec2::new(200.0, 200.0), &mut rng, &t);
        assert_eq!(room.enemies.len(), 2);

        assert!(room.contains_point(Vec2::new(100.0, 100.0)));
        assert!(!room.contains_point(Vec2::new(900.0, 100.0)));

        room.update(&still(0.1, Vec2::new(400.0, 300.0)), &mut rng, &t);
        assert!(!room.cleared);
        assert_eq!(room.remaining(), 2);

        for hostile in &mut room.enemies {
            hostile.enemy_mut().body.active = false;
        }
        room.update(&still(0.1, Vec2::new(400.0, 300.0)), &mut rng, &t);
        assert!(room.cleared);
        assert_eq!(room.remaining(), 0);
    }

    #[test]
    fn test_empty_room_clears_on_update() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut room = Room::new(Rect::new(0.0, 0.0, 800.0, 600.0), false);
        room.update(&still(0.1, Vec2::ZERO), &mut rng, &t);
        assert!(room.cleared);
    }

    #[test]
    fn test_enemies_are_clamped_inside() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut room = Room::new(Rect::new(800.0, 0.0, 800.0, 600.0), false);
        let mut runaway = Enemy::new(Vec2::new(1590.0, 590.0), &t);
        runaway.vel = Vec2::new(500.0, 500.0);
        room.enemies.push(Hostile::Grunt(runaway));

        room.update(&still(1.0, Vec2::new(5000.0, 5000.0)), &mut rng, &t);
        assert_eq!(room.enemies[0].body().pos, Vec2::new(1588.0, 588.0));
    }

    #[test]
    fn test_inactive_enemies_are_frozen() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut room = Room::new(Rect::new(0.0, 0.0, 800.0, 600.0), false);
        let mut dead = Enemy::new(Vec2::new(100.0, 100.0), &t);
        dead.vel = Vec2::new(50.0, 0.0);
        dead.body.active = false;
        room.enemies.push(Hostile::Grunt(dead));

        room.update(&still(1.0, Vec2::new(110.0, 100.0)), &mut rng, &t);
        assert_eq!(room.enemies[0].body().pos, Vec2::new(100.0, 100.0));
        assert!(!room.enemies[0].enemy().aggro);
    }

    #[test]
    fn test_exit_threshold() {
        let room = Room::new(Rect::new(1600.0, 0.0, 800.0, 600.0), false);
        assert_eq!(room.exit_threshold(&Tuning::default()), 2350.0);
    }
}

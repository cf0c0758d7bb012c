//! Pooled projectiles
//!
//! A fixed set of slots is allocated once. Firing reuses the first inactive
//! slot in slot order; when every slot is live the shot is dropped.

use glam::Vec2;

use super::entity::{Entity, Facing};
use crate::consts::PROJECTILE_POOL_CAPACITY;
use crate::palette::{RED, YELLOW};
use crate::tuning::Tuning;

/// Who fired a projectile (and therefore who it can hurt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Owner {
    #[default]
    Player,
    Enemy,
}

/// A bullet
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub body: Entity,
    pub vel: Vec2,
    pub owner: Owner,
    pub damage: i32,
}

impl Projectile {
    /// An idle slot
    pub fn new(tuning: &Tuning) -> Self {
        let mut body = Entity::new(Vec2::ZERO, tuning.projectile_radius, 1, YELLOW);
        body.active = false;
        Self {
            body,
            vel: Vec2::ZERO,
            owner: Owner::Player,
            damage: tuning.player_projectile_damage,
        }
    }

    /// Activate at `pos`, travelling along `dir` at projectile speed
    pub fn fire(&mut self, pos: Vec2, dir: Facing, owner: Owner, tuning: &Tuning) {
        self.body.pos = pos;
        self.body.active = true;
        self.body.facing = dir;
        self.owner = owner;
        match owner {
            Owner::Enemy => {
                self.body.color = RED;
                self.damage = tuning.enemy_projectile_damage;
            }
            Owner::Player => {
                self.body.color = YELLOW;
                self.damage = tuning.player_projectile_damage;
            }
        }
        self.vel = dir.unit() * tuning.projectile_speed;
    }

    /// Integrate position; idle slots stay put
    pub fn update(&mut self, dt: f32) {
        if self.body.active {
            self.body.pos += self.vel * dt;
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.body.active
    }

    pub fn deactivate(&mut self) {
        self.body.active = false;
    }
}

/// Fixed-capacity projectile storage
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new(tuning: &Tuning) -> Self {
        Self::with_capacity(PROJECTILE_POOL_CAPACITY, tuning)
    }

    pub fn with_capacity(capacity: usize, tuning: &Tuning) -> Self {
        Self {
            slots: (0..capacity).map(|_| Projectile::new(tuning)).collect(),
        }
    }

    /// Fire from `origin`, spawning `muzzle_offset` units ahead along `dir`
    ///
    /// Returns the slot used, or `None` when the pool is exhausted and the
    /// shot was dropped.
    pub fn fire(&mut self, origin: Vec2, dir: Facing, owner: Owner, tuning: &Tuning) -> Option<usize> {
        let Some(index) = self.slots.iter().position(|p| !p.is_active()) else {
            log::trace!("Projectile pool exhausted, dropping {:?} shot", owner);
            return None;
        };
        let spawn = origin + dir.unit() * tuning.muzzle_offset;
        self.slots[index].fire(spawn, dir, owner, tuning);
        Some(index)
    }

    /// Return every slot to the idle state
    pub fn clear(&mut self) {
        for p in &mut self.slots {
            p.deactivate();
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_active()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.slots.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Projectile> {
        self.slots.get(index)
    }
}

//! Gameplay balance
//!
//! Every speed, health value, cooldown and distance the simulation reads comes
//! from one immutable `Tuning` value handed to whichever component needs it.

use serde::{Deserialize, Serialize};

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Axis speed in units/sec (diagonals are not normalized)
    pub player_speed: f32,
    pub player_health: i32,
    pub player_radius: f32,
    /// Seconds between player shots
    pub player_shoot_cooldown: f32,

    // === Enemies ===
    pub enemy_speed: f32,
    pub enemy_health: i32,
    pub enemy_radius: f32,
    /// Seconds between enemy shots
    pub enemy_shoot_cooldown: f32,
    /// Distance at which an enemy turns toward the player and fires
    pub aggro_radius: f32,
    /// Seconds between random heading changes while wandering
    pub wander_interval: f32,

    // === Boss ===
    pub boss_health: i32,
    pub boss_radius: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub player_projectile_damage: i32,
    pub enemy_projectile_damage: i32,
    /// Distance from the shooter's center where a projectile appears
    pub muzzle_offset: f32,

    // === Rooms ===
    /// Distance from a room's right edge that counts as the exit
    pub exit_margin: f32,
    /// Inclusive range of regular enemies per room
    pub min_enemies_per_room: u32,
    pub max_enemies_per_room: u32,
    /// Enemies spawn at least this far inside the room's left/right edges
    pub spawn_margin_x: f32,
    /// Enemies spawn at least this far inside the room's top/bottom edges
    pub spawn_margin_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 200.0,
            player_health: 100,
            player_radius: 15.0,
            player_shoot_cooldown: 0.3,

            enemy_speed: 80.0,
            enemy_health: 30,
            enemy_radius: 12.0,
            enemy_shoot_cooldown: 1.5,
            aggro_radius: 150.0,
            wander_interval: 2.0,

            boss_health: 150,
            boss_radius: 25.0,

            projectile_speed: 400.0,
            projectile_radius: 5.0,
            player_projectile_damage: 10,
            enemy_projectile_damage: 5,
            muzzle_offset: 20.0,

            exit_margin: 50.0,
            min_enemies_per_room: 3,
            max_enemies_per_room: 6,
            spawn_margin_x: 100.0,
            spawn_margin_y: 100.0,
        }
    }
}

impl Tuning {
    /// Repair values that would break the simulation's invariants
    ///
    /// Returns the number of fields that had to be corrected.
    pub fn sanitize(&mut self) -> usize {
        let defaults = Self::default();
        let mut fixed = 0;

        if self.min_enemies_per_room > self.max_enemies_per_room {
            std::mem::swap(&mut self.min_enemies_per_room, &mut self.max_enemies_per_room);
            fixed += 1;
        }
        for (value, fallback) in [
            (&mut self.player_health, defaults.player_health),
            (&mut self.enemy_health, defaults.enemy_health),
            (&mut self.boss_health, defaults.boss_health),
        ] {
            if *value <= 0 {
                *value = fallback;
                fixed += 1;
            }
        }
        for (value, fallback) in [
            (&mut self.player_radius, defaults.player_radius),
            (&mut self.enemy_radius, defaults.enemy_radius),
            (&mut self.boss_radius, defaults.boss_radius),
            (&mut self.projectile_radius, defaults.projectile_radius),
            (&mut self.wander_interval, defaults.wander_interval),
        ] {
            if !(*value > 0.0) {
                *value = fallback;
                fixed += 1;
            }
        }
        // Spawn bands must leave a non-empty range inside the room
        let max_margin_x = crate::consts::ROOM_WIDTH / 2.0 - 1.0;
        let max_margin_y = crate::consts::ROOM_HEIGHT / 2.0 - 1.0;
        if !(0.0..=max_margin_x).contains(&self.spawn_margin_x) {
            self.spawn_margin_x = defaults.spawn_margin_x;
            fixed += 1;
        }
        if !(0.0..=max_margin_y).contains(&self.spawn_margin_y) {
            self.spawn_margin_y = defaults.spawn_margin_y;
            fixed += 1;
        }

        fixed
    }
}

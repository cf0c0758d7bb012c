//! Game state and room layout
//!
//! Owns everything the simulation touches: the player, the row of rooms, the
//! projectile pool and the single shared RNG stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::player::Player;
use super::projectile::ProjectilePool;
use super::room::Room;
use crate::consts::*;
use crate::tuning::Tuning;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Top-level controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    MainMenu,
    /// Active gameplay
    Playing,
    /// Run ended; confirm returns to the menu with a fresh game
    GameOver(Outcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Left to right; the last one is the boss room
    pub rooms: Vec<Room>,
    /// Always a valid index into `rooms`
    pub current_room: usize,
    pub projectiles: ProjectilePool,
    /// Shared by room population and enemy wandering, in that order
    pub rng: Pcg32,
    /// Seconds since the game was created
    pub clock: f64,
}

impl Game {
    /// Create a game at the main menu with rooms already populated
    ///
    /// Invalid tuning values are repaired first.
    pub fn new(mut tuning: Tuning, seed: u64) -> Self {
        let fixed = tuning.sanitize();
        if fixed > 0 {
            log::warn!("Corrected {} invalid tuning value(s)", fixed);
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let rooms = build_rooms(&mut rng, &tuning);
        let mut game = Self {
            seed,
            player: Player::new(player_start(), &tuning),
            rooms,
            current_room: 0,
            projectiles: ProjectilePool::new(&tuning),
            rng,
            clock: 0.0,
            phase: GamePhase::MainMenu,
            tuning,
        };
        game.log_layout();
        game
    }

    /// Fresh player, freshly populated rooms, idle projectiles
    ///
    /// The RNG stream continues from where it was, so consecutive runs get
    /// different layouts.
    pub fn reset(&mut self) {
        self.player = Player::new(player_start(), &self.tuning);
        self.rooms = build_rooms(&mut self.rng, &self.tuning);
        self.current_room = 0;
        self.projectiles.clear();
        self.log_layout();
    }

    /// The room being simulated
    pub fn room(&self) -> &Room {
        &self.rooms[self.current_room]
    }

    pub fn is_last_room(&self) -> bool {
        self.current_room + 1 == self.rooms.len()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Player pressed against the exit of a room that still has enemies
    pub fn blocked_at_exit(&self) -> bool {
        let room = self.room();
        !room.cleared && self.player.body.pos.x >= room.exit_threshold(&self.tuning)
    }

    fn log_layout(&self) {
        let counts: Vec<usize> = self.rooms.iter().map(|r| r.enemies.len()).collect();
        log::info!("Game reset (seed {}): enemies per room {:?}", self.seed, counts);
    }
}

/// Where the player appears at the start of a run
pub fn player_start() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Lay out `ROOM_COUNT` rooms side by side and populate them
///
/// RNG draw order: rooms left to right; per regular room the enemy count,
/// then x, y and wander heading for each enemy; the boss room draws only the
/// boss heading.
pub fn build_rooms<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Vec<Room> {
    (0..ROOM_COUNT)
        .map(|i| {
            let is_boss_room = i == ROOM_COUNT - 1;
            let bounds = Rect::new(i as f32 * ROOM_WIDTH, 0.0, ROOM_WIDTH, ROOM_HEIGHT);
            let mut room = Room::new(bounds, is_boss_room);

            if is_boss_room {
                let center = Vec2::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);
                room.add_boss(center, rng, tuning);
            } else {
                let count = rng.random_range(tuning.min_enemies_per_room..=tuning.max_enemies_per_room);
                for _ in 0..count {
                    let x = rng.random_range(
                        bounds.x + tuning.spawn_margin_x..bounds.right() - tuning.spawn_margin_x,
                    );
                    let y = rng.random_range(
                        bounds.y + tuning.spawn_margin_y..bounds.bottom() - tuning.spawn_margin_y,
                    );
                    room.add_enemy(Vec2::new(x, y), rng, tuning);
                }
            }

            log::debug!(
                "Room {} at x={} holds {} {}",
                i,
                bounds.x,
                room.enemies.len(),
                if is_boss_room { "boss" } else { "enemies" }
            );
            room
        })
        .collect()
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller
//! - Seeded RNG only, drawn in a fixed order
//! - Stable iteration order (pool slot order, room enemy order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod projectile;
pub mod room;
pub mod state;
pub mod tick;

pub use collision::{Rect, circles_overlap};
pub use enemy::{Boss, Enemy, Hostile};
pub use entity::{Entity, Facing};
pub use player::Player;
pub use projectile::{Owner, Projectile, ProjectilePool};
pub use room::Room;
pub use state::{Game, GamePhase, Outcome};
pub use tick::{Controls, tick};

//! Top-Down Shooter - fight through a row of rooms and a final boss
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, rooms, projectiles, game state)
//! - `renderer`: Drawing contract and frame composition
//! - `platform`: Terminal window, keyboard and drawing backend
//! - `settings`: Runtime settings loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical screen size the renderer draws into
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Every room has the same footprint; rooms sit side by side along x
    pub const ROOM_WIDTH: f32 = 800.0;
    pub const ROOM_HEIGHT: f32 = 600.0;
    /// Number of rooms per run (the last one holds the boss)
    pub const ROOM_COUNT: usize = 5;

    /// Pre-allocated projectile slots shared by player and enemies
    pub const PROJECTILE_POOL_CAPACITY: usize = 100;

    /// Target frame rate hint for the frontend
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Display-only colors
pub mod palette {
    use serde::{Deserialize, Serialize};

    /// 8-bit RGBA color
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Color {
        pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b, a: 255 }
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
}

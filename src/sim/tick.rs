//! Per-frame simulation step
//!
//! Core game loop that advances the controller one frame. Within a playing
//! frame the order is fixed: player, player clamp, player shot, enemy shots,
//! projectiles and hits, room, room exit, end of run.

use super::enemy::EnemyFrame;
use super::player::Player;
use super::projectile::{Owner, ProjectilePool};
use super::room::Room;
use super::state::{Game, GamePhase, Outcome};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Movement keys currently held
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Shoot key currently held
    pub shoot: bool,
    /// Confirm key pressed this frame (edge, not level)
    pub confirm: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(game: &mut Game, input: &Controls, dt: f32) {
    game.clock += f64::from(dt);

    match game.phase {
        GamePhase::MainMenu => {
            if input.confirm {
                log::info!("Run started");
                game.phase = GamePhase::Playing;
            }
        }
        GamePhase::GameOver(_) => {
            if input.confirm {
                game.phase = GamePhase::MainMenu;
                game.reset();
            }
        }
        GamePhase::Playing => update_playing(game, input, dt),
    }
}

fn update_playing(game: &mut Game, input: &Controls, dt: f32) {
    let tuning = &game.tuning;
    let player = &mut game.player;

    player.update(dt, input, tuning);

    let room = &mut game.rooms[game.current_room];
    player.body.pos = room.bounds.clamp_circle(player.body.pos, player.body.radius);

    if input.shoot && player.can_shoot() {
        game.projectiles
            .fire(player.body.pos, player.body.facing, Owner::Player, tuning);
        player.reset_shoot_cooldown(tuning);
    }

    for hostile in &mut room.enemies {
        let enemy = hostile.enemy_mut();
        if enemy.body.active && enemy.can_shoot() {
            game.projectiles
                .fire(enemy.body.pos, enemy.body.facing, Owner::Enemy, tuning);
            enemy.reset_shoot_cooldown(tuning);
        }
    }

    update_projectiles(&mut game.projectiles, room, player, dt);

    let frame = EnemyFrame {
        dt,
        time: game.clock,
        target: player.body.pos,
    };
    room.update(&frame, &mut game.rng, tuning);

    // Room exit
    let threshold = room.exit_threshold(tuning);
    if player.body.pos.x > threshold {
        if !room.cleared {
            player.body.pos.x = threshold;
        } else if game.current_room + 1 < game.rooms.len() {
            game.current_room += 1;
            let next = &game.rooms[game.current_room];
            player.body.pos.x = next.bounds.x + tuning.exit_margin;
            log::info!(
                "Entered room {}/{}{}",
                game.current_room + 1,
                game.rooms.len(),
                if next.has_boss { " (boss)" } else { "" }
            );
        }
    }

    // End of run: victory is checked first and wins a same-frame tie
    let last = game.rooms.len() - 1;
    if game.current_room == last && game.rooms[last].cleared {
        log::info!("Victory: boss defeated");
        game.phase = GamePhase::GameOver(Outcome::Victory);
    } else if player.body.health <= 0 {
        log::info!("Defeat in room {}", game.current_room + 1);
        game.phase = GamePhase::GameOver(Outcome::Defeat);
    }
}

/// Move live projectiles, drop those that left the room, resolve hits
///
/// A player shot damages at most one enemy: the first live one it overlaps
/// in room order. Enemy shots only test the player.
fn update_projectiles(pool: &mut ProjectilePool, room: &mut Room, player: &mut Player, dt: f32) {
    for shot in pool.iter_mut().filter(|p| p.is_active()) {
        shot.update(dt);

        if !room.contains_point(shot.body.pos) {
            shot.deactivate();
            continue;
        }

        match shot.owner {
            Owner::Player => {
                let hit = room
                    .enemies
                    .iter_mut()
                    .find(|h| h.is_active() && shot.body.is_colliding(h.body()));
                if let Some(hostile) = hit {
                    hostile.enemy_mut().body.take_damage(shot.damage);
                    shot.deactivate();
                }
            }
            Owner::Enemy => {
                if player.body.active && shot.body.is_colliding(&player.body) {
                    player.body.take_damage(shot.damage);
                    shot.deactivate();
                }
            }
        }
    }
}

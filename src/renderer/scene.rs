//! Whole-frame composition for each game phase

use glam::Vec2;

use super::{Camera, Draw, Surface};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::palette::{BLACK, GREEN, LIGHTGRAY, RED, WHITE};
use crate::sim::{Game, GamePhase, Outcome};

/// Paint one complete frame of `game`
pub fn draw_frame(game: &Game, surface: &mut dyn Surface) {
    surface.clear(BLACK);
    match game.phase {
        GamePhase::MainMenu => draw_menu(surface),
        GamePhase::Playing => draw_playing(game, surface),
        GamePhase::GameOver(outcome) => draw_game_over(outcome, surface),
    }
}

fn draw_menu(surface: &mut dyn Surface) {
    let cx = SCREEN_WIDTH / 2.0;
    surface.text("TOP-DOWN SHOOTER", Vec2::new(cx - 150.0, 200.0), 30.0, WHITE);
    surface.text("Press ENTER to Start", Vec2::new(cx - 120.0, 300.0), 20.0, WHITE);
    surface.text(
        "WASD to move, SPACE to shoot",
        Vec2::new(cx - 170.0, 350.0),
        20.0,
        LIGHTGRAY,
    );
}

fn draw_game_over(outcome: Outcome, surface: &mut dyn Surface) {
    let (cx, cy) = (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    let headline = match outcome {
        Outcome::Defeat => "GAME OVER - YOU DIED!",
        Outcome::Victory => "YOU WIN! BOSS DEFEATED!",
    };
    surface.text(headline, Vec2::new(cx - 200.0, cy - 50.0), 30.0, WHITE);
    surface.text(
        "Press ENTER to return to main menu",
        Vec2::new(cx - 200.0, cy + 50.0),
        20.0,
        LIGHTGRAY,
    );
}

fn draw_playing(game: &Game, surface: &mut dyn Surface) {
    let player = &game.player;

    // World, following the player
    surface.set_camera(Some(Camera {
        target: player.body.pos,
        offset: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
    }));
    game.room().draw(surface);
    player.draw(surface);
    for projectile in game.projectiles.iter() {
        projectile.draw(surface);
    }
    if game.blocked_at_exit() {
        surface.text(
            "Defeat all enemies to proceed!",
            player.body.pos - Vec2::new(200.0, 50.0),
            20.0,
            RED,
        );
    }
    surface.set_camera(None);

    // HUD
    surface.rect(Vec2::new(20.0, 20.0), Vec2::new(200.0, 30.0), RED);
    surface.rect(
        Vec2::new(20.0, 20.0),
        Vec2::new(200.0 * player.body.health_fraction(), 30.0),
        GREEN,
    );
    surface.text(
        &format!("HEALTH: {}/{}", player.body.health, player.body.max_health),
        Vec2::new(30.0, 25.0),
        20.0,
        WHITE,
    );
    surface.text(
        &format!("ROOM: {}/{}", game.current_room + 1, game.rooms.len()),
        Vec2::new(SCREEN_WIDTH - 150.0, 20.0),
        20.0,
        WHITE,
    );
    if game.is_last_room() && !game.room().cleared {
        surface.text(
            "WARNING: BOSS AHEAD!",
            Vec2::new(SCREEN_WIDTH / 2.0 - 150.0, 20.0),
            25.0,
            RED,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::tuning::Tuning;

    fn render(game: &Game) -> DrawList {
        let mut list = DrawList::new();
        draw_frame(game, &mut list);
        list
    }

    #[test]
    fn test_menu_frame() {
        let game = Game::new(Tuning::default(), 5);
        let list = render(&game);
        assert_eq!(list.commands()[0], DrawCommand::Clear(BLACK));
        assert!(list.contains_text("TOP-DOWN SHOOTER"));
        assert!(list.contains_text("Press ENTER to Start"));
        assert!(list.contains_text("WASD to move, SPACE to shoot"));
        assert!(!list.contains_text("HEALTH: 100/100"));
    }

    #[test]
    fn test_game_over_headline_follows_outcome() {
        let mut game = Game::new(Tuning::default(), 5);
        game.phase = GamePhase::GameOver(Outcome::Defeat);
        let list = render(&game);
        assert!(list.contains_text("GAME OVER - YOU DIED!"));
        assert!(list.contains_text("Press ENTER to return to main menu"));

        game.phase = GamePhase::GameOver(Outcome::Victory);
        let list = render(&game);
        assert!(list.contains_text("YOU WIN! BOSS DEFEATED!"));
        assert!(!list.contains_text("GAME OVER - YOU DIED!"));
    }

    #[test]
    fn test_playing_frame_centers_player() {
        let mut game = Game::new(Tuning::default(), 5);
        game.phase = GamePhase::Playing;
        game.player.body.pos = Vec2::new(250.0, 120.0);
        let list = render(&game);

        assert!(list.commands().contains(&DrawCommand::Circle {
            center: Vec2::new(400.0, 300.0),
            radius: 15.0,
            color: game.player.body.color
        }));
        // Room origin shifts by the camera
        assert_eq!(
            list.commands()[1],
            DrawCommand::RectOutline {
                pos: Vec2::new(150.0, 180.0),
                size: Vec2::new(800.0, 600.0),
                color: RED
            }
        );
    }

    #[test]
    fn test_hud() {
        let mut game = Game::new(Tuning::default(), 5);
        game.phase = GamePhase::Playing;
        game.player.body.take_damage(25);
        let list = render(&game);

        assert!(list.contains_text("HEALTH: 75/100"));
        assert!(list.contains_text("ROOM: 1/5"));
        assert!(!list.contains_text("WARNING: BOSS AHEAD!"));
        assert!(list.commands().contains(&DrawCommand::Rect {
            pos: Vec2::new(20.0, 20.0),
            size: Vec2::new(150.0, 30.0),
            color: GREEN
        }));
    }

    #[test]
    fn test_boss_warning_in_last_room() {
        let mut game = Game::new(Tuning::default(), 5);
        game.phase = GamePhase::Playing;
        game.current_room = game.rooms.len() - 1;
        game.player.body.pos = Vec2::new(3300.0, 300.0);
        let list = render(&game);
        assert!(list.contains_text("ROOM: 5/5"));
        assert!(list.contains_text("WARNING: BOSS AHEAD!"));
        assert!(list.contains_text("BOSS"));
    }

    #[test]
    fn test_blocked_message_near_player() {
        let mut game = Game::new(Tuning::default(), 5);
        game.phase = GamePhase::Playing;
        game.player.body.pos = Vec2::new(785.0, 300.0);
        let list = render(&game);
        assert!(list.commands().contains(&DrawCommand::Text {
            text: "Defeat all enemies to proceed!".to_string(),
            pos: Vec2::new(200.0, 250.0),
            size: 20.0,
            color: RED
        }));
    }
}

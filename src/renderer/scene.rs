//! Per-frame scene description

use super::{Font, Sprite, Surface, colors};
use crate::consts::VESSEL_FLOOR_OFFSET;
use crate::sim::{GamePhase, GameState};

/// Horizontal inset of the score counters from the side edges
const SCORE_INSET: i32 = 100;
/// Vertical offset of the game over lines from the screen center
const BANNER_SPACING: i32 = 30;

/// Draw the current state onto a host surface
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(colors::BACKGROUND);

    match state.phase {
        GamePhase::Running => draw_race(state, surface),
        GamePhase::Finished => draw_game_over(state, surface),
    }
}

fn draw_race(state: &GameState, surface: &mut dyn Surface) {
    let bounds = state.bounds;

    for vessel in &state.vessels {
        surface.draw_sprite(Sprite::Ship, vessel.pos.x, vessel.pos.y);
    }

    let score_y = bounds.height - VESSEL_FLOOR_OFFSET;
    let [left, right] = state.scores();
    surface.draw_text(&left.to_string(), SCORE_INSET, score_y, Font::Score);
    surface.draw_text(
        &right.to_string(),
        bounds.width - SCORE_INSET,
        score_y,
        Font::Score,
    );

    // Obstacles waiting off-screen are skipped
    for obstacle in state.obstacles.iter().filter(|o| o.is_on_screen(bounds)) {
        let (x, y, w, h) = obstacle.rect();
        surface.draw_rect(x, y, w, h, colors::OBSTACLE);
    }

    let countdown = &state.countdown;
    let color = if countdown.is_warning() {
        colors::COUNTDOWN_WARNING
    } else {
        colors::COUNTDOWN
    };
    let (x, y, w, h) = countdown.rect();
    surface.draw_rect(x, y, w, h, color);
}

fn draw_game_over(state: &GameState, surface: &mut dyn Surface) {
    let center_x = state.bounds.width / 2;
    let center_y = state.bounds.height / 2;

    surface.draw_text("GAME OVER", center_x, center_y - BANNER_SPACING, Font::Banner);
    if let Some(result) = state.result {
        surface.draw_text(
            &result.outcome.message(),
            center_x,
            center_y + BANNER_SPACING,
            Font::Subtitle,
        );
    }
}

//! Per-frame simulation step
//!
//! Runs once per display refresh. Order within a frame is fixed:
//! player, then bullets, then enemies and their collisions.

use glam::Vec2;

use super::collision::{player_contact, resolve_bullet_hits};
use super::draw::{DrawCommand, DrawList};
use super::input::InputState;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// World advanced; schedule the next frame
    Continue,
    /// Only the pause overlay was drawn; schedule the next frame
    Paused,
    /// No session running (or it just ended); stop the loop
    Ended,
    /// State is inconsistent; the frame was refused and the loop must stop
    Halted,
}

impl FrameOutcome {
    pub fn schedule_next(self) -> bool {
        matches!(self, FrameOutcome::Continue | FrameOutcome::Paused)
    }
}

/// Advance the session by one frame, appending this frame's paint commands
/// to `draw`
pub fn tick(state: &mut GameState, input: &InputState, draw: &mut DrawList) -> FrameOutcome {
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => return FrameOutcome::Ended,
        GamePhase::Paused => {
            draw_pause_overlay(state, draw);
            return FrameOutcome::Paused;
        }
        GamePhase::Running => {}
    }

    let bounds = state.bounds;
    let Some(player) = state.player.as_mut() else {
        log::error!("Running session has no player; refusing to advance frame");
        return FrameOutcome::Halted;
    };

    state.frame += 1;
    draw.push(DrawCommand::Clear);

    player.update(input, bounds);
    draw.draw(&*player);
    let player_pos = player.pos;

    // Bullets: move, draw, cull in a single pass
    let events = &mut state.events;
    state.bullets.retain_mut(|bullet| {
        bullet.update();
        draw.draw(&*bullet);
        let inside = bounds.contains(bullet.pos);
        if !inside {
            events.push(GameEvent::BulletExpired { id: bullet.id });
        }
        inside
    });

    for enemy in &mut state.enemies {
        enemy.update(player_pos);
        draw.draw(&*enemy);
    }

    for hit in resolve_bullet_hits(&mut state.enemies, &mut state.bullets) {
        log::debug!("Bullet {} destroyed enemy {}", hit.bullet_id, hit.enemy_id);
        state.events.push(GameEvent::EnemyDestroyed {
            id: hit.enemy_id,
            bullet_id: hit.bullet_id,
        });
    }

    let caught_by = state
        .player
        .as_ref()
        .and_then(|p| player_contact(p, &state.enemies));
    if let Some(enemy_id) = caught_by {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "Game over: enemy {} reached the player after {} frames",
            enemy_id,
            state.frame
        );
        return FrameOutcome::Ended;
    }

    FrameOutcome::Continue
}

/// Translucent wash plus label, drawn over whatever the last frame left
fn draw_pause_overlay(state: &GameState, draw: &mut DrawList) {
    let center = state.bounds.center();
    draw.push(DrawCommand::Overlay {
        color: PAUSE_OVERLAY_COLOR,
    });
    draw.push(DrawCommand::Text {
        text: PAUSE_LABEL,
        pos: Vec2::new(center.x - PAUSE_LABEL_OFFSET_X, center.y),
        font: PAUSE_LABEL_FONT,
        color: PAUSE_LABEL_COLOR,
    });
}

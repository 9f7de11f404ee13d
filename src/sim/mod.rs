//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One step per display frame, no wall-clock reads
//! - Seeded RNG only
//! - Paint requests go out through `DrawList`, notifications through `GameEvent`

pub mod collision;
pub mod draw;
pub mod entity;
pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Hit, circles_overlap, player_contact, resolve_bullet_hits};
pub use draw::{DrawCommand, DrawList, Drawable};
pub use entity::{Bullet, Enemy, Player};
pub use input::{InputState, MoveKey, is_pause_key};
pub use spawner::Spawner;
pub use state::{Bounds, GameEvent, GamePhase, GameState};
pub use tick::{FrameOutcome, tick};

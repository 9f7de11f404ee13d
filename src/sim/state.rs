//! Session state and the actions that mutate it between frames
//!
//! Everything the frame loop reads lives here: the world collections, the
//! session phase, the tuning in effect and the spawn RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Bullet, Enemy, Player};
use crate::tuning::Tuning;

/// Playfield rectangle, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive containment: a point on the edge is still inside
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No session yet
    Idle,
    /// Frame loop advancing the world
    Running,
    /// Frame loop drawing the overlay only
    Paused,
    /// Session ended, waiting for an external restart
    GameOver,
}

/// Notifications for the host, drained once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    Paused,
    Resumed,
    BulletFired { id: u32 },
    BulletExpired { id: u32 },
    EnemySpawned { id: u32, pos: Vec2 },
    EnemyDestroyed { id: u32, bullet_id: u32 },
    /// Show the start control and tell the player; never blocks
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Playfield used by the next frame
    pub bounds: Bounds,
    /// Constants for entities created from now on
    pub tuning: Tuning,
    /// Present from the first `start` onward
    pub player: Option<Player>,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Frames advanced in the current session (paused frames excluded)
    pub frame: u64,
    /// Pending notifications
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Idle state; nothing moves until `start`
    pub fn new(seed: u64, bounds: Bounds, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            bounds,
            tuning,
            player: None,
            bullets: Vec::new(),
            enemies: Vec::new(),
            frame: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// True while a session is live, paused or not
    pub fn running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a new session: fresh player, empty world, unpaused
    pub fn start(&mut self) {
        self.player = Some(Player::new(self.bounds, &self.tuning));
        self.bullets.clear();
        self.enemies.clear();
        self.events.clear();
        self.frame = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::SessionStarted);
        log::info!(
            "Session started on {}x{} playfield",
            self.bounds.width,
            self.bounds.height
        );
    }

    /// Flip between Running and Paused; ignored outside a session
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.events.push(GameEvent::Resumed);
            }
            GamePhase::Idle | GamePhase::GameOver => {
                log::debug!("Pause toggle ignored in {:?}", self.phase);
            }
        }
    }

    /// Launch a bullet from the player toward `target` (screen coordinates).
    /// Returns the bullet id, or None when firing is suppressed.
    pub fn fire(&mut self, target: Vec2) -> Option<u32> {
        if self.phase != GamePhase::Running {
            return None;
        }
        let origin = self.player.as_ref()?.pos;
        let id = self.next_entity_id();
        self.bullets.push(Bullet::aimed(id, origin, target, &self.tuning));
        self.events.push(GameEvent::BulletFired { id });
        Some(id)
    }

    /// One spawner tick. Creates an enemy at a uniformly random point of the
    /// playfield, but only while running and not paused.
    pub fn spawn_tick(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Running {
            return None;
        }
        let pos = Vec2::new(
            self.rng.random::<f32>() * self.bounds.width,
            self.rng.random::<f32>() * self.bounds.height,
        );
        Some(self.spawn_enemy_at(pos))
    }

    /// Insert an enemy at an exact position
    pub fn spawn_enemy_at(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, pos, &self.tuning));
        self.events.push(GameEvent::EnemySpawned { id, pos });
        log::debug!("Enemy {} spawned at ({:.1}, {:.1})", id, pos.x, pos.y);
        id
    }

    /// Host resize; takes effect on the next frame
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Hand pending notifications to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

//! Player, bullet and enemy records with their per-frame updates

use glam::Vec2;

use super::draw::{DrawCommand, Drawable};
use super::input::InputState;
use super::state::Bounds;
use crate::consts::{BULLET_COLOR, ENEMY_COLOR, PLAYER_COLOR};
use crate::direction_toward;
use crate::tuning::Tuning;

/// The player's circle
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Inert: nothing damages the player, contact ends the session
    pub health: i32,
    /// Velocity intent from the last update
    pub vel: Vec2,
}

impl Player {
    /// A fresh player at the center of the playfield
    pub fn new(bounds: Bounds, tuning: &Tuning) -> Self {
        Self {
            pos: bounds.center(),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
            health: tuning.player_health,
            vel: Vec2::ZERO,
        }
    }

    /// Resolve velocity from held keys, move, then keep the whole circle
    /// inside the playfield
    pub fn update(&mut self, input: &InputState, bounds: Bounds) {
        self.vel = Vec2::new(input.axis_x(), input.axis_y()) * self.speed;
        self.pos += self.vel;
        self.pos.x = clamp_inside(self.pos.x, self.radius, bounds.width);
        self.pos.y = clamp_inside(self.pos.y, self.radius, bounds.height);
    }
}

/// Clamp to `[radius, extent - radius]`, collapsing to `radius` when the
/// extent is narrower than the diameter
#[inline]
fn clamp_inside(v: f32, radius: f32, extent: f32) -> f32 {
    v.min(extent - radius).max(radius)
}

impl Drawable for Player {
    fn draw_command(&self) -> DrawCommand {
        DrawCommand::Circle {
            pos: self.pos,
            radius: self.radius,
            color: PLAYER_COLOR,
        }
    }
}

/// A projectile flying in a straight line
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    /// Unit vector, fixed at creation
    pub dir: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Bullet {
    /// Fire from `origin` toward `target`
    pub fn aimed(id: u32, origin: Vec2, target: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: origin,
            dir: direction_toward(origin, target),
            radius: tuning.bullet_radius,
            speed: tuning.bullet_speed,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.dir * self.speed;
    }
}

impl Drawable for Bullet {
    fn draw_command(&self) -> DrawCommand {
        DrawCommand::Circle {
            pos: self.pos,
            radius: self.radius,
            color: BULLET_COLOR,
        }
    }
}

/// A homing enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            radius: tuning.enemy_radius,
            speed: tuning.enemy_speed,
        }
    }

    /// Step toward the player's current position (pure pursuit)
    pub fn update(&mut self, target: Vec2) {
        self.pos += direction_toward(self.pos, target) * self.speed;
    }
}

impl Drawable for Enemy {
    fn draw_command(&self) -> DrawCommand {
        DrawCommand::Circle {
            pos: self.pos,
            radius: self.radius,
            color: ENEMY_COLOR,
        }
    }
}

//! Draw requests emitted by the simulation
//!
//! The simulation never touches a surface directly. Each frame it appends
//! commands to a `DrawList` in the order they must be painted, and the host
//! hands that list to whatever backend it uses.

use glam::Vec2;
use serde::Serialize;

/// A single paint operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear,
    /// Filled circle
    Circle {
        pos: Vec2,
        radius: f32,
        color: &'static str,
    },
    /// Filled rectangle covering the whole surface
    Overlay { color: &'static str },
    /// Filled text with its baseline starting at `pos`
    Text {
        text: &'static str,
        pos: Vec2,
        font: &'static str,
        color: &'static str,
    },
}

/// Anything that paints itself as one command
pub trait Drawable {
    fn draw_command(&self) -> DrawCommand;
}

/// Ordered commands for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn draw(&mut self, item: &impl Drawable) {
        self.commands.push(item.draw_command());
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Reuse the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Circles painted with the given color, in paint order
    pub fn circles(&self, color: &str) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let color = color.to_owned();
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Circle {
                pos,
                radius,
                color: c,
            } if *c == color => Some((*pos, *radius)),
            _ => None,
        })
    }
}

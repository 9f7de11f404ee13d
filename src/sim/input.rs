//! Held-key snapshot read by the player update
//!
//! Key events mutate this between frames; the next frame reads whatever the
//! last event left behind. Repeated key-down events do not queue.

/// A movement direction bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    /// Map a DOM `KeyboardEvent.key` value (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "arrowup" => Some(MoveKey::Up),
            "s" | "arrowdown" => Some(MoveKey::Down),
            "a" | "arrowleft" => Some(MoveKey::Left),
            "d" | "arrowright" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

/// Whether a DOM key value is the pause toggle
pub fn is_pause_key(key: &str) -> bool {
    key == "Escape"
}

/// Currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    /// Apply a raw key event. Returns false for keys that don't move the player.
    pub fn apply_key(&mut self, key: &str, held: bool) -> bool {
        match MoveKey::from_key(key) {
            Some(k) => {
                self.set(k, held);
                true
            }
            None => false,
        }
    }

    /// Release everything; the host calls this when the window loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Horizontal intent in {-1, 0, 1}; left wins when both are held
    pub fn axis_x(&self) -> f32 {
        axis(self.left, self.right)
    }

    /// Vertical intent in {-1, 0, 1}; up wins when both are held
    pub fn axis_y(&self) -> f32 {
        axis(self.up, self.down)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    if negative {
        -1.0
    } else if positive {
        1.0
    } else {
        0.0
    }
}

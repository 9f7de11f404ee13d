//! Enemy spawn timer
//!
//! The timer is free-running: pause, Game Over and restart never reset it.
//! Every tick is offered to the session, which only produces an enemy while
//! running and unpaused.

use super::state::GameState;

#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Milliseconds between ticks
    pub interval_ms: f64,
    /// Time accumulated toward the next tick
    elapsed_ms: f64,
    /// Ticks fired since creation, spawning or not
    ticks: u64,
}

impl Spawner {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            ticks: 0,
        }
    }

    /// One timer tick. Returns the spawned enemy id, if the session took it.
    pub fn fire(&mut self, state: &mut GameState) -> Option<u32> {
        self.ticks += 1;
        state.spawn_tick()
    }

    /// Feed elapsed real time and fire once per whole interval.
    /// Returns the number of enemies actually spawned.
    pub fn advance(&mut self, elapsed_ms: f64, state: &mut GameState) -> usize {
        if self.interval_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += elapsed_ms.max(0.0);

        let mut spawned = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            if self.fire(state).is_some() {
                spawned += 1;
            }
        }
        spawned
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Milliseconds until the next tick
    pub fn remaining_ms(&self) -> f64 {
        (self.interval_ms - self.elapsed_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bounds;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(3, Bounds::new(800.0, 600.0), Tuning::default())
    }

    #[test]
    fn test_fires_on_interval() {
        let mut state = state();
        state.start();
        let mut spawner = Spawner::new(2000.0);

        assert_eq!(spawner.advance(1999.0, &mut state), 0);
        assert_eq!(spawner.advance(1.0, &mut state), 1);
        assert_eq!(spawner.advance(4000.0, &mut state), 2);
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(spawner.ticks(), 3);
    }

    #[test]
    fn test_pause_gates_effect_not_cadence() {
        let mut state = state();
        state.start();
        let mut spawner = Spawner::new(2000.0);

        spawner.advance(1500.0, &mut state);
        state.toggle_pause();
        // Tick lands while paused: counted, no enemy
        assert_eq!(spawner.advance(1000.0, &mut state), 0);
        assert_eq!(spawner.ticks(), 1);
        state.toggle_pause();

        // Cadence kept: next tick 1500ms later, not 2000
        assert_eq!(spawner.advance(1499.0, &mut state), 0);
        assert_eq!(spawner.advance(1.0, &mut state), 1);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_survives_restart() {
        let mut state = state();
        let mut spawner = Spawner::new(2000.0);

        // Idle: ticks pass without spawning
        assert_eq!(spawner.advance(3000.0, &mut state), 0);
        assert_eq!(spawner.remaining_ms(), 1000.0);

        state.start();
        assert_eq!(spawner.advance(1000.0, &mut state), 1);
        assert_eq!(spawner.ticks(), 2);
    }
}

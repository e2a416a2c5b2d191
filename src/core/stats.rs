//! End-of-game statistics and the stopwatch that times a match.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Monotonic stopwatch. Starts when created.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Figures printed once the last pair is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub elapsed: Duration,
    pub moves: u32,
    pub errors: u32,
}

impl GameStats {
    /// Whole minutes of play.
    #[must_use]
    pub fn minutes(&self) -> u64 {
        self.elapsed.as_secs() / 60
    }

    /// Seconds past the last whole minute.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.elapsed.as_secs() % 60
    }
}

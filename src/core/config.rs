//! Engine configuration and the read-only rule context.
//!
//! The engine is configured at construction time (`EngineConfig`) and
//! receives per-command context (`RuleContext`) from the controller:
//! the current play phase and the progress counters the controller owns.
//! Nothing in here is ambient state - validation reads the context it is
//! handed and nothing else.

use serde::{Deserialize, Serialize};

/// How many cards a single stock draw moves to the waste.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawCount {
    /// Draw one card at a time.
    #[default]
    One,
    /// Draw three cards at a time (fewer when the stock runs short).
    Three,
}

impl DrawCount {
    /// Number of cards per draw.
    #[must_use]
    pub const fn cards(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

/// Engine configuration, fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cards moved from stock to waste per draw action.
    pub draw_count: DrawCount,

    /// Maximum retained move records; the oldest is evicted beyond this.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            draw_count: DrawCount::One,
            history_capacity: 100,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with defaults (draw-1, 100 undo records).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: DrawCount) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Set the move-history capacity.
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be at least 1");
        self.history_capacity = capacity;
        self
    }
}

/// The controller-owned play phase.
///
/// The engine never flips this itself; the controller passes it in with
/// every command and mutating commands are rejected outside `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    Completed,
}

impl GamePhase {
    /// Are moves currently allowed?
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// Progress counters owned by the controller's game-state object.
///
/// The engine reads these as heuristic inputs only and never writes them;
/// the authoritative copies live with the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    /// Moves the controller has counted so far.
    pub move_count: u32,

    /// Elapsed play time in seconds.
    pub elapsed_secs: u32,

    /// Cards currently on foundations.
    pub foundation_cards: u8,
}

/// Read-only context passed into every validating command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContext {
    /// Current play phase.
    pub phase: GamePhase,

    /// Controller-owned progress counters.
    pub progress: GameProgress,
}

impl RuleContext {
    /// Context for an active game with zeroed progress counters.
    #[must_use]
    pub fn playing() -> Self {
        Self {
            phase: GamePhase::Playing,
            progress: GameProgress::default(),
        }
    }

    /// Context with the given phase and zeroed progress counters.
    #[must_use]
    pub fn with_phase(phase: GamePhase) -> Self {
        Self {
            phase,
            progress: GameProgress::default(),
        }
    }
}

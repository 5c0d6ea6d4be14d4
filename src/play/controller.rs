//! Game controller: turns player input into engine calls and events.
//!
//! A move takes two clicks: the first selects a source peg, the second a
//! destination. Clicking the selected peg again cancels the selection. The
//! controller also drives the stopwatch and writes the score log on a win.
//!
//! ```
//! use hanoi_engine::core::{GameConfig, PegId};
//! use hanoi_engine::play::{GameController, SystemClock};
//! use hanoi_engine::scores::MemoryStore;
//!
//! let mut game = GameController::new(GameConfig::new(3), SystemClock::new(), MemoryStore::new())
//!     .expect("valid config");
//!
//! game.click_peg(PegId::LEFT);
//! let events = game.click_peg(PegId::RIGHT);
//! assert!(events.iter().any(|e| e.snapshot().is_some()));
//! assert_eq!(game.snapshot().move_count, 1);
//! ```

use tracing::{debug, warn};

use crate::core::{ConfigError, GameConfig, PegId, SessionSnapshot};
use crate::events::{GameEvent, Notice};
use crate::rules::{minimum_moves, MoveEngine};
use crate::scores::{KeyValueStore, ScoreEntry, ScoreLog, Scoreboard};

use super::timer::{Clock, Stopwatch};

/// Drives one game for one player.
#[derive(Debug)]
pub struct GameController<C: Clock, K: KeyValueStore> {
    config: GameConfig,
    engine: MoveEngine,
    selection: Option<PegId>,
    stopwatch: Stopwatch<C>,
    scores: ScoreLog<K>,
    player_name: String,
}

impl<C: Clock, K: KeyValueStore> GameController<C, K> {
    /// Create a controller for a validated configuration.
    pub fn new(config: GameConfig, clock: C, store: K) -> Result<Self, ConfigError> {
        let engine = MoveEngine::from_config(&config)?;
        let scores = ScoreLog::new(store, config.storage_key.clone());
        Ok(Self {
            config,
            engine,
            selection: None,
            stopwatch: Stopwatch::new(clock),
            scores,
            player_name: String::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.engine.snapshot()
    }

    /// Source peg awaiting a destination, if any.
    #[must_use]
    pub fn selection(&self) -> Option<PegId> {
        self.selection
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.stopwatch.elapsed_seconds()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Current scoreboard, read from storage.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::new(self.scores.load())
    }

    #[must_use]
    pub fn score_log(&self) -> &ScoreLog<K> {
        &self.scores
    }

    /// Name recorded with the next score.
    #[must_use]
    pub fn player_name(&self) -> &str {
        if self.player_name.is_empty() {
            &self.config.default_player_name
        } else {
            &self.player_name
        }
    }

    /// Set the player name. Blank names fall back to the configured default.
    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = name.trim().to_string();
    }

    // === Input ===

    /// Handle a click on a peg.
    pub fn click_peg(&mut self, peg: PegId) -> Vec<GameEvent> {
        if self.engine.session().is_finished() {
            return Vec::new();
        }

        match self.selection {
            None => self.select(peg),
            Some(source) if source == peg => {
                self.selection = None;
                vec![
                    GameEvent::SelectionCleared,
                    GameEvent::Notice(Notice::info("Selection cancelled.")),
                ]
            }
            Some(source) => {
                let mut events = self.attempt_move(source, peg);
                self.selection = None;
                events.push(GameEvent::SelectionCleared);
                events
            }
        }
    }

    /// Start a new game with `disk_count` disks.
    pub fn restart(&mut self, disk_count: u32) -> Result<Vec<GameEvent>, ConfigError> {
        let config = self.config.clone().with_disk_count(disk_count);
        config.validate()?;
        self.config = config;

        self.engine.initialize(disk_count);
        self.selection = None;
        self.stopwatch.reset();

        Ok(vec![
            GameEvent::SelectionCleared,
            GameEvent::NoticeCleared,
            GameEvent::Restarted {
                snapshot: self.engine.snapshot(),
            },
        ])
    }

    /// Undo the latest move. Allowed after a win.
    pub fn undo(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let record = self.engine.session().last_move().copied();

        match record {
            Some(record) if self.engine.undo_last() => {
                events.push(GameEvent::Undone {
                    record,
                    snapshot: self.engine.snapshot(),
                });
                events.push(GameEvent::Notice(Notice::info("Move undone.")));
                if self.engine.session().move_count() == 0 {
                    self.stopwatch.reset();
                }
            }
            _ => events.push(GameEvent::Notice(Notice::error("Nothing to undo."))),
        }

        self.selection = None;
        events.push(GameEvent::SelectionCleared);
        events
    }

    // === Internals ===

    fn select(&mut self, peg: PegId) -> Vec<GameEvent> {
        if self.engine.session().board().height(peg) == 0 {
            return vec![GameEvent::Notice(Notice::error("That peg is empty!"))];
        }

        self.selection = Some(peg);
        vec![
            GameEvent::Selected(peg),
            GameEvent::Notice(Notice::info("Select a destination peg...")),
        ]
    }

    fn attempt_move(&mut self, source: PegId, dest: PegId) -> Vec<GameEvent> {
        if let Err(reason) = self.engine.check_move(source, dest) {
            return vec![GameEvent::Notice(Notice::error(format!(
                "Illegal move: {reason}."
            )))];
        }
        let applied = self.engine.apply_move(source, dest);
        debug_assert!(applied, "checked move was rejected");

        let session = self.engine.session();
        if session.move_count() == 1 {
            self.stopwatch.start();
        }

        let mut events = Vec::new();
        if let Some(record) = session.last_move().copied() {
            events.push(GameEvent::Moved {
                record,
                snapshot: session.snapshot(),
            });
        }
        events.push(GameEvent::NoticeCleared);

        if self.engine.check_win() {
            self.stopwatch.stop();
            events.extend(self.record_win());
        }
        events
    }

    fn record_win(&mut self) -> Vec<GameEvent> {
        let session = self.engine.session();
        let moves = session.move_count();
        let disk_count = session.disk_count();
        let time_seconds = self.stopwatch.elapsed_seconds();
        let recorded_at = self.stopwatch.clock().now().as_secs();

        let entry = ScoreEntry::new(self.player_name(), disk_count, time_seconds, moves)
            .with_recorded_at(recorded_at);

        let mut events = Vec::new();
        match self.scores.append(entry) {
            Ok(()) => events.push(GameEvent::ScoreSaved { moves, time_seconds }),
            Err(err) => {
                warn!(%err, "failed to save score");
                events.push(GameEvent::Notice(Notice::error("Your score could not be saved.")));
            }
        }

        debug!(moves, disk_count, time_seconds, "win recorded");
        events.push(GameEvent::Won { move_count: moves });
        events.push(GameEvent::Notice(Notice::success(format!(
            "Well done! Solved in {} moves (best possible: {}).",
            moves,
            minimum_moves(disk_count)
        ))));
        events
    }
}

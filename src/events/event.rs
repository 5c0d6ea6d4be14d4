//! Game event types.
//!
//! Events describe what happened after a player input so the presentation
//! layer can react: redraw the board, update the move counter, show a
//! message, play the win animation. They carry plain data only and never
//! feed back into the engine.

use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, PegId, SessionSnapshot};

/// How a notice should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Guidance, e.g. "select a destination peg".
    Info,
    /// Positive outcome, e.g. the win message.
    Success,
    /// A rejected input. Frontends usually show these briefly.
    Error,
}

/// A short message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Message text.
    pub text: String,

    /// Presentation hint.
    pub severity: Severity,
}

impl Notice {
    /// Create a notice.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Create an info notice.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    /// Create a success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    /// Create an error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }
}

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh session replaced the previous one.
    Restarted { snapshot: SessionSnapshot },

    /// A source peg was selected and awaits a destination.
    Selected(PegId),

    /// The pending selection was dropped.
    SelectionCleared,

    /// A move was applied.
    Moved { record: MoveRecord, snapshot: SessionSnapshot },

    /// The latest move was reversed.
    Undone { record: MoveRecord, snapshot: SessionSnapshot },

    /// The puzzle was solved. Emitted once per win.
    Won { move_count: u32 },

    /// A score entry was appended to the log.
    ScoreSaved { moves: u32, time_seconds: u64 },

    /// Show a message.
    Notice(Notice),

    /// Hide the current message.
    NoticeCleared,
}

impl GameEvent {
    /// Board snapshot carried by this event, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        match self {
            GameEvent::Restarted { snapshot }
            | GameEvent::Moved { snapshot, .. }
            | GameEvent::Undone { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// Notice carried by this event, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            GameEvent::Notice(notice) => Some(notice),
            _ => None,
        }
    }

    /// Whether this is the win event.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameEvent::Won { .. })
    }
}

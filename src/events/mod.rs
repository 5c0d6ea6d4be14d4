//! Events emitted to the presentation layer.
//!
//! The engine returns plain values; the game controller turns them into
//! [`GameEvent`]s. Renderers, timers and animation code consume the events
//! without registering callbacks anywhere in the core.

mod event;

pub use event::{GameEvent, Notice, Severity};

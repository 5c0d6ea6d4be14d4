//! Game loop collaborators around the move engine.
//!
//! - [`GameController`]: click-to-select input, restart, undo, win handling
//! - [`Stopwatch`] and [`Clock`]: session timing
//!
//! Everything here is single-threaded. One controller owns one engine, and
//! each input is fully handled before the next is accepted.

mod controller;
pub mod timer;

pub use controller::GameController;
pub use timer::{Clock, ManualClock, Stopwatch, SystemClock};

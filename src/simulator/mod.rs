//! The panel placement simulator.
//!
//! This is the core of the trainer: a placement board holding one
//! component per zone, per-level compatibility rules, a validator that
//! scores the board against the active rule set, and a session that
//! orchestrates the pieces and tracks score, level, and elapsed time.
//!
//! Every operation returns a structured outcome. Rejected actions are
//! ordinary values of [`ActionError`], never panics or fatal errors; the
//! presentation layer decides how to show them.

pub mod board;
pub mod outcome;
pub mod scheduler;
pub mod session;
pub mod validator;

// Re-export commonly used types
pub use board::PlacementBoard;
pub use outcome::{ActionError, PlacedComponent};
pub use scheduler::{DeferredAction, Scheduler, TaskToken};
pub use session::Session;
pub use validator::{evaluate, ResultBand, ValidationError, ValidationReport};

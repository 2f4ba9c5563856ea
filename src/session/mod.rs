//! One complete run of the controller, from first field to a terminal state.

pub mod controller;
pub mod state;

pub use controller::{CONFIRM_PROMPT, Controller, Turn};
pub use state::{AnswerSet, Exchange, SessionPhase, SessionState};

//! View state and its async driver.
//!
//! - [`state`]: the synchronous state machine (phases, filter precedence,
//!   stale-response handling).
//! - [`controller`]: runs the fetches a state transition asks for.

pub mod controller;
pub mod state;

pub use controller::Controller;
pub use state::*;

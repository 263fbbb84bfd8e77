//! Session layer: per-user mutable state, isolated per session.

mod state;

pub use state::SessionState;

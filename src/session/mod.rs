pub mod controller;
pub mod state;

pub use controller::{SessionController, SessionSnapshot, SessionSummary};
pub use state::SessionState;

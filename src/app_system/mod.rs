//! System orchestration, startup, and shutdown logic.

pub mod logging;
pub mod user_system;

pub use logging::*;
pub use user_system::*;

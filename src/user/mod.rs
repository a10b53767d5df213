//! User persistence mapping and the registration service.

mod entity;
pub mod service;

pub use service::{CreateOutcome, UserService};

//! HTTP surface of the user service.
//!
//! ```text
//! axum handlers  ->  UserService  ->  UserStore (document actor)
//! ```
//!
//! Handlers only translate between JSON and the service; every decision about
//! users is made in [`UserService`](crate::user::UserService).

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

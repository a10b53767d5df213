use std::sync::Arc;

use crate::user::UserService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

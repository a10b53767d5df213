use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::domain::User;
use crate::user::UserService;

/// Owns the user store actor and hands out the service built on top of it.
///
/// The actor stops once the last client handle is gone, so `shutdown` must be
/// called after the HTTP server (which holds the service) has been dropped.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    pub fn new(store_buffer: usize) -> Self {
        let (user_actor, user_resource_client) = ResourceActor::<User>::new(store_buffer);
        let user_client = UserClient::new(user_resource_client);
        let handle = tokio::spawn(user_actor.run());

        info!(store_buffer, "User store started");
        Self {
            user_client,
            handle,
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(Arc::new(self.user_client.clone()))
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down user store...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("User store shutdown complete.");
        Ok(())
    }
}

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::User;
use crate::error::StoreError;
use crate::store::UserStore;

/// Client for the user document actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, StoreError> {
        self.inner.count().await.map_err(StoreError::from)
    }
}

impl From<FrameworkError> for StoreError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Conflict(id) => StoreError::Duplicate(id),
            FrameworkError::Rejected(reason) => StoreError::Rejected(reason),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl UserStore for UserClient {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        debug!("Sending request");
        self.inner.get(id.to_string()).await.map_err(StoreError::from)
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        debug!("Sending request");
        self.inner.exists(id.to_string()).await.map_err(StoreError::from)
    }

    #[instrument(fields(user_id = %user.id), skip(self, user))]
    async fn save(&self, user: User) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.insert(user).await.map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;

    #[tokio::test]
    async fn test_client_maps_actor_errors() {
        let (actor, inner) = ResourceActor::<User>::new(10);
        tokio::spawn(actor.run());
        let client = UserClient::new(inner);

        client.save(User::from_signup("u1", "Ana", "ana@x.com")).await.unwrap();

        let duplicate = client.save(User::from_signup("u1", "Bob", "bob@x.com")).await;
        assert_eq!(duplicate, Err(StoreError::Duplicate("u1".to_string())));

        let invalid = client.save(User::from_signup("u2", "", "x@x.com")).await;
        assert_eq!(invalid, Err(StoreError::Rejected("name is empty".to_string())));

        assert!(client.exists_by_id("u1").await.unwrap());
        assert!(!client.exists_by_id("u2").await.unwrap());
        let stored = client.find_by_id("u1").await.unwrap().unwrap();
        assert_eq!(stored.name, "Ana");
        assert_eq!(client.find_by_id("u2").await.unwrap(), None);
        assert_eq!(client.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stopped_actor_is_unavailable() {
        let (actor, inner) = ResourceActor::<User>::new(10);
        drop(actor);
        let client = UserClient::new(inner);

        let result = client.find_by_id("u1").await;
        assert_eq!(result, Err(StoreError::Unavailable("Actor closed".to_string())));
    }
}

//! Persistence contract the user service depends on.

use async_trait::async_trait;

use crate::domain::User;
use crate::error::StoreError;

/// Document store keyed by user id.
///
/// `save` is an insert: implementations must refuse to replace an existing
/// document and report [`StoreError::Duplicate`] instead.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the stored user, or `None` when the id is unknown.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError>;

    async fn save(&self, user: User) -> Result<(), StoreError>;
}

use thiserror::Error;

/// Failures reported by a [`UserStore`](crate::store::UserStore).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Duplicate key: {0}")]
    Duplicate(String),
    #[error("Document rejected: {0}")]
    Rejected(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the user service.
///
/// `NotFound` covers every failed read, whatever the cause. The store detail
/// is logged and then dropped so callers cannot probe internals through the
/// read path. Create failures keep their detail in the message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Failed to create user: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_detail() {
        let err = UserError::DatabaseError(StoreError::Rejected("name is empty".into()).to_string());
        assert_eq!(err.to_string(), "Database error: Document rejected: name is empty");
        assert_eq!(
            UserError::Unexpected("Store unavailable: Actor closed".into()).to_string(),
            "Failed to create user: Store unavailable: Actor closed"
        );
        assert_eq!(
            UserError::ValidationError("User ID is required".into()).to_string(),
            "User ID is required"
        );
    }
}

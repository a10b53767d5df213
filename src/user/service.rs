use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::domain::{User, UserCreate, UserView};
use crate::error::{StoreError, UserError};
use crate::store::UserStore;

/// Successful results of [`UserService::create_user`].
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created { id: String, name: String },
    AlreadyExists,
}

/// User lookup and registration on top of a [`UserStore`].
///
/// Holds no state of its own between calls; the store owns every user.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Fetches the public view of a user.
    ///
    /// Store failures are reported as `NotFound` too. Only the log keeps the
    /// underlying error.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> Result<UserView, UserError> {
        info!("Getting user");
        match self.store.find_by_id(id).await {
            Ok(Some(user)) => Ok(user.into()),
            Ok(None) => {
                error!("User not found");
                Err(UserError::NotFound(id.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Error getting user");
                Err(UserError::NotFound(id.to_string()))
            }
        }
    }

    /// Registers a user. Creating an id that is already taken is a no-op.
    #[instrument(fields(user_id = ?payload.id), skip(self, payload))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<CreateOutcome, UserError> {
        info!(name = ?payload.name, email = ?payload.email, "Creating user");

        let id = required(payload.id, "User ID is required")?;
        let name = required(payload.name, "User name is required")?;
        let email = required(payload.email, "User email is required")?;

        let exists = self.store.exists_by_id(&id).await.map_err(|e| {
            error!(error = %e, "Existence check failed");
            UserError::Unexpected(e.to_string())
        })?;
        if exists {
            info!("User already exists");
            return Ok(CreateOutcome::AlreadyExists);
        }

        let created = CreateOutcome::Created {
            id: id.clone(),
            name: name.clone(),
        };
        let user = User::from_signup(id, name, email);

        match self.store.save(user).await {
            Ok(()) => {
                info!("User created successfully");
                Ok(created)
            }
            // Lost a race against a concurrent create of the same id.
            Err(StoreError::Duplicate(_)) => {
                info!("User already exists");
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(e) => {
                error!(error = %e, "Error saving user to database");
                Err(UserError::DatabaseError(e.to_string()))
            }
        }
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, UserError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            error!("{}", message);
            Err(UserError::ValidationError(message.to_string()))
        }
    }
}

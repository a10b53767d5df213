use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any document must implement to be stored by a ResourceActor.
///
/// Ids are supplied by the caller; the actor never generates them.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Document-level invariants checked before every insert.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Failures reported by the actor or the channel between client and actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("Document rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Exists {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Insert {
        item: T,
        respond_to: Response<()>,
    },
    #[cfg(test)]
    Count {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Serves requests until every client handle has been dropped.
    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    self.handle_get(id, respond_to);
                }
                ResourceRequest::Exists { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.contains_key(&id)));
                }
                ResourceRequest::Insert { item, respond_to } => {
                    self.handle_insert(item, respond_to);
                }
                #[cfg(test)]
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(documents = self.store.len(), "ResourceActor stopped");
    }

    #[instrument(fields(doc_id = %id), skip(self, id, respond_to))]
    fn handle_get(&self, id: T::Id, respond_to: Response<Option<T>>) {
        let item = self.store.get(&id).cloned();
        if item.is_none() {
            debug!("Document not found");
        }
        let _ = respond_to.send(Ok(item));
    }

    #[instrument(fields(doc_id = %item.id()), skip(self, item, respond_to))]
    fn handle_insert(&mut self, item: T, respond_to: Response<()>) {
        if let Err(reason) = item.validate() {
            error!(reason = %reason, "Document rejected");
            let _ = respond_to.send(Err(FrameworkError::Rejected(reason)));
            return;
        }

        let id = item.id().clone();
        if self.store.contains_key(&id) {
            debug!("Duplicate key");
            let _ = respond_to.send(Err(FrameworkError::Conflict(id.to_string())));
            return;
        }

        self.store.insert(id, item);
        debug!("Document inserted");
        let _ = respond_to.send(Ok(()));
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Get { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn exists(&self, id: T::Id) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Exists { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn insert(&self, item: T) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Insert { item, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Count { respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

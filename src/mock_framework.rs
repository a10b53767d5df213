//! # Mock Framework
//!
//! Utilities for testing store clients without a running actor.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_exists`] or [`expect_insert`] to script replies.

use crate::actor_framework::{Entity, Response, ResourceClient, ResourceRequest};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// Requests sent through the client land on the receiver instead of an actor,
/// so a test decides what each call returns and in which order.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Exists request
pub async fn expect_exists<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Exists { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let insert_task = tokio::spawn(async move {
            client.insert(User::from_signup("u1", "Test", "test@example.com")).await
        });

        let (item, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(item.name, "Test");
        responder.send(Ok(())).unwrap();

        let result = insert_task.await.unwrap();
        assert_eq!(result, Ok(()));
    }
}

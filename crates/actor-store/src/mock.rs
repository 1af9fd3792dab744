//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running [`ResourceActor`](crate::ResourceActor). It lets
//! you inject failures that a healthy in-memory store never produces.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted responses | Real state |
//! | **Use Case** | Code *around* the client | The store itself, or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//!
//! Expectations are consumed strictly in order. Code under test that issues requests
//! concurrently must be driven with a single worker (or otherwise serialized) for the order
//! to be deterministic.
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)] struct Note { id: Option<u64> }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = u64;
//!     type Error = NoteError;
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a store fault
//!     mock.expect_ids().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.ids().await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the canned reply.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Save {
        response: Result<T, FrameworkError>,
    },
    SaveEcho,
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Ids {
        response: Result<Vec<T::Id>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Item>::new();
/// mock.expect_ids().return_ok(vec![ItemId(1)]);
/// mock.expect_get(ItemId(1)).return_ok(Some(item));
/// mock.expect_save().echo();
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Save { respond_to, .. }, Some(Expectation::Save { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Save { item, respond_to }, Some(Expectation::SaveEcho)) => {
                        let _ = respond_to.send(Ok(item));
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Delete for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Ids { respond_to }, Some(Expectation::Ids { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Save { response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `ids` operation.
    pub fn expect_ids(&mut self) -> ExpectationBuilder<T, Vec<T::Id>> {
        self.builder(|response| Expectation::Ids { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }
}

/// Builder that records the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

impl<T: ActorEntity> ExpectationBuilder<T, T> {
    /// Replies to the save with the record that was sent, as a healthy store would.
    pub fn echo(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::SaveEcho);
    }
}

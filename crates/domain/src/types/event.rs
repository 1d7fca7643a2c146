//! Tracking events and activation requests
//!
//! Both carry an optional completion handle supplied by the caller. Pipeline
//! stages pass the handle through untouched; only the party that ends the
//! chain invokes it.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::attributes::AttributeMap;

type CompletionFn = dyn Fn(bool, &AttributeMap) + Send + Sync;

/// Caller-supplied continuation invoked once a request has been handled.
///
/// Receives the success flag and the final payload (empty for activation).
#[derive(Clone)]
pub struct Completion(Arc<CompletionFn>);

impl Completion {
    /// Wrap a closure as a completion handle.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(bool, &AttributeMap) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the continuation.
    pub fn complete(&self, success: bool, payload: &AttributeMap) {
        (self.0)(success, payload);
    }

    /// Whether both handles point at the same continuation.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}

/// Request to activate pipeline modules.
#[derive(Debug, Clone, Default)]
pub struct EnableRequest {
    completion: Option<Completion>,
}

impl EnableRequest {
    /// Create a request without a completion handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a completion handle.
    #[must_use]
    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = Some(completion);
        self
    }

    /// The attached completion handle, if any.
    #[must_use]
    pub const fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Signal the caller that activation finished.
    pub fn finish(self, success: bool) {
        if let Some(completion) = self.completion {
            completion.complete(success, &AttributeMap::new());
        }
    }
}

/// A tracking call travelling through the pipeline.
#[derive(Debug, Clone)]
pub struct TrackingEvent {
    id: Uuid,
    created_at: DateTime<Utc>,
    payload: AttributeMap,
    completion: Option<Completion>,
}

impl TrackingEvent {
    /// Create an event for the given payload.
    #[must_use]
    pub fn new(payload: AttributeMap) -> Self {
        Self { id: Uuid::new_v4(), created_at: Utc::now(), payload, completion: None }
    }

    /// Attach a completion handle.
    #[must_use]
    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = Some(completion);
        self
    }

    /// Build the outgoing event: same identity and completion, new payload.
    #[must_use]
    pub fn with_payload(self, payload: AttributeMap) -> Self {
        Self { payload, ..self }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn payload(&self) -> &AttributeMap {
        &self.payload
    }

    #[must_use]
    pub const fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Consume the event and return its payload.
    #[must_use]
    pub fn into_payload(self) -> AttributeMap {
        self.payload
    }

    /// Invoke the completion handle with the final payload.
    ///
    /// Returns the payload so the caller can hand it on.
    pub fn finish(self, success: bool) -> AttributeMap {
        if let Some(completion) = &self.completion {
            completion.complete(success, &self.payload);
        }
        self.payload
    }
}

//! Content API
//!
//! The seam between view models and the remote content service.

mod mock;

pub use mock::MockContentApi;

use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::model::{AppointmentRequest, BlogPost, BlogPostSummary, Hero, Service};

/// Content API client trait (Strategy pattern)
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait ContentApi {
    /// `GET /api/hero`
    async fn hero(&self) -> Result<Hero>;

    /// `GET /api/services`
    async fn services(&self) -> Result<Vec<Service>>;

    /// `GET /api/blog`
    async fn blog_posts(&self) -> Result<Vec<BlogPostSummary>>;

    /// `GET /api/blog/{slug}`
    async fn blog_post(&self, slug: &str) -> Result<BlogPost>;

    /// `POST /api/appointments`
    async fn submit_appointment(&self, request: &AppointmentRequest) -> Result<()>;
}

/// Outcome of a read request, as seen by a page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// Data arrived
    Loaded(T),
    /// Request succeeded but there was nothing to show
    Empty,
    /// Request failed; pages degrade to their default rendering
    Failed(ApiError),
}

impl<T> FetchOutcome<T> {
    /// Wrap a single-item response
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Loaded(value),
            Err(err) => FetchOutcome::Failed(err),
        }
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Log a failure under `what` and pass the outcome through
    #[must_use]
    pub fn logged(self, what: &str) -> Self {
        if let FetchOutcome::Failed(err) = &self {
            tracing::warn!("Failed to load {}: {}", what, err);
        }
        self
    }
}

impl<T> FetchOutcome<Vec<T>> {
    /// Wrap a list response; an empty list becomes [`FetchOutcome::Empty`]
    pub fn from_list(result: Result<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => FetchOutcome::Empty,
            other => Self::from_result(other),
        }
    }

    /// Items to render; failures render as an empty list
    pub fn into_items(self) -> Vec<T> {
        self.loaded().unwrap_or_default()
    }
}

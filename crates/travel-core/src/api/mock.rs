//! Mock Content API
//!
//! In-memory backend for tests and offline demos.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::ContentApi;
use crate::error::{ApiError, Result};
use crate::model::{AppointmentRequest, BlogPost, BlogPostSummary, Hero, Service};

/// Mock content API with canned responses
#[derive(Default)]
pub struct MockContentApi {
    hero: Option<Hero>,
    services: Vec<Service>,
    posts: Vec<BlogPostSummary>,
    details: HashMap<String, BlogPost>,
    offline: bool,
    submit_error: Option<ApiError>,
    submissions: RefCell<Vec<AppointmentRequest>>,
}

impl MockContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails with a network error
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_hero(mut self, hero: Hero) -> Self {
        self.hero = Some(hero);
        self
    }

    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    pub fn with_posts(mut self, posts: Vec<BlogPostSummary>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_post(mut self, slug: impl Into<String>, post: BlogPost) -> Self {
        self.details.insert(slug.into(), post);
        self
    }

    /// Reject appointment submissions with `error`
    pub fn rejecting(mut self, error: ApiError) -> Self {
        self.submit_error = Some(error);
        self
    }

    /// Appointments received so far
    pub fn submissions(&self) -> Vec<AppointmentRequest> {
        self.submissions.borrow().clone()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline {
            Err(ApiError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl ContentApi for MockContentApi {
    async fn hero(&self) -> Result<Hero> {
        self.check_online()?;
        self.hero.clone().ok_or(ApiError::Status {
            status: 404,
            detail: Some("Hero not configured".into()),
        })
    }

    async fn services(&self) -> Result<Vec<Service>> {
        self.check_online()?;
        Ok(self.services.clone())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPostSummary>> {
        self.check_online()?;
        Ok(self.posts.clone())
    }

    async fn blog_post(&self, slug: &str) -> Result<BlogPost> {
        self.check_online()?;
        self.details.get(slug).cloned().ok_or(ApiError::Status {
            status: 404,
            detail: Some("Post not found".into()),
        })
    }

    async fn submit_appointment(&self, request: &AppointmentRequest) -> Result<()> {
        self.check_online()?;
        if let Some(err) = &self.submit_error {
            return Err(err.clone());
        }
        self.submissions.borrow_mut().push(request.clone());
        Ok(())
    }
}

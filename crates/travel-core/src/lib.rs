//! # travel-core
//!
//! Content models, page view models and the content API seam for the
//! Ahadu Travel website.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  Leptos page │────▶│    View model    │────▶│    ContentApi    │
//! │ (travel-web) │     │ (views::*, here) │     │    (Strategy)    │
//! └──────────────┘     └──────────────────┘     └──────────────────┘
//!                                                 │             │
//!                                          HttpContentApi  MockContentApi
//! ```
//!
//! Everything that can be decided without a browser lives here so it can
//! be tested natively.

pub mod api;
pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod route;
pub mod sanitize;
pub mod views;

pub use api::{ContentApi, FetchOutcome, MockContentApi};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use locale::{Labels, Locale};
pub use model::{AppointmentRequest, BlogPost, BlogPostSummary, Hero, ItemId, Service};
pub use route::Route;

//! # travel-client
//!
//! `reqwest`-backed implementation of [`travel_core::ContentApi`]. The same
//! code runs natively and inside the browser, where reqwest delegates to
//! `fetch`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use travel_client::HttpContentApi;
//! use travel_core::ContentApi;
//!
//! let api = HttpContentApi::from_env();
//! let services = api.services().await?;
//! ```

pub mod http;

pub use http::HttpContentApi;

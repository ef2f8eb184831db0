//! Page View Models
//!
//! Framework-agnostic state and derivations behind each page.

pub mod appointment;
pub mod blog;
pub mod home;

pub use appointment::{AppointmentForm, Field, FormStatus, SubmitBlocked};
pub use blog::{PostState, PostView, RenderedPost, filter_posts, load_post, load_posts};
pub use home::{HeroView, load_hero, load_services};

//! Page Components

mod appointment;
mod blog;
mod blog_post;
mod home;
mod not_found;
mod services;

pub use appointment::AppointmentPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;

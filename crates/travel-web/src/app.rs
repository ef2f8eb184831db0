//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Navbar};
use crate::pages::{
    AppointmentPage, BlogPage, BlogPostPage, HomePage, NotFoundPage, ServicesPage,
};
use crate::state::provide_locale;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let locale = provide_locale();

    // Screen readers and fonts follow the chosen language
    Effect::new(move |_| {
        let code = locale.get().code();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", code);
        }
    });

    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:slug") view=BlogPostPage />
                    <Route path=path!("/appointment") view=AppointmentPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

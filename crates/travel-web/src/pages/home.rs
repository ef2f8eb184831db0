//! Home Page

use leptos::prelude::*;
use travel_core::views::{load_posts, load_services};

use crate::api::spawn_load;
use crate::components::{BlogCard, CallToAction, HeroBanner, ServiceGrid};
use crate::state::{use_labels, use_page_title};

#[component]
pub fn HomePage() -> impl IntoView {
    let labels = use_labels();
    use_page_title(|_| String::new());

    let services = RwSignal::new(Vec::new());
    spawn_load(services, |api| async move { load_services(&api).await.into_items() });

    let posts = RwSignal::new(Vec::new());
    spawn_load(posts, |api| async move { load_posts(&api).await.into_items() });

    view! {
        <div class="home">
            <HeroBanner />

            <section class="section">
                <h2>{move || labels.get().popular_services}</h2>
                <ServiceGrid services=services clamp=true />
            </section>

            <div class="section"><hr /></div>

            <section class="section">
                <h2>{move || labels.get().latest_posts}</h2>
                <div class="grid">
                    <For
                        each=move || posts.get()
                        key=|post| post.id.clone()
                        children=move |post| view! { <BlogCard post=post /> }
                    />
                </div>
            </section>

            <CallToAction />
        </div>
    }
}

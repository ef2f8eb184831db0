//! Services Page

use leptos::prelude::*;
use travel_core::views::load_services;

use crate::api::spawn_load;
use crate::components::ServiceGrid;
use crate::state::{use_labels, use_page_title};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let labels = use_labels();
    use_page_title(|labels| labels.our_services.to_string());

    // A failed fetch leaves the grid empty
    let services = RwSignal::new(Vec::new());
    spawn_load(services, |api| async move { load_services(&api).await.into_items() });

    view! {
        <div class="page services">
            <h1>{move || labels.get().our_services}</h1>
            <ServiceGrid services=services />
        </div>
    }
}

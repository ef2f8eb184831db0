use leptos::prelude::*;
use travel_core::Route;

use crate::state::{use_labels, use_page_title};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let labels = use_labels();
    use_page_title(|labels| labels.not_found.to_string());

    view! {
        <div class="page not-found">
            <h1>{move || labels.get().not_found}</h1>
            <a href=Route::Home.href() class="btn">{move || labels.get().brand}</a>
        </div>
    }
}

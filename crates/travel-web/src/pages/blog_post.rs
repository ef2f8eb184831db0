//! Blog Post Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use travel_core::Route;
use travel_core::views::{PostState, PostView, load_post};

use crate::api::content_api;
use crate::state::{use_labels, use_page_title};

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let labels = use_labels();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug")).unwrap_or_default());

    let post = RwSignal::new(PostView::loading(slug.get_untracked()));

    // Runs on mount and again whenever the slug changes. `navigate` drops
    // the old content first, and `resolve` ignores answers for any slug but
    // the current one.
    Effect::new(move |_| {
        let slug = slug.get();
        let needs_fetch = post.try_update(|view| view.navigate(&slug)).unwrap_or(false);
        if !needs_fetch {
            return;
        }
        spawn_local(async move {
            let outcome = load_post(&content_api(), &slug).await;
            if post.try_update(|view| view.resolve(&slug, outcome)).is_none() {
                tracing::debug!("Post page unmounted before '{}' arrived", slug);
            }
        });
    });

    use_page_title(move |labels| {
        post.with(|view| match view.state() {
            PostState::Ready(rendered) => rendered.title.clone(),
            PostState::Loading => labels.blog_heading.to_string(),
            PostState::Missing => labels.post_not_found.to_string(),
        })
    });

    view! {
        <div class="page post">
            {move || match post.with(|view| view.state().clone()) {
                PostState::Loading => view! {
                    <p class="loading">{move || labels.get().loading}</p>
                }.into_any(),
                PostState::Missing => view! {
                    <div class="missing">
                        <p>{move || labels.get().post_not_found}</p>
                        <a href=Route::Blog.href()>{move || labels.get().back_to_blog}</a>
                    </div>
                }.into_any(),
                PostState::Ready(rendered) => view! {
                    <article>
                        <img src=rendered.cover alt=rendered.title.clone() class="post-cover" />
                        <h1>{rendered.title}</h1>
                        <div class="prose" inner_html=rendered.html></div>
                    </article>
                }.into_any(),
            }}
        </div>
    }
}

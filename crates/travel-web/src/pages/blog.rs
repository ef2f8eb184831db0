//! Blog Page

use leptos::prelude::*;
use travel_core::views::{filter_posts, load_posts};

use crate::api::spawn_load;
use crate::components::BlogCard;
use crate::state::{use_labels, use_page_title};

#[component]
pub fn BlogPage() -> impl IntoView {
    let labels = use_labels();
    use_page_title(|labels| labels.blog_heading.to_string());

    let posts = RwSignal::new(Vec::new());
    spawn_load(posts, |api| async move { load_posts(&api).await.into_items() });

    let (query, set_query) = signal(String::new());

    // Re-filtered on every keystroke against the list already in memory
    let visible = Memo::new(move |_| {
        query.with(|q| posts.with(|all| filter_posts(all, q).cloned().collect::<Vec<_>>()))
    });

    view! {
        <div class="page blog">
            <div class="page-header">
                <h1>{move || labels.get().blog_heading}</h1>
                <input
                    type="search"
                    class="search"
                    placeholder=move || labels.get().search_posts
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || !visible.with(Vec::is_empty) || query.with(String::is_empty)
                fallback=move || view! { <p class="empty">{move || labels.get().no_posts}</p> }
            >
                <div class="grid">
                    <For
                        each=move || visible.get()
                        key=|post| post.id.clone()
                        children=move |post| view! { <BlogCard post=post /> }
                    />
                </div>
            </Show>
        </div>
    }
}

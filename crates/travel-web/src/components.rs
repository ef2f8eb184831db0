//! UI Components
//!
//! Site chrome and the cards shared by several pages.

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use travel_core::{BlogPostSummary, Locale, Route, Service, views::HeroView};

use crate::api::spawn_load;
use crate::state::{use_labels, use_locale};

/// Button switching between English and Amharic
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = use_locale();
    let labels = use_labels();

    view! {
        <button class="lang-toggle" on:click=move |_| locale.update(Locale::toggle)>
            {move || labels.get().switch_language}
        </button>
    }
}

/// Sticky header with navigation
#[component]
pub fn Navbar() -> impl IntoView {
    let labels = use_labels();

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a href=Route::Home.href() class="brand">{move || labels.get().brand}</a>
                <nav class="nav-links">
                    <a href=Route::Services.href()>{move || labels.get().nav_services}</a>
                    <a href=Route::Blog.href()>{move || labels.get().nav_blog}</a>
                    <a href=Route::Appointment.href()>{move || labels.get().nav_appointment}</a>
                    <LanguageToggle />
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let labels = use_labels();
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <p>{move || format!("© {} {}", year, labels.get().copyright)}</p>
        </footer>
    }
}

/// Full-width band pointing at the booking form
#[component]
pub fn CallToAction() -> impl IntoView {
    let labels = use_labels();

    view! {
        <section class="cta">
            <h3>{move || labels.get().cta_heading}</h3>
            <p>{move || labels.get().cta_body}</p>
            <a href=Route::Appointment.href() class="btn btn-accent">
                {move || labels.get().book_appointment}
            </a>
        </section>
    }
}

/// Home page banner; the only consumer of bilingual API fields
#[component]
pub fn HeroBanner() -> impl IntoView {
    let locale = use_locale();
    let labels = use_labels();
    let hero = RwSignal::new(None);
    spawn_load(hero, |api| async move {
        travel_core::views::load_hero(&api).await.loaded()
    });

    let banner = Memo::new(move |_| hero.with(|h| HeroView::new(h.as_ref(), locale.get())));

    view! {
        <section class="hero">
            <img
                src=move || banner.with(|b| b.image.clone())
                alt="Ethiopia"
                class="hero-image"
            />
            <div class="hero-overlay">
                <h1>{move || banner.with(|b| b.title.clone())}</h1>
                <p class="tagline">{move || banner.with(|b| b.subtitle.clone())}</p>
                <a href=Route::Appointment.href() class="btn btn-accent">
                    {move || labels.get().book_appointment}
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn ServiceCard(service: Service, #[prop(optional)] clamp: bool) -> impl IntoView {
    let class = if clamp { "description line-clamp-3" } else { "description" };

    view! {
        <div class="card">
            <img src=service.image().to_string() alt=service.title.clone() class="card-image" />
            <div class="card-body">
                <h3>{service.title}</h3>
                <p class=class>{service.description}</p>
            </div>
        </div>
    }
}

/// Post preview linking to `/blog/{slug}`
#[component]
pub fn BlogCard(post: BlogPostSummary) -> impl IntoView {
    let href = Route::BlogPost(post.slug.clone()).href();
    let date = post.display_date(Utc::now().date_naive());

    view! {
        <a href=href class="card">
            <img src=post.cover().to_string() alt=post.title.clone() class="card-image" />
            <div class="card-body">
                <h3>{post.title}</h3>
                <p class="date">{date}</p>
            </div>
        </a>
    }
}

/// Grid of service cards
#[component]
pub fn ServiceGrid(
    services: RwSignal<Vec<Service>>,
    #[prop(optional)] clamp: bool,
) -> impl IntoView {
    view! {
        <div class="grid">
            <For
                each=move || services.get()
                key=|service| service.id.clone()
                children=move |service| view! { <ServiceCard service=service clamp=clamp /> }
            />
        </div>
    }
}

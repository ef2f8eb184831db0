//! Application State
//!
//! The display locale is the only state shared between pages. It is
//! provided once at the root and read through context everywhere else.

use leptos::prelude::*;
use travel_core::{Labels, Locale};

/// Locale context handle
#[derive(Clone, Copy)]
pub struct LocaleContext(pub RwSignal<Locale>);

/// Install the locale context, starting in English
pub fn provide_locale() -> RwSignal<Locale> {
    let locale = RwSignal::new(Locale::default());
    provide_context(LocaleContext(locale));
    locale
}

pub fn use_locale() -> RwSignal<Locale> {
    expect_context::<LocaleContext>().0
}

/// Chrome strings for the current locale
pub fn use_labels() -> Signal<&'static Labels> {
    let locale = use_locale();
    Signal::derive(move || locale.get().labels())
}

/// Keep `document.title` in sync with `title`; an empty title shows the
/// brand alone
pub fn use_page_title(title: impl Fn(&Labels) -> String + 'static) {
    let labels = use_labels();
    Effect::new(move |_| {
        let labels = labels.get();
        let title = title(labels);
        let full = if title.is_empty() {
            labels.brand.to_string()
        } else {
            format!("{} | {}", title, labels.brand)
        };
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&full);
        }
    });
}

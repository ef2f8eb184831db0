//! Home page view models

use crate::api::{ContentApi, FetchOutcome};
use crate::locale::Locale;
use crate::model::{DEFAULT_HERO_IMAGE, Hero, Service, non_blank};

pub const DEFAULT_HERO_TITLE: &str = "Discover Ethiopia with Ahadu Travel";
pub const DEFAULT_HERO_SUBTITLE: &str = "Tailored trips, local expertise, unforgettable experiences.";

/// What the hero banner renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl HeroView {
    /// Pick the locale's fields from `hero`, with built-in fallbacks while
    /// it is loading or when the fetch failed
    pub fn new(hero: Option<&Hero>, locale: Locale) -> Self {
        let title = hero.and_then(|h| {
            non_blank(locale.pick(h.title_en.as_deref(), h.title_am.as_deref()))
        });
        let subtitle = hero.and_then(|h| {
            non_blank(locale.pick(h.subtitle_en.as_deref(), h.subtitle_am.as_deref()))
        });
        let image = hero.and_then(|h| non_blank(h.image_url.as_deref()));

        Self {
            title: title.unwrap_or(DEFAULT_HERO_TITLE).to_string(),
            subtitle: subtitle.unwrap_or(DEFAULT_HERO_SUBTITLE).to_string(),
            image: image.unwrap_or(DEFAULT_HERO_IMAGE).to_string(),
        }
    }
}

/// Fetch the hero banner
pub async fn load_hero(api: &dyn ContentApi) -> FetchOutcome<Hero> {
    FetchOutcome::from_result(api.hero().await).logged("hero")
}

/// Fetch the services list (home preview and services page)
pub async fn load_services(api: &dyn ContentApi) -> FetchOutcome<Vec<Service>> {
    FetchOutcome::from_list(api.services().await).logged("services")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockContentApi;
    use crate::model::ItemId;

    fn hero() -> Hero {
        Hero {
            title_en: Some("Visit Gondar".into()),
            title_am: Some("ጎንደርን ይጎብኙ".into()),
            subtitle_en: Some("Castles and more".into()),
            subtitle_am: None,
            image_url: Some("https://cdn.example/gondar.jpg".into()),
        }
    }

    #[test]
    fn test_hero_follows_locale() {
        let hero = hero();
        let en = HeroView::new(Some(&hero), Locale::English);
        assert_eq!(en.title, "Visit Gondar");
        assert_eq!(en.subtitle, "Castles and more");

        let am = HeroView::new(Some(&hero), Locale::Amharic);
        assert_eq!(am.title, "ጎንደርን ይጎብኙ");
        assert_eq!(am.subtitle, DEFAULT_HERO_SUBTITLE);
        assert_eq!(am.image, "https://cdn.example/gondar.jpg");
    }

    #[test]
    fn test_hero_defaults_without_data() {
        let view = HeroView::new(None, Locale::Amharic);
        assert_eq!(view.title, DEFAULT_HERO_TITLE);
        assert_eq!(view.image, DEFAULT_HERO_IMAGE);
    }

    #[tokio::test]
    async fn test_services_failure_renders_empty_grid() {
        let api = MockContentApi::offline();
        let outcome = load_services(&api).await;
        assert!(outcome.is_failed());
        assert!(outcome.into_items().is_empty());
    }

    #[tokio::test]
    async fn test_services_loaded() {
        let api = MockContentApi::new().with_services(vec![Service {
            id: ItemId::Int(1),
            title: "Historic Route".into(),
            description: "Axum, Lalibela, Gondar".into(),
            image_url: None,
        }]);
        let services = load_services(&api).await.into_items();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].title, "Historic Route");
    }

    #[tokio::test]
    async fn test_hero_failure_is_not_fatal() {
        let api = MockContentApi::offline();
        let hero = load_hero(&api).await.loaded();
        let view = HeroView::new(hero.as_ref(), Locale::English);
        assert_eq!(view.title, DEFAULT_HERO_TITLE);
    }
}

//! Content Models
//!
//! Wire types for the content API. Everything except [`AppointmentRequest`]
//! is read-only from the site's point of view.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Hero photograph used when the API supplies none
pub const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1558980664-10de6b87b5c2?q=80&w=1600&auto=format&fit=crop";

/// Service photograph used when the API supplies none
pub const DEFAULT_SERVICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1562684862-0f5a2f9d7d3a?q=80&w=800&auto=format&fit=crop";

/// Blog cover used when the API supplies none
pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1549965738-e1aaf1168944?q=80&w=800&auto=format&fit=crop";

/// Record identifier; the backend may emit integers or strings
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Home page banner content, delivered pre-translated
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_am: Option<String>,
    #[serde(default)]
    pub subtitle_en: Option<String>,
    #[serde(default)]
    pub subtitle_am: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A bookable service offering
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Service {
    pub fn image(&self) -> &str {
        non_blank(self.image_url.as_deref()).unwrap_or(DEFAULT_SERVICE_IMAGE)
    }
}

/// Blog post as listed on the home and blog pages
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: ItemId,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BlogPostSummary {
    pub fn cover(&self) -> &str {
        non_blank(self.cover_image.as_deref()).unwrap_or(DEFAULT_COVER_IMAGE)
    }

    /// Publication date parsed from `created_at`
    ///
    /// Accepts RFC 3339, naive ISO-8601 date-times and plain dates.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Card date label; posts without a usable timestamp show `today`
    pub fn display_date(&self, today: NaiveDate) -> String {
        self.published_on()
            .unwrap_or(today)
            .format("%b %-d, %Y")
            .to_string()
    }
}

/// Full blog post, fetched by slug
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Rich markup, untrusted until sanitized
    #[serde(default)]
    pub content: String,
}

impl BlogPost {
    pub fn cover(&self) -> &str {
        non_blank(self.cover_image.as_deref()).unwrap_or(DEFAULT_COVER_IMAGE)
    }
}

/// Appointment booking payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub destination: String,
    pub service_type: String,
    pub date: String,
    pub message: String,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(created_at: Option<&str>) -> BlogPostSummary {
        BlogPostSummary {
            id: ItemId::Int(1),
            slug: "lalibela".into(),
            title: "Lalibela".into(),
            cover_image: None,
            created_at: created_at.map(String::from),
        }
    }

    #[test]
    fn test_ids_accept_ints_and_strings() {
        let services: Vec<Service> = serde_json::from_str(
            r#"[{"id": 3, "title": "Tours", "description": "d", "image_url": null},
                {"id": "abc", "title": "Visas", "description": "d"}]"#,
        )
        .unwrap();
        assert_eq!(services[0].id, ItemId::Int(3));
        assert_eq!(services[1].id.to_string(), "abc");
        assert_eq!(services[1].image(), DEFAULT_SERVICE_IMAGE);
    }

    #[test]
    fn test_published_on_formats() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(summary(Some("2024-01-05T10:00:00Z")).display_date(today), "Jan 5, 2024");
        assert_eq!(summary(Some("2024-01-05T10:00:00.123456")).display_date(today), "Jan 5, 2024");
        assert_eq!(summary(Some("2024-01-05")).display_date(today), "Jan 5, 2024");
        assert_eq!(summary(Some("yesterday")).display_date(today), "Jun 1, 2024");
        assert_eq!(summary(None).display_date(today), "Jun 1, 2024");
    }

    #[test]
    fn test_blank_cover_uses_default() {
        let mut post = summary(None);
        post.cover_image = Some(String::new());
        assert_eq!(post.cover(), DEFAULT_COVER_IMAGE);
        post.cover_image = Some("https://cdn.example/x.jpg".into());
        assert_eq!(post.cover(), "https://cdn.example/x.jpg");
    }

    #[test]
    fn test_hero_tolerates_missing_fields() {
        let hero: Hero = serde_json::from_str(r#"{"title_en": "Hi"}"#).unwrap();
        assert_eq!(hero.title_en.as_deref(), Some("Hi"));
        assert!(hero.image_url.is_none());
    }
}

//! Blog view models: list filter and slug-keyed detail state

use crate::api::{ContentApi, FetchOutcome};
use crate::model::{BlogPost, BlogPostSummary};
use crate::sanitize::sanitize_html;

/// Posts whose title contains `query`, ignoring case
///
/// Lazy and restartable: call again with the same slice and query to get
/// the same sequence. An empty query yields every post in order.
pub fn filter_posts<'a>(
    posts: &'a [BlogPostSummary],
    query: &str,
) -> impl Iterator<Item = &'a BlogPostSummary> + use<'a> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(move |post| post.title.to_lowercase().contains(&needle))
}

/// Fetch the post list (home preview and blog page)
pub async fn load_posts(api: &dyn ContentApi) -> FetchOutcome<Vec<BlogPostSummary>> {
    FetchOutcome::from_list(api.blog_posts().await).logged("blog posts")
}

/// Fetch one post by slug
pub async fn load_post(api: &dyn ContentApi, slug: &str) -> FetchOutcome<BlogPost> {
    FetchOutcome::from_result(api.blog_post(slug).await).logged(&format!("blog post '{slug}'"))
}

/// A post ready for display; `html` has been sanitized
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPost {
    pub title: String,
    pub cover: String,
    pub html: String,
}

impl From<BlogPost> for RenderedPost {
    fn from(post: BlogPost) -> Self {
        Self {
            cover: post.cover().to_string(),
            html: sanitize_html(&post.content),
            title: post.title,
        }
    }
}

/// Detail page state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostState {
    Loading,
    Ready(RenderedPost),
    Missing,
}

/// Detail page view model, bound to exactly one slug at a time
///
/// Responses for any slug other than the current one are dropped, so a
/// slow request for `/blog/a` can never paint over `/blog/b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostView {
    slug: String,
    state: PostState,
}

impl PostView {
    pub fn loading(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            state: PostState::Loading,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub const fn state(&self) -> &PostState {
        &self.state
    }

    /// Point the view at `slug`. Returns `true` when a fetch is needed.
    pub fn navigate(&mut self, slug: &str) -> bool {
        if self.slug == slug && self.state != PostState::Missing {
            return matches!(self.state, PostState::Loading);
        }
        *self = Self::loading(slug);
        true
    }

    /// Apply a fetch result for `slug`. Returns `false` if it was stale.
    pub fn resolve(&mut self, slug: &str, outcome: FetchOutcome<BlogPost>) -> bool {
        if slug != self.slug {
            tracing::debug!("Dropping stale response for '{}' (now showing '{}')", slug, self.slug);
            return false;
        }
        self.state = match outcome {
            FetchOutcome::Loaded(post) => PostState::Ready(post.into()),
            FetchOutcome::Empty | FetchOutcome::Failed(_) => PostState::Missing,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockContentApi;
    use crate::model::ItemId;

    fn posts(titles: &[&str]) -> Vec<BlogPostSummary> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| BlogPostSummary {
                id: ItemId::Int(i as i64),
                slug: title.to_lowercase().replace(' ', "-"),
                title: (*title).to_string(),
                cover_image: None,
                created_at: None,
            })
            .collect()
    }

    fn titles<'a>(it: impl Iterator<Item = &'a BlogPostSummary>) -> Vec<&'a str> {
        it.map(|p| p.title.as_str()).collect()
    }

    fn post(title: &str, content: &str) -> BlogPost {
        BlogPost {
            title: title.into(),
            cover_image: None,
            content: content.into(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let all = posts(&["Trekking the Simien Mountains", "Lalibela at Dawn", "Danakil DEPRESSION"]);
        assert_eq!(titles(filter_posts(&all, "SIMIEN")), vec!["Trekking the Simien Mountains"]);
        assert_eq!(titles(filter_posts(&all, "depress")), vec!["Danakil DEPRESSION"]);
        assert_eq!(titles(filter_posts(&all, "a")).len(), 3);
        assert!(filter_posts(&all, "axum").next().is_none());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = posts(&["B", "A", "C"]);
        assert_eq!(titles(filter_posts(&all, "")), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_filter_only_looks_at_title() {
        let mut all = posts(&["Coffee Ceremony"]);
        all[0].slug = "lalibela".into();
        assert!(filter_posts(&all, "lalibela").next().is_none());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = posts(&["Gondar Castles", "Bahir Dar", "Harar Jugol"]);
        let once: Vec<BlogPostSummary> = filter_posts(&all, "ar").cloned().collect();
        let twice: Vec<BlogPostSummary> = filter_posts(&once, "ar").cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(titles(filter_posts(&all, "ar")), titles(filter_posts(&all, "ar")));
    }

    #[test]
    fn test_stale_response_never_shows_under_new_slug() {
        let mut view = PostView::loading("a");
        assert!(view.navigate("b"));
        assert_eq!(view.state(), &PostState::Loading);

        // a's request finishes late
        let applied = view.resolve("a", FetchOutcome::Loaded(post("Post A", "<p>a</p>")));
        assert!(!applied);
        assert_eq!(view.state(), &PostState::Loading);
        assert_eq!(view.slug(), "b");

        assert!(view.resolve("b", FetchOutcome::Loaded(post("Post B", "<p>b</p>"))));
        match view.state() {
            PostState::Ready(rendered) => assert_eq!(rendered.title, "Post B"),
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_navigate_same_slug_keeps_content() {
        let mut view = PostView::loading("a");
        view.resolve("a", FetchOutcome::Loaded(post("Post A", "")));
        assert!(!view.navigate("a"));
        assert!(matches!(view.state(), PostState::Ready(_)));
    }

    #[tokio::test]
    async fn test_missing_post_and_sanitized_content() {
        let api = MockContentApi::new().with_post(
            "harar",
            post("Harar", r#"<p>Hyenas<script>alert(1)</script></p>"#),
        );

        let mut view = PostView::loading("harar");
        view.resolve("harar", load_post(&api, "harar").await);
        match view.state() {
            PostState::Ready(rendered) => {
                assert_eq!(rendered.html, "<p>Hyenas</p>");
                assert_eq!(rendered.cover, crate::model::DEFAULT_COVER_IMAGE);
            }
            other => panic!("expected ready, got {other:?}"),
        }

        assert!(view.navigate("nowhere"));
        view.resolve("nowhere", load_post(&api, "nowhere").await);
        assert_eq!(view.state(), &PostState::Missing);
    }

    #[tokio::test]
    async fn test_load_posts_offline_is_empty() {
        let api = MockContentApi::offline();
        assert!(load_posts(&api).await.into_items().is_empty());
    }
}

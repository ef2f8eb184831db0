//! Client-side routes

/// A page of the site
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Blog,
    BlogPost(String),
    Appointment,
}

impl Route {
    /// Match a URL path; query strings and a trailing slash are ignored
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["services"] => Some(Route::Services),
            ["blog"] => Some(Route::Blog),
            ["blog", slug] => Some(Route::BlogPost((*slug).to_string())),
            ["appointment"] => Some(Route::Appointment),
            _ => None,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Services => "/services".into(),
            Route::Blog => "/blog".into(),
            Route::BlogPost(slug) => format!("/blog/{slug}"),
            Route::Appointment => "/appointment".into(),
        }
    }
}

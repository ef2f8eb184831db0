//! Display Locale
//!
//! The locale only selects which pre-translated string is shown. It never
//! changes which API calls are made.

/// Display language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Amharic,
}

impl Locale {
    /// The other locale
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Locale::English => Locale::Amharic,
            Locale::Amharic => Locale::English,
        }
    }

    /// Flip in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// BCP 47 tag, used for the `lang` attribute
    pub const fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Amharic => "am",
        }
    }

    /// Pick between an English and an Amharic variant
    pub fn pick<T>(self, en: T, am: T) -> T {
        match self {
            Locale::English => en,
            Locale::Amharic => am,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &EN,
            Locale::Amharic => &AM,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Site chrome strings for one locale
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub brand: &'static str,
    pub nav_services: &'static str,
    pub nav_blog: &'static str,
    pub nav_appointment: &'static str,
    /// Caption of the toggle button: the name of the *other* language
    pub switch_language: &'static str,
    pub book_appointment: &'static str,
    pub popular_services: &'static str,
    pub latest_posts: &'static str,
    pub our_services: &'static str,
    pub blog_heading: &'static str,
    pub search_posts: &'static str,
    pub no_posts: &'static str,
    pub loading: &'static str,
    pub post_not_found: &'static str,
    pub back_to_blog: &'static str,
    pub cta_heading: &'static str,
    pub cta_body: &'static str,
    pub copyright: &'static str,
    pub not_found: &'static str,
    pub field_full_name: &'static str,
    pub field_email: &'static str,
    pub field_phone: &'static str,
    pub field_destination: &'static str,
    pub field_service_type: &'static str,
    pub field_date: &'static str,
    pub field_message: &'static str,
    pub submit: &'static str,
}

static EN: Labels = Labels {
    brand: "Ahadu Travel",
    nav_services: "Services",
    nav_blog: "Blog",
    nav_appointment: "Appointment",
    switch_language: "አማርኛ",
    book_appointment: "Book an Appointment",
    popular_services: "Popular Services",
    latest_posts: "Latest Blog Posts",
    our_services: "Our Services",
    blog_heading: "Blog",
    search_posts: "Search posts",
    no_posts: "No posts match your search.",
    loading: "Loading...",
    post_not_found: "We couldn't find that post.",
    back_to_blog: "Back to the blog",
    cta_heading: "Ready to plan your trip?",
    cta_body: "Talk to our local experts and get a custom itinerary.",
    copyright: "Ahadu Travel Solutions",
    not_found: "Page not found",
    field_full_name: "Full Name",
    field_email: "Email",
    field_phone: "Phone",
    field_destination: "Destination",
    field_service_type: "Service Type",
    field_date: "Date",
    field_message: "Message",
    submit: "Submit",
};

static AM: Labels = Labels {
    brand: "አሐዱ ትራቭል",
    nav_services: "አገልግሎቶች",
    nav_blog: "ብሎግ",
    nav_appointment: "መቀጠልያ",
    switch_language: "English",
    book_appointment: "ቀጠሮ ይያዙ",
    popular_services: "ተወዳጅ አገልግሎቶች",
    latest_posts: "የቅርብ ጊዜ ጽሑፎች",
    our_services: "አገልግሎቶቻችን",
    blog_heading: "ብሎግ",
    search_posts: "ጽሑፎችን ይፈልጉ",
    no_posts: "ፍለጋዎን የሚያሟላ ጽሑፍ የለም።",
    loading: "በመጫን ላይ...",
    post_not_found: "ጽሑፉ አልተገኘም።",
    back_to_blog: "ወደ ብሎግ ይመለሱ",
    cta_heading: "ጉዞዎን ለማቀድ ዝግጁ ነዎት?",
    cta_body: "ከአገር ውስጥ ባለሙያዎቻችን ጋር ይነጋገሩ።",
    copyright: "አሐዱ ትራቭል ሶሉሽንስ",
    not_found: "ገጹ አልተገኘም",
    field_full_name: "ሙሉ ስም",
    field_email: "ኢሜይል",
    field_phone: "ስልክ",
    field_destination: "መድረሻ",
    field_service_type: "የአገልግሎት አይነት",
    field_date: "ቀን",
    field_message: "መልእክት",
    submit: "አስገባ",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [Locale::English, Locale::Amharic] {
            let mut locale = start;
            locale.toggle();
            assert_ne!(locale, start);
            locale.toggle();
            assert_eq!(locale, start);
        }
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
        assert_eq!(Locale::default().labels().nav_services, "Services");
    }

    #[test]
    fn test_toggle_caption_names_other_language() {
        assert_eq!(Locale::English.labels().switch_language, "አማርኛ");
        assert_eq!(Locale::Amharic.labels().switch_language, "English");
        assert_eq!(Locale::Amharic.labels().nav_appointment, "መቀጠልያ");
    }
}

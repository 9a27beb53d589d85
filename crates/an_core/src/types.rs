use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recency;

/// Category assigned to cards that carry no category tag.
pub const DEFAULT_CATEGORY: &str = "general";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// One displayable article, as extracted from the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub source: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// Relative label such as "3 hours ago", exactly as displayed on the card.
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub published_recency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleRecord {
    pub fn new(source: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: String::new(),
            source: source.into(),
            category: default_category(),
            published_recency: None,
            published_at: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_recency(mut self, label: impl Into<String>) -> Self {
        self.published_recency = Some(label.into());
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// The relative-time label for this card. An explicit label wins over one
    /// derived from `published_at`.
    pub fn recency_label(&self, now: DateTime<Utc>) -> Option<Cow<'_, str>> {
        if let Some(label) = &self.published_recency {
            return Some(Cow::Borrowed(label.as_str()));
        }
        self.published_at
            .map(|published| Cow::Owned(recency::label_since(published, now)))
    }

    /// Elapsed hours since publication, if the card says anything usable.
    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> Option<f64> {
        self.recency_label(now)
            .and_then(|label| recency::parse_elapsed_hours(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_category_defaults_to_general() {
        let json = r#"{"url":"https://a.test","title":"A","source":"AI News"}"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article.category, DEFAULT_CATEGORY);
        assert!(article.description.is_empty());
        assert!(article.published_recency.is_none());
    }

    #[test]
    fn test_date_alias() {
        let json = r#"{"url":"u","title":"t","source":"s","date":"2 days ago"}"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article.published_recency.as_deref(), Some("2 days ago"));
    }

    #[test]
    fn test_explicit_label_wins() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let article = ArticleRecord::new("s", "t", "u")
            .with_recency("5 minutes ago")
            .with_published_at(now - Duration::days(3));
        assert_eq!(article.recency_label(now).as_deref(), Some("5 minutes ago"));
        assert_eq!(article.elapsed_hours(now), Some(5.0 / 60.0));
    }

    #[test]
    fn test_label_from_timestamp() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let article = ArticleRecord::new("s", "t", "u").with_published_at(now - Duration::hours(3));
        assert_eq!(article.recency_label(now).as_deref(), Some("3 hours ago"));
        assert_eq!(article.elapsed_hours(now), Some(3.0));
    }

    #[test]
    fn test_no_recency() {
        let article = ArticleRecord::new("s", "t", "u");
        assert_eq!(article.elapsed_hours(Utc::now()), None);
    }
}

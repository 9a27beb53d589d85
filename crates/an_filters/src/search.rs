use an_core::ArticleRecord;
use tracing::debug;

/// Category filter value that matches every card.
pub const ALL_CATEGORIES: &str = "all";

/// Characters of the description shown under a search result.
pub const EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    query: String,
    pub category: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SearchFilters {
    pub fn new(query: &str, category: impl Into<String>) -> Self {
        Self {
            query: query.to_lowercase(),
            category: category.into(),
        }
    }

    /// The lowercased query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when neither a query nor a category narrows the results.
    pub fn is_idle(&self) -> bool {
        self.query.is_empty() && self.category == ALL_CATEGORIES
    }

    pub fn matches(&self, article: &ArticleRecord) -> bool {
        let matches_query = self.query.is_empty()
            || [&article.title, &article.description, &article.source]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query));
        let matches_category = self.category == ALL_CATEGORIES || article.category == self.category;
        matches_query && matches_category
    }
}

/// Articles matching `filters`, in input order.
pub fn search<'a>(articles: &'a [ArticleRecord], filters: &SearchFilters) -> Vec<&'a ArticleRecord> {
    articles.iter().filter(|a| filters.matches(a)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Nothing typed yet.
    Hint,
    Empty,
    Found(Vec<&'a ArticleRecord>),
}

impl<'a> SearchOutcome<'a> {
    pub fn run(articles: &'a [ArticleRecord], filters: &SearchFilters) -> Self {
        if filters.is_idle() {
            return SearchOutcome::Hint;
        }
        let results = search(articles, filters);
        debug!(
            "Search '{}' in '{}' matched {} of {} articles",
            filters.query(),
            filters.category,
            results.len(),
            articles.len()
        );
        if results.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(results)
        }
    }

    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::Found(results) => results.len(),
            _ => 0,
        }
    }

    /// Translation key of the message shown above the results.
    pub fn message_key(&self) -> &'static str {
        match self {
            SearchOutcome::Hint => "search.filter_by_source",
            SearchOutcome::Empty => "search.no_results",
            SearchOutcome::Found(results) if results.len() == 1 => "search.found",
            SearchOutcome::Found(_) => "search.found_plural",
        }
    }
}

/// Wraps each case-insensitive occurrence of `query` in `<mark>` tags,
/// keeping the original casing of the text.
pub fn highlight(text: &str, query: &str) -> String {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        match match_len(rest, &needle) {
            Some(len) => {
                out.push_str("<mark>");
                out.push_str(&rest[..len]);
                out.push_str("</mark>");
                rest = &rest[len..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}

/// Byte length of the prefix of `haystack` matching `needle`, ignoring case.
fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for expected in needle {
        let (_, c) = chars.next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map(|(i, _)| i).unwrap_or(haystack.len()))
}

/// First [`EXCERPT_CHARS`] characters of `text`.
pub fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

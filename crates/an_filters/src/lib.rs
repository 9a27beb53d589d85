//! Filtering and decoration helpers for rendered article cards: text search,
//! category show/hide plans, category badges and translated messages.

pub mod badges;
pub mod category;
pub mod i18n;
pub mod search;

pub use badges::{badge_style, BadgeSheet, BadgeStyle};
pub use category::{category_counts, filter_by_category, CardVisibility, FilterPlan};
pub use i18n::{interpolate, message, translate, Language};
pub use search::{excerpt, highlight, search, SearchFilters, SearchOutcome, ALL_CATEGORIES};

pub mod prelude {
    pub use super::{filter_by_category, search, SearchFilters, SearchOutcome};
    pub use an_core::ArticleRecord;
}

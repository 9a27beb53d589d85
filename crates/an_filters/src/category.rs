use std::collections::BTreeMap;
use std::time::Duration;

use an_core::ArticleRecord;
use tracing::debug;

use crate::search::ALL_CATEGORIES;

/// Stagger between consecutive cards fading in after a filter click.
pub const SHOW_STEP: Duration = Duration::from_millis(30);

/// Time a filtered-out card spends fading before it leaves the layout.
pub const HIDE_AFTER: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Show { delay: Duration },
    Hide { after: Duration },
}

impl CardVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, CardVisibility::Show { .. })
    }
}

/// What a category button click does to each card, in card order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub cards: Vec<CardVisibility>,
    pub visible: usize,
}

impl FilterPlan {
    /// Whether the "no articles" placeholder should be shown.
    pub fn empty_state(&self) -> bool {
        self.visible == 0
    }
}

/// Plans visibility for cards tagged with `categories` when `selected` is
/// clicked. Delays are based on a card's index among all cards, hidden ones
/// included.
pub fn filter_by_category<'a, I>(categories: I, selected: &str) -> FilterPlan
where
    I: IntoIterator<Item = &'a str>,
{
    let cards: Vec<CardVisibility> = categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            if selected == ALL_CATEGORIES || category == selected {
                CardVisibility::Show {
                    delay: SHOW_STEP * index as u32,
                }
            } else {
                CardVisibility::Hide { after: HIDE_AFTER }
            }
        })
        .collect();
    let visible = cards.iter().filter(|c| c.is_visible()).count();
    debug!("Category '{}' shows {} of {} cards", selected, visible, cards.len());
    FilterPlan { cards, visible }
}

/// Number of articles per category, for the filter bar counters.
pub fn category_counts(articles: &[ArticleRecord]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for article in articles {
        *counts.entry(article.category.as_str()).or_insert(0) += 1;
    }
    counts
}

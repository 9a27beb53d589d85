//! Importance ranking for article cards.
//!
//! Each article is scored from its source weight, a recency bonus and a small
//! random jitter. The sorted list is then split into a high and a low half and
//! interleaved so that top sources do not crowd the start of the grid.

pub mod distribute;
pub mod priorities;
pub mod ranker;

pub use distribute::{interleave, placements, Placement, REVEAL_STEP};
pub use priorities::{SourcePriorities, DEFAULT_WEIGHT};
pub use ranker::{ArticleRanker, ScoredArticle, MIN_ARTICLES_TO_MIX};

pub mod prelude {
    pub use super::{ArticleRanker, Placement, SourcePriorities};
    pub use an_core::{ArticleRecord, JitterSource, Result};
}

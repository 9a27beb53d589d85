use std::fmt;

use an_core::recency::recency_bonus;
use an_core::{ArticleRecord, JitterSource, RandomJitter};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::distribute::{interleave, placements, Placement};
use crate::priorities::SourcePriorities;

/// Lists shorter than this keep their original order.
pub const MIN_ARTICLES_TO_MIX: usize = 4;

/// Upper bound (exclusive) of the jitter added to each score.
pub const JITTER_SPAN: f64 = 2.0;

/// An article paired with the score it got in one ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct ScoredArticle<'a> {
    pub article: &'a ArticleRecord,
    pub score: f64,
}

pub struct ArticleRanker<J = RandomJitter> {
    priorities: SourcePriorities,
    jitter: J,
    now: DateTime<Utc>,
}

impl<J> fmt::Debug for ArticleRanker<J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleRanker")
            .field("priorities", &self.priorities.len())
            .field("jitter", &"<dyn JitterSource>")
            .field("now", &self.now)
            .finish()
    }
}

impl ArticleRanker<RandomJitter> {
    pub fn new(priorities: SourcePriorities) -> Self {
        Self::with_jitter(priorities, RandomJitter::new())
    }
}

impl<J: JitterSource> ArticleRanker<J> {
    pub fn with_jitter(priorities: SourcePriorities, jitter: J) -> Self {
        Self {
            priorities,
            jitter,
            now: Utc::now(),
        }
    }

    /// Pins the clock used to turn publication timestamps into labels.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn priorities(&self) -> &SourcePriorities {
        &self.priorities
    }

    /// Source weight plus recency bonus, without jitter.
    pub fn base_score(&self, article: &ArticleRecord) -> f64 {
        let weight = f64::from(self.priorities.weight_of(&article.source));
        weight + recency_bonus(article.elapsed_hours(self.now))
    }

    pub fn score(&mut self, article: &ArticleRecord) -> f64 {
        self.base_score(article) + self.jitter.next_unit() * JITTER_SPAN
    }

    /// Scores every article once and sorts by descending score.
    pub fn score_all<'a>(&mut self, articles: &'a [ArticleRecord]) -> Vec<ScoredArticle<'a>> {
        let mut scored: Vec<ScoredArticle<'a>> = articles
            .iter()
            .map(|article| ScoredArticle {
                article,
                score: self.score(article),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Display order for `articles`: a permutation of the input that mixes
    /// high and low scoring cards.
    pub fn rank<'a>(&mut self, articles: &'a [ArticleRecord]) -> Vec<&'a ArticleRecord> {
        if articles.len() < MIN_ARTICLES_TO_MIX {
            debug!("Keeping original order for {} articles", articles.len());
            return articles.iter().collect();
        }

        let scored = self.score_all(articles);
        if let Some(top) = scored.first() {
            debug!(
                "Ranked {} articles, top score {:.2} ({})",
                scored.len(),
                top.score,
                top.article.source
            );
        }
        interleave(scored.into_iter().map(|s| s.article).collect())
    }

    /// [`rank`](Self::rank) with positions and staggered reveal delays.
    pub fn place<'a>(&mut self, articles: &'a [ArticleRecord]) -> Vec<Placement<&'a ArticleRecord>> {
        placements(self.rank(articles))
    }
}

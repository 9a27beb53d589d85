pub mod error;
pub mod jitter;
pub mod recency;
pub mod types;

pub use error::Error;
pub use jitter::{JitterSource, RandomJitter, SequenceJitter, ZeroJitter};
pub use types::{ArticleRecord, DEFAULT_CATEGORY};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::jitter::JitterSource;
    pub use super::types::ArticleRecord;
    pub use super::{Error, Result};
}

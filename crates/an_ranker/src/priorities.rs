//! Source priority table.
//!
//! Built-in weights can be replaced or extended from a TOML file:
//!
//! ```toml
//! default-weight = 3
//!
//! # replaces the built-in table
//! [sources]
//! "OpenAI Blog" = 10
//!
//! # merged on top of whichever table is in effect
//! [extend-sources]
//! "Mistral News" = 8
//! ```

use std::collections::HashMap;
use std::path::Path;

use an_core::{Error, Result};
use serde::Deserialize;
use tracing::debug;

/// Weight given to sources missing from the table.
pub const DEFAULT_WEIGHT: u32 = 3;

const BUILTIN_WEIGHTS: &[(&str, u32)] = &[
    ("OpenAI Blog", 10),
    ("Anthropic News", 10),
    ("Google AI Blog", 9),
    ("Hugging Face Blog", 8),
    ("The Verge AI", 7),
    ("TechCrunch AI", 7),
    ("NVIDIA Blog", 7),
    ("VentureBeat AI", 6),
    ("MIT Technology Review AI", 6),
    ("PetaPixel - AI", 6),
    ("RunwayML Blog", 6),
    ("Ars Technica", 5),
    ("Wired AI", 5),
    ("AI News", 5),
    ("Journal du Net - IA", 4),
    ("Siècle Digital - IA", 4),
    ("Maddyness - IA", 3),
    ("Webflow Blog", 3),
    ("Bubble Blog", 3),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SourcePriorities {
    default_weight: u32,
    weights: HashMap<String, u32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPriorities {
    default_weight: Option<u32>,
    sources: Option<HashMap<String, u32>>,
    extend_sources: Option<HashMap<String, u32>>,
}

impl Default for SourcePriorities {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
            weights: BUILTIN_WEIGHTS
                .iter()
                .map(|(name, weight)| (name.to_string(), *weight))
                .collect(),
        }
    }
}

impl SourcePriorities {
    /// A table with no entries; every source gets `default_weight`.
    pub fn empty(default_weight: u32) -> Self {
        Self {
            default_weight,
            weights: HashMap::new(),
        }
    }

    pub fn with_source(mut self, name: impl Into<String>, weight: u32) -> Self {
        self.weights.insert(name.into(), weight);
        self
    }

    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight for a source label as rendered on a card.
    pub fn weight_of(&self, source_label: &str) -> u32 {
        self.weights
            .get(clean_source(source_label).as_str())
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Entries sorted by descending weight, then name.
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .weights
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawPriorities = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse priority table: {}", e)))?;

        let mut priorities = match raw.sources {
            Some(sources) => Self {
                default_weight: DEFAULT_WEIGHT,
                weights: sources,
            },
            None => Self::default(),
        };
        if let Some(weight) = raw.default_weight {
            priorities.default_weight = weight;
        }
        if let Some(extra) = raw.extend_sources {
            priorities.weights.extend(extra);
        }
        Ok(priorities)
    }

    /// Loads the table from `path`. A path that does not exist is an error,
    /// since callers only pass one when a file was asked for.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Priority file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let priorities = Self::from_toml_str(&content)?;
        debug!("Loaded {} source weights from {}", priorities.len(), path.display());
        Ok(priorities)
    }
}

/// Strips the newspaper decoration cards put in front of the source name and
/// collapses whitespace.
pub fn clean_source(label: &str) -> String {
    label
        .replacen("📰 ", "", 1)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table() {
        let priorities = SourcePriorities::default();
        assert_eq!(priorities.len(), 19);
        assert_eq!(priorities.weight_of("OpenAI Blog"), 10);
        assert_eq!(priorities.weight_of("Google AI Blog"), 9);
        assert_eq!(priorities.weight_of("Bubble Blog"), 3);
    }

    #[test]
    fn test_unknown_source_gets_default() {
        let priorities = SourcePriorities::default();
        assert_eq!(priorities.weight_of("Some Random Blog"), DEFAULT_WEIGHT);
        assert_eq!(priorities.weight_of(""), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_decorated_label() {
        let priorities = SourcePriorities::default();
        assert_eq!(priorities.weight_of("📰 Anthropic News"), 10);
        assert_eq!(priorities.weight_of("  📰  Hugging   Face\n Blog "), 8);
    }

    #[test]
    fn test_clean_source() {
        assert_eq!(clean_source("📰 The Verge AI"), "The Verge AI");
        assert_eq!(clean_source("  Wired \t AI "), "Wired AI");
    }

    #[test]
    fn test_toml_replaces_table() {
        let priorities = SourcePriorities::from_toml_str(
            r#"
            default-weight = 1
            [sources]
            "Local Feed" = 4
            "#,
        )
        .unwrap();
        assert_eq!(priorities.len(), 1);
        assert_eq!(priorities.weight_of("Local Feed"), 4);
        assert_eq!(priorities.weight_of("OpenAI Blog"), 1);
    }

    #[test]
    fn test_toml_extends_table() {
        let priorities = SourcePriorities::from_toml_str(
            r#"
            [extend-sources]
            "Mistral News" = 8
            "Bubble Blog" = 5
            "#,
        )
        .unwrap();
        assert_eq!(priorities.len(), 20);
        assert_eq!(priorities.weight_of("Mistral News"), 8);
        assert_eq!(priorities.weight_of("Bubble Blog"), 5);
        assert_eq!(priorities.default_weight(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_toml_rejects_garbage() {
        assert!(matches!(
            SourcePriorities::from_toml_str("sources = 3"),
            Err(Error::Config(_))
        ));
        assert!(SourcePriorities::from_toml_str("unknown-key = 1").is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SourcePriorities::load(&dir.path().join("missing.toml"));
        match result {
            Err(Error::Config(message)) => assert!(message.contains("missing.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[extend-sources]\n\"Le Monde IA\" = 6").unwrap();
        let priorities = SourcePriorities::load(file.path()).unwrap();
        assert_eq!(priorities.weight_of("Le Monde IA"), 6);
    }

    #[test]
    fn test_entries_sorted() {
        let priorities = SourcePriorities::empty(3)
            .with_source("b", 5)
            .with_source("a", 5)
            .with_source("c", 9);
        assert_eq!(priorities.entries(), vec![("c", 9), ("a", 5), ("b", 5)]);
    }
}

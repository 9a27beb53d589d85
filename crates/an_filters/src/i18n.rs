use std::fmt::{self, Display};
use std::str::FromStr;

use an_core::Error;
use tracing::warn;

/// Interface language. French is the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(Error::InvalidInput(format!(
                "Unsupported language: {} (expected fr or en)",
                other
            ))),
        }
    }
}

const MESSAGES: &[(Language, &str, &str)] = &[
    (Language::Fr, "search.filter_by_source", "Filtrer par titre ou source"),
    (Language::Fr, "search.no_results", "Aucun résultat"),
    (Language::Fr, "search.try_different", "Essayez d'autres mots-clés"),
    (Language::Fr, "search.found", "{{count}} résultat trouvé"),
    (Language::Fr, "search.found_plural", "{{count}} résultats trouvés"),
    (Language::Fr, "filters.all_news", "Toutes les actualités"),
    (Language::Fr, "filters.empty", "Aucun article dans cette catégorie"),
    (Language::En, "search.filter_by_source", "Filter by title or source"),
    (Language::En, "search.no_results", "No results"),
    (Language::En, "search.try_different", "Try different keywords"),
    (Language::En, "search.found", "Found {{count}} result"),
    (Language::En, "search.found_plural", "Found {{count}} results"),
    (Language::En, "filters.all_news", "All news"),
    (Language::En, "filters.empty", "No articles in this category"),
];

/// Message for `key` in `language`, or the key itself when there is none.
pub fn message<'a>(language: Language, key: &'a str) -> &'a str {
    MESSAGES
        .iter()
        .find(|(lang, k, _)| *lang == language && *k == key)
        .map(|(_, _, text)| *text)
        .unwrap_or_else(|| {
            warn!("Translation key not found: {} ({})", key, language);
            key
        })
}

/// Looks up `key` and fills its placeholders.
pub fn translate<K, V>(
    language: Language,
    key: &str,
    params: impl IntoIterator<Item = (K, V)>,
) -> String
where
    K: AsRef<str>,
    V: Display,
{
    interpolate(message(language, key), params)
}

/// Fills `{{name}}` placeholders in a translated message.
///
/// Only the first occurrence of each placeholder is replaced; placeholders
/// without a matching parameter are left as they are.
pub fn interpolate<K, V>(template: &str, params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: Display,
{
    params.into_iter().fold(template.to_string(), |message, (name, value)| {
        let placeholder = format!("{{{{{}}}}}", name.as_ref());
        message.replacen(&placeholder, &value.to_string(), 1)
    })
}

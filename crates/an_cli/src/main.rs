mod logging;

use std::path::{Path, PathBuf};

use an_core::{ArticleRecord, Error, JitterSource, RandomJitter, Result, ZeroJitter};
use an_filters::{
    category_counts, excerpt, filter_by_category, highlight, message, translate, BadgeSheet,
    CardVisibility, Language, SearchFilters, SearchOutcome, ALL_CATEGORIES,
};
use an_ranker::{ArticleRanker, SourcePriorities};
use clap::Parser;
use logging::{init_logging, Logger};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank, search and filter AI news cards", long_about = None)]
pub struct Cli {
    /// TOML file with source weights. Built-in weights are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Language of user-facing messages (fr or en)
    #[arg(long, global = true, default_value = "fr")]
    lang: Language,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Mix articles by importance and print the display order
    Rank {
        /// JSON array of articles
        input: PathBuf,
        /// Seed the jitter so the order is reproducible
        #[arg(long, conflicts_with = "no_jitter")]
        seed: Option<u64>,
        /// Rank on source weight and recency only
        #[arg(long)]
        no_jitter: bool,
        #[arg(long)]
        json: bool,
    },
    /// Search titles, descriptions and sources
    Search {
        input: PathBuf,
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Show which cards a category filter button would keep
    Filter {
        input: PathBuf,
        #[arg(default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Print badge CSS for the categories present in the input
    Badges { input: PathBuf },
    /// Print the source weight table in effect
    Sources,
}

#[derive(Serialize)]
struct RankedEntry<'a> {
    position: usize,
    reveal_delay_ms: u128,
    base_score: f64,
    #[serde(flatten)]
    article: &'a ArticleRecord,
}

async fn load_articles(path: &Path) -> Result<Vec<ArticleRecord>> {
    let content = tokio::fs::read_to_string(path).await?;
    let articles: Vec<ArticleRecord> = serde_json::from_str(&content)?;
    Ok(articles)
}

fn load_priorities(path: Option<&Path>) -> Result<SourcePriorities> {
    match path {
        Some(path) => SourcePriorities::load(path),
        None => Ok(SourcePriorities::default()),
    }
}

fn rank(
    logger: &Logger,
    priorities: SourcePriorities,
    articles: &[ArticleRecord],
    seed: Option<u64>,
    no_jitter: bool,
    json: bool,
) -> Result<()> {
    if articles.is_empty() {
        logger.warn("No articles to rank");
        return Ok(());
    }

    let mut jitter: Box<dyn JitterSource> = match (seed, no_jitter) {
        (_, true) => Box::new(ZeroJitter),
        (Some(seed), false) => Box::new(RandomJitter::seeded(seed)),
        (None, false) => Box::new(RandomJitter::new()),
    };
    let mut ranker = ArticleRanker::with_jitter(priorities, jitter.as_mut());
    let placed = ranker.place(articles);
    logger.info(&format!("Ranked {} articles", placed.len()));

    if json {
        let entries: Vec<RankedEntry> = placed
            .iter()
            .map(|p| RankedEntry {
                position: p.position,
                reveal_delay_ms: p.reveal_delay.as_millis(),
                base_score: ranker.base_score(p.item),
                article: p.item,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for p in &placed {
        println!(
            "{:>3} +{:>4}ms [{}] {} - {}",
            p.position + 1,
            p.reveal_delay.as_millis(),
            p.item.category,
            p.item.source,
            p.item.title
        );
    }
    Ok(())
}

fn search_message(lang: Language, outcome: &SearchOutcome) -> String {
    translate(lang, outcome.message_key(), [("count", outcome.count())])
}

fn search(lang: Language, articles: &[ArticleRecord], query: &str, category: String) {
    let filters = SearchFilters::new(query, category);
    let outcome = SearchOutcome::run(articles, &filters);
    println!("{}", search_message(lang, &outcome));
    if outcome == SearchOutcome::Empty {
        println!("{}", message(lang, "search.try_different"));
    }

    if let SearchOutcome::Found(results) = &outcome {
        for article in results {
            println!("* {}", highlight(&article.title, filters.query()));
            if !article.description.is_empty() {
                println!("  {}...", highlight(excerpt(&article.description), filters.query()));
            }
            println!("  {} | {} | {}", article.source, article.category, article.url);
        }
    }
}

fn filter(logger: &Logger, lang: Language, articles: &[ArticleRecord], category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(Error::InvalidInput("category must not be empty".to_string()));
    }

    let counts = category_counts(articles);
    let summary = counts
        .iter()
        .map(|(name, count)| format!("{} ({})", name, count))
        .collect::<Vec<_>>()
        .join(", ");
    logger.debug(&format!("Categories: {}", summary));

    let plan = filter_by_category(articles.iter().map(|a| a.category.as_str()), category);
    for (article, visibility) in articles.iter().zip(&plan.cards) {
        match visibility {
            CardVisibility::Show { delay } => {
                println!("show +{:>4}ms {}", delay.as_millis(), article.title)
            }
            CardVisibility::Hide { .. } => println!("hide        {}", article.title),
        }
    }
    if plan.empty_state() {
        println!("{} ({})", message(lang, "filters.empty"), category);
    }
    Ok(())
}

fn badges(articles: &[ArticleRecord]) {
    let mut sheet = BadgeSheet::new();
    for article in articles {
        sheet.add(&article.category);
    }
    print!("{}", sheet.css());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(cli.verbose).with_prefix("📰");

    let priorities = load_priorities(cli.config.as_deref())?;
    logger.debug(&format!(
        "Using {} source weights (default {})",
        priorities.len(),
        priorities.default_weight()
    ));

    match cli.command {
        Commands::Rank { input, seed, no_jitter, json } => {
            let articles = load_articles(&input).await?;
            let logger = logger.with_prefix("🔀");
            rank(&logger, priorities, &articles, seed, no_jitter, json)?;
        }
        Commands::Search { input, query, category } => {
            let articles = load_articles(&input).await?;
            search(cli.lang, &articles, &query, category);
        }
        Commands::Filter { input, category } => {
            let articles = load_articles(&input).await?;
            let logger = logger.with_prefix("🏷️");
            filter(&logger, cli.lang, &articles, &category)?;
        }
        Commands::Badges { input } => {
            let articles = load_articles(&input).await?;
            badges(&articles);
        }
        Commands::Sources => {
            for (name, weight) in priorities.entries() {
                println!("{:>3}  {}", weight, name);
            }
            println!("{:>3}  (any other source)", priorities.default_weight());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank() {
        let cli = Cli::try_parse_from(["an", "rank", "news.json", "--seed", "7", "--json"]).unwrap();
        match cli.command {
            Commands::Rank { input, seed, no_jitter, json } => {
                assert_eq!(input, PathBuf::from("news.json"));
                assert_eq!(seed, Some(7));
                assert!(!no_jitter);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_seed_conflicts_with_no_jitter() {
        assert!(Cli::try_parse_from(["an", "rank", "in.json", "--seed", "1", "--no-jitter"]).is_err());
    }

    #[test]
    fn test_filter_defaults_to_all() {
        let cli = Cli::try_parse_from(["an", "--config", "w.toml", "filter", "in.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("w.toml")));
        match cli.command {
            Commands::Filter { category, .. } => assert_eq!(category, ALL_CATEGORIES),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_message() {
        let articles = vec![ArticleRecord::new("Wired AI", "Robots", "https://w")];
        let found = SearchOutcome::run(&articles, &SearchFilters::new("robot", ALL_CATEGORIES));
        assert_eq!(search_message(Language::En, &found), "Found 1 result");
        assert_eq!(search_message(Language::Fr, &found), "1 résultat trouvé");
        let none = SearchOutcome::run(&articles, &SearchFilters::new("zzz", ALL_CATEGORIES));
        assert_eq!(search_message(Language::En, &none), "No results");
    }

    #[test]
    fn test_lang_flag() {
        let cli = Cli::try_parse_from(["an", "sources"]).unwrap();
        assert_eq!(cli.lang, Language::Fr);
        let cli = Cli::try_parse_from(["an", "search", "in.json", "--lang", "en"]).unwrap();
        assert_eq!(cli.lang, Language::En);
        assert!(Cli::try_parse_from(["an", "--lang", "de", "sources"]).is_err());
    }

    #[test]
    fn test_missing_config_path_is_an_error() {
        let result = load_priorities(Some(Path::new("/nonexistent/weights.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
        assert!(load_priorities(None).is_ok());
    }

    #[test]
    fn test_empty_category_rejected() {
        let logger = Logger::new();
        assert!(matches!(
            filter(&logger, Language::default(), &[], " "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_load_articles_missing_file() {
        let err = load_articles(Path::new("/nonexistent/news.json")).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

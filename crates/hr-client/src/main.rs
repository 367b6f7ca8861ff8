//! # HR Dashboard
//!
//! Binary entry point for the terminal employee dashboard.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hr_bookmarks::{BookmarkStore, FileStorage};
use hr_client::{
    Config, Dashboard, DashboardError, DummyJsonSource, EmployeeLoader, ListQuery, ReportFormat,
    StaticSource, UserSource,
};
use hr_domain::{validate_rating, Department};
use hr_enricher::{generate_bookmark_trends, RandomEnricher};

#[derive(Parser, Debug)]
#[command(name = "hr-dashboard")]
#[command(about = "Employee directory, bookmarks and analytics")]
#[command(version)]
struct Args {
    /// Read users from a JSON roster instead of the API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Seed for reproducible enrichment (overrides HR_ENRICH_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of users to load (overrides HR_PAGE_LIMIT)
    #[arg(long, global = true)]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List employees matching a search and filters
    List {
        /// Free-text search over name, email and department
        #[arg(short, long, default_value = "")]
        search: String,

        /// Department filter, repeatable
        #[arg(short, long = "department")]
        departments: Vec<Department>,

        /// Rating filter, repeatable
        #[arg(short, long = "rating", value_parser = parse_rating)]
        ratings: Vec<u8>,

        /// Search the bookmark list instead of the loaded roster
        #[arg(long)]
        bookmarked: bool,

        /// Pages of results to show
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Show one employee in detail
    Show { id: u32 },

    /// List the available filter values
    Facets,

    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Department performance and bookmark trends
    Analytics {
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,

        /// Omit the bookmark trend table
        #[arg(long)]
        no_trends: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkAction {
    Add { id: u32 },
    Remove { id: u32 },
    List,
}

fn parse_rating(raw: &str) -> Result<u8, String> {
    let value: u8 = raw.parse().map_err(|_| format!("not a rating: {raw}"))?;
    validate_rating(value).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(seed) = args.seed {
        config.enrich_seed = Some(seed);
    }
    if let Some(limit) = args.limit {
        config.page_limit = limit;
    }

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(
            config
                .log_json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!config.log_json)
                .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    tracing::debug!(
        version = hr_client::VERSION,
        api = %config.api_base_url,
        limit = config.page_limit,
        data_dir = %config.data_dir.display(),
        "Starting HR dashboard"
    );

    match args.fixture {
        Some(ref path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading roster {}", path.display()))?;
            run(StaticSource::from_json(&raw)?, &config, args.command).await
        }
        None => run(DummyJsonSource::from_config(&config)?, &config, args.command).await,
    }
}

async fn run<S: UserSource>(source: S, config: &Config, command: Command) -> anyhow::Result<()> {
    let enricher = config
        .enrich_seed
        .map_or_else(RandomEnricher::new, RandomEnricher::seeded);
    let loader = EmployeeLoader::new(source, enricher).with_limit(config.page_limit);

    let storage = FileStorage::new(config.data_dir.clone());
    let bookmarks = BookmarkStore::load(storage).context("loading bookmarks")?;
    let mut dashboard = Dashboard::new(loader, bookmarks);

    let output = match command {
        Command::List {
            search,
            departments,
            ratings,
            bookmarked,
            pages,
        } => {
            let query = ListQuery {
                search,
                departments,
                ratings,
                bookmarked,
                pages,
            };
            dashboard.list(&query).await
        }
        Command::Show { id } => dashboard.show(id).await,
        Command::Facets => dashboard.facets().await,
        Command::Bookmark { action } => match action {
            BookmarkAction::Add { id } => dashboard.bookmark_add(id).await,
            BookmarkAction::Remove { id } => dashboard.bookmark_remove(id),
            BookmarkAction::List => Ok(dashboard.bookmark_list()),
        },
        Command::Analytics { format, no_trends } => {
            let trends = (!no_trends).then(|| {
                let mut rng = config
                    .enrich_seed
                    .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
                generate_bookmark_trends(&mut rng)
            });
            dashboard.analytics(format, trends).await
        }
    };

    match output {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(DashboardError::Load(err)) => {
            eprintln!("{}", err.user_message());
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

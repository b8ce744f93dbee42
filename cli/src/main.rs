use anyhow::Context;
use clap::{Parser, Subcommand};
use pokedex_core::catalog::{Catalog, SeedData};
use pokedex_core::types::{AppConfig, CollectionId, Element, Pokemon};
use pokedex_search::{SearchConfig, SearchIndex};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

#[derive(Parser)]
#[command(author, version, about = "Live prefix search over a pokedex catalog", long_about = None)]
struct Cli {
    /// Path to config.toml
    #[arg(long, env = "POKEDEX_CONFIG")]
    config: Option<PathBuf>,

    /// Seed file (TOML) to load instead of the built-in catalog
    #[arg(long)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one collection unfiltered
    List {
        #[arg(short, long)]
        view: Option<CollectionId>,
    },
    /// Filter one collection by a name prefix
    Query {
        text: String,
        #[arg(short, long)]
        view: Option<CollectionId>,
        #[arg(long, help = "Print matches as JSON")]
        json: bool,
    },
    /// Read queries and commands from stdin
    Repl {
        #[arg(short, long)]
        view: Option<CollectionId>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let problems = config.validate();
    let config = config.with_defaults_for_invalid();
    init_logging(&config.logging.level);
    for problem in problems {
        tracing::warn!(%problem, "invalid config value replaced with default");
    }

    let mut catalog = load_catalog(cli.seed.as_deref())?;
    let mut index = SearchIndex::from_catalog(&catalog, SearchConfig::from(&config.search));
    let default_view = config.general.default_view;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { view } => {
            let view = view.unwrap_or(default_view);
            render::print_view(&mut out, &index.query("", view), view)?;
        }
        Commands::Query { text, view, json } => {
            let view = view.unwrap_or(default_view);
            let results = index.query(&text, view);
            if json {
                let rendered = render::to_json(&results, view)?;
                writeln!(out, "{rendered}")?;
            } else {
                render::print_view(&mut out, &results, view)?;
            }
        }
        Commands::Repl { view } => {
            let view = view.unwrap_or(default_view);
            let mut session = repl::Session::new(&mut catalog, &mut index, view);
            session.run(io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn load_catalog(seed: Option<&Path>) -> anyhow::Result<Catalog> {
    let now = SystemTime::now();
    let catalog = match seed {
        Some(path) => {
            let data = SeedData::load(path)
                .with_context(|| format!("failed to read seed file {}", path.display()))?;
            let mut catalog = Catalog::new();
            catalog.apply_seed(&data, now)?;
            catalog
        }
        None => Catalog::seeded(now)?,
    };

    tracing::info!(
        pokemon = catalog.all::<Pokemon>().len(),
        elements = catalog.all::<Element>().len(),
        abilities = catalog.len(CollectionId::Abilities),
        "catalog loaded"
    );
    Ok(catalog)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shakesearch::config::Config;
use shakesearch::index::build::build_index_from_file;
use shakesearch::index::stats::show_stats;
use shakesearch::{output, server, Searcher};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shakesearch")]
#[command(about = "Case-insensitive substring search over a fixed corpus")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server options (when no subcommand is given)
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the corpus and serve the HTTP API (default)
    Serve(ServeArgs),
    /// Run a single query and print the excerpts
    Query {
        /// Search query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Print at most this many excerpts
        #[arg(short = 'm', long)]
        limit: Option<usize>,

        /// Print excerpts as a JSON array
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Args, Clone, Default)]
struct CorpusArgs {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus file to index
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Excerpt look-around radius
    #[arg(long)]
    radius: Option<usize>,
}

impl CorpusArgs {
    fn load_config(&self, static_dir: Option<PathBuf>, port: Option<u16>) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?.with_overrides(
            self.corpus.clone(),
            static_dir,
            port,
        );
        if let Some(radius) = self.radius {
            config.excerpt_radius = radius;
        }
        Ok(config)
    }
}

#[derive(Args, Clone, Default)]
struct ServeArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Directory of static assets served at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Some(Commands::Query { .. }) => "warn",
        _ => "info",
    };
    init_tracing(default_level);

    match cli.command {
        Some(Commands::Serve(args)) => run_server(args)?,
        None => run_server(cli.serve)?,
        Some(Commands::Query {
            query,
            corpus,
            limit,
            json,
            no_color,
        }) => {
            let config = corpus.load_config(None, None)?;
            let index = build_index_from_file(&config.corpus_path, json)?;
            let searcher = Searcher::from_index(index).with_radius(config.excerpt_radius);

            let query = query.join(" ");
            let mut hits = searcher.hits(&query);
            if let Some(limit) = limit {
                hits.truncate(limit);
            }

            if json {
                output::print_json(&hits)?;
            } else {
                output::print_hits(&hits, query.len(), !no_color)?;
            }
        }
        Some(Commands::Stats { corpus }) => {
            let config = corpus.load_config(None, None)?;
            show_stats(&config.corpus_path)?;
        }
    }

    Ok(())
}

fn run_server(args: ServeArgs) -> Result<()> {
    let config = args.corpus.load_config(args.static_dir, args.port)?;

    // Nothing can be served without the corpus, so a load failure is fatal.
    let index = build_index_from_file(&config.corpus_path, false)?;
    let searcher = Searcher::from_index(index).with_radius(config.excerpt_radius);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;
    runtime.block_on(server::serve(searcher, &config))
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

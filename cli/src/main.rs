use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use docsearch::{hits, load_corpus_dir, render_text, resolve_scope};
use docsearch_core::{Engine, EngineConfig, NormalizerKind, Scope, SplitMode, Strategy};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Index a folder of text documents and query it under several retrieval models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one query against a document folder
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Retrieval model
        #[arg(long, value_enum, default_value_t = Model::Tf)]
        model: Model,
        /// Index to search for the tf and overlap models (default: content)
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,
        /// Maximum number of results to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        query: String,
    },
    /// Print index statistics for a document folder
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Args)]
struct CorpusArgs {
    /// Folder of documents, first line of each file is its title
    #[arg(long)]
    dir: String,
    /// JSON engine configuration
    #[arg(long)]
    config: Option<String>,
    /// Split on whitespace instead of non-alphanumeric runs
    #[arg(long, default_value_t = false)]
    whitespace: bool,
    /// Stem terms with the English Porter2 stemmer
    #[arg(long, default_value_t = false)]
    stem: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Model {
    Tf,
    Tfidf,
    Bim,
    Proximal,
    Overlap,
}

impl From<Model> for Strategy {
    fn from(m: Model) -> Self {
        match m {
            Model::Tf => Strategy::TermFrequency,
            Model::Tfidf => Strategy::TfIdf,
            Model::Bim => Strategy::Bim,
            Model::Proximal => Strategy::ProximalNodes,
            Model::Overlap => Strategy::NonOverlapped,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Title,
    Content,
}

impl From<ScopeArg> for Scope {
    fn from(s: ScopeArg) -> Self {
        match s {
            ScopeArg::Title => Scope::Title,
            ScopeArg::Content => Scope::Content,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, model, scope, limit, json, query } => {
            let engine = open_engine(&corpus)?;
            let start = std::time::Instant::now();
            let strategy: Strategy = model.into();
            let scope = resolve_scope(strategy, scope.map(Scope::from));
            let result = engine.query(strategy, &query, scope);
            let elapsed = start.elapsed();
            tracing::info!(took_s = elapsed.as_secs_f64(), hits = result.len(), "query finished");
            let found = hits(&engine, &result, limit, 200);
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                println!("{}", render_text(&found, result.len(), elapsed));
            }
        }
        Commands::Stats { corpus } => {
            let engine = open_engine(&corpus)?;
            let idx = engine.indexes();
            let stats = serde_json::json!({
                "num_docs": engine.store().len(),
                "title_terms": idx.inverted.title.len(),
                "content_terms": idx.inverted.content.len(),
                "buckets": idx.inverted.content.bucket_count(),
                "longest_chain": idx.inverted.content.longest_chain(),
                "vocabulary": idx.bim.vocabulary().len(),
                "graph_nodes": idx.graph.node_count(),
                "graph_edges": idx.graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

fn open_engine(args: &CorpusArgs) -> Result<Engine> {
    let mut cfg = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.whitespace {
        cfg.split = SplitMode::Whitespace;
    }
    if args.stem {
        cfg.normalizer = NormalizerKind::Stem;
    }
    let store = load_corpus_dir(&args.dir)?;
    Ok(Engine::new(store, cfg))
}

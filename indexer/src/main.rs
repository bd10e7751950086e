use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use webscour_core::persist::{save_index, IndexPaths, MetaFile};
use webscour_core::{IndexBuilder, PageStore};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build an inverted index with IDF weights over crawled pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every page under the pages directory
    Build {
        /// Pages directory written by the crawler
        #[arg(long, default_value = "pages")]
        pages: PathBuf,
        /// Output directory for inverted_index.json, idf.json and meta.json
        /// (defaults to the directory containing the pages directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { pages, output } => {
            let output = output.unwrap_or_else(|| default_output(&pages));
            let meta = build_index(&pages, &output)?;
            println!("Indexing completed");
            println!("Documents indexed: {}", meta.num_docs);
            println!("Terms indexed: {}", meta.num_terms);
            let paths = IndexPaths::new(&output);
            println!("Files created: {}, {}", paths.inverted_index().display(), paths.idf().display());
            Ok(())
        }
    }
}

fn default_output(pages: &Path) -> PathBuf {
    match pages.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn build_index(pages: &Path, output: &Path) -> Result<MetaFile> {
    let store = PageStore::open(pages).context("cannot index: run the crawler first or pass --pages")?;
    let corpus = store.list_corpus()?;
    tracing::info!(num_docs = corpus.len(), pages = %pages.display(), "loaded corpus");

    let (index, idf) = IndexBuilder::build(&corpus)
        .with_context(|| format!("no pages to index in {}", pages.display()))?;
    let meta = save_index(&IndexPaths::new(output), &index, &idf, corpus.len())?;

    tracing::info!(output = %output.display(), num_terms = meta.num_terms, "index build complete");
    Ok(meta)
}

use anyhow::{Context, Result};
use clap::Parser;
use crawler::{CrawlConfig, CrawlEngine, HttpTransport, RetryPolicy};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Crawl one site breadth-first and save every page under a pages directory")]
struct Cli {
    /// Absolute http(s) URL to start from; only its host is crawled
    #[arg(long)]
    seed: String,
    /// Stop after this many pages
    #[arg(long, default_value_t = 20)]
    max_pages: usize,
    /// Attempts per URL before skipping it
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,
    /// Request timeout seconds
    #[arg(long, default_value_t = 8)]
    timeout_secs: u64,
    /// Where fetched pages are written
    #[arg(long, default_value = "pages")]
    pages_dir: PathBuf,
    /// Where visited URLs are listed once the crawl ends (default: visited.txt next to the pages directory)
    #[arg(long)]
    visited_file: Option<PathBuf>,
    #[arg(long, default_value = crawler::config::DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl Cli {
    fn into_config(self) -> CrawlConfig {
        CrawlConfig {
            max_pages: self.max_pages,
            retry: RetryPolicy {
                max_attempts: self.max_attempts,
                timeout: Duration::from_secs(self.timeout_secs),
                ..RetryPolicy::default()
            },
            pages_dir: self.pages_dir,
            visited_file: self.visited_file,
            user_agent: self.user_agent,
            ..CrawlConfig::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();
    let seed = args.seed.clone();
    let config = args.into_config();
    eprintln!(
        "crawler: seed={} max_pages={} pages_dir={}",
        seed,
        config.max_pages,
        config.pages_dir.display()
    );

    let transport = HttpTransport::new(&config.user_agent).context("failed to build http client")?;
    let engine = CrawlEngine::new(transport, config);
    let summary = engine
        .run(&seed)
        .await
        .with_context(|| format!("crawl of {seed} aborted"))?;

    println!();
    println!("----------- SUMMARY -----------");
    println!("Total Pages Crawled : {}", summary.pages_crawled);
    println!("Unique URLs Found   : {}", summary.unique_urls());
    println!("Duplicate URLs      : {}", summary.duplicate_count);
    println!("Visited URLs saved to {}", summary.visited_file.display());
    println!("Time Taken (sec)    : {:.2}", summary.elapsed_seconds());
    println!("--------------------------------");
    Ok(())
}

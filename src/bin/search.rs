//! Search CLI: build the corpus index over a record store and rank it
//! against a free-text query.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

use article_harvest::{Error, IndexOptions, RecordStore, SearchService};

#[derive(Debug, Parser)]
#[command(name = "search", about = "Popularity-ranked similarity search over harvested records")]
struct Args {
    /// Record store CSV to index.
    #[arg(long, default_value = "scrapping_results.csv")]
    data: PathBuf,

    /// Free-text query.
    #[arg(long)]
    query: Option<String>,

    /// Number of results to return.
    #[arg(long)]
    top_n: Option<usize>,

    /// Print the index readiness signal instead of searching.
    #[arg(long)]
    status: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(fault = %e, "search failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> article_harvest::Result<()> {
    let store = RecordStore::new(&args.data);
    let records = store.load()?;

    let service = SearchService::new(IndexOptions::default());
    service.rebuild(&records);

    if args.status {
        println!("{}", json!(service.status()));
        return Ok(());
    }

    let Some(query) = args.query else {
        return Err(Error::InvalidQuery(
            "pass --query or --status".to_string(),
        ));
    };

    let results = service.search(&query, args.top_n)?;
    if results.is_empty() {
        println!(
            "{}",
            json!({
                "message": "No similar articles found",
                "query": query,
                "results": [],
            })
        );
        return Ok(());
    }

    println!(
        "{}",
        json!({
            "query": query,
            "count": results.len(),
            "results": results,
        })
    );
    Ok(())
}

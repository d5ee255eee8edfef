//! Basic search example showing paginated queries against a local engine.

use anyhow::Context;
use elastic_client::{ClientConfig, CurrentPage, DocumentTarget, ElasticClient, SearchOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Article {
    title: String,
    content: String,
    category: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = ElasticClient::new(ClientConfig::from_env()?)?;
    let articles = DocumentTarget::new("articles", "article");

    // Example 1: match everything, ten per page, page taken from a request URL
    println!("=== Match All ===");
    let options = SearchOptions::new(serde_json::json!({ "match_all": {} })).with_size(10);
    let page = client
        .search::<Article>(&articles, &options, CurrentPage::from_query("page=1"))
        .await
        .context("match_all search failed")?;

    println!(
        "Page {} of {} ({} total)",
        page.current_page(),
        page.last_page(),
        page.total()
    );
    for hit in page.items() {
        println!("- {} (score: {:?})", hit.source.title, hit.score);
    }

    // Example 2: filtered search, default page size of one
    println!("\n=== Filtered Search ===");
    let filtered = SearchOptions::new(serde_json::json!({
        "match": { "category": "technology" }
    }));
    let page = client
        .search::<Article>(&articles, &filtered, CurrentPage::new(2))
        .await?;

    if let Some(hit) = page.items().first() {
        println!("Second technology article: {}", hit.source.title);
    }
    if let Some(elapsed) = page.elapsed() {
        println!("Search completed in {}", elapsed.formatted);
    }

    // Example 3: the page as a pager-compatible JSON document
    println!("\n=== Pager JSON ===");
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}

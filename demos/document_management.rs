//! Document management example showing index lifecycle and CRUD operations.

use elastic_client::{
    ClientConfig, CreateIndexParams, DocumentTarget, ElasticClient, ElasticError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Article {
    title: String,
    content: String,
    author: String,
    tags: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = ElasticClient::new(ClientConfig::default())?;

    // Example 1: Create an index
    println!("=== Creating Index ===");
    let params = CreateIndexParams::new("articles", "article")
        .with_property("title", serde_json::json!({ "type": "text" }))
        .with_property("content", serde_json::json!({ "type": "text" }))
        .with_property("author", serde_json::json!({ "type": "keyword" }));

    let created = client.create_index(&params).await?;
    if created.is_success() {
        println!("Index 'articles' created");
    } else {
        println!(
            "Index not created: {}",
            created.error_reason().unwrap_or_default()
        );
    }

    // Example 2: Store and read back a document
    println!("\n=== Storing Documents ===");
    let target = DocumentTarget::new("articles", "article");
    let article = Article {
        title: "Introduction to Machine Learning".to_string(),
        content: "Machine learning is a subset of artificial intelligence...".to_string(),
        author: "John Doe".to_string(),
        tags: vec!["AI".to_string(), "ML".to_string()],
    };

    let stored = client.put_document(&target, "1", &article).await?;
    println!("Stored: {}", stored.data["result"]);

    let fetched = client.get_document(&target, "1").await?;
    if let Ok(data) = fetched.into_result() {
        let article: Article = serde_json::from_value(data["_source"].clone())?;
        println!("Fetched: {} by {}", article.title, article.author);
    }

    // Example 3: List indices
    println!("\n=== Indices ===");
    match client.list_indices().await {
        Ok(table) => println!("{table}"),
        Err(e) if e.is_transport() => println!("Engine unreachable: {e}"),
        Err(e) => return Err(e.into()),
    }

    // Example 4: Delete the index
    println!("\n=== Deleting Index ===");
    match client.delete_index("articles").await {
        Ok(envelope) => println!("Deleted: {}", envelope.is_success()),
        Err(ElasticError::Parse { body, .. }) => println!("Unexpected response: {body}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

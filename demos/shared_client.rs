//! Shared client example: the process-wide selector from concurrent tasks.

use elastic_client::{shared, CurrentPage, SearchOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let tasks: Vec<_> = ["logs", "metrics"]
        .into_iter()
        .map(|index| {
            tokio::spawn(async move {
                // The guard is held across select and search, so the two tasks
                // never see each other's index.
                let mut db = shared(Some(index)).await?;
                let page = db
                    .doc_type("entry")
                    .search::<serde_json::Value>(
                        &SearchOptions::new(serde_json::json!({ "match_all": {} })).with_size(5),
                        CurrentPage::default(),
                    )
                    .await?;
                Ok::<_, elastic_client::ElasticError>((index, page.total()))
            })
        })
        .collect();

    for task in tasks {
        match task.await? {
            Ok((index, total)) => println!("{index}: {total} documents"),
            Err(e) => println!("search failed: {e}"),
        }
    }

    Ok(())
}

//! The shared selector builds itself from the environment when nothing was installed.

use elastic_client::{shared, ClientConfig};

#[tokio::test]
async fn test_shared_is_built_lazily_from_env() {
    assert!(!elastic_client::shared::is_shared_initialized());

    let db = shared(None).await.unwrap();
    let expected = ClientConfig::from_env().unwrap();

    assert!(elastic_client::shared::is_shared_initialized());
    assert_eq!(db.client().config().base_url(), expected.base_url());
    assert!(db.selected_index().is_none());
    drop(db);

    let db = shared(Some("logs")).await.unwrap();
    assert_eq!(db.selected_index(), Some("logs"));
}

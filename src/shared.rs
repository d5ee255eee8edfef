//! Process-wide shared selector.
//!
//! The shared instance is built lazily from the environment (see
//! [`ClientConfig::from_env`](crate::config::ClientConfig::from_env)) unless
//! the application installs its own client first. Access goes through an
//! exclusive guard: select-then-operate sequences on the shared handle cannot
//! interleave with other tasks, and each holder starts with an empty
//! selection.

use tokio::sync::{Mutex, MutexGuard, OnceCell};

use crate::client::ElasticClient;
use crate::error::{ElasticError, Result};
use crate::selector::Selector;

static SHARED: OnceCell<Mutex<Selector>> = OnceCell::const_new();

/// Exclusive access to the shared selector, released on drop
pub type SharedSelector = MutexGuard<'static, Selector>;

/// Lock the shared selector, creating it on first use.
///
/// With `index`, the guard comes back with that index already selected.
///
/// The lock is not re-entrant: calling `shared` again while the same task
/// still holds a guard waits forever. Drop the guard first.
pub async fn shared(index: Option<&str>) -> Result<SharedSelector> {
    let cell = SHARED
        .get_or_try_init(|| async {
            let client = ElasticClient::from_env()?;
            #[cfg(feature = "tracing")]
            tracing::debug!(base_url = %client.config().base_url(), "created shared client");
            Ok::<_, ElasticError>(Mutex::new(Selector::new(client)))
        })
        .await?;

    let mut selector = cell.lock().await;
    selector.reset();
    if let Some(index) = index {
        selector.index(index);
    }

    Ok(selector)
}

/// Install `client` as the shared instance.
///
/// Fails once the shared instance exists, whether installed or lazily built.
pub fn install_shared(client: ElasticClient) -> Result<()> {
    SHARED
        .set(Mutex::new(Selector::new(client)))
        .map_err(|_| ElasticError::config("shared client is already initialized"))
}

/// Whether the shared instance has been created yet
pub fn is_shared_initialized() -> bool {
    SHARED.initialized()
}

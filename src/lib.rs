//! # Elastic Client
//!
//! An async Rust client for Elasticsearch-style document search engines.
//!
//! Every call returns either a normalized [`ResultEnvelope`] (index and
//! document operations) or a length-aware [`Page`] of hits (search). Network
//! failures and unparsable responses surface as distinct [`ElasticError`]
//! kinds instead of failed envelopes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elastic_client::{ClientConfig, CurrentPage, DocumentTarget, ElasticClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ElasticClient::new(ClientConfig::default())?;
//!     let logs = DocumentTarget::new("logs", "entry");
//!
//!     let page = client
//!         .search::<serde_json::Value>(
//!             &logs,
//!             &SearchOptions::new(serde_json::json!({"match_all": {}})).with_size(10),
//!             CurrentPage::from_query("page=2"),
//!         )
//!         .await?;
//!
//!     println!("Showing {} of {} hits", page.len(), page.total());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod search;
pub mod selector;
pub mod shared;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::ElasticClient;
pub use config::ClientConfig;
pub use envelope::{normalize, ResultEnvelope, Status};
pub use error::{ElasticError, Result};
pub use search::{CurrentPage, Page, QueryBody, SearchOptions};
pub use selector::Selector;
pub use shared::{install_shared, shared, SharedSelector};
pub use transport::{HttpTransport, RawResponse, Transport, TransportRequest};
pub use types::*;

//! Fluent index/type selection over an [`ElasticClient`].
//!
//! ```rust,no_run
//! use elastic_client::{ClientConfig, ElasticClient, Selector};
//!
//! # async fn run() -> elastic_client::Result<()> {
//! let mut db = Selector::new(ElasticClient::new(ClientConfig::default())?);
//! let doc = db.index("logs").doc_type("entry").get_document("42").await?;
//! assert!(db.selected_index().is_none());
//! # let _ = doc;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ElasticClient;
use crate::envelope::ResultEnvelope;
use crate::error::{ElasticError, Result};
use crate::search::{CurrentPage, Page, QueryBody, SearchOptions};
use crate::types::{CreateIndexParams, DocumentTarget, Hit};

/// Selected index and type, consumed by the next terminal operation.
///
/// Every terminal operation clears the selection whether it succeeds or not,
/// so nothing carries over into an unrelated call.
#[derive(Debug, Clone)]
pub struct Selector {
    client: ElasticClient,
    index: Option<String>,
    doc_type: Option<String>,
    pending_query: Option<QueryBody>,
}

impl Selector {
    /// Create a new selector with nothing selected
    pub fn new(client: ElasticClient) -> Self {
        Self {
            client,
            index: None,
            doc_type: None,
            pending_query: None,
        }
    }

    /// Select the index
    pub fn index<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.index = Some(name.into());
        self
    }

    /// Select the document type
    pub fn doc_type<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.doc_type = Some(name.into());
        self
    }

    pub fn selected_index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    pub fn selected_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    /// Query of a search that has not finished
    pub fn pending_query(&self) -> Option<&QueryBody> {
        self.pending_query.as_ref()
    }

    /// Drop the selection and any pending query
    pub fn reset(&mut self) {
        self.index = None;
        self.doc_type = None;
        self.pending_query = None;
    }

    pub fn client(&self) -> &ElasticClient {
        &self.client
    }

    /// Create an index. Takes its target from `params`; the selection is left alone.
    pub async fn create_index(&self, params: &CreateIndexParams) -> Result<ResultEnvelope> {
        self.client.create_index(params).await
    }

    /// Delete the selected index
    pub async fn delete_index(&mut self) -> Result<ResultEnvelope> {
        let index = self.index.take();
        self.doc_type = None;

        let index = index.ok_or_else(|| ElasticError::target("no index selected"))?;
        self.client.delete_index(&index).await
    }

    /// Store a document in the selected index and type
    pub async fn put_document<D>(&mut self, id: &str, document: &D) -> Result<ResultEnvelope>
    where
        D: Serialize + ?Sized,
    {
        let target = self.take_target()?;
        self.client.put_document(&target, id, document).await
    }

    /// Fetch a document from the selected index and type
    pub async fn get_document(&mut self, id: &str) -> Result<ResultEnvelope> {
        let target = self.take_target()?;
        self.client.get_document(&target, id).await
    }

    /// Search the selected index and type
    pub async fn search<T>(
        &mut self,
        options: &SearchOptions,
        page: CurrentPage,
    ) -> Result<Page<Hit<T>>>
    where
        T: DeserializeOwned,
    {
        let target = self.take_target();
        let body = QueryBody::for_page(options.query.clone(), options.size(), page);

        let (target, body) = match (target, body) {
            (Ok(target), Ok(body)) => (target, body),
            (Err(e), _) | (_, Err(e)) => {
                self.reset();
                return Err(e);
            }
        };

        self.pending_query = Some(body.clone());
        let _pending = ClearOnDrop(&mut self.pending_query);
        self.client.execute_search(&target, &body, page).await
    }

    /// The engine's plain-text index table
    pub async fn list_indices(&self) -> Result<String> {
        self.client.list_indices().await
    }

    fn take_target(&mut self) -> Result<DocumentTarget> {
        let index = self.index.take();
        let doc_type = self.doc_type.take();

        match (index, doc_type) {
            (Some(index), Some(doc_type)) => Ok(DocumentTarget::new(index, doc_type)),
            (None, _) => Err(ElasticError::target("no index selected")),
            (_, None) => Err(ElasticError::target("no document type selected")),
        }
    }
}

/// Clears the pending query when the search returns or its future is dropped
struct ClearOnDrop<'a>(&'a mut Option<QueryBody>);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.take();
    }
}

impl From<ElasticClient> for Selector {
    fn from(client: ElasticClient) -> Self {
        Self::new(client)
    }
}

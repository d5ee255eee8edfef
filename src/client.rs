//! Document, index and search operations.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::envelope::{normalize, ResultEnvelope};
use crate::error::{ElasticError, Result};
use crate::search::{paginate, CurrentPage, Page, QueryBody, SearchOptions};
use crate::transport::{HttpTransport, Transport, TransportRequest};
use crate::types::{index_segment, CreateIndexParams, DocumentTarget, Elapsed, Hit};
use crate::utils::{current_time_millis, elapsed_since, format_duration};

const CAT_INDICES_PATH: &str = "_cat/indices?v";

/// Client for an Elasticsearch-style engine.
///
/// Holds configuration and a transport only; every call names its own
/// target, so one instance can be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct ElasticClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl ElasticClient {
    /// Create a new client over HTTP
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a new client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Create a new client configured from `ELASTICSEARCH_*` variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create an index with a single typed mapping
    pub async fn create_index(&self, params: &CreateIndexParams) -> Result<ResultEnvelope> {
        let url = self.config.endpoint(index_segment(&params.index)?)?;
        let body = serde_json::to_string(&params.mapping_body())?;
        self.send(TransportRequest::put(url, body)).await
    }

    /// Delete an index
    pub async fn delete_index(&self, index: &str) -> Result<ResultEnvelope> {
        let url = self.config.endpoint(index_segment(index)?)?;
        self.send(TransportRequest::delete(url)).await
    }

    /// Store a document under an explicit id, replacing any previous version
    pub async fn put_document<D>(
        &self,
        target: &DocumentTarget,
        id: &str,
        document: &D,
    ) -> Result<ResultEnvelope>
    where
        D: Serialize + ?Sized,
    {
        let url = self.config.endpoint(&target.path(id)?)?;
        let body = serde_json::to_string(document)?;
        self.send(TransportRequest::post(url, body)).await
    }

    /// Fetch a document by id
    pub async fn get_document(&self, target: &DocumentTarget, id: &str) -> Result<ResultEnvelope> {
        let url = self.config.endpoint(&target.path(id)?)?;
        self.send(TransportRequest::get(url)).await
    }

    /// The engine's plain-text index table, as returned
    pub async fn list_indices(&self) -> Result<String> {
        let url = self.config.endpoint(CAT_INDICES_PATH)?;
        let response = self.transport.execute(TransportRequest::get(url)).await?;
        Ok(response.body)
    }

    /// Run a query and return the requested page of hits
    pub async fn search<T>(
        &self,
        target: &DocumentTarget,
        options: &SearchOptions,
        page: CurrentPage,
    ) -> Result<Page<Hit<T>>>
    where
        T: DeserializeOwned,
    {
        let body = QueryBody::for_page(options.query.clone(), options.size(), page)?;
        self.execute_search(target, &body, page).await
    }

    pub(crate) async fn execute_search<T>(
        &self,
        target: &DocumentTarget,
        body: &QueryBody,
        page: CurrentPage,
    ) -> Result<Page<Hit<T>>>
    where
        T: DeserializeOwned,
    {
        let start_time = current_time_millis();

        let url = self.config.endpoint(&target.path("_search")?)?;
        let envelope = self
            .send(TransportRequest::post(url, serde_json::to_string(body)?))
            .await?;
        let page = paginate(envelope, body.size, page)?;

        let elapsed_time = elapsed_since(start_time);
        Ok(page.with_elapsed(Elapsed {
            raw: elapsed_time,
            formatted: format_duration(elapsed_time),
        }))
    }

    async fn send(&self, request: TransportRequest) -> Result<ResultEnvelope> {
        let response = self.transport.execute(request).await?;
        normalize(&response.body)
    }
}

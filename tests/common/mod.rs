//! Common test utilities and helpers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use elastic_client::{
    ClientConfig, ElasticClient, RawResponse, Result, Transport, TransportRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Test document structure used across tests
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogEntry {
    pub level: String,
    pub msg: String,
}

/// Create sample log entries
pub fn create_log_entries() -> Vec<LogEntry> {
    [
        ("info", "service started"),
        ("warn", "disk usage at 85%"),
        ("error", "disk full"),
        ("info", "cleanup finished"),
        ("warn", "slow query"),
    ]
    .iter()
    .map(|(level, msg)| LogEntry {
        level: level.to_string(),
        msg: msg.to_string(),
    })
    .collect()
}

/// Transport double that records requests and replays queued bodies.
///
/// With nothing queued it answers `{}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<TransportRequest>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a 200 response with `body`
    pub fn respond_with(&self, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(200, body));
    }

    /// Queue a response with an explicit HTTP status
    pub fn respond_with_status(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests()
            .pop()
            .expect("no request reached the transport")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: TransportRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(200, "{}"));
        Ok(response)
    }
}

/// Client on the default config, backed by `transport`
pub fn recording_client(transport: &Arc<RecordingTransport>) -> ElasticClient {
    ElasticClient::with_transport(ClientConfig::default(), transport.clone())
}

/// Config pointing at a mockito server's `host:port`
pub fn config_for(host_with_port: &str) -> ClientConfig {
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mock server address has a port");
    ClientConfig::new(host, port)
}

/// Config pointing at a port nothing listens on
pub fn unreachable_config() -> ClientConfig {
    ClientConfig::new("127.0.0.1", "1")
        .with_connect_timeout(std::time::Duration::from_secs(2))
        .with_timeout(std::time::Duration::from_secs(2))
}

/// Search response for hits `ids` out of `total`, the way the engine pages them
pub fn search_response(ids: &[u64], total: u64) -> Value {
    let entries = create_log_entries();
    let hits: Vec<Value> = ids
        .iter()
        .map(|id| {
            let entry = &entries[(*id as usize - 1) % entries.len()];
            json!({
                "_index": "logs",
                "_type": "entry",
                "_id": id.to_string(),
                "_score": 1.0,
                "_source": entry,
            })
        })
        .collect();

    json!({
        "took": 2,
        "timed_out": false,
        "_shards": {"total": 1, "successful": 1, "skipped": 0, "failed": 0},
        "hits": {"total": total, "max_score": 1.0, "hits": hits}
    })
}

/// Engine error body for a missing index
pub fn index_not_found(index: &str) -> Value {
    json!({
        "error": {
            "root_cause": [{
                "type": "index_not_found_exception",
                "reason": format!("no such index [{index}]"),
                "index": index
            }],
            "type": "index_not_found_exception",
            "reason": format!("no such index [{index}]"),
            "index": index
        },
        "status": 404
    })
}

/// Setup test logging (useful for debugging tests)
pub fn setup_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

//! Core types for the Elasticsearch client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ElasticError, Result};
use crate::utils::path_segment;

/// Type alias for generic object data
pub type AnyObject = serde_json::Value;

/// Index and document type an operation runs against.
///
/// Names are passed to the engine verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentTarget {
    pub index: String,
    pub doc_type: String,
}

impl DocumentTarget {
    /// Create a new DocumentTarget
    pub fn new<I: Into<String>, T: Into<String>>(index: I, doc_type: T) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
        }
    }

    /// `<index>/<type>/<tail>`
    pub(crate) fn path(&self, tail: &str) -> Result<String> {
        let index = index_segment(&self.index)?;
        let doc_type = path_segment(&self.doc_type)
            .ok_or_else(|| ElasticError::target("document type name is empty"))?;
        let tail =
            path_segment(tail).ok_or_else(|| ElasticError::invalid("document id is empty"))?;

        Ok(format!("{index}/{doc_type}/{tail}"))
    }
}

/// An index name as a single path segment.
///
/// A name that is empty once slashes are trimmed would address the engine
/// root, so it is rejected.
pub(crate) fn index_segment(index: &str) -> Result<&str> {
    path_segment(index).ok_or_else(|| ElasticError::target("index name is empty"))
}

/// Parameters for creating an index with a single typed mapping
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexParams {
    pub index: String,
    pub doc_type: String,
    pub properties: Map<String, Value>,
}

impl CreateIndexParams {
    /// Create a new CreateIndexParams with no mapped fields
    pub fn new<I: Into<String>, T: Into<String>>(index: I, doc_type: T) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
            properties: Map::new(),
        }
    }

    /// Map a single field
    pub fn with_property<S: Into<String>>(mut self, field: S, schema: Value) -> Self {
        self.properties.insert(field.into(), schema);
        self
    }

    /// Replace the whole field mapping
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// `{"mappings": {<type>: {"properties": ..}}}`
    pub fn mapping_body(&self) -> Value {
        let mut type_mapping = Map::new();
        type_mapping.insert(
            self.doc_type.clone(),
            serde_json::json!({ "properties": self.properties }),
        );

        serde_json::json!({ "mappings": type_mapping })
    }
}

/// Search hit result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit<T = AnyObject> {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: T,
}

/// `hits.total` is a bare number on older engines and an object on newer ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HitsTotal {
    Count(u64),
    Detailed {
        value: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relation: Option<String>,
    },
}

impl HitsTotal {
    pub fn value(&self) -> u64 {
        match self {
            HitsTotal::Count(n) => *n,
            HitsTotal::Detailed { value, .. } => *value,
        }
    }
}

/// The `hits` section of a search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hits<T = AnyObject> {
    pub total: HitsTotal,
    #[serde(default)]
    pub max_score: Option<f64>,
    pub hits: Vec<Hit<T>>,
}

/// Search response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse<T = AnyObject> {
    #[serde(default)]
    pub took: Option<u64>,
    #[serde(default)]
    pub timed_out: Option<bool>,
    pub hits: Hits<T>,
}

/// Elapsed time information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elapsed {
    pub raw: u64,
    pub formatted: String,
}

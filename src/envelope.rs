//! Normalized result envelope for engine responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ElasticError, Result};

/// Outcome flag, serialized as `1` (success) or `0` (failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    Failure,
    Success,
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        match status {
            Status::Failure => 0,
            Status::Success => 1,
        }
    }
}

impl TryFrom<u8> for Status {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Status::Failure),
            1 => Ok(Status::Success),
            other => Err(format!("invalid status code {other}, expected 0 or 1")),
        }
    }
}

/// Uniform wrapper around every parsed engine response.
///
/// `data` always holds the parsed body, including on failure. `msg` is only
/// present on failure and is left empty; see [`ResultEnvelope::error_reason`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub status: Status,
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ResultEnvelope {
    /// Wrap a successful response
    pub fn success(data: Value) -> Self {
        Self {
            status: Status::Success,
            data,
            msg: None,
        }
    }

    /// Wrap an engine-reported failure
    pub fn failure(data: Value) -> Self {
        Self {
            status: Status::Failure,
            data,
            msg: Some(String::new()),
        }
    }

    /// Classify an already-parsed response.
    ///
    /// The engine signals failure only through a top-level `error` key; a
    /// `null` error counts as absent.
    pub fn from_value(data: Value) -> Self {
        let failed = data.get("error").map_or(false, |e| !e.is_null());
        if failed {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %data["error"], "engine reported an error");
            Self::failure(data)
        } else {
            Self::success(data)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Human-readable cause of an engine failure, if the body carries one.
    ///
    /// Looks at `error.reason`, then the first `error.root_cause[].reason`,
    /// then `error.type`. A plain string `error` is returned as is.
    pub fn error_reason(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }

        let error = self.data.get("error")?;
        if let Some(text) = error.as_str() {
            return Some(text.to_string());
        }

        error
            .get("reason")
            .and_then(Value::as_str)
            .or_else(|| {
                error
                    .get("root_cause")
                    .and_then(|causes| causes.get(0))
                    .and_then(|cause| cause.get("reason"))
                    .and_then(Value::as_str)
            })
            .or_else(|| error.get("type").and_then(Value::as_str))
            .map(str::to_string)
    }

    /// Split into the success payload or the failed envelope
    pub fn into_result(self) -> std::result::Result<Value, Self> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(self)
        }
    }
}

/// Parse a raw engine body and classify it.
///
/// A body that is not JSON is a [`ElasticError::Parse`], never a failed
/// envelope.
pub fn normalize(raw: &str) -> Result<ResultEnvelope> {
    let data: Value = serde_json::from_str(raw).map_err(|e| {
        ElasticError::parse(format!("engine response is not valid JSON: {e}"), raw)
    })?;

    Ok(ResultEnvelope::from_value(data))
}

//! Typed query-parameter binding.
//!
//! Create/get operations take query parameters, not request bodies. The
//! HTTP layer has already URL-decoded the values; duplicates resolve to the
//! last value (map semantics) and unknown keys are ignored.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDateTime;
use thiserror::Error;

use gauchorecords_core::RecordId;

use crate::app::errors;

/// ISO-8601 civil date-time, fractional seconds optional.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("required parameter '{0}' is missing")]
    Missing(String),

    #[error("parameter '{name}' is not a valid {expected}: '{value}'")]
    Invalid {
        name: String,
        expected: &'static str,
        value: String,
    },
}

impl IntoResponse for BindError {
    fn into_response(self) -> axum::response::Response {
        let kind = match self {
            BindError::Missing(_) => "MissingParameter",
            BindError::Invalid { .. } => "InvalidParameter",
        };
        errors::json_error(StatusCode::BAD_REQUEST, kind, self.to_string())
    }
}

/// Decoded query parameters with typed accessors.
#[derive(Debug, Clone, Default)]
pub struct Params(HashMap<String, String>);

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl Params {
    fn raw(&self, name: &str) -> Result<&str, BindError> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| BindError::Missing(name.to_string()))
    }

    /// Verbatim string value; no trimming or case folding.
    pub fn string(&self, name: &str) -> Result<String, BindError> {
        self.raw(name).map(str::to_string)
    }

    /// `true` / `false`, case-insensitive.
    pub fn boolean(&self, name: &str) -> Result<bool, BindError> {
        let value = self.raw(name)?;
        match value.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(BindError::Invalid {
                name: name.to_string(),
                expected: "boolean",
                value: value.to_string(),
            }),
        }
    }

    /// Decimal 64-bit record id.
    pub fn record_id(&self, name: &str) -> Result<RecordId, BindError> {
        let value = self.raw(name)?;
        value.parse().map_err(|_| BindError::Invalid {
            name: name.to_string(),
            expected: "id",
            value: value.to_string(),
        })
    }

    /// `YYYY-MM-DDTHH:MM:SS`, optionally with fractional seconds.
    pub fn datetime(&self, name: &str) -> Result<NaiveDateTime, BindError> {
        let value = self.raw(name)?;
        NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map_err(|_| BindError::Invalid {
            name: name.to_string(),
            expected: "ISO-8601 date-time",
            value: value.to_string(),
        })
    }
}

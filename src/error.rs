//! The error type shared by the connection and its derived queries.
//!
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EsAdminError {
    /// The remote endpoint could not be resolved or did not accept a TCP connection.
    #[error("Unable to connect to {0}")]
    Connection(String),

    /// The transport failed while a request was in flight.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Expected HTTP 200 - got HTTP {status}: {method} {path} (data: {})", payload(.data))]
    Http {
        status: u16,
        method: String,
        path: String,
        data: Option<String>,
    },

    /// The response body was not empty, and not valid JSON either.
    #[error("Failed to parse JSON in response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Valid JSON, but not the shape the query expects.
    #[error("Unexpected response from {endpoint}: {reason}")]
    Schema { endpoint: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EsAdminError {
    pub(crate) fn schema(endpoint: &str, reason: impl Into<String>) -> Self {
        EsAdminError::Schema {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

fn payload(data: &Option<String>) -> String {
    match data {
        Some(data) => format!("'{}'", data),
        None => String::from("None"),
    }
}

pub type Result<T> = std::result::Result<T, EsAdminError>;

//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ApiError: Issues with NCBI E-utilities communication
//! - ParseError: Issues with PubMed XML documents
//! - ConfigError: Issues with CLI or config file settings
//! - OutputError: Failures while writing results

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// E-utilities related errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// XML parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output related errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors related to E-utilities requests
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to build the HTTP client
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    /// Request URL could not be built
    #[error("invalid request URL for {endpoint}: {message}")]
    InvalidUrl { endpoint: String, message: String },

    /// Network request failed
    #[error("request to {endpoint} failed: {message}")]
    NetworkError { endpoint: String, message: String },

    /// Non-success HTTP status
    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {endpoint}")]
    RateLimitExceeded { endpoint: String },

    /// Timeout
    #[error("timeout while calling {endpoint}")]
    Timeout { endpoint: String },

    /// Response body was not what the endpoint documents
    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// E-utilities reported an error in the payload
    #[error("{endpoint} reported an error: {message}")]
    Remote { endpoint: String, message: String },
}

/// Errors related to PubMed XML parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// Document is not well-formed XML
    #[error("XML parsing error: {message}")]
    InvalidXml { message: String },

    /// Article has no PMID element
    #[error("article is missing a PMID")]
    MissingPmid,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("failed to parse config file {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A setting has an unusable value
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Errors related to writing results
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write output file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Creates a new NetworkError
    pub fn network_error(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::NetworkError {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(endpoint: impl Into<String>) -> Self {
        ApiError::Timeout {
            endpoint: endpoint.into(),
        }
    }

    /// Returns true if retrying the request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::NetworkError { .. }
            | ApiError::RateLimitExceeded { .. }
            | ApiError::Timeout { .. } => true,
            ApiError::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl ParseError {
    /// Creates a new InvalidXml error
    pub fn invalid_xml(message: impl Into<String>) -> Self {
        ParseError::InvalidXml {
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidValue error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl OutputError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::WriteError {
            path: path.into(),
            source,
        }
    }
}

//! Error types for mediabridge

use thiserror::Error;

/// Main error type for mediabridge operations
#[derive(Error, Debug)]
pub enum MediaBridgeError {
    /// Initialization error
    #[error("Initialization failed: {reason}")]
    Initialization {
        /// Reason for initialization failure
        reason: String,
    },

    /// Server URL could not be parsed or has no hostname
    #[error("Invalid server URL: {url}")]
    InvalidServerUrl {
        /// URL that failed to parse
        url: String,
    },

    /// DNS resolution of the server hostname failed
    #[error("DNS resolution failed for {host}: {reason}")]
    DnsResolution {
        /// Hostname that failed to resolve
        host: String,
        /// Reason for resolution failure
        reason: String,
    },

    /// Public-IP echo lookup failed
    #[error("Public IP lookup via {endpoint} failed: {reason}")]
    PublicIpLookup {
        /// Echo endpoint that was queried
        endpoint: String,
        /// Reason for lookup failure
        reason: String,
    },

    /// Color tag was not in the expected format
    #[error("Invalid color tag {value}: expected {expected}")]
    InvalidColor {
        /// Color tag that failed to convert
        value: String,
        /// Expected format description
        expected: String,
    },

    /// Subtitle stream metadata was missing a required field
    #[error("Subtitle stream is missing field: {field}")]
    MissingStreamField {
        /// Field that was absent
        field: String,
    },

    /// Serializing a document failed
    #[error("Serialization failed: {reason}")]
    Serialization {
        /// Reason for serialization failure
        reason: String,
    },
}

impl MediaBridgeError {
    /// Get error code for programmatic handling
    pub fn error_code(&self) -> String {
        match self {
            MediaBridgeError::Initialization { .. } => "INITIALIZATION_FAILED".to_string(),
            MediaBridgeError::InvalidServerUrl { .. } => "INVALID_SERVER_URL".to_string(),
            MediaBridgeError::DnsResolution { .. } => "DNS_RESOLUTION_FAILED".to_string(),
            MediaBridgeError::PublicIpLookup { .. } => "PUBLIC_IP_LOOKUP_FAILED".to_string(),
            MediaBridgeError::InvalidColor { .. } => "INVALID_COLOR".to_string(),
            MediaBridgeError::MissingStreamField { .. } => "MISSING_STREAM_FIELD".to_string(),
            MediaBridgeError::Serialization { .. } => "SERIALIZATION_FAILED".to_string(),
        }
    }
}

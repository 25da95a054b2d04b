use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Telemetry unavailable for match {match_id} at {timestamp}s: {reason}")]
    DataUnavailable { match_id: String, timestamp: f32, reason: String },

    #[error("Unknown {kind} key: {key}")]
    UnknownKey { kind: &'static str, key: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    pub fn data_unavailable(match_id: &str, timestamp: f32, reason: impl Into<String>) -> Self {
        EngineError::DataUnavailable {
            match_id: match_id.to_string(),
            timestamp,
            reason: reason.into(),
        }
    }

    pub fn unknown_key(kind: &'static str, key: &str) -> Self {
        EngineError::UnknownKey { kind, key: key.to_string() }
    }

    /// Whether a caller-side retry could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::DataUnavailable { .. } => true,
            EngineError::UnknownKey { .. } => false,
            EngineError::Config(_) => false,
            EngineError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Structured error handling for poolscope
///
/// Missing optional pool data is never an error. Everything here signals a
/// broken upstream data contract, a bad configuration file or an I/O failure.
use thiserror::Error;

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Error, Debug)]
pub enum PoolScopeError {
    #[error("Invalid pool record '{pool_id}': field '{field}' {reason}")] InvalidRecord {
        pool_id: String,
        field: String,
        reason: String,
    },

    #[error("Invalid input: {reason}")] InvalidInput {
        reason: String,
    },

    #[error("Configuration error: {0}")] Config(String),

    #[error("Serialization error: {0}")] Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")] Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PoolScopeError>;

// =============================================================================
// STRUCTURED ERROR BUILDERS
// =============================================================================

impl PoolScopeError {
    /// Create an invalid record error for a specific pool field
    pub fn invalid_record(
        pool_id: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>
    ) -> Self {
        PoolScopeError::InvalidRecord {
            pool_id: pool_id.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        PoolScopeError::InvalidInput { reason: reason.into() }
    }

    /// Create a configuration error
    pub fn configuration_error(message: impl Into<String>) -> Self {
        PoolScopeError::Config(message.into())
    }

    /// Attach a pool id and field to a context-free input error.
    ///
    /// Other variants pass through unchanged.
    pub fn in_record(self, pool_id: &str, field: &str) -> Self {
        match self {
            PoolScopeError::InvalidInput { reason } => {
                PoolScopeError::invalid_record(pool_id, field, reason)
            }
            other => other,
        }
    }

    /// Errors caused by the data handed to the engine, as opposed to the environment
    pub fn is_data_error(&self) -> bool {
        match self {
            PoolScopeError::InvalidRecord { .. } => true,
            PoolScopeError::InvalidInput { .. } => true,
            PoolScopeError::Serialization(_) => true,
            _ => false,
        }
    }

    /// Pool id carried by the error, if any
    pub fn pool_id(&self) -> Option<&str> {
        match self {
            PoolScopeError::InvalidRecord { pool_id, .. } => Some(pool_id.as_str()),
            _ => None,
        }
    }
}

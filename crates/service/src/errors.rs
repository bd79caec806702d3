use thiserror::Error;

/// Failures raised by the storage layer. The service passes them through
/// untouched; a missing record is `Ok(None)`, never an error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

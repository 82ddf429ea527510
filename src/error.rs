//! Error Types

use thiserror::Error;

/// Failure talking to the remote API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never completed (connection failed, CORS, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Failure reading or writing the key-value persistence layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage access failed for `{key}`: {message}")]
    Access { key: String, message: String },

    #[error("failed to serialize `{key}`: {message}")]
    Serialize { key: String, message: String },
}

/// Form input rejected before anything is stored; the message is shown as is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Пожалуйста, заполните все поля")]
    MissingUserFields,

    #[error("Пожалуйста, введите название задачи")]
    MissingTodoTitle,
}

// src/infra/errors.rs — Error types for chemviz

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChemvizError {
    // Login rejected (bad credentials, or the call never reached the server)
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // Registration rejected; carries the first field-level message from the
    // server's {field: [messages]} error body
    #[error("Registration failed: {message}")]
    Validation { message: String },

    #[error("Upload failed: {message}")]
    Upload { message: String },

    #[error("Not found")]
    NotFound,

    // Generic transport/server failure
    #[error("API error: {message}")]
    Api { status: Option<u16>, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChemvizError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

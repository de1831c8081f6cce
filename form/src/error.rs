use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Failed to read image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Input closed")]
    InputClosed,

    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

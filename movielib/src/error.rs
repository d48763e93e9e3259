use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieLibError {
    #[error("Storage file not found: {path}")]
    StorageMissing { path: String },

    #[error("Movie '{title}' already exists in the collection")]
    DuplicateTitle { title: String },

    #[error("Movie '{title}' was not found")]
    NotFound { title: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MovieLibError>;

//! studynotes-client: HTTP client for the Smart Notes study backend
//!
//! This crate provides:
//! - [`ApiClient`], one method per backend endpoint (list, upload, generate)
//! - [`NotesBackend`], the object-safe seam the view layer is written against
//! - [`ClientError`] with backend error payloads normalized to a message
//! - [`ClientConfig`] loaded from the environment
//!
//! # Usage
//!
//! ```rust,ignore
//! use studynotes_client::{ApiClient, ClientConfig};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let books = client.list_books().await?;
//! let notes = client.generate_notes("Big O Notation").await?;
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::{
    ApiClient, BackendFuture, NotesBackend, BOOKS_FALLBACK, NOTES_FALLBACK, UPLOAD_FALLBACK,
    backend_message,
};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult, EMPTY_TOPIC};

// Re-export the data model for downstream crates
pub use studynotes_core;

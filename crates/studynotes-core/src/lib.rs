//! studynotes-core: Shared data model for the Smart Notes study client
//!
//! This crate provides:
//! - The closed [`Subject`] enumeration used as selector value and grouping key
//! - [`Book`] and [`Notes`] records exchanged with the backend
//! - [`UploadFile`], the local file handed to the upload form
//! - [`group_by_subject`] for rendering the book list
//!
//! Nothing here performs I/O beyond reading an upload file from disk.

pub mod types;

pub use types::{
    Book, Notes, ParseRoleError, ParseSubjectError, Role, Subject, UploadFile, group_by_subject,
    OCTET_STREAM_MIME, PDF_MIME,
};

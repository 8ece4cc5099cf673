//! studynotes-view: Screen state and coordination for the Smart Notes client
//!
//! This crate provides the front-end state, independent of how it is drawn:
//! - [`AdminView`]: book list and upload form
//! - [`UserView`] and [`NotesPanel`]: topic form and generated notes
//! - [`App`]: root coordinator owning the role, the book list and its
//!   loading/error state, and deciding which [`Screen`] is shown
//!
//! Every action that needs the backend is split into `begin_*` (local
//! validation, sets the in-flight flag), the backend call, and `finish_*`
//! (applies the result). The convenience methods run all three against a
//! [`NotesBackend`](studynotes_client::NotesBackend).

pub mod admin;
pub mod app;
pub mod user;

#[cfg(test)]
mod fake;

pub use admin::{AdminView, UploadRequest};
pub use app::{App, Screen};
pub use user::{NotesPanel, NotesSection, UserView};

/// Application title shown in the header.
pub const APP_TITLE: &str = "Smart Notes AI";

/// Footer line.
pub const FOOTER: &str = "Powered by AI. For educational purposes only.";

/// Result of a user action that may reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Refused locally; no request was made.
    Rejected,
    /// The backend accepted the request.
    Succeeded,
    /// The backend (or the transport) failed; the message is on the screen.
    Failed,
}

//! Root coordinator.
//!
//! Owns the role switch and the book list shared by both screens. The list
//! is fetched once on mount and again after every successful upload; the
//! full-page loading state only ever appears for the first fetch.

use studynotes_client::NotesBackend;
use studynotes_core::{Book, Role};

use crate::Outcome;
use crate::admin::AdminView;
use crate::user::UserView;

/// Shown while the initial book list is loading.
pub const LOADING_MESSAGE: &str = "Loading books from server...";

/// Shown below a connection error.
pub const CONNECTION_HINT: &str = "Please ensure your backend server is running and accessible.";

/// What the main area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    ConnectionError(&'a str),
    Admin,
    User,
}

/// Top-level front-end state.
#[derive(Debug)]
pub struct App {
    pub role: Role,
    pub books: Vec<Book>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub admin: AdminView,
    pub user: UserView,
}

impl Default for App {
    fn default() -> Self {
        Self {
            role: Role::default(),
            books: Vec::new(),
            is_loading: true,
            error: None,
            admin: AdminView::new(),
            user: UserView::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Initial load of the book list.
    pub async fn mount(&mut self, backend: &dyn NotesBackend) {
        self.is_loading = true;
        self.refresh_books(backend).await;
    }

    /// Re-fetch the book list without bringing back the loading screen.
    pub async fn refresh_books(&mut self, backend: &dyn NotesBackend) -> Outcome {
        self.error = None;

        let outcome = match backend.list_books().await {
            Ok(books) => {
                tracing::info!(count = books.len(), "book list loaded");
                self.books = books;
                Outcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load book list");
                self.error = Some(e.to_string());
                Outcome::Failed
            }
        };

        self.is_loading = false;
        outcome
    }

    pub fn switch_role(&mut self, role: Role) {
        if self.role != role {
            tracing::debug!(from = %self.role, to = %role, "switching role");
        }
        self.role = role;
    }

    /// Run the admin upload and, on success, refresh the book list once.
    pub async fn upload(&mut self, backend: &dyn NotesBackend) -> Outcome {
        let outcome = self.admin.upload(backend).await;
        if outcome == Outcome::Succeeded {
            self.refresh_books(backend).await;
        }
        outcome
    }

    /// Generate notes for the user's current topic.
    pub async fn generate_notes(&mut self, backend: &dyn NotesBackend) -> Outcome {
        self.user.generate(backend, &self.books).await
    }

    pub fn screen(&self) -> Screen<'_> {
        if self.is_loading {
            Screen::Loading
        } else if let Some(error) = self.error.as_deref() {
            Screen::ConnectionError(error)
        } else {
            match self.role {
                Role::Admin => Screen::Admin,
                Role::User => Screen::User,
            }
        }
    }
}

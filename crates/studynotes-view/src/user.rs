//! User screen: topic form and the generated notes panel.

use serde::Serialize;
use studynotes_client::{ClientResult, NotesBackend};
use studynotes_core::{Book, Notes};

use crate::Outcome;

/// Shown when Generate is pressed with a blank topic.
pub const MISSING_TOPIC: &str = "Please enter a topic to generate notes.";

/// Shown under the form while no books exist.
pub const NO_BOOKS_WARNING: &str =
    "Warning: No books have been uploaded. Please switch to the Admin role to add books.";

/// Shown while a generation request is in flight.
pub const GENERATING: &str = "Generating smart notes...";

/// State of the topic form.
#[derive(Debug, Default)]
pub struct UserView {
    pub topic: String,
    pub notes: Option<NotesPanel>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UserView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Whether the Generate Notes button is enabled.
    pub fn can_generate(&self, books: &[Book]) -> bool {
        !self.is_loading && !books.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading {
            "Generating..."
        } else {
            "Generate Notes"
        }
    }

    /// Warning shown under the form when there is nothing to generate from.
    pub fn no_books_warning(&self, books: &[Book]) -> Option<&'static str> {
        books.is_empty().then_some(NO_BOOKS_WARNING)
    }

    /// Validate the topic and mark generation as in flight.
    ///
    /// Returns the topic to request, or `None` if the button is disabled or
    /// the topic is blank (the error is set in that case).
    pub fn begin_generate(&mut self, books: &[Book]) -> Option<String> {
        if !self.can_generate(books) {
            return None;
        }
        if self.topic.trim().is_empty() {
            self.error = Some(MISSING_TOPIC.to_string());
            return None;
        }

        self.error = None;
        self.notes = None;
        self.is_loading = true;
        Some(self.topic.clone())
    }

    /// Apply the backend's answer to a request started with
    /// [`begin_generate`](Self::begin_generate).
    pub fn finish_generate(&mut self, topic: String, result: ClientResult<Notes>) -> Outcome {
        self.is_loading = false;

        match result {
            Ok(notes) => {
                self.notes = Some(NotesPanel { topic, notes });
                Outcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(%topic, error = %e, "note generation failed");
                self.error = Some(e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Validate, request notes, and apply the result.
    pub async fn generate(&mut self, backend: &dyn NotesBackend, books: &[Book]) -> Outcome {
        let Some(topic) = self.begin_generate(books) else {
            return Outcome::Rejected;
        };
        let result = backend.generate_notes(&topic).await;
        self.finish_generate(topic, result)
    }
}

/// Generated notes together with the topic they were generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesPanel {
    pub topic: String,
    #[serde(flatten)]
    pub notes: Notes,
}

/// One labeled list in the notes panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesSection<'a> {
    pub title: &'static str,
    pub items: &'a [String],
}

impl NotesPanel {
    pub fn heading(&self) -> String {
        format!("Notes on: {}", self.topic)
    }

    /// The two lists, in display order.
    pub fn sections(&self) -> [NotesSection<'_>; 2] {
        [
            NotesSection {
                title: "AI Notes",
                items: &self.notes.ai_notes,
            },
            NotesSection {
                title: "Ready Reckoner",
                items: &self.notes.ready_reckoner,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBackend;
    use studynotes_core::Subject;

    fn books() -> Vec<Book> {
        vec![Book::new("Algo 101", Subject::DataStructuresAlgorithms)]
    }

    #[test]
    fn generate_disabled_without_books_or_while_loading() {
        let mut view = UserView::new();
        assert!(!view.can_generate(&[]));
        assert!(view.can_generate(&books()));

        view.is_loading = true;
        assert!(!view.can_generate(&books()));
        assert_eq!(view.button_label(), "Generating...");
    }

    #[test]
    fn no_books_warning_only_when_empty() {
        let view = UserView::new();
        assert_eq!(view.no_books_warning(&[]), Some(NO_BOOKS_WARNING));
        assert_eq!(view.no_books_warning(&books()), None);
    }

    #[tokio::test]
    async fn blank_topic_is_rejected_locally() {
        let backend = FakeBackend::new();
        let mut view = UserView::new();

        for topic in ["", "   "] {
            view.set_topic(topic);
            assert_eq!(view.generate(&backend, &books()).await, Outcome::Rejected);
            assert_eq!(view.error.as_deref(), Some(MISSING_TOPIC));
        }
        assert_eq!(backend.notes_calls(), 0);
    }

    #[tokio::test]
    async fn disabled_control_issues_no_request() {
        let backend = FakeBackend::new();
        let mut view = UserView::new();
        view.set_topic("Paging");

        assert_eq!(view.generate(&backend, &[]).await, Outcome::Rejected);
        assert!(view.error.is_none());
        assert_eq!(backend.notes_calls(), 0);
    }

    #[tokio::test]
    async fn generated_notes_render_under_topic_heading() {
        let backend = FakeBackend::new();
        backend.set_notes(Ok(Notes {
            ai_notes: vec!["a".to_string()],
            ready_reckoner: vec!["b".to_string()],
        }));
        let mut view = UserView::new();
        view.set_topic("Big O Notation");

        assert_eq!(view.generate(&backend, &books()).await, Outcome::Succeeded);

        let panel = view.notes.as_ref().unwrap();
        assert_eq!(panel.heading(), "Notes on: Big O Notation");
        let [ai, reckoner] = panel.sections();
        assert_eq!(ai.title, "AI Notes");
        assert_eq!(ai.items, ["a".to_string()]);
        assert_eq!(reckoner.title, "Ready Reckoner");
        assert_eq!(reckoner.items, ["b".to_string()]);

        assert!(!view.is_loading);
        assert_eq!(backend.topics.lock().unwrap().as_slice(), ["Big O Notation"]);
    }

    #[tokio::test]
    async fn failure_shows_message_and_recovers() {
        let backend = FakeBackend::new();
        backend.set_notes(Err("Model quota exceeded".to_string()));
        let mut view = UserView::new();
        view.set_topic("Deadlocks");

        assert_eq!(view.generate(&backend, &books()).await, Outcome::Failed);
        assert_eq!(view.error.as_deref(), Some("Model quota exceeded"));
        assert!(view.notes.is_none());
        assert!(view.can_generate(&books()));
    }

    #[test]
    fn begin_clears_previous_notes_and_blocks_second_request() {
        let mut view = UserView::new();
        view.notes = Some(NotesPanel {
            topic: "old".to_string(),
            notes: Notes::default(),
        });
        view.error = Some("stale".to_string());
        view.set_topic("Paging");

        assert_eq!(view.begin_generate(&books()).as_deref(), Some("Paging"));
        assert!(view.notes.is_none());
        assert!(view.error.is_none());
        assert!(!view.can_generate(&books()));
        assert!(view.begin_generate(&books()).is_none());
    }

    #[test]
    fn panel_keeps_requested_topic_after_input_changes() {
        let mut view = UserView::new();
        view.set_topic("Paging");
        let topic = view.begin_generate(&books()).unwrap();
        view.set_topic("Something else");

        view.finish_generate(topic, Ok(Notes::default()));

        assert_eq!(view.notes.unwrap().heading(), "Notes on: Paging");
    }

    #[test]
    fn panel_serializes_flat() {
        let panel = NotesPanel {
            topic: "Paging".to_string(),
            notes: Notes {
                ai_notes: vec!["a".to_string()],
                ready_reckoner: vec![],
            },
        };
        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "topic": "Paging", "aiNotes": ["a"], "readyReckoner": [] })
        );
    }
}

//! Admin screen: uploaded book list and the upload form.

use studynotes_client::{ClientResult, NotesBackend};
use studynotes_core::{Book, Subject, UploadFile, group_by_subject};

use crate::Outcome;

/// Shown when a non-PDF file is chosen.
pub const ONLY_PDF: &str = "Error: Only PDF files are allowed.";

/// Shown when Upload is pressed without a file.
pub const MISSING_FILE: &str = "Please select a PDF file.";

/// Shown when Upload is pressed with a blank book name.
pub const MISSING_NAME: &str = "Please enter a book name.";

/// Shown in place of the book list when it is empty.
pub const NO_BOOKS: &str = "No books uploaded yet.";

/// State of the upload form.
#[derive(Debug, Default)]
pub struct AdminView {
    pub selected_subject: Subject,
    /// The file input. `None` means the input is cleared.
    pub selected_file: Option<UploadFile>,
    pub book_name: String,
    pub error: Option<String>,
    pub success: Option<String>,
    pub is_uploading: bool,
}

/// An upload that passed local validation.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: UploadFile,
    pub subject: Subject,
    pub book_name: String,
}

impl AdminView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_subject(&mut self, subject: Subject) {
        self.selected_subject = subject;
    }

    pub fn set_book_name(&mut self, name: impl Into<String>) {
        self.book_name = name.into();
    }

    /// Put a file in the file input, or clear it with `None`.
    ///
    /// Non-PDF files are refused on the spot and the input is cleared.
    pub fn choose_file(&mut self, file: Option<UploadFile>) {
        self.error = None;
        self.success = None;

        match file {
            Some(file) if !file.is_pdf() => {
                tracing::debug!(file = %file.file_name, content_type = %file.content_type, "rejected non-PDF file");
                self.error = Some(ONLY_PDF.to_string());
                self.selected_file = None;
            }
            other => self.selected_file = other,
        }
    }

    /// Whether the Upload button is enabled.
    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.book_name.trim().is_empty() && !self.is_uploading
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_uploading {
            "Uploading..."
        } else {
            "Upload"
        }
    }

    /// Books grouped under their subject headings.
    pub fn book_groups<'a>(&self, books: &'a [Book]) -> Vec<(Subject, Vec<&'a Book>)> {
        group_by_subject(books)
    }

    /// Validate the form and mark the upload as in flight.
    ///
    /// Returns `None` when validation fails (the error is set) or an upload
    /// is already running. The file moves into the request, so the file
    /// input is empty from here on.
    pub fn begin_upload(&mut self) -> Option<UploadRequest> {
        if self.is_uploading {
            return None;
        }

        let Some(file) = self.selected_file.as_ref() else {
            self.error = Some(MISSING_FILE.to_string());
            return None;
        };
        if !file.is_pdf() {
            self.error = Some(ONLY_PDF.to_string());
            self.selected_file = None;
            return None;
        }
        if self.book_name.trim().is_empty() {
            self.error = Some(MISSING_NAME.to_string());
            return None;
        }

        let file = self.selected_file.take()?;
        self.is_uploading = true;
        self.error = None;
        self.success = None;

        Some(UploadRequest {
            file,
            subject: self.selected_subject,
            book_name: self.book_name.clone(),
        })
    }

    /// Apply the backend's answer to an upload started with [`begin_upload`].
    ///
    /// The file input is cleared after every attempt. The name field is
    /// cleared only on success; after a failure the form stays populated
    /// so the upload can be retried.
    ///
    /// [`begin_upload`]: Self::begin_upload
    pub fn finish_upload(&mut self, request: &UploadRequest, result: ClientResult<()>) -> Outcome {
        self.is_uploading = false;
        self.selected_file = None;

        match result {
            Ok(()) => {
                self.success = Some(format!(
                    "Successfully uploaded \"{}\". The book list will refresh.",
                    request.book_name
                ));
                self.book_name.clear();
                Outcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(book_name = %request.book_name, error = %e, "upload failed");
                self.error = Some(e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Validate, upload, and apply the result.
    pub async fn upload(&mut self, backend: &dyn NotesBackend) -> Outcome {
        let Some(request) = self.begin_upload() else {
            return Outcome::Rejected;
        };
        let result = backend
            .upload_book(&request.file, request.subject, &request.book_name)
            .await;
        self.finish_upload(&request, result)
    }
}

//! Backend API calls.
//!
//! Each user intent maps to exactly one HTTP request:
//!
//! | operation        | request                     |
//! |------------------|-----------------------------|
//! | list books       | `GET /api/books`            |
//! | upload book      | `POST /admin/upload`        |
//! | generate notes   | `POST /api/generate-notes`  |
//!
//! Every call is a single attempt. A non-2xx response is turned into
//! [`ClientError::Backend`] whose message is the backend's `error` field, or
//! a fixed per-operation fallback when the body carries no usable message.

use std::future::Future;
use std::pin::Pin;

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use studynotes_core::{Book, Notes, Subject, UploadFile};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, EMPTY_TOPIC};

/// Fallback message when listing books fails without a usable error body.
pub const BOOKS_FALLBACK: &str =
    "Failed to fetch books. Ensure the GET /api/books endpoint exists on your server.";

/// Fallback message when an upload fails without a usable error body.
pub const UPLOAD_FALLBACK: &str = "Failed to upload book.";

/// Fallback message when note generation fails without a usable error body.
pub const NOTES_FALLBACK: &str = "Failed to generate notes. Ensure the POST /api/generate-notes endpoint exists on your server.";

const BOOKS_PATH: &str = "/api/books";
const UPLOAD_PATH: &str = "/admin/upload";
const NOTES_PATH: &str = "/api/generate-notes";

/// Boxed future returned by [`NotesBackend`] methods.
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = ClientResult<T>> + Send + 'a>>;

/// The three backend operations the front-end depends on.
///
/// [`ApiClient`] is the HTTP implementation; tests substitute in-memory
/// fakes.
pub trait NotesBackend: Send + Sync {
    /// Fetch every uploaded book.
    fn list_books(&self) -> BackendFuture<'_, Vec<Book>>;

    /// Upload a PDF tagged with a subject and display name.
    fn upload_book<'a>(
        &'a self,
        file: &'a UploadFile,
        subject: Subject,
        book_name: &'a str,
    ) -> BackendFuture<'a, ()>;

    /// Ask the backend to generate notes for a topic.
    fn generate_notes<'a>(&'a self, topic: &'a str) -> BackendFuture<'a, Notes>;
}

/// Request body for note generation.
#[derive(Serialize)]
struct GenerateNotesRequest<'a> {
    topic: &'a str,
}

/// HTTP client for the study-notes backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured backend.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("studynotes/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Backend origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/books`
    pub async fn list_books(&self) -> ClientResult<Vec<Book>> {
        let url = self.endpoint(BOOKS_PATH);
        tracing::debug!(%url, "listing books");

        let response = self.http.get(&url).send().await?;
        let response = ensure_success(response, BOOKS_FALLBACK).await?;
        let books: Vec<Book> = decode_json(response).await?;

        tracing::debug!(count = books.len(), "fetched books");
        Ok(books)
    }

    /// `POST /admin/upload` as multipart form data.
    ///
    /// The response body is ignored on success.
    pub async fn upload_book(
        &self,
        file: &UploadFile,
        subject: Subject,
        book_name: &str,
    ) -> ClientResult<()> {
        let url = self.endpoint(UPLOAD_PATH);
        tracing::debug!(
            %url,
            file = %file.file_name,
            bytes = file.data.len(),
            %subject,
            book_name,
            "uploading book"
        );

        let part = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("subject", subject.as_str())
            .text("book_name", book_name.to_string());

        let response = self.http.post(&url).multipart(form).send().await?;
        ensure_success(response, UPLOAD_FALLBACK).await?;

        tracing::info!(book_name, %subject, "book uploaded");
        Ok(())
    }

    /// `POST /api/generate-notes` with `{ "topic": ... }`.
    ///
    /// A blank topic is rejected before any request is made.
    pub async fn generate_notes(&self, topic: &str) -> ClientResult<Notes> {
        if topic.trim().is_empty() {
            return Err(ClientError::Validation(EMPTY_TOPIC.to_string()));
        }

        let url = self.endpoint(NOTES_PATH);
        tracing::debug!(%url, topic, "generating notes");

        let response = self
            .http
            .post(&url)
            .json(&GenerateNotesRequest { topic })
            .send()
            .await?;
        let response = ensure_success(response, NOTES_FALLBACK).await?;
        let notes: Notes = decode_json(response).await?;

        tracing::debug!(
            ai_notes = notes.ai_notes.len(),
            ready_reckoner = notes.ready_reckoner.len(),
            "generated notes"
        );
        Ok(notes)
    }
}

impl NotesBackend for ApiClient {
    fn list_books(&self) -> BackendFuture<'_, Vec<Book>> {
        Box::pin(ApiClient::list_books(self))
    }

    fn upload_book<'a>(
        &'a self,
        file: &'a UploadFile,
        subject: Subject,
        book_name: &'a str,
    ) -> BackendFuture<'a, ()> {
        Box::pin(ApiClient::upload_book(self, file, subject, book_name))
    }

    fn generate_notes<'a>(&'a self, topic: &'a str) -> BackendFuture<'a, Notes> {
        Box::pin(ApiClient::generate_notes(self, topic))
    }
}

/// Pass 2xx responses through; turn anything else into a backend error.
async fn ensure_success(response: Response, fallback: &str) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = backend_message(&body, fallback);
    tracing::warn!(status = status.as_u16(), %message, "backend returned an error");

    Err(ClientError::Backend {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Extract the human-readable message from an error response body.
///
/// Returns the string `error` field of a JSON object body, or `fallback`
/// when the body is not JSON, not an object, or has no string `error`.
pub fn backend_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

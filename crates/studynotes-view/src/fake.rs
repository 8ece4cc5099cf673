//! In-memory backend for view tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use studynotes_client::{BackendFuture, ClientError, ClientResult, NotesBackend};
use studynotes_core::{Book, Notes, Subject, UploadFile};

/// Scripted reply: either a value or a backend error message.
type Reply<T> = Result<T, String>;

fn into_result<T: Clone>(reply: &Reply<T>) -> ClientResult<T> {
    reply.clone().map_err(|message| ClientError::Backend {
        status: 500,
        message,
    })
}

/// Records every call and answers with scripted replies.
pub struct FakeBackend {
    books: Mutex<Reply<Vec<Book>>>,
    upload: Mutex<Reply<()>>,
    notes: Mutex<Reply<Notes>>,
    pub list_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub notes_calls: AtomicUsize,
    pub uploads: Mutex<Vec<(String, Subject, String)>>,
    pub topics: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Ok(Vec::new())),
            upload: Mutex::new(Ok(())),
            notes: Mutex::new(Ok(Notes::default())),
            list_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            notes_calls: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
            topics: Mutex::new(Vec::new()),
        }
    }

    pub fn with_books(self, books: Vec<Book>) -> Self {
        self.set_books(Ok(books));
        self
    }

    pub fn set_books(&self, reply: Reply<Vec<Book>>) {
        *self.books.lock().unwrap() = reply;
    }

    pub fn set_upload(&self, reply: Reply<()>) {
        *self.upload.lock().unwrap() = reply;
    }

    pub fn set_notes(&self, reply: Reply<Notes>) {
        *self.notes.lock().unwrap() = reply;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn notes_calls(&self) -> usize {
        self.notes_calls.load(Ordering::SeqCst)
    }
}

impl NotesBackend for FakeBackend {
    fn list_books(&self) -> BackendFuture<'_, Vec<Book>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let reply = into_result(&*self.books.lock().unwrap());
        Box::pin(async move { reply })
    }

    fn upload_book<'a>(
        &'a self,
        file: &'a UploadFile,
        subject: Subject,
        book_name: &'a str,
    ) -> BackendFuture<'a, ()> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.uploads.lock().unwrap().push((
            file.file_name.clone(),
            subject,
            book_name.to_string(),
        ));
        let reply = into_result(&*self.upload.lock().unwrap());
        Box::pin(async move { reply })
    }

    fn generate_notes<'a>(&'a self, topic: &'a str) -> BackendFuture<'a, Notes> {
        self.notes_calls.fetch_add(1, Ordering::SeqCst);
        self.topics.lock().unwrap().push(topic.to_string());
        let reply = into_result(&*self.notes.lock().unwrap());
        Box::pin(async move { reply })
    }
}

pub fn pdf(name: &str) -> UploadFile {
    UploadFile::new(name, b"%PDF-1.4".to_vec())
}

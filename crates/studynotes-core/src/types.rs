//! Core data types for the Smart Notes study client.
//!
//! These are the records passed between the API client and the view layer:
//!
//! - [`Subject`]: closed set of five categories, serialized as display strings
//! - [`Book`]: metadata for an uploaded PDF (name + subject)
//! - [`Notes`]: AI-generated notes and the condensed ready-reckoner list
//! - [`Role`]: which screen the front-end is showing
//! - [`UploadFile`]: a local file chosen for upload
//!
//! Wire types derive `Serialize` and `Deserialize` and match the backend's
//! JSON field names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// MIME type accepted by the upload form.
pub const PDF_MIME: &str = "application/pdf";

/// MIME type assigned to anything that is not recognised as a PDF.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

// ============================================================================
// Subject
// ============================================================================

/// Fixed category label for an uploaded book.
///
/// The declaration order is the canonical order used by the subject selector
/// and by the grouped book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Operating Systems")]
    OperatingSystems,
    #[serde(rename = "Mathematics")]
    Mathematics,
    #[serde(rename = "Data Structures & Algorithms")]
    DataStructuresAlgorithms,
    #[serde(rename = "Database Management Systems")]
    DatabaseManagementSystems,
    #[serde(rename = "Python Programming")]
    PythonProgramming,
}

impl Subject {
    /// Every subject, in selector order.
    pub const ALL: [Subject; 5] = [
        Subject::OperatingSystems,
        Subject::Mathematics,
        Subject::DataStructuresAlgorithms,
        Subject::DatabaseManagementSystems,
        Subject::PythonProgramming,
    ];

    /// The label shown to users and sent to the backend.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OperatingSystems => "Operating Systems",
            Self::Mathematics => "Mathematics",
            Self::DataStructuresAlgorithms => "Data Structures & Algorithms",
            Self::DatabaseManagementSystems => "Database Management Systems",
            Self::PythonProgramming => "Python Programming",
        }
    }

    /// Short alias accepted on the command line.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self {
            Self::OperatingSystems => "os",
            Self::Mathematics => "maths",
            Self::DataStructuresAlgorithms => "dsa",
            Self::DatabaseManagementSystems => "dbms",
            Self::PythonProgramming => "python",
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case("math") {
            return Ok(Self::Mathematics);
        }
        Self::ALL
            .into_iter()
            .find(|subject| {
                needle.eq_ignore_ascii_case(subject.as_str())
                    || needle.eq_ignore_ascii_case(subject.alias())
            })
            .ok_or_else(|| ParseSubjectError(s.to_string()))
    }
}

/// Error type for parsing a [`Subject`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSubjectError(pub String);

impl fmt::Display for ParseSubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown subject '{}' (expected one of: ", self.0)?;
        for (i, subject) in Subject::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} [{}]", subject, subject.alias())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for ParseSubjectError {}

// ============================================================================
// Backend Records
// ============================================================================

/// Metadata for an uploaded PDF textbook.
///
/// Created by the backend on upload; the client only displays it. `name` is
/// the display identity and is assumed (not enforced) to be unique within a
/// subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub subject: Subject,
}

impl Book {
    #[must_use]
    pub fn new(name: impl Into<String>, subject: Subject) -> Self {
        Self {
            name: name.into(),
            subject,
        }
    }
}

/// AI-generated study material for a topic.
///
/// Two independent ordered lists of opaque strings; nothing links them back
/// to a particular [`Book`] on the client side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    /// Freeform notes.
    pub ai_notes: Vec<String>,

    /// Condensed quick-reference items.
    pub ready_reckoner: Vec<String>,
}

/// Groups books by subject for display.
///
/// Groups follow [`Subject::ALL`] order, subjects without books are left out,
/// and books keep their backend order within a group.
pub fn group_by_subject(books: &[Book]) -> Vec<(Subject, Vec<&Book>)> {
    Subject::ALL
        .into_iter()
        .filter_map(|subject| {
            let matching: Vec<&Book> = books.iter().filter(|b| b.subject == subject).collect();
            (!matching.is_empty()).then_some((subject, matching))
        })
        .collect()
}

// ============================================================================
// Front-end Types
// ============================================================================

/// Which side of the application is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::User => f.write_str("user"),
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Error type for parsing a [`Role`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}' (expected 'admin' or 'user')", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

/// A local file chosen in the upload form.
///
/// `content_type` plays the part of a browser-reported MIME type: it is
/// derived from the file extension, not sniffed from the content.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Builds an upload file from in-memory bytes, deriving the content type
    /// from the file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            data,
        }
    }

    /// Reads a file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(file_name, data))
    }

    /// Whether the file is accepted by the upload form.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_MIME
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    if file_name.to_ascii_lowercase().ends_with(".pdf") {
        PDF_MIME
    } else {
        OCTET_STREAM_MIME
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn subject_serializes_as_display_string() {
        let json = serde_json::to_string(&Subject::DataStructuresAlgorithms).unwrap();
        assert_eq!(json, "\"Data Structures & Algorithms\"");

        let parsed: Subject = serde_json::from_str("\"Python Programming\"").unwrap();
        assert_eq!(parsed, Subject::PythonProgramming);
    }

    #[test]
    fn unknown_subject_is_rejected() {
        assert!(serde_json::from_str::<Subject>("\"Chemistry\"").is_err());
        assert!("chemistry".parse::<Subject>().is_err());
    }

    #[test]
    fn subject_parses_labels_and_aliases() {
        assert_eq!("Operating Systems".parse::<Subject>(), Ok(Subject::OperatingSystems));
        assert_eq!("operating systems".parse::<Subject>(), Ok(Subject::OperatingSystems));
        assert_eq!("DSA".parse::<Subject>(), Ok(Subject::DataStructuresAlgorithms));
        assert_eq!("math".parse::<Subject>(), Ok(Subject::Mathematics));
        assert_eq!("maths".parse::<Subject>(), Ok(Subject::Mathematics));
        assert_eq!(" dbms ".parse::<Subject>(), Ok(Subject::DatabaseManagementSystems));
    }

    #[test]
    fn default_subject_is_first_in_order() {
        assert_eq!(Subject::default(), Subject::OperatingSystems);
        assert_eq!(Subject::ALL.len(), 5);
    }

    #[test]
    fn parse_error_lists_choices() {
        let err = "history".parse::<Subject>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("history"));
        assert!(msg.contains("Mathematics [maths]"));
    }

    #[test]
    fn notes_use_camel_case_on_the_wire() {
        let notes: Notes =
            serde_json::from_str(r#"{"aiNotes":["a","b"],"readyReckoner":["c"]}"#).unwrap();
        assert_eq!(notes.ai_notes, vec!["a", "b"]);
        assert_eq!(notes.ready_reckoner, vec!["c"]);

        let json = serde_json::to_value(&notes).unwrap();
        assert!(json.get("aiNotes").is_some());
        assert!(json.get("ai_notes").is_none());
    }

    #[test]
    fn grouping_keeps_only_populated_subjects() {
        let books = vec![Book::new("Algo 101", Subject::DataStructuresAlgorithms)];
        let groups = group_by_subject(&books);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Subject::DataStructuresAlgorithms);
        assert_eq!(groups[0].1[0].name, "Algo 101");
    }

    #[test]
    fn grouping_follows_subject_order_and_preserves_book_order() {
        let books = vec![
            Book::new("Learning Python", Subject::PythonProgramming),
            Book::new("Galvin", Subject::OperatingSystems),
            Book::new("Fluent Python", Subject::PythonProgramming),
            Book::new("Tanenbaum", Subject::OperatingSystems),
        ];
        let groups = group_by_subject(&books);

        let subjects: Vec<Subject> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            subjects,
            vec![Subject::OperatingSystems, Subject::PythonProgramming]
        );

        let os_names: Vec<&str> = groups[0].1.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(os_names, vec!["Galvin", "Tanenbaum"]);
        let py_names: Vec<&str> = groups[1].1.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(py_names, vec!["Learning Python", "Fluent Python"]);
    }

    #[test]
    fn grouping_empty_list() {
        assert!(group_by_subject(&[]).is_empty());
    }

    #[test]
    fn role_parsing_and_default() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn upload_file_content_type_from_extension() {
        assert!(UploadFile::new("book.pdf", vec![]).is_pdf());
        assert!(UploadFile::new("BOOK.PDF", vec![]).is_pdf());

        let notes = UploadFile::new("notes.txt", b"hello".to_vec());
        assert!(!notes.is_pdf());
        assert_eq!(notes.content_type, OCTET_STREAM_MIME);
    }

    #[test]
    fn upload_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("galvin.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 test").unwrap();

        let upload = UploadFile::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "galvin.pdf");
        assert_eq!(upload.content_type, PDF_MIME);
        assert_eq!(upload.data, b"%PDF-1.4 test");
    }

    #[test]
    fn upload_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UploadFile::from_path(dir.path().join("missing.pdf")).is_err());
    }
}

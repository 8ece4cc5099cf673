//! UPLOAD command - Upload a PDF textbook tagged with a subject.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use studynotes_client::ApiClient;
use studynotes_core::{Role, Subject, UploadFile};
use studynotes_view::{App, Outcome};

use super::books::BookCatalog;
use super::{HumanReadable, output};
use crate::render;

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// PDF file to upload
    pub file: PathBuf,

    /// Subject the book belongs to (full name or alias: os, maths, dsa, dbms, python)
    #[arg(short, long, default_value = "os")]
    pub subject: Subject,

    /// Display name for the book
    #[arg(short, long)]
    pub name: String,
}

/// Result of an upload followed by the book list refresh.
#[derive(Debug, Serialize)]
pub struct UploadReport {
    pub message: String,
    /// Error from the refresh, if the list could not be re-fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_error: Option<String>,
    pub books: BookCatalog,
}

impl HumanReadable for UploadReport {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();

        match &self.refresh_error {
            Some(error) => render::print_connection_error(error),
            None => self.books.print_human(),
        }
    }
}

/// Execute the upload command.
pub async fn execute(client: &ApiClient, human: bool, args: UploadArgs) -> Result<()> {
    let file = UploadFile::from_path(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut app = App::with_role(Role::Admin);
    app.admin.select_subject(args.subject);
    app.admin.set_book_name(args.name);
    app.admin.choose_file(Some(file));
    if let Some(error) = app.admin.error.take() {
        bail!(error);
    }

    match app.upload(client).await {
        Outcome::Succeeded => {
            let report = UploadReport {
                message: app.admin.success.take().unwrap_or_default(),
                refresh_error: app.error.take(),
                books: BookCatalog::from_books(&app.books),
            };
            output(&report, human)
        }
        Outcome::Rejected | Outcome::Failed => {
            bail!(app.admin.error.take().unwrap_or_else(|| "Upload was not started.".to_string()))
        }
    }
}

//! BOOKS command - List uploaded books grouped by subject.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use studynotes_client::ApiClient;
use studynotes_core::{Book, Role, Subject, group_by_subject};
use studynotes_view::App;

use super::{HumanReadable, output};
use crate::render;

/// Arguments for the books command.
#[derive(Args)]
pub struct BooksArgs {
    // No additional arguments needed
}

/// Book list as shown on the admin screen.
#[derive(Debug, Serialize)]
pub struct BookCatalog {
    pub groups: Vec<SubjectGroup>,
    #[serde(skip)]
    books: Vec<Book>,
}

/// Books filed under one subject heading.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SubjectGroup {
    pub subject: Subject,
    pub books: Vec<String>,
}

impl BookCatalog {
    pub fn from_books(books: &[Book]) -> Self {
        let groups = group_by_subject(books)
            .into_iter()
            .map(|(subject, group)| SubjectGroup {
                subject,
                books: group.into_iter().map(|b| b.name.clone()).collect(),
            })
            .collect();

        Self {
            groups,
            books: books.to_vec(),
        }
    }
}

impl HumanReadable for BookCatalog {
    fn print_human(&self) {
        println!("{}", "Uploaded Books".green().bold());
        println!("{}", "=".repeat(80));
        println!();
        render::print_book_groups(&self.books);
        println!();
        println!("  {} {}", "Total:".cyan(), self.books.len());
    }
}

/// Execute the books command.
pub async fn execute(client: &ApiClient, human: bool, _args: BooksArgs) -> Result<()> {
    let mut app = App::with_role(Role::Admin);
    app.mount(client).await;

    if let Some(error) = app.error {
        bail!(error);
    }

    output(&BookCatalog::from_books(&app.books), human)
}

//! NOTES command - Generate AI notes for a topic.

use anyhow::{Result, bail};
use clap::Args;
use studynotes_client::ApiClient;
use studynotes_core::Role;
use studynotes_view::user::NO_BOOKS_WARNING;
use studynotes_view::{App, NotesPanel, Outcome};

use super::{HumanReadable, output};
use crate::render;

/// Arguments for the notes command.
#[derive(Args)]
pub struct NotesArgs {
    /// Topic to generate notes for (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub topic: Vec<String>,
}

impl HumanReadable for NotesPanel {
    fn print_human(&self) {
        render::print_notes_panel(self);
    }
}

/// Execute the notes command.
pub async fn execute(client: &ApiClient, human: bool, args: NotesArgs) -> Result<()> {
    let mut app = App::with_role(Role::User);
    app.mount(client).await;

    if let Some(error) = app.error.take() {
        bail!(error);
    }

    app.user.set_topic(args.topic.join(" "));
    if !app.user.can_generate(&app.books) {
        bail!(NO_BOOKS_WARNING);
    }

    match app.generate_notes(client).await {
        Outcome::Succeeded => match &app.user.notes {
            Some(panel) => output(panel, human),
            None => bail!("no notes were returned"),
        },
        Outcome::Rejected | Outcome::Failed => {
            bail!(app.user.error.take().unwrap_or_else(|| "Notes were not generated.".to_string()))
        }
    }
}

//! SHELL command - Interactive session with the role switch and both screens.
//!
//! The session mounts the app once, then reads one command per line from
//! stdin and redraws the current screen after each command.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use studynotes_client::ApiClient;
use studynotes_core::{Role, Subject, UploadFile};
use studynotes_view::{App, Screen};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::render;

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Role to start in (admin or user)
    #[arg(long, default_value = "user")]
    pub role: Role,
}

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Role(Role),
    Subject(Subject),
    Name(String),
    File(PathBuf),
    Upload,
    Topic(String),
    Generate(Option<String>),
    Refresh,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "role" => required(word, rest, "'admin' or 'user'")?
                .parse::<Role>()
                .map(Self::Role)
                .map_err(|e| e.to_string()),
            "subject" => required(word, rest, "a subject")?
                .parse::<Subject>()
                .map(Self::Subject)
                .map_err(|e| e.to_string()),
            // Blank names are allowed so the form can be cleared
            "name" => Ok(Self::Name(rest.to_string())),
            "file" => required(word, rest, "a path").map(|p| Self::File(PathBuf::from(p))),
            "upload" => Ok(Self::Upload),
            "topic" => Ok(Self::Topic(rest.to_string())),
            "generate" | "notes" => Ok(Self::Generate(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "refresh" | "books" => Ok(Self::Refresh),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{}' (type 'help')", other)),
        }
    }
}

fn required<'a>(word: &str, rest: &'a str, what: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("'{}' needs {}", word, what))
    } else {
        Ok(rest)
    }
}

const HELP: &[(&str, &str)] = &[
    ("role <admin|user>", "switch between the admin and user screens"),
    ("subject <subject>", "admin: choose the subject (os, maths, dsa, dbms, python)"),
    ("name <text>", "admin: set the book name"),
    ("file <path>", "admin: choose the PDF to upload"),
    ("upload", "admin: upload the selected PDF"),
    ("topic <text>", "user: set the topic"),
    ("generate [topic]", "user: generate notes for the topic"),
    ("refresh", "re-fetch the book list"),
    ("help", "show this help"),
    ("quit", "leave the session"),
];

fn print_help() {
    println!("{}", "Commands".cyan().bold());
    for (usage, description) in HELP {
        println!("  {:<20} {}", usage.bold(), description);
    }
    println!();
}

/// Refuse form commands unless the matching screen is showing.
fn require_screen(app: &App, role: Role) -> Result<(), String> {
    match app.screen() {
        Screen::Loading => Err("Still loading books from server.".to_string()),
        Screen::ConnectionError(_) => {
            Err("The book list could not be loaded. Use 'refresh' to retry.".to_string())
        }
        _ if app.role != role => Err(format!(
            "That command belongs to the {} screen. Use 'role {}' first.",
            role, role
        )),
        _ => Ok(()),
    }
}

/// Apply one command. Returns `false` when the session should end.
async fn apply(app: &mut App, client: &ApiClient, command: ShellCommand) -> Result<bool, String> {
    match command {
        ShellCommand::Role(role) => app.switch_role(role),
        ShellCommand::Subject(subject) => {
            require_screen(app, Role::Admin)?;
            app.admin.select_subject(subject);
        }
        ShellCommand::Name(name) => {
            require_screen(app, Role::Admin)?;
            app.admin.set_book_name(name);
        }
        ShellCommand::File(path) => {
            require_screen(app, Role::Admin)?;
            match UploadFile::from_path(&path) {
                Ok(file) => app.admin.choose_file(Some(file)),
                Err(e) => {
                    app.admin.choose_file(None);
                    return Err(format!("Could not read {}: {}", path.display(), e));
                }
            }
        }
        ShellCommand::Upload => {
            require_screen(app, Role::Admin)?;
            app.upload(client).await;
        }
        ShellCommand::Topic(topic) => {
            require_screen(app, Role::User)?;
            app.user.set_topic(topic);
        }
        ShellCommand::Generate(topic) => {
            require_screen(app, Role::User)?;
            if let Some(topic) = topic {
                app.user.set_topic(topic);
            }
            app.generate_notes(client).await;
        }
        ShellCommand::Refresh => {
            app.refresh_books(client).await;
        }
        ShellCommand::Help => print_help(),
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Execute the shell command.
pub async fn execute(client: &ApiClient, _human: bool, args: ShellArgs) -> Result<()> {
    let mut app = App::with_role(args.role);

    render::print_header(app.role);
    render::print_screen(&app);
    app.mount(client).await;
    render::print_screen(&app);
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(format!("{}> ", app.role).as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                continue;
            }
        };
        tracing::debug!(?command, "shell command");

        match apply(&mut app, client, command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                continue;
            }
        }

        render::print_header(app.role);
        render::print_screen(&app);
    }

    render::print_footer();
    Ok(())
}

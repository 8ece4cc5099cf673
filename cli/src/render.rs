//! Terminal rendering of the view state.

use colored::{ColoredString, Colorize};
use studynotes_core::{Book, Role, Subject, group_by_subject};
use studynotes_view::admin::NO_BOOKS;
use studynotes_view::app::{CONNECTION_HINT, LOADING_MESSAGE};
use studynotes_view::user::GENERATING;
use studynotes_view::{APP_TITLE, AdminView, App, FOOTER, NotesPanel, Screen, UserView};

/// Title bar with the role switch.
pub fn print_header(role: Role) {
    let tab = |label: &str, active: bool| -> ColoredString {
        if active {
            format!(" {} ", label).black().on_cyan().bold()
        } else {
            format!(" {} ", label).dimmed()
        }
    };

    println!(
        "{}    {}{}",
        APP_TITLE.cyan().bold(),
        tab("Admin", role == Role::Admin),
        tab("User", role == Role::User)
    );
    println!("{}", "=".repeat(80));
}

pub fn print_footer() {
    println!("{}", FOOTER.dimmed());
}

/// Draw whatever the main area currently shows.
pub fn print_screen(app: &App) {
    println!();
    match app.screen() {
        Screen::Loading => println!("  {}", LOADING_MESSAGE.dimmed()),
        Screen::ConnectionError(message) => print_connection_error(message),
        Screen::Admin => print_admin(&app.admin, &app.books),
        Screen::User => print_user(&app.user, &app.books),
    }
    println!();
}

pub fn print_connection_error(message: &str) {
    println!("  {} {}", "Connection Error:".red().bold(), message.red());
    println!("  {}", CONNECTION_HINT.dimmed());
}

fn button(label: &str, enabled: bool) -> ColoredString {
    let text = format!("[ {} ]", label);
    if enabled {
        text.green().bold()
    } else {
        text.dimmed()
    }
}

fn print_admin(admin: &AdminView, books: &[Book]) {
    println!("{}", "Upload Book".cyan().bold());
    println!("  {} {}", "Subject:".cyan(), admin.selected_subject);
    println!(
        "  {} {}",
        "Book Name:".cyan(),
        if admin.book_name.is_empty() {
            "(empty)".dimmed()
        } else {
            admin.book_name.normal()
        }
    );
    println!(
        "  {} {}",
        "PDF File:".cyan(),
        match &admin.selected_file {
            Some(file) => file.file_name.normal(),
            None => "(none)".dimmed(),
        }
    );
    println!("  {}", button(admin.button_label(), admin.can_upload()));
    if let Some(error) = &admin.error {
        println!("  {}", error.red());
    }
    if let Some(success) = &admin.success {
        println!("  {}", success.green());
    }

    println!();
    println!("{}", "Uploaded Books".cyan().bold());
    print_book_groups(books);
}

/// Books under their subject headings, or a placeholder when there are none.
pub fn print_book_groups(books: &[Book]) {
    if books.is_empty() {
        println!("  {}", NO_BOOKS.dimmed());
        return;
    }

    for (subject, group) in group_by_subject(books) {
        print_subject_heading(subject);
        for book in group {
            println!("    - {}", book.name);
        }
    }
}

fn print_subject_heading(subject: Subject) {
    println!("  {}", subject.as_str().bold());
    println!("  {}", "-".repeat(subject.as_str().len()).dimmed());
}

fn print_user(user: &UserView, books: &[Book]) {
    println!("{}", "Generate Notes".cyan().bold());
    println!(
        "  {}",
        "Enter a topic to generate AI-powered notes based on the uploaded books.".dimmed()
    );
    println!(
        "  {} {}",
        "Topic:".cyan(),
        if user.topic.is_empty() {
            "(empty)".dimmed()
        } else {
            user.topic.normal()
        }
    );
    println!("  {}", button(user.button_label(), user.can_generate(books)));
    if let Some(warning) = user.no_books_warning(books) {
        println!("  {}", warning.yellow());
    }
    if let Some(error) = &user.error {
        println!("  {}", error.red());
    }

    if user.is_loading {
        println!();
        println!("  {}", GENERATING.dimmed());
    }
    if let Some(panel) = &user.notes {
        println!();
        print_notes_panel(panel);
    }
}

pub fn print_notes_panel(panel: &NotesPanel) {
    println!("{}", panel.heading().cyan().bold());

    for (i, section) in panel.sections().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("  {}", section.title.bold());
        println!("  {}", "-".repeat(section.title.len()).dimmed());
        let bullet = if i == 0 { "•".cyan() } else { "✓".green() };
        for item in section.items {
            println!("    {} {}", bullet, item);
        }
    }
}

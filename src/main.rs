//! Skill Gap Analyzer - Entry Point
//!
//! Interactive terminal front end over the session state machine: select a
//! role, fill in the fields, adjust ratings, submit, and download the PDF.

use skillgap::core::config::AppConfig;
use skillgap::core::error::Result;
use skillgap::session::{Phase, Session};

use std::io::{self, Write};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("skillgap=info")
        .init();

    tracing::info!("Skill Gap Analyzer starting...");

    let mut session = Session::new(AppConfig::new())?;

    println!("\n=== SKILL GAP ANALYZER ===");
    println!();
    println!("Commands:");
    println!("  roles              - List available roles");
    println!("  role <name>        - Select your aspiring role");
    println!("  name <text>        - Set your name");
    println!("  status <text>      - Set your status (Student / Working)");
    println!("  + <skill>          - Increment a skill rating");
    println!("  - <skill>          - Decrement a skill rating");
    println!("  show               - Show the current form");
    println!("  submit             - Save your assessment and draw the chart");
    println!("  pdf                - Generate the PDF report (after submit)");
    println!("  quit / q           - Exit");
    println!();

    loop {
        display_form(&session);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "roles" {
            for role in session.catalog().role_names() {
                println!("  {}", role);
            }
            continue;
        }

        if let Some(role) = input.strip_prefix("role ") {
            match session.select_role(role.trim()) {
                Ok(()) => println!("Selected role: {}", role.trim()),
                Err(e) => println!("{}", e),
            }
            continue;
        }

        if let Some(name) = input.strip_prefix("name ") {
            session.set_name(name.trim());
            continue;
        }

        if let Some(status) = input.strip_prefix("status ") {
            session.set_status(status.trim());
            continue;
        }

        if let Some(skill) = input.strip_prefix("+ ") {
            adjust(&mut session, skill.trim(), 1);
            continue;
        }

        if let Some(skill) = input.strip_prefix("- ") {
            adjust(&mut session, skill.trim(), -1);
            continue;
        }

        if input == "show" {
            // the loop reprints the form before the next prompt
            continue;
        }

        if input == "submit" {
            match session.submit() {
                Ok(record) => {
                    println!(
                        "Skill gap chart saved for {}! Now download the PDF.",
                        record.name
                    );
                }
                Err(e) => println!("{}", e),
            }
            continue;
        }

        if input == "pdf" {
            match session.generate_pdf() {
                Ok(path) => println!("PDF saved as {}", path.display()),
                Err(e) => println!("{}", e),
            }
            continue;
        }

        println!("Unknown command. Available: roles, role <name>, name <text>, status <text>, + <skill>, - <skill>, show, submit, pdf, quit");
    }

    println!("\nGoodbye!");
    Ok(())
}

fn adjust(session: &mut Session, skill: &str, delta: i16) {
    match session.adjust_rating(skill, delta) {
        Ok(value) => println!("{}: {}", skill, value),
        Err(e) => println!("{}", e),
    }
}

/// Print the current form state above the prompt
fn display_form(session: &Session) {
    let form = session.form();
    println!();
    println!(
        "--- Name: {} | Status: {} | Role: {} ---",
        or_unset(&form.name),
        or_unset(&form.status),
        form.role().unwrap_or("<select a role>"),
    );
    for entry in form.entries() {
        println!(
            "  {:2}  {} - {}",
            entry.rating.value(),
            entry.skill,
            entry.description
        );
    }
    if session.phase() == Phase::Submitted {
        println!("  (submitted - 'pdf' is available)");
    }
    println!();
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "<unset>"
    } else {
        value
    }
}

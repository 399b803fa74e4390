//! Subcommand handlers.
//!
//! # Responsibility
//! - Translate parsed commands into core service calls.
//! - Render results and user-facing notices to the given writer.
//!
//! # Invariants
//! - Handlers hold no contact state; the service is passed in.

use crate::cli::Command;
use anyhow::{bail, Context};
use contactbook_core::{
    Contact, ContactField, ContactForm, ContactService, ContactStore, SearchError,
};
use log::info;
use std::io::Write;

const EMPTY_BOOK_NOTICE: &str = "The address book is empty.";
const NO_RESULTS_NOTICE: &str = "No contacts found.";
const COLUMN_GAP: &str = "  ";

/// Runs one command against `service`, writing output to `out`.
pub(crate) fn execute<S: ContactStore>(
    service: &mut ContactService<S>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Add {
            name,
            phone,
            email,
            location,
        } => {
            let form = ContactForm {
                name,
                phone,
                email,
                location,
            };
            let saved = service
                .save_form(&form)
                .with_context(|| format!("could not save contact `{}`", form.name.trim()))?;
            info!("event=cli_command module=cli command=add status=ok");
            writeln!(out, "Contact {} added/updated successfully!", saved.name)?;
        }
        Command::Delete { name } => {
            service
                .remove(&name)
                .with_context(|| format!("could not delete contact `{name}`"))?;
            info!("event=cli_command module=cli command=delete status=ok");
            writeln!(out, "Contact {name} deleted successfully!")?;
        }
        Command::Show { name } => {
            let Some(form) = service.edit_form(&name) else {
                bail!("contact not found: {name}");
            };
            writeln!(out, "Name:     {}", form.name)?;
            writeln!(out, "Phone:    {}", form.phone)?;
            writeln!(out, "Email:    {}", form.email)?;
            writeln!(out, "Location: {}", form.location)?;
        }
        Command::List { order } => {
            if service.is_empty() {
                writeln!(out, "{EMPTY_BOOK_NOTICE}")?;
                return Ok(());
            }
            let contacts = service.list(order.sort_order());
            info!(
                "event=cli_command module=cli command=list status=ok count={}",
                contacts.len()
            );
            out.write_all(render_table(&contacts).as_bytes())?;
        }
        Command::Search { query, order } => {
            let hits = match service.search(&query, order.sort_order()) {
                Ok(hits) => hits,
                Err(SearchError::EmptyQuery) => bail!("Please enter a search query."),
            };
            info!(
                "event=cli_command module=cli command=search status=ok count={}",
                hits.len()
            );
            if hits.is_empty() {
                writeln!(out, "{NO_RESULTS_NOTICE}")?;
            } else {
                out.write_all(render_table(&hits).as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Renders contacts as a left-aligned table with a header row.
pub(crate) fn render_table(contacts: &[Contact]) -> String {
    let mut widths = ContactField::ALL.map(|field| field.label().chars().count());
    for contact in contacts {
        for (width, field) in widths.iter_mut().zip(ContactField::ALL) {
            *width = (*width).max(field.value(contact).chars().count());
        }
    }

    let mut table = String::new();
    push_row(
        &mut table,
        &widths,
        ContactField::ALL.map(|field| field.label()),
    );
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    table.push_str(&rule);
    table.push('\n');

    for contact in contacts {
        push_row(
            &mut table,
            &widths,
            ContactField::ALL.map(|field| field.value(contact)),
        );
    }
    table
}

fn push_row(table: &mut String, widths: &[usize; 4], cells: [&str; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    table.push_str(line.trim_end());
    table.push('\n');
}

//! Command-line schema and runtime configuration.

use clap::{Args, Parser, Subcommand};
use contactbook_core::{ContactField, SortOrder};
use std::path::PathBuf;

pub(crate) const DEFAULT_STORE_FILE: &str = "address_book.json";

#[derive(Debug, Parser)]
#[command(name = "contactbook", about = "Address book for important contacts", version)]
pub(crate) struct Cli {
    /// JSON file holding the address book
    #[arg(long, env = "CONTACTBOOK_STORE", default_value = DEFAULT_STORE_FILE, global = true)]
    pub(crate) store: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long = "log-level", env = "CONTACTBOOK_LOG_LEVEL", global = true)]
    pub(crate) log_level: Option<String>,

    /// Directory for rotated log files; logging is off when unset
    #[arg(long = "log-dir", env = "CONTACTBOOK_LOG_DIR", global = true)]
    pub(crate) log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub(crate) enum Command {
    /// Add a contact, or update the one with the same name
    Add {
        name: String,
        phone: String,
        email: String,
        location: String,
    },
    /// Delete a contact by exact name
    Delete { name: String },
    /// Show one contact by exact name
    Show { name: String },
    /// List every contact
    List {
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Find contacts whose name, phone, email or location contains QUERY
    Search {
        #[arg(allow_hyphen_values = true)]
        query: String,
        #[command(flatten)]
        order: OrderArgs,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub(crate) struct OrderArgs {
    /// Column to order by (name|phone|email|location)
    #[arg(long)]
    pub(crate) sort: Option<ContactField>,

    /// Reverse the ordering
    #[arg(long, requires = "sort")]
    pub(crate) desc: bool,
}

impl OrderArgs {
    pub(crate) fn sort_order(&self) -> Option<SortOrder> {
        self.sort.map(|field| SortOrder {
            field,
            descending: self.desc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, DEFAULT_STORE_FILE};
    use clap::Parser;
    use contactbook_core::ContactField;
    use std::path::PathBuf;

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::try_parse_from(["contactbook", "add", "Amy Wu", "222", "a@x.com", "LA"])
            .unwrap();
        assert_eq!(cli.store, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(
            cli.command,
            Command::Add {
                name: "Amy Wu".to_string(),
                phone: "222".to_string(),
                email: "a@x.com".to_string(),
                location: "LA".to_string(),
            }
        );
    }

    #[test]
    fn parses_sort_options() {
        let cli = Cli::try_parse_from([
            "contactbook",
            "list",
            "--sort",
            "Email",
            "--desc",
            "--store",
            "/tmp/book.json",
        ])
        .unwrap();
        let Command::List { order } = cli.command else {
            panic!("expected list command");
        };
        let order = order.sort_order().unwrap();
        assert_eq!(order.field, ContactField::Email);
        assert!(order.descending);
        assert_eq!(cli.store, PathBuf::from("/tmp/book.json"));
    }

    #[test]
    fn rejects_unknown_sort_field_and_desc_without_sort() {
        assert!(Cli::try_parse_from(["contactbook", "list", "--sort", "zip"]).is_err());
        assert!(Cli::try_parse_from(["contactbook", "list", "--desc"]).is_err());
    }

    #[test]
    fn search_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["contactbook", "search", "-1234"]).unwrap();
        assert!(matches!(cli.command, Command::Search { ref query, .. } if query == "-1234"));
    }
}

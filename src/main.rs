//! Command-line wrapper and entry point.
//!
//! This is the rendering surface: a thin shim that translates command-line
//! arguments into library intents and prints the resulting view. It keeps no
//! logic of its own — validation, reconciliation, and error normalization all
//! live behind [`DirectoryController`].
//!
//! # Commands
//!
//! - `list` — full fetch of the collection, with `--skip`/`--limit`
//! - `search <query>` — name search (a blank query falls back to `list`)
//! - `show <id>` — detail card for one record
//! - `add` — create a record from `--first-name`/`--last-name` plus optional
//!   contact fields
//! - `edit <id>` — change only the fields passed as flags
//! - `remove <id> --yes` — delete a record; refuses without confirmation
//!
//! Views go to stdout, tracing to stderr. The exit code is non-zero whenever
//! the dispatched operation failed.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use persondir::client::Directory;
use persondir::ui::{render_detail, render_table, DirectoryViewModel};
use persondir::{
    initialize, observability, Config, DirectoryController, Intent, Page, PersonDraft, PersonId,
    PersonPatch, RemoteDirectory,
};

/// Terminal client for a person-directory service.
#[derive(Parser, Debug)]
#[command(name = "persondir", version, about)]
struct Cli {
    /// Base URL of the directory service (overrides environment and file).
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter, e.g. "debug" or "persondir=trace".
    #[arg(long)]
    trace_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List directory records.
    List {
        /// Number of records to skip.
        #[arg(long)]
        skip: Option<u32>,
        /// Maximum number of records to return.
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Search records by first name, last name, or full name.
    Search {
        /// The search query.
        query: String,
        /// Number of records to skip.
        #[arg(long)]
        skip: Option<u32>,
        /// Maximum number of records to return.
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one record in detail.
    Show {
        /// Record id.
        id: String,
    },

    /// Add a record to the directory.
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Change fields of a record; flags left out stay untouched.
    Edit {
        /// Record id.
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Remove a record from the directory.
    Remove {
        /// Record id.
        id: String,
        /// Confirm the removal.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(
        cli.base_url.clone(),
        cli.trace_level.clone(),
        cli.config.as_deref(),
    ) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("persondir: {error}");
            return ExitCode::FAILURE;
        }
    };

    observability::init_tracing(&config);

    let mut controller = match initialize(&config) {
        Ok(controller) => controller,
        Err(error) => {
            eprintln!("persondir: {error}");
            return ExitCode::FAILURE;
        }
    };

    run(&mut controller, cli.command).await
}

/// Dispatches one command and renders the settled state.
async fn run(
    controller: &mut DirectoryController<RemoteDirectory>,
    command: Command,
) -> ExitCode {
    match command {
        Command::List { skip, limit } => {
            let intent = Intent::Reload {
                page: Page::new(skip, limit),
            };
            let _ = controller.dispatch(intent).await;
            render_list(controller)
        }

        Command::Search { query, skip, limit } => {
            let intent = Intent::Search {
                query,
                page: Page::new(skip, limit),
            };
            let _ = controller.dispatch(intent).await;
            render_list(controller)
        }

        Command::Show { id } => {
            // A direct read, outside the mirrored-list flow.
            match controller.directory().fetch(&PersonId::from(id)).await {
                Ok(person) => {
                    print!("{}", render_detail(&person));
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("persondir: {error}");
                    ExitCode::FAILURE
                }
            }
        }

        Command::Add {
            first_name,
            last_name,
            email,
            phone,
            address,
        } => {
            let draft = PersonDraft {
                first_name,
                last_name,
                email,
                phone,
                address,
            };
            match controller.create(draft).await {
                Ok(person) => {
                    println!("Added {}.", person.full_name());
                    print!("{}", render_detail(&person));
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("persondir: {error}");
                    ExitCode::FAILURE
                }
            }
        }

        Command::Edit {
            id,
            first_name,
            last_name,
            email,
            phone,
            address,
        } => {
            let patch = PersonPatch {
                first_name,
                last_name,
                email,
                phone,
                address,
            };
            match controller.update(&PersonId::from(id), patch).await {
                Ok(person) => {
                    println!("Updated {}.", person.full_name());
                    print!("{}", render_detail(&person));
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("persondir: {error}");
                    ExitCode::FAILURE
                }
            }
        }

        Command::Remove { id, yes } => {
            if !yes {
                eprintln!("persondir: refusing to remove {id} without --yes");
                return ExitCode::FAILURE;
            }
            let id = PersonId::from(id);
            match controller.delete(&id).await {
                Ok(()) => {
                    println!("Removed {id}.");
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("persondir: {error}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Prints the list view; the exit code reflects whether the fetch failed.
fn render_list(controller: &DirectoryController<RemoteDirectory>) -> ExitCode {
    let viewmodel = DirectoryViewModel::from_state(controller.state());
    print!("{}", render_table(&viewmodel));

    if controller.state().error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

//! CLI for the GitHub explorer.
//!
//! Searches GitHub repositories and shows repository details in the
//! terminal, either as one-shot commands or in an interactive loop.

use clap::{Parser, Subcommand};
use github_explorer::{App, AppError, DetailsViewModel, SearchViewModel};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub Explorer - Search GitHub repositories and browse their details.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search repositories and print the results.
    Search {
        /// Search query. Defaults to the configured default query.
        query: Option<String>,
    },
    /// Show the details of one repository.
    Details {
        /// Repository owner login.
        owner: String,
        /// Repository name.
        name: String,
        /// Also print the README.
        #[arg(long)]
        readme: bool,
    },
    /// Interactive search and details loop over stdin.
    Browse,
}

/// Whether a view finished without showing an error.
enum Outcome {
    Clean,
    Errored,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(Outcome::Clean) => ExitCode::from(0),
        Ok(Outcome::Errored) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Critical failure");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Defaults to `warn` so log lines don't drown out the rendered views;
/// set `RUST_LOG` (e.g. `RUST_LOG=github_explorer=debug`) for more.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

async fn run(args: Args) -> Result<Outcome, AppError> {
    let app = App::from_sources(args.config.as_deref(), args.token)?;

    match args.command {
        Command::Search { query } => search(&app, query).await,
        Command::Details {
            owner,
            name,
            readme,
        } => details(&app, &owner, &name, readme).await,
        Command::Browse => browse(&app).await,
    }
}

async fn search(app: &App, query: Option<String>) -> Result<Outcome, AppError> {
    let query = query.unwrap_or_else(|| app.config().default_query.clone());
    // Construction starts the search.
    let view_model = SearchViewModel::with_query(app.repository(), query);
    settle(&view_model).await;
    print_search(app, &view_model)
}

async fn details(app: &App, owner: &str, name: &str, readme: bool) -> Result<Outcome, AppError> {
    let view_model = app.details_view_model();
    if let Some(handle) = view_model.on_screen_active(owner, name) {
        handle.await?;
    }
    print_details(app, &view_model, readme)
}

async fn browse(app: &App) -> Result<Outcome, AppError> {
    let search_view_model = app.search_view_model();
    let details_view_model = app.details_view_model();

    settle(&search_view_model).await;
    print_search(app, &search_view_model)?;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        match line {
            "" => continue,
            ":quit" | ":q" => break,
            ":help" => print_help(),
            ":refresh" => {
                app.clear_cache().await;
                println!("Client cache cleared.");
                run_search(app, &search_view_model).await?;
            }
            _ => {
                if let Some(target) = line.strip_prefix(":open ") {
                    match target.trim().split_once('/') {
                        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                            if let Some(handle) = details_view_model.on_screen_active(owner, name) {
                                handle.await?;
                            }
                            print_details(app, &details_view_model, true)?;
                        }
                        _ => println!("Usage: :open owner/name"),
                    }
                } else if line.starts_with(':') {
                    println!("Unknown command: {line}");
                    print_help();
                } else {
                    search_view_model.on_search_query_changed(line);
                    run_search(app, &search_view_model).await?;
                }
            }
        }
    }

    Ok(Outcome::Clean)
}

async fn run_search(app: &App, view_model: &SearchViewModel) -> Result<(), AppError> {
    match view_model.on_search_clicked() {
        Some(handle) => {
            handle.await?;
            print_search(app, view_model)?;
        }
        None => println!("Enter a search query."),
    }
    Ok(())
}

/// Waits until the search view-model publishes a state that is not loading.
async fn settle(view_model: &SearchViewModel) {
    let mut updates = view_model.subscribe();
    if updates.wait_for(|state| !state.is_loading).await.is_err() {
        warn!("Search state channel closed before the search finished");
    }
}

fn print_search(app: &App, view_model: &SearchViewModel) -> Result<Outcome, AppError> {
    let state = view_model.state();
    println!("{}", app.renderer().render_search(&state)?);
    Ok(outcome(state.error_message.is_some()))
}

fn print_details(
    app: &App,
    view_model: &DetailsViewModel,
    include_readme: bool,
) -> Result<Outcome, AppError> {
    let state = view_model.state();
    println!("{}", app.renderer().render_details(&state, include_readme)?);
    Ok(outcome(state.error_message.is_some()))
}

fn outcome(errored: bool) -> Outcome {
    if errored {
        Outcome::Errored
    } else {
        Outcome::Clean
    }
}

fn print_help() {
    println!("Type a query to search, ':open owner/name' for details, ':refresh' to reset the client, ':quit' to exit.");
}

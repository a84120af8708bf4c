//! Rolodex CLI — the directory view in a terminal.
//!
//! Calls `rolodex-core` directly: one fetch per run, then the search and title
//! inputs are applied exactly as the two search boxes would apply them.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use rolodex_core::boundary::{card_views, TextField};
use rolodex_core::source::HttpUserSource;
use rolodex_core::{load_config_file, load_rolodex_config, DirectoryState, RolodexConfig};

/// Rolodex CLI — fetch, filter and title the user directory.
#[derive(Parser)]
#[command(name = "rolodex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: .rolodex.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the user collection endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the directory once and print the filtered records
    List {
        /// Text typed into the search box
        #[arg(long, default_value = "")]
        search: String,

        /// Text typed into the title box
        #[arg(long, default_value = "")]
        title: String,

        /// Output as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Fetch once, then read search input from stdin (`/title TEXT` sets the title, `/quit` exits)
    Repl,
    /// Show the effective configuration
    Config,
}

fn resolve_config(cli: &Cli) -> RolodexConfig {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            load_rolodex_config(&cwd)
        }
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    config
}

/// Activate a fresh view against the configured endpoint. Exits on failure.
async fn activate(config: &RolodexConfig) -> DirectoryState {
    let source = match HttpUserSource::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Could not build HTTP client: {e}");
            std::process::exit(1);
        }
    };
    let mut state = DirectoryState::new();
    state.initialize(&source).await;
    if let Some(reason) = state.load_status().error() {
        eprintln!("Could not load {}: {reason}", config.endpoint);
        std::process::exit(1);
    }
    state
}

fn print_view(state: &DirectoryState) {
    if !state.title_text().is_empty() {
        println!("# {}", state.title_text());
    }
    let cards = card_views(state.filtered());
    if cards.is_empty() {
        println!("(no matches)");
        return;
    }
    for card in &cards {
        println!("{:<6} {:<30} {}", card.key, card.name, card.email.as_deref().unwrap_or("-"));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rolodex=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match cli.command {
        Commands::List { search, title, json } => {
            let mut state = activate(&config).await;
            state.apply_input(TextField::Search, &search);
            state.apply_input(TextField::Title, &title);

            if json {
                let out = serde_json::json!({
                    "title": state.title_text(),
                    "search": state.search_text(),
                    "monsters": state.filtered(),
                });
                match serde_json::to_string_pretty(&out) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Could not serialize output: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_view(&state);
                eprintln!("\n{} of {} records", state.filtered().len(), state.source().len());
            }
        }
        Commands::Repl => {
            let mut state = activate(&config).await;
            eprintln!(
                "Loaded {} records. Type to search, `/title TEXT` to set the title, `/quit` to exit.",
                state.source().len()
            );
            print_view(&state);

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        eprintln!("Could not read input: {e}");
                        std::process::exit(1);
                    }
                };
                if line.trim() == "/quit" {
                    break;
                }
                match line.strip_prefix("/title ") {
                    Some(title) => state.apply_input(TextField::Title, title),
                    None => state.apply_input(TextField::Search, &line),
                }
                print_view(&state);
                let _ = std::io::stdout().flush();
            }
        }
        Commands::Config => {
            println!("endpoint           = {}", config.endpoint);
            match config.timeout_secs {
                Some(secs) => println!("timeout_secs       = {secs}"),
                None => println!("timeout_secs       = (none)"),
            }
            println!("search_placeholder = {}", config.search_placeholder);
            println!("title_placeholder  = {}", config.title_placeholder);
        }
    }
}

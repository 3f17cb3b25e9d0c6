mod clipboard;
mod render;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;
use widgets_common::{Studio, View};
use widgets_core::{CatalogClient, ExportButton, ExportOutcome, HttpFetcher};

use clipboard::CommandClipboard;

#[derive(Parser)]
#[command(name = "widgets")]
struct Args {
    /// Origin of the widget server.
    #[arg(long, default_value = "http://localhost:4777", env = "WIDGETS_ORIGIN")]
    origin: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every widget with its catalog preview URL.
    List,

    /// Show the view a fragment identifier resolves to.
    Show {
        /// Fragment, with or without the leading `#`.
        fragment: String,
    },

    /// Build the canonical URL for a widget.
    Url {
        widget: String,

        /// Query string of an existing widget URL to start from.
        #[arg(long)]
        query: Option<String>,

        /// Option override, as `name=value`. May be repeated.
        #[arg(long = "set", value_parser = parse_assignment)]
        sets: Vec<(String, String)>,

        /// Copy command receiving the URL on stdin (e.g. `wl-copy`).
        #[arg(long, env = "WIDGETS_CLIPBOARD")]
        copy_with: Option<String>,
    },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let client = CatalogClient::new(&args.origin, Arc::new(HttpFetcher::default()));
    let catalog = client.fetch().await.unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });
    let catalog = Arc::new(catalog);

    match args.command {
        Command::List => {
            let studio = Studio::new(catalog, client.origin(), "");
            for line in render::catalog_lines(&studio.catalog_entries()) {
                println!("{line}");
            }
        }
        Command::Show { fragment } => {
            let studio = Studio::new(catalog, client.origin(), &fragment);
            let lines = match (studio.view(), studio.editor()) {
                (View::Editor(_), Some(session)) => render::editor_lines(session),
                _ => render::catalog_lines(&studio.catalog_entries()),
            };
            for line in lines {
                println!("{line}");
            }
        }
        Command::Url {
            widget,
            query,
            sets,
            copy_with,
        } => {
            let mut studio = Studio::new(catalog, client.origin(), "");
            if studio.activate(&widget).is_none() {
                error!("no widget named {widget}");
                std::process::exit(1);
            }
            let Some(session) = studio.editor_mut() else {
                std::process::exit(1);
            };

            if let Some(query) = query {
                session.apply_query(&query);
            }
            for (name, value) in &sets {
                session.set(name, value);
            }

            println!("{}", session.url());

            if let Some(clipboard) = copy_with.as_deref().and_then(CommandClipboard::parse) {
                let mut button = ExportButton::new();
                if button.click(session, &clipboard).await == ExportOutcome::Copied {
                    eprintln!("copied");
                }
            }
        }
    }
}

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use client_core::{Navigator, Route};
use shared::domain::EventId;
use tracing::debug;

mod text;

#[derive(Parser, Debug)]
#[command(name = "meetups", about = "Browse software testing meetups")]
struct Cli {
    /// JSON fixture to load instead of the built-in events.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All events, soonest first.
    List,
    /// One event by id.
    Show { id: String },
    /// Whatever screen a path such as `/event/2` routes to.
    Open { path: String },
}

impl Command {
    fn route(self) -> Route {
        match self {
            Command::List => Route::List,
            Command::Show { id } => Route::Detail(EventId::new(id)),
            Command::Open { path } => Route::parse(&path),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from '{}'", path.display()))?,
        None => Catalog::canonical(),
    };

    let route = cli.command.route();
    debug!(%route, "opening");

    let mut navigator = Navigator::new(Arc::new(catalog));
    if route != Route::List {
        drop(navigator.navigate(route));
    }
    navigator.settle().await;

    print!("{}", text::screen(navigator.screen()));
    Ok(())
}

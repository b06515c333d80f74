use std::path::PathBuf;

use anyhow::Context;
use byline_server::{BylineServer, ServerConfig};
use byline_store::{JsonFileBackend, Snapshot, SnapshotBackend};
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => cmd_init(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let path = PathBuf::from(args.path.unwrap_or_else(|| "data.json".into()));
    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let backend = JsonFileBackend::new(&path);
    backend
        .save(&Snapshot::default())
        .context("failed to write state document")?;
    println!(
        "{} Initialized empty state document at {}",
        "✓".green().bold(),
        path.display().to_string().bold()
    );
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to read config {path}"))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse().context("invalid --bind address")?;
    }
    if let Some(data) = &args.data {
        config.data_path = data.into();
    }
    if args.no_graphiql {
        config.graphiql = false;
    }
    tracing::debug!(?config, "resolved serve configuration");

    println!(
        "byline server on {} (data: {})",
        config.bind_addr.to_string().bold(),
        config.data_path.display().to_string().cyan()
    );
    if config.graphiql {
        println!(
            "  GraphiQL: {}",
            format!("http://{}/graphql", config.bind_addr).blue()
        );
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(BylineServer::new(config).serve())?;
    Ok(())
}

use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use colored::Colorize;

use faststatus_resource::{Resource, Status};
use faststatus_server::{ServerConfig, StatusServer};
use faststatus_store::{RedbResourceStore, ResourceStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(&cli.db, args),
        Command::Get(args) => cmd_get(&open_store(&cli.db)?, cli.format, args),
        Command::Set(args) => cmd_set(&open_store(&cli.db)?, args),
        Command::List(_) => cmd_list(&open_store(&cli.db)?, cli.format),
        Command::Rm(args) => cmd_rm(&open_store(&cli.db)?, args),
    }
}

fn open_store(db: &Path) -> anyhow::Result<RedbResourceStore> {
    RedbResourceStore::open(db).with_context(|| format!("cannot open database {}", db.display()))
}

fn cmd_serve(db: &Path, args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        db_path: db.to_path_buf(),
    };
    println!(
        "faststatus server on {} (db: {})",
        args.bind.to_string().bold(),
        db.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(StatusServer::new(config).serve())?;
    Ok(())
}

fn cmd_get(store: &dyn ResourceStore, format: OutputFormat, args: GetArgs) -> anyhow::Result<()> {
    let found: Vec<Resource> = store.get_many(&args.ids)?.into_iter().flatten().collect();
    if found.is_empty() {
        bail!("no such resources");
    }
    print_resources(&found, format)
}

/// Upsert one resource. A status change stamps `since` with the current
/// time, so the two fields move together; a plain rename leaves both
/// alone. A resource created here enters `Free` now rather than at the
/// zero timestamp.
fn cmd_set(store: &dyn ResourceStore, args: SetArgs) -> anyhow::Result<()> {
    let existing = store.get(args.id)?;
    let is_new = existing.is_none();
    let mut resource = existing.unwrap_or_else(|| Resource::new(args.id, ""));
    if let Some(name) = args.name {
        resource.friendly_name = name;
    }
    match args.status {
        Some(status) => resource.set_status(status, Utc::now()),
        None if is_new => resource.set_status(Status::FREE, Utc::now()),
        None => {}
    }
    store.put(&resource)?;
    println!(
        "{} {} is now {}",
        "✓".green().bold(),
        resource.id.to_string().bold(),
        resource.status.pretty().yellow()
    );
    Ok(())
}

fn cmd_list(store: &dyn ResourceStore, format: OutputFormat) -> anyhow::Result<()> {
    let resources = store.list()?;
    print_resources(&resources, format)
}

fn cmd_rm(store: &dyn ResourceStore, args: RmArgs) -> anyhow::Result<()> {
    let mut any_removed = false;
    for &id in &args.ids {
        if store.delete(id)? {
            any_removed = true;
            println!("{} removed {}", "✓".green(), id.to_string().bold());
        } else {
            println!("  {} {}", "missing:".yellow(), id);
        }
    }
    if !any_removed {
        bail!("no resources removed");
    }
    Ok(())
}

/// Machine output: uncolored, one line per resource or a JSON array.
fn print_resources(resources: &[Resource], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for resource in resources {
                println!("{resource}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(resources)?),
    }
    Ok(())
}

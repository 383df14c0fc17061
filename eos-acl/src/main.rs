use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use acl_core::{format_json, AclTranslator, EntryMap, MalformedPolicy};
use anyhow::{Context, Result};
use clap::Parser;
use eos_acl::report::{render_acl, render_acl_list};
use eos_acl::running_config::{acl_names, get_acl_block};
use eos_acl::settings::{default_settings, load_settings, Settings, LOCAL_SETTINGS_FILE};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod entry_cmd;
mod output;
mod sync_cmd;

use cli::{Cli, Command, GetArgs, ListArgs, OutputFormat};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = resolve_settings(cli.config.as_deref())?;
    if cli.skip_malformed {
        settings.parse.on_malformed = MalformedPolicy::Skip;
    }
    if cli.no_color || !settings.output.color {
        colored::control::set_override(false);
    }
    let translator = AclTranslator::new(settings.parse.clone());

    match cli.command {
        Command::Get(args) => run_get(&translator, args),
        Command::List(args) => run_list(&translator, args),
        Command::Create(args) => entry_cmd::run_create(&translator, args),
        Command::Delete(args) => entry_cmd::run_delete(&translator, args),
        Command::Default(args) => entry_cmd::run_default(&translator, args),
        Command::Add(args) => entry_cmd::run_add(&translator, args),
        Command::Update(args) => entry_cmd::run_update(&translator, args),
        Command::Remove(args) => entry_cmd::run_remove(&translator, args),
        Command::Sync(args) => sync_cmd::run_sync(&translator, args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Explicit `--config` must load; a local settings file falls back to the
/// embedded defaults with a warning.
fn resolve_settings(path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = path {
        return load_settings(path)
            .with_context(|| format!("failed to load settings {}", path.display()));
    }

    let local = Path::new(LOCAL_SETTINGS_FILE);
    if !local.exists() {
        return Ok(default_settings());
    }
    match load_settings(local) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            warn!(%err, "using embedded default settings");
            Ok(default_settings())
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse the named ACL out of a running config; `None` when it is absent.
pub(crate) fn load_acl(
    translator: &AclTranslator,
    config: &str,
    name: &str,
) -> Result<Option<EntryMap>> {
    let block = get_acl_block(config, name);
    translator
        .get(block.as_deref())
        .with_context(|| format!("failed to parse access list '{name}'"))
}

fn run_get(translator: &AclTranslator, args: GetArgs) -> Result<()> {
    let config = read_config(&args.file)?;
    let entries = load_acl(translator, &config, &args.name)?.with_context(|| {
        format!(
            "access list '{}' not found in {}",
            args.name,
            args.file.display()
        )
    })?;

    match args.format {
        OutputFormat::Text => println!("{}", render_acl(&args.name, &entries)),
        OutputFormat::Json => println!("{}", format_json(&entries)),
    }
    Ok(())
}

fn run_list(translator: &AclTranslator, args: ListArgs) -> Result<()> {
    let config = read_config(&args.file)?;

    let mut acls = Vec::new();
    for name in acl_names(&config) {
        if let Some(entries) = load_acl(translator, &config, &name)? {
            acls.push((name, entries));
        }
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_acl_list(&acls)),
        OutputFormat::Json => {
            let by_name: BTreeMap<String, EntryMap> = acls.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&by_name)?);
        }
    }
    Ok(())
}

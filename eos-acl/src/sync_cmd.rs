use acl_core::{AclTranslator, DiffOptions};
use anyhow::{Context, Result};
use eos_acl::plan::{build_sync_plan, load_desired};
use eos_acl::report::{render_plan, render_plan_summary};
use tracing::info;

use crate::cli::{OutputFormat, SyncArgs};
use crate::{load_acl, output};

pub fn run_sync(translator: &AclTranslator, args: SyncArgs) -> Result<()> {
    let config = crate::read_config(&args.file)?;
    let current = load_acl(translator, &config, &args.name)?;
    let desired = load_desired(&args.desired)
        .with_context(|| format!("failed to load desired entries for '{}'", args.name))?;

    let opts = DiffOptions {
        include_unchanged: args.show_unchanged,
        ignore_log: args.ignore_log,
    };
    let plan = build_sync_plan(translator, &args.name, current.as_ref(), &desired, &opts);
    if plan.is_noop() {
        info!(acl = %args.name, "access list already matches desired entries");
    }

    if let Some(out_path) = &args.output {
        output::write_commands(out_path, &[&args.file, &args.desired], &plan.commands)?;
    }

    if args.summary {
        println!("{}", render_plan_summary(&plan));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_plan(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

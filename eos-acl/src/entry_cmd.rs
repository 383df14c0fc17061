use acl_core::{mask_to_prefix_len, AclTranslator, Action, Entry};
use anyhow::{bail, Context, Result};
use eos_acl::validate::validate_entry;

use crate::cli::{EntryArgs, NameArgs, RemoveArgs};

pub fn run_create(translator: &AclTranslator, args: NameArgs) -> Result<()> {
    print_commands(&translator.build_create_command(&args.name));
    Ok(())
}

pub fn run_delete(translator: &AclTranslator, args: NameArgs) -> Result<()> {
    print_commands(&translator.build_delete_command(&args.name));
    Ok(())
}

pub fn run_default(translator: &AclTranslator, args: NameArgs) -> Result<()> {
    print_commands(&translator.build_default_command(&args.name));
    Ok(())
}

pub fn run_add(translator: &AclTranslator, args: EntryArgs) -> Result<()> {
    let entry = entry_from_args(&args)?;
    print_commands(&translator.build_add_command(&args.name, &entry));
    Ok(())
}

pub fn run_update(translator: &AclTranslator, args: EntryArgs) -> Result<()> {
    let Some(seqno) = args.seqno else {
        bail!("update requires --seqno");
    };
    let entry = entry_from_args(&args)?;
    print_commands(&translator.build_update_command(&args.name, seqno, &entry));
    Ok(())
}

pub fn run_remove(translator: &AclTranslator, args: RemoveArgs) -> Result<()> {
    print_commands(&translator.build_remove_command(&args.name, args.seqno));
    Ok(())
}

fn entry_from_args(args: &EntryArgs) -> Result<Entry> {
    let srcprefixlen = match args.prefixlen {
        Some(len) => len,
        None => mask_to_prefix_len(args.mask.as_deref())
            .with_context(|| format!("invalid --mask for access list '{}'", args.name))?,
    };

    let entry = Entry {
        seqno: args.seqno,
        action: Action::from(args.action.as_str()),
        srcaddr: args.addr.clone(),
        srcprefixlen,
        log: args.log,
    };
    validate_entry(&entry)
        .with_context(|| format!("invalid entry for access list '{}'", args.name))?;
    Ok(entry)
}

fn print_commands(commands: &[String]) {
    for line in commands {
        println!("{line}");
    }
}

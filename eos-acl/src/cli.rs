use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "eos-acl")]
#[command(about = "Read standard ACLs from a running config and build change commands")]
pub struct Cli {
    /// Settings TOML file. Defaults to ./eos-acl.toml if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Drop malformed ACL entry lines with a warning instead of failing.
    #[arg(long, global = true)]
    pub skip_malformed: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show the entries of one ACL from a running-config file.
    Get(GetArgs),
    /// Show every standard ACL in a running-config file.
    List(ListArgs),
    /// Print the command that creates an empty ACL.
    Create(NameArgs),
    /// Print the command that deletes an ACL.
    Delete(NameArgs),
    /// Print the command that resets an ACL to its default.
    Default(NameArgs),
    /// Print the commands that add an entry.
    Add(EntryArgs),
    /// Print the commands that replace the entry at a seqno.
    Update(EntryArgs),
    /// Print the commands that remove the entry at a seqno.
    Remove(RemoveArgs),
    /// Compare an ACL with desired entries and print the commands that reconcile them.
    Sync(SyncArgs),
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Running-config text file.
    pub file: PathBuf,
    /// ACL name.
    pub name: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Running-config text file.
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct NameArgs {
    /// ACL name.
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct EntryArgs {
    /// ACL name.
    pub name: String,
    /// Entry sequence number. Required for update.
    #[arg(long)]
    pub seqno: Option<u32>,
    /// Entry action (permit, deny, remark).
    #[arg(long, default_value = "permit")]
    pub action: String,
    /// Source address.
    #[arg(long, default_value = acl_core::ANY_ADDR)]
    pub addr: String,
    /// Source prefix length.
    #[arg(long, conflicts_with = "mask")]
    pub prefixlen: Option<u8>,
    /// Source mask in dotted-decimal form, converted to a prefix length.
    #[arg(long)]
    pub mask: Option<String>,
    /// Log packets that match the entry.
    #[arg(long)]
    pub log: bool,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// ACL name.
    pub name: String,
    /// Sequence number of the entry to remove.
    pub seqno: u32,
}

#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Running-config text file.
    pub file: PathBuf,
    /// ACL name.
    pub name: String,
    /// JSON array of desired entries, each with a seqno.
    pub desired: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Only print the counts line.
    #[arg(long)]
    pub summary: bool,
    /// Also write the commands to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Treat entries that differ only in the log flag as unchanged.
    #[arg(long)]
    pub ignore_log: bool,
    /// List unchanged entries in the plan as well.
    #[arg(long)]
    pub show_unchanged: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

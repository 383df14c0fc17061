//! Reconcile a running ACL with a desired set of entries.
//!
//! The plan is the seqno-level diff between the two collections plus the
//! ordered command batches that move the device from one to the other:
//! removals first, then updates, then additions.

use std::fs;
use std::path::Path;

use acl_core::{diff_with_options, AclTranslator, DiffOptions, Entry, EntryChange, EntryMap, EXIT};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::validate::{validate_entry, EntryError};

/// Errors returned when loading a desired-state file.
#[derive(Debug, Error)]
pub enum DesiredLoadError {
    #[error("failed to read desired entries {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse desired entries {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("desired entry #{index} in {path} has no seqno")]
    MissingSeqno { path: String, index: usize },
    #[error("desired entry {seqno} in {path} is invalid: {source}")]
    InvalidEntry {
        path: String,
        seqno: u32,
        source: EntryError,
    },
}

/// Changes and commands needed to make one ACL match its desired entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncPlan {
    pub name: String,
    /// True when the ACL does not exist yet and must be created first.
    pub create: bool,
    pub changes: Vec<EntryChange>,
    pub commands: Vec<String>,
}

impl SyncPlan {
    pub fn is_noop(&self) -> bool {
        !self.create
            && self
                .changes
                .iter()
                .all(|change| matches!(change, EntryChange::Unchanged { .. }))
    }
}

/// Load desired entries from a JSON array.
///
/// Every entry must carry a seqno and render as a single well-formed line.
pub fn load_desired(path: &Path) -> Result<EntryMap, DesiredLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DesiredLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_desired(&raw, path.display().to_string())
}

fn parse_desired(raw: &str, path: String) -> Result<EntryMap, DesiredLoadError> {
    let list: Vec<Entry> = serde_json::from_str(raw).map_err(|source| DesiredLoadError::Json {
        path: path.clone(),
        source,
    })?;

    let mut entries = EntryMap::new();
    for (index, entry) in list.into_iter().enumerate() {
        let Some(seqno) = entry.seqno else {
            return Err(DesiredLoadError::MissingSeqno { path, index });
        };
        if let Err(source) = validate_entry(&entry) {
            return Err(DesiredLoadError::InvalidEntry {
                path,
                seqno,
                source,
            });
        }
        entries.insert(seqno, entry);
    }
    Ok(entries)
}

/// Build the plan that turns `current` into `desired`.
///
/// `current` is `None` when the ACL is absent from the running configuration.
/// Creation is its own batch, closed with `exit` like every other one.
pub fn build_sync_plan(
    translator: &AclTranslator,
    name: &str,
    current: Option<&EntryMap>,
    desired: &EntryMap,
    opts: &DiffOptions,
) -> SyncPlan {
    let empty = EntryMap::new();
    let create = current.is_none();
    let changes = diff_with_options(current.unwrap_or(&empty), desired, opts);

    let mut commands = Vec::new();
    if create {
        commands.extend(translator.build_create_command(name));
        commands.push(EXIT.to_string());
    }
    for change in changes.iter().filter(|c| matches!(c, EntryChange::Removed { .. })) {
        commands.extend(translator.build_remove_command(name, change.seqno()));
    }
    for change in &changes {
        match change {
            EntryChange::Changed { seqno, desired, .. } => {
                commands.extend(translator.build_update_command(name, *seqno, desired));
            }
            EntryChange::Added { seqno, entry } => {
                let entry = entry.clone().with_seqno(*seqno);
                commands.extend(translator.build_add_command(name, &entry));
            }
            EntryChange::Unchanged { .. } | EntryChange::Removed { .. } => {}
        }
    }

    debug!(
        acl = name,
        changes = changes.len(),
        commands = commands.len(),
        "built sync plan"
    );
    SyncPlan {
        name: name.to_string(),
        create,
        changes,
        commands,
    }
}

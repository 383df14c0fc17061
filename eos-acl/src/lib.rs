//! Standard ACL management over an EOS-style running configuration.
//!
//! This crate supplies the glue around [`acl_core`]: finding ACL blocks in a
//! running-config dump, loading tool settings, planning the command batches
//! that reconcile an ACL with a desired state, and terminal reporting.
//!
//! - [`running_config`] — block lookup by heading and ACL name enumeration
//! - [`settings`] — TOML settings with embedded defaults
//! - [`plan`] — desired-state loading and sync planning
//! - [`report`] — colored text rendering
//! - [`validate`] — checks on entries before they are rendered
//!
//! Commands are only built, never sent; running them against a device is up
//! to the caller.

pub mod plan;
pub mod report;
pub mod running_config;
pub mod settings;
pub mod validate;

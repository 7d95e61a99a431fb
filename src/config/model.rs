//! Configuration data model.
//!
//! Raw serde structures mirror the YAML document; the validated tree
//! (`ConfigTree` / `Group` / `Entry`) is what the rest of the crate works
//! with. Sort keys and display labels are derived once here, at load time.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Leading characters of a group name that act as its ordering prefix and
/// are stripped from the displayed label (`01Home` sorts as `01Home`,
/// displays as `Home`).
pub const GROUP_PREFIX_LEN: usize = 2;

/// Index block reserved per group unless `settings.group_step` overrides it.
pub const DEFAULT_GROUP_STEP: u32 = 10;

/// Seconds the mode sub-choice prompt waits before defaulting.
pub const DEFAULT_CHOICE_TIMEOUT_SECS: u64 = 5;

/// Raw document shape: a `settings` block plus the fixed `targets` root key
/// holding group name -> entry key -> entry fields. `BTreeMap` keeps both
/// levels in lexical key order, which is the menu order.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub settings: RawSettings,
    pub targets: BTreeMap<String, BTreeMap<String, RawEntry>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawSettings {
    pub group_step: Option<u32>,
    pub columns: Option<usize>,
    pub choice_timeout: Option<u64>,
    pub mount_root: Option<PathBuf>,
    pub color: Option<bool>,
    pub debug: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawEntry {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub ssh: Option<String>,
    pub lftp: Option<String>,
    pub mount: Option<String>,
}

/// The validated configuration. Built once per invocation, read-only after.
#[derive(Debug, Clone)]
pub struct ConfigTree {
    pub settings: Settings,
    /// Groups already ordered by sort key, entries already ordered by key.
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone)]
pub struct Group {
    /// Raw group name; orders groups relative to each other.
    pub sort_key: String,
    /// Raw name with the ordering prefix stripped; shown as the column header.
    pub label: String,
    pub entries: Vec<Entry>,
}

impl Group {
    pub(super) fn from_raw(raw_name: &str, entries: Vec<Entry>) -> Self {
        // Names shorter than the prefix keep their raw spelling.
        let stripped: String = raw_name.chars().skip(GROUP_PREFIX_LEN).collect();
        let label = if stripped.is_empty() {
            raw_name.to_string()
        } else {
            stripped
        };
        Self {
            sort_key: raw_name.to_string(),
            label,
            entries,
        }
    }
}

/// One connectable host record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw YAML key; orders entries within their group.
    pub key: String,
    pub name: String,
    pub address: String,
    pub ssh_user: Option<String>,
    pub transfer_user: Option<String>,
    pub mount: Option<MountSpec>,
}

/// Parsed `user:type:path` mount triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub user: String,
    pub fstype: String,
    pub path: String,
}

impl MountSpec {
    /// Splits the colon-delimited triple. The remote path may itself contain
    /// colons, so only the first two separators split.
    pub(super) fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(3, ':');
        let user = parts.next()?.trim();
        let fstype = parts.next()?.trim();
        let path = parts.next()?.trim();
        if user.is_empty() || fstype.is_empty() || path.is_empty() {
            return None;
        }
        Some(Self {
            user: user.to_string(),
            fstype: fstype.to_string(),
            path: path.to_string(),
        })
    }
}

/// How many menu columns to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMode {
    /// Derive the count from the terminal width and the widest label.
    Auto,
    Fixed(usize),
}

/// Resolved `settings` block with defaults applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub group_step: u32,
    pub columns: ColumnMode,
    pub choice_timeout: Duration,
    pub mount_root: PathBuf,
    pub color: bool,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            group_step: DEFAULT_GROUP_STEP,
            columns: ColumnMode::Auto,
            choice_timeout: Duration::from_secs(DEFAULT_CHOICE_TIMEOUT_SECS),
            mount_root: default_mount_root(),
            color: true,
            debug: false,
        }
    }
}

fn default_mount_root() -> PathBuf {
    match dirs::home_dir() {
        Some(home_dir) => home_dir.join("mnt"),
        None => PathBuf::from("/mnt"),
    }
}

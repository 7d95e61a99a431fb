//! Reverse-mapping a typed menu index back to its entry.

use super::errors::SelectionError;
use super::flatten::{IndexedEntry, flatten};
use crate::config::{ConfigTree, Entry};

/// A connection mode an entry can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Ssh,
    Transfer,
    Mount,
}

impl Capability {
    /// Short name used in prompts and capability tags.
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Ssh => "ssh",
            Capability::Transfer => "lftp",
            Capability::Mount => "mount",
        }
    }
}

/// The capabilities of one entry, always in the fixed ssh, lftp, mount order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    modes: Vec<Capability>,
}

impl CapabilitySet {
    pub fn of(entry: &Entry) -> Self {
        let mut modes = Vec::new();
        if entry.ssh_user.is_some() {
            modes.push(Capability::Ssh);
        }
        if entry.transfer_user.is_some() {
            modes.push(Capability::Transfer);
        }
        if entry.mount.is_some() {
            modes.push(Capability::Mount);
        }
        Self { modes }
    }

    pub fn modes(&self) -> &[Capability] {
        &self.modes
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.modes.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// A resolved selection: the menu line plus what it can connect with.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub indexed: IndexedEntry<'a>,
    pub capabilities: CapabilitySet,
}

/// Looks up the entry shown with `index`. Re-runs the exact flattening the
/// menu render used, so the displayed number and the resolved entry cannot
/// diverge. Indices that fall in the gap after a short group, or past the
/// last group, resolve to nothing.
pub fn resolve<'a>(tree: &'a ConfigTree, index: u32, group_step: u32) -> Result<Resolved<'a>, SelectionError> {
    let flattened = flatten(tree, group_step);
    let indexed = flattened
        .entries
        .iter()
        .copied()
        .find(|candidate| candidate.index == index)
        .ok_or(SelectionError::NotFound(index))?;

    Ok(Resolved {
        indexed,
        capabilities: CapabilitySet::of(indexed.entry),
    })
}

#[cfg(test)]
#[path = "../test/menu/select.rs"]
mod tests;

//! Flattening the configuration tree into the stably-numbered menu order.
//!
//! Both the render path and the lookup path call [`flatten`]; the number a
//! user sees and the entry a number resolves to stay consistent because they
//! come from the identical traversal. Nothing here is cached across calls.

use crate::config::{ConfigTree, Entry, Group};

/// One menu line: an entry paired with its global index and owning group.
#[derive(Debug, Clone, Copy)]
pub struct IndexedEntry<'a> {
    /// The number the user types to select this entry.
    pub index: u32,
    /// 0-based position of the owning group in the flattened group order.
    pub group: usize,
    pub group_label: &'a str,
    pub entry: &'a Entry,
}

/// Flattened menu: entries in display order plus the ordered group labels.
#[derive(Debug, Clone, Default)]
pub struct Flattened<'a> {
    pub entries: Vec<IndexedEntry<'a>>,
    pub labels: Vec<&'a str>,
}

/// Walks the tree in sort-key order and assigns every entry its global
/// index: the group at sorted position `i` owns the index block
/// `i*group_step + 1 ..= i*group_step + len`. Deterministic for a given
/// tree; the ordering is re-derived here rather than trusted from the
/// tree's construction order.
///
/// A group with more entries than `group_step` spills into the next
/// group's block; the loader warns about that at load time, the arithmetic
/// here stays untouched.
pub fn flatten<'a>(tree: &'a ConfigTree, group_step: u32) -> Flattened<'a> {
    let mut groups: Vec<&Group> = tree.groups.iter().collect();
    groups.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

    let mut entries = Vec::new();
    let mut labels = Vec::new();

    for (group_pos, group) in groups.iter().enumerate() {
        labels.push(group.label.as_str());

        let mut group_entries: Vec<&Entry> = group.entries.iter().collect();
        group_entries.sort_by(|a, b| a.key.cmp(&b.key));

        let base = group_pos as u32 * group_step;
        for (offset, entry) in group_entries.into_iter().enumerate() {
            entries.push(IndexedEntry {
                index: base + offset as u32 + 1,
                group: group_pos,
                group_label: group.label.as_str(),
                entry,
            });
        }
    }

    Flattened { entries, labels }
}

#[cfg(test)]
#[path = "../test/menu/flatten.rs"]
mod tests;

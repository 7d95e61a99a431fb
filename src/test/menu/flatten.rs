use super::flatten;
use crate::config::{ConfigTree, Entry, Group, Settings};

fn entry(key: &str, name: &str) -> Entry {
    Entry {
        key: key.to_string(),
        name: name.to_string(),
        address: "10.0.0.1".to_string(),
        ssh_user: Some("root".to_string()),
        transfer_user: None,
        mount: None,
    }
}

fn group(sort_key: &str, label: &str, entries: Vec<Entry>) -> Group {
    Group {
        sort_key: sort_key.to_string(),
        label: label.to_string(),
        entries,
    }
}

fn tree(groups: Vec<Group>) -> ConfigTree {
    ConfigTree {
        settings: Settings::default(),
        groups,
    }
}

#[test]
fn assigns_each_group_its_own_index_block() {
    let tree = tree(vec![
        group("01Dev", "Dev", vec![entry("server", "Server"), entry("tv", "TV")]),
        group("02Remote", "Remote", vec![entry("vpn", "VPN")]),
    ]);

    let flattened = flatten(&tree, 10);
    let lines: Vec<(u32, &str)> = flattened.entries.iter().map(|line| (line.index, line.entry.name.as_str())).collect();

    assert_eq!(lines, vec![(1, "Server"), (2, "TV"), (11, "VPN")]);
    assert_eq!(flattened.labels, vec!["Dev", "Remote"]);
}

#[test]
fn reorders_groups_and_entries_given_out_of_order() {
    let tree = tree(vec![
        group("02Remote", "Remote", vec![entry("vpn", "VPN")]),
        group("01Dev", "Dev", vec![entry("tv", "TV"), entry("server", "Server")]),
    ]);

    let flattened = flatten(&tree, 10);
    let lines: Vec<(u32, &str)> = flattened.entries.iter().map(|line| (line.index, line.entry.name.as_str())).collect();

    assert_eq!(lines, vec![(1, "Server"), (2, "TV"), (11, "VPN")], "order comes from sort keys, not construction order");
}

#[test]
fn honors_a_custom_group_step() {
    let tree = tree(vec![
        group("01A", "A", vec![entry("a", "A1")]),
        group("02B", "B", vec![entry("b", "B1")]),
        group("03C", "C", vec![entry("c", "C1")]),
    ]);

    let flattened = flatten(&tree, 100);
    let indices: Vec<u32> = flattened.entries.iter().map(|line| line.index).collect();

    assert_eq!(indices, vec![1, 101, 201]);
}

#[test]
fn repeats_identically_for_the_same_tree() {
    let tree = tree(vec![
        group("01Dev", "Dev", vec![entry("server", "Server"), entry("tv", "TV")]),
        group("02Remote", "Remote", vec![entry("vpn", "VPN")]),
    ]);

    let first: Vec<u32> = flatten(&tree, 10).entries.iter().map(|line| line.index).collect();
    let second: Vec<u32> = flatten(&tree, 10).entries.iter().map(|line| line.index).collect();

    assert_eq!(first, second);
}

#[test]
fn tags_entries_with_their_group_position() {
    let tree = tree(vec![
        group("01Dev", "Dev", vec![entry("server", "Server")]),
        group("02Remote", "Remote", vec![entry("vpn", "VPN")]),
    ]);

    let flattened = flatten(&tree, 10);

    assert_eq!(flattened.entries[0].group, 0);
    assert_eq!(flattened.entries[0].group_label, "Dev");
    assert_eq!(flattened.entries[1].group, 1);
    assert_eq!(flattened.entries[1].group_label, "Remote");
}

#[test]
fn oversized_group_spills_into_the_next_block() {
    let crowd: Vec<Entry> = (0..11).map(|n| entry(&format!("h{:02}", n), &format!("H{}", n))).collect();
    let tree = tree(vec![group("01Big", "Big", crowd), group("02Next", "Next", vec![entry("vpn", "VPN")])]);

    let flattened = flatten(&tree, 10);
    let indices: Vec<u32> = flattened.entries.iter().map(|line| line.index).collect();

    // The eleventh entry takes index 11, the same number the next group
    // starts at. The loader warns about this at load time.
    assert_eq!(indices[10], 11);
    assert_eq!(indices[11], 11);
}

#[test]
fn flattens_an_empty_tree_to_nothing() {
    let flattened = flatten(&tree(Vec::new()), 10);
    assert!(flattened.entries.is_empty());
    assert!(flattened.labels.is_empty());
}

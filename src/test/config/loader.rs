use super::{expand_home, parse_config, validate_entry};
use crate::config::errors::ConfigError;
use crate::config::model::{ColumnMode, MountSpec, RawEntry};
use std::path::PathBuf;
use std::time::Duration;

fn raw_entry(name: Option<&str>, ip: Option<&str>, ssh: Option<&str>, lftp: Option<&str>, mount: Option<&str>) -> RawEntry {
    RawEntry {
        name: name.map(str::to_string),
        ip: ip.map(str::to_string),
        ssh: ssh.map(str::to_string),
        lftp: lftp.map(str::to_string),
        mount: mount.map(str::to_string),
    }
}

#[test]
fn parses_groups_entries_and_settings() {
    let yaml = "\
settings:
  group_step: 20
  columns: 3
  choice_timeout: 9
  color: false
targets:
  01Home:
    nas:
      name: NAS
      ip: 192.168.1.10
      ssh: admin
      lftp: media
      mount: \"media:sshfs:/srv/media\"
  02Work:
    build:
      name: Build Server
      ip: 10.0.0.20
      ssh: builder
";

    let tree = parse_config(yaml).unwrap();

    assert_eq!(tree.settings.group_step, 20);
    assert_eq!(tree.settings.columns, ColumnMode::Fixed(3));
    assert_eq!(tree.settings.choice_timeout, Duration::from_secs(9));
    assert!(!tree.settings.color);

    assert_eq!(tree.groups.len(), 2);
    assert_eq!(tree.groups[0].sort_key, "01Home");
    assert_eq!(tree.groups[0].label, "Home", "ordering prefix should be stripped from the header");
    assert_eq!(tree.groups[1].label, "Work");

    let nas = &tree.groups[0].entries[0];
    assert_eq!(nas.key, "nas");
    assert_eq!(nas.name, "NAS");
    assert_eq!(nas.address, "192.168.1.10");
    assert_eq!(nas.ssh_user.as_deref(), Some("admin"));
    assert_eq!(nas.transfer_user.as_deref(), Some("media"));
    assert_eq!(
        nas.mount,
        Some(MountSpec {
            user: "media".to_string(),
            fstype: "sshfs".to_string(),
            path: "/srv/media".to_string(),
        })
    );
}

#[test]
fn applies_defaults_when_settings_block_is_absent() {
    let yaml = "\
targets:
  01Home:
    nas:
      name: NAS
      ip: 192.168.1.10
      ssh: admin
";

    let tree = parse_config(yaml).unwrap();

    assert_eq!(tree.settings.group_step, 10);
    assert_eq!(tree.settings.columns, ColumnMode::Auto);
    assert_eq!(tree.settings.choice_timeout, Duration::from_secs(5));
    assert!(tree.settings.color);
    assert!(!tree.settings.debug);
}

#[test]
fn rejects_document_without_targets_root_key() {
    let yaml = "\
hosts:
  01Home:
    nas:
      name: NAS
      ip: 192.168.1.10
";

    assert!(matches!(parse_config(yaml), Err(ConfigError::Malformed(_))));
}

#[test]
fn rejects_invalid_yaml_syntax() {
    assert!(matches!(parse_config("targets: ["), Err(ConfigError::Malformed(_))));
}

#[test]
fn rejects_zero_group_step_and_zero_columns() {
    let zero_step = "\
settings:
  group_step: 0
targets:
  01Home:
    nas: {name: NAS, ip: 192.168.1.10, ssh: admin}
";
    assert!(matches!(parse_config(zero_step), Err(ConfigError::Malformed(_))));

    let zero_columns = "\
settings:
  columns: 0
targets:
  01Home:
    nas: {name: NAS, ip: 192.168.1.10, ssh: admin}
";
    assert!(matches!(parse_config(zero_columns), Err(ConfigError::Malformed(_))));
}

#[test]
fn orders_groups_and_entries_by_key_not_document_order() {
    let yaml = "\
targets:
  02Work:
    zz:
      name: Last
      ip: 10.0.0.2
      ssh: a
    aa:
      name: First
      ip: 10.0.0.1
      ssh: a
  01Home:
    nas:
      name: NAS
      ip: 192.168.1.10
      ssh: admin
";

    let tree = parse_config(yaml).unwrap();

    assert_eq!(tree.groups[0].sort_key, "01Home");
    assert_eq!(tree.groups[1].sort_key, "02Work");
    assert_eq!(tree.groups[1].entries[0].key, "aa");
    assert_eq!(tree.groups[1].entries[1].key, "zz");
}

#[test]
fn skips_invalid_entries_and_drops_emptied_groups() {
    let yaml = "\
targets:
  01Home:
    good:
      name: NAS
      ip: 192.168.1.10
      ssh: admin
    no-address:
      name: Broken
      ssh: admin
  02Work:
    no-capability:
      name: Island
      ip: 10.0.0.9
";

    let tree = parse_config(yaml).unwrap();

    assert_eq!(tree.groups.len(), 1, "group left with no valid entries should be dropped");
    assert_eq!(tree.groups[0].entries.len(), 1);
    assert_eq!(tree.groups[0].entries[0].key, "good");
}

#[test]
fn validates_entry_fields_and_mount_triples() {
    let entry = validate_entry("nas", raw_entry(Some("NAS"), Some("10.0.0.1"), None, None, Some("u:sshfs:/a:b"))).unwrap();
    let mount = entry.mount.unwrap();
    assert_eq!(mount.user, "u");
    assert_eq!(mount.fstype, "sshfs");
    assert_eq!(mount.path, "/a:b", "remote path may itself contain colons");

    assert!(validate_entry("x", raw_entry(None, Some("10.0.0.1"), Some("a"), None, None)).is_err());
    assert!(validate_entry("x", raw_entry(Some("X"), None, Some("a"), None, None)).is_err());
    assert!(validate_entry("x", raw_entry(Some("X"), Some("10.0.0.1"), None, None, None)).is_err());
    assert!(
        validate_entry("x", raw_entry(Some("X"), Some("10.0.0.1"), Some("a"), None, Some("user-only"))).is_err(),
        "mount spec missing its type and path should invalidate the entry"
    );
    assert!(validate_entry("x", raw_entry(Some("  "), Some("10.0.0.1"), Some("a"), None, None)).is_err());
}

#[test]
fn keeps_short_group_names_unstripped() {
    let yaml = "\
targets:
  a:
    host:
      name: Host
      ip: 10.0.0.1
      ssh: root
";

    let tree = parse_config(yaml).unwrap();
    assert_eq!(tree.groups[0].label, "a", "a name shorter than the prefix keeps its raw spelling");
}

#[test]
fn loads_from_an_explicit_path_and_rejects_a_missing_one() {
    let unique = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("sshm-loader-{unique}.yaml"));

    std::fs::write(
        &path,
        "targets:\n  01Home:\n    nas:\n      name: NAS\n      ip: 192.168.1.10\n      ssh: admin\n",
    )
    .expect("write temp config");

    let loader = super::ConfigLoader::new(Some(path.clone())).expect("explicit path should resolve");
    assert_eq!(loader.path(), path.as_path());
    let tree = loader.load().expect("explicit config should load");
    assert_eq!(tree.groups.len(), 1);

    std::fs::remove_file(&path).expect("remove temp config");

    assert!(matches!(
        super::ConfigLoader::new(Some(path)),
        Err(ConfigError::IoError(_))
    ));
}

#[test]
fn expands_home_prefix_in_paths() {
    let expanded = expand_home(PathBuf::from("~/mnt"));
    assert!(!expanded.starts_with("~"));
    assert!(expanded.ends_with("mnt"));

    assert_eq!(expand_home(PathBuf::from("/mnt/ssh")), PathBuf::from("/mnt/ssh"));
}

//! Configuration file loading and validation
//!
//! Handles:
//! - Searching for the config file in its standard locations
//! - Parsing the YAML document into the validated group/entry tree
//! - Lenient entry validation (bad entries are skipped loudly)
//! - Writing the starter configuration for `--init`

use super::errors::ConfigError;
use super::model::{ColumnMode, ConfigTree, Entry, Group, MountSpec, RawConfig, RawEntry, RawSettings, Settings};
use crate::{log_debug, log_info, log_warn};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

const USER_CONFIG_DIR: &str = "sshmenu";
const USER_CONFIG_FILE: &str = "config.yaml";
const HOME_DOTFILE: &str = ".sshmenu.yaml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sshmenu.yaml";

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = match explicit {
            Some(path) => {
                log_debug!("Using config from --config: {:?}", path);
                if !path.exists() {
                    return Err(ConfigError::IoError(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no such config file: {}", path.display()),
                    )));
                }
                path
            }
            None => Self::find_config_path()?,
        };
        Ok(Self { config_path })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Find the configuration file in standard locations: the user-level
    /// config directory first, then the home dotfile, then the system path.
    /// First existing file wins.
    fn find_config_path() -> Result<PathBuf, ConfigError> {
        log_debug!("Searching for configuration file...");
        for candidate in Self::search_candidates() {
            log_debug!("Checking: {:?}", candidate);
            if candidate.exists() {
                log_info!("Found config at: {:?}", candidate);
                return Ok(candidate);
            }
        }
        Err(ConfigError::NotFound)
    }

    fn search_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
        }
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(home_dir.join(HOME_DOTFILE));
        }
        candidates.push(PathBuf::from(SYSTEM_CONFIG_PATH));
        candidates
    }

    /// Load and validate the configuration from the resolved file.
    pub fn load(self) -> Result<ConfigTree, ConfigError> {
        log_info!("Loading configuration from: {:?}", self.config_path);

        let contents = fs::read_to_string(&self.config_path).map_err(|err| {
            log_warn!("Failed to read config file: {}", err);
            ConfigError::IoError(err)
        })?;

        parse_config(&contents)
    }

    /// Write the starter configuration to the user-level path. Never
    /// overwrites an existing file; creating a config is an explicit action.
    pub fn write_default_config() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::DirectoryCreationError("user config directory not found".to_string()))?;

        let menu_dir = config_dir.join(USER_CONFIG_DIR);
        let config_path = menu_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            return Err(ConfigError::AlreadyExists(config_path));
        }

        fs::create_dir_all(&menu_dir).map_err(|err| ConfigError::DirectoryCreationError(format!("{}: {}", menu_dir.display(), err)))?;

        let template = include_str!("../../templates/default-config.yaml");
        fs::write(&config_path, template)?;
        log_info!("Starter configuration written to: {:?}", config_path);

        Ok(config_path)
    }
}

/// Parse and validate a configuration document. Split from the file I/O so
/// the shape rules stay testable on plain strings.
fn parse_config(contents: &str) -> Result<ConfigTree, ConfigError> {
    let raw: RawConfig = serde_yaml::from_str(contents).map_err(|err| {
        log_warn!("Error parsing configuration file: {}", err);
        ConfigError::Malformed(err.to_string())
    })?;

    let settings = resolve_settings(raw.settings)?;

    let mut groups = Vec::new();
    for (group_name, raw_entries) in raw.targets {
        let mut entries = Vec::new();
        for (key, raw_entry) in raw_entries {
            match validate_entry(&key, raw_entry) {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    log_warn!("Skipping entry '{}' in group '{}': {}", key, group_name, reason);
                    eprintln!("Warning: skipping entry '{}' in group '{}': {}", key, group_name, reason);
                }
            }
        }

        if entries.is_empty() {
            log_warn!("Dropping group '{}': no valid entries", group_name);
            eprintln!("Warning: dropping group '{}': no valid entries", group_name);
            continue;
        }

        // Index blocks are group_step wide; a larger group spills into the
        // next block and its tail indices collide with the following group.
        if entries.len() as u32 > settings.group_step {
            log_warn!(
                "Group '{}' has {} entries, more than group_step {}; menu indices will overlap the next group",
                group_name,
                entries.len(),
                settings.group_step
            );
            eprintln!(
                "Warning: group '{}' has {} entries (group_step is {}); menu indices will overlap the next group",
                group_name,
                entries.len(),
                settings.group_step
            );
        }

        groups.push(Group::from_raw(&group_name, entries));
    }

    log_debug!("Parsed {} group(s) from configuration", groups.len());
    Ok(ConfigTree { settings, groups })
}

fn resolve_settings(raw: RawSettings) -> Result<Settings, ConfigError> {
    let defaults = Settings::default();

    let group_step = raw.group_step.unwrap_or(defaults.group_step);
    if group_step == 0 {
        return Err(ConfigError::Malformed("settings.group_step must be at least 1".to_string()));
    }

    let columns = match raw.columns {
        None => ColumnMode::Auto,
        Some(0) => {
            return Err(ConfigError::Malformed("settings.columns must be at least 1".to_string()));
        }
        Some(n) => ColumnMode::Fixed(n),
    };

    Ok(Settings {
        group_step,
        columns,
        choice_timeout: raw.choice_timeout.map(Duration::from_secs).unwrap_or(defaults.choice_timeout),
        mount_root: raw.mount_root.map(expand_home).unwrap_or(defaults.mount_root),
        color: raw.color.unwrap_or(defaults.color),
        debug: raw.debug.unwrap_or(defaults.debug),
    })
}

/// YAML paths are taken literally, so `~/` has to be expanded here.
fn expand_home(path: PathBuf) -> PathBuf {
    if let (Ok(rest), Some(home_dir)) = (path.strip_prefix("~"), dirs::home_dir()) {
        return home_dir.join(rest);
    }
    path
}

/// Validate one raw entry. Returns the reason string when the entry cannot
/// be connected to and has to be skipped.
fn validate_entry(key: &str, raw: RawEntry) -> Result<Entry, String> {
    let name = non_empty(raw.name).ok_or("missing required field 'name'")?;
    let address = non_empty(raw.ip).ok_or("missing required field 'ip'")?;

    let mount = match non_empty(raw.mount) {
        Some(spec) => Some(MountSpec::parse(&spec).ok_or_else(|| format!("invalid mount spec '{}' (expected user:type:path)", spec))?),
        None => None,
    };

    let entry = Entry {
        key: key.to_string(),
        name,
        address,
        ssh_user: non_empty(raw.ssh),
        transfer_user: non_empty(raw.lftp),
        mount,
    };

    if entry.ssh_user.is_none() && entry.transfer_user.is_none() && entry.mount.is_none() {
        return Err("no connection capability (needs at least one of 'ssh', 'lftp', 'mount')".to_string());
    }

    Ok(entry)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;

//! Launching the external connection tools.
//!
//! The menu's responsibility ends at "which program, which arguments".
//! ssh, lftp and the mount helper all take over the terminal, so the child
//! inherits stdio and its exit status becomes ours.

use crate::config::{Entry, Settings};
use crate::menu::Capability;
use crate::{log_debug, log_error, log_info};
use std::{
    error::Error,
    fmt, fs, io,
    path::PathBuf,
    process::{Command, ExitCode, Stdio},
};

#[derive(Debug)]
pub enum DispatchError {
    /// The entry lacks the field the chosen mode needs.
    MissingField(&'static str),
    /// The external program is not on PATH.
    MissingBinary(String),
    IoError(io::Error),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::MissingField(field) => {
                write!(f, "entry has no '{}' field for the chosen mode", field)
            }
            DispatchError::MissingBinary(program) => {
                write!(f, "'{}' not found in PATH", program)
            }
            DispatchError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for DispatchError {}

impl From<io::Error> for DispatchError {
    fn from(err: io::Error) -> Self {
        DispatchError::IoError(err)
    }
}

/// A fully-resolved invocation, kept inert so it can be inspected (and
/// tested) before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Directory that must exist before the program starts (the mountpoint).
    pub ensure_dir: Option<PathBuf>,
}

/// Builds the argv for connecting to `entry` with `mode`.
///
/// - ssh:   `ssh user@address`
/// - lftp:  `lftp sftp://user@address`
/// - mount: `<fstype> user@address:path <mount_root>/<entry key>`
pub fn build_command(mode: Capability, entry: &Entry, settings: &Settings) -> Result<PreparedCommand, DispatchError> {
    match mode {
        Capability::Ssh => {
            let user = entry.ssh_user.as_deref().ok_or(DispatchError::MissingField("ssh"))?;
            Ok(PreparedCommand {
                program: "ssh".to_string(),
                args: vec![format!("{}@{}", user, entry.address)],
                ensure_dir: None,
            })
        }
        Capability::Transfer => {
            let user = entry.transfer_user.as_deref().ok_or(DispatchError::MissingField("lftp"))?;
            Ok(PreparedCommand {
                program: "lftp".to_string(),
                args: vec![format!("sftp://{}@{}", user, entry.address)],
                ensure_dir: None,
            })
        }
        Capability::Mount => {
            let spec = entry.mount.as_ref().ok_or(DispatchError::MissingField("mount"))?;
            let mountpoint = settings.mount_root.join(&entry.key);
            Ok(PreparedCommand {
                program: spec.fstype.clone(),
                args: vec![
                    format!("{}@{}:{}", spec.user, entry.address, spec.path),
                    mountpoint.display().to_string(),
                ],
                ensure_dir: Some(mountpoint),
            })
        }
    }
}

fn command_from_spec(spec: &PreparedCommand) -> Command {
    let mut command = Command::new(&spec.program);
    command.args(&spec.args);
    command
}

fn map_exit_code(success: bool, code: Option<i32>) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        // Clamp exit code to valid u8 range (0-255)
        let clamped_code = code.map_or(1, |status_code| u8::try_from(status_code).unwrap_or(255));
        ExitCode::from(clamped_code)
    }
}

/// Spawns the prepared command with inherited stdio and waits for it.
pub fn run(prepared: &PreparedCommand) -> Result<ExitCode, DispatchError> {
    which::which(&prepared.program).map_err(|err| {
        log_error!("'{}' not found in PATH: {}", prepared.program, err);
        DispatchError::MissingBinary(prepared.program.clone())
    })?;

    if let Some(dir) = &prepared.ensure_dir {
        fs::create_dir_all(dir)?;
        log_debug!("Ensured mountpoint directory: {:?}", dir);
    }

    log_info!("Launching: {} {}", prepared.program, prepared.args.join(" "));

    let status = command_from_spec(prepared)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| {
            log_error!("Failed to execute '{}': {}", prepared.program, err);
            DispatchError::IoError(err)
        })?;

    log_info!("'{}' exited with code: {}", prepared.program, status.code().unwrap_or(1));

    Ok(map_exit_code(status.success(), status.code()))
}

#[cfg(test)]
#[path = "test/dispatch.rs"]
mod tests;

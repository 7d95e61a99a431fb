use crate::menu::Capability;
use clap::{Arg, ArgGroup, Command, value_parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MainArgs {
    pub target: Option<u32>,
    pub choice: Option<u32>,
    pub mode: Option<Capability>,
    pub config: Option<PathBuf>,
    pub columns: Option<usize>,
    pub list: bool,
    pub init: bool,
    pub debug: bool,
}

/// Builds the clap command describing the CLI surface.
pub fn build_cli_command() -> Command {
    Command::new("sshm")
        .version("v0.4.0")
        .about("A Rust-based host menu for ssh, lftp and mount sessions.")
        .arg(
            Arg::new("target")
                .help("Menu index of the host to connect to, skipping the menu")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("choice")
                .help("Sub-menu option to pick when the host offers several modes")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("ssh")
                .short('s')
                .long("ssh")
                .help("Connect with ssh, skipping the mode prompt")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lftp")
                .short('l')
                .long("lftp")
                .help("Open an lftp transfer session, skipping the mode prompt")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mount")
                .short('m')
                .long("mount")
                .help("Mount the host's exported path, skipping the mode prompt")
                .action(clap::ArgAction::SetTrue),
        )
        .group(ArgGroup::new("mode").args(["ssh", "lftp", "mount"]).multiple(false).conflicts_with("choice"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Read this configuration file instead of probing the search path")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("columns")
                .short('C')
                .long("columns")
                .help("Fixed number of menu columns instead of fitting the terminal")
                .value_name("N")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(Arg::new("list").long("list").help("Print the menu and exit").action(clap::ArgAction::SetTrue))
        .arg(
            Arg::new("init")
                .long("init")
                .help("Write a starter configuration file and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug mode")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Parses command-line arguments using clap.
pub fn main_args() -> MainArgs {
    parse_main_args_from(&build_cli_command(), std::env::args_os())
}

fn parse_main_args_from<I, T>(cmd: &Command, argv: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(argv);

    let mode = if matches.get_flag("ssh") {
        Some(Capability::Ssh)
    } else if matches.get_flag("lftp") {
        Some(Capability::Transfer)
    } else if matches.get_flag("mount") {
        Some(Capability::Mount)
    } else {
        None
    };

    MainArgs {
        target: matches.get_one::<u32>("target").copied(),
        choice: matches.get_one::<u32>("choice").copied(),
        mode,
        config: matches.get_one::<PathBuf>("config").cloned(),
        columns: matches.get_one::<u32>("columns").map(|n| *n as usize),
        list: matches.get_flag("list"),
        init: matches.get_flag("init"),
        debug: matches.get_flag("debug"),
    }
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;

// Imports sshm specific modules
pub mod args;
pub mod config;
pub mod dispatch;
pub mod log;
pub mod menu;
pub mod ui;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    Selection(menu::SelectionError),
    Dispatch(dispatch::DispatchError),
    Log(log::LogError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Selection(err) => write!(f, "Selection error: {}", err),
            Error::Dispatch(err) => write!(f, "Dispatch error: {}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<menu::SelectionError> for Error {
    fn from(err: menu::SelectionError) -> Self {
        Error::Selection(err)
    }
}

impl From<dispatch::DispatchError> for Error {
    fn from(err: dispatch::DispatchError) -> Self {
        Error::Dispatch(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}

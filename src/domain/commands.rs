use std::str::FromStr;
use thiserror::Error;

/// A single user action on the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddMarker,
    AddPolygon,
    Clear,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "marker" | "m" => Ok(Command::AddMarker),
            "polygon" | "p" => Ok(Command::AddPolygon),
            "clear" | "c" => Ok(Command::Clear),
            other => Err(ParseCommandError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}', expected one of: marker, polygon, clear")]
    UnknownCommand(String),
}

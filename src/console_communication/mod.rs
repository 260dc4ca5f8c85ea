mod command;
mod console_endpoint;
mod status_display;
#[cfg(test)]
mod tests;

pub use command::{Command, CommandParseError};
pub use console_endpoint::ConsoleEndpoint;
pub use status_display::StatusDisplay;

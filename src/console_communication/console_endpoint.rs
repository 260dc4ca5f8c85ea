use super::command::{Command, CommandParseError};
use crate::vehicle::StateGuard;
use crate::{info, log, warn};
use std::io::BufRead;
use tokio::sync::mpsc;

/// Line-based operator console feeding [`Command`]s into the vehicle state.
pub struct ConsoleEndpoint {
    guard: StateGuard,
}

impl ConsoleEndpoint {
    pub const HELP: &'static str =
        "commands: + faster | - slower | n next phase | e <reason> emergency | q quit";
    const LINE_BUFFER: usize = 16;

    pub fn new(guard: StateGuard) -> Self { Self { guard } }

    /// Starts a detached reader thread forwarding stdin lines.
    ///
    /// Blocking stdin reads live on their own OS thread so they never hold up
    /// runtime shutdown.
    pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(Self::LINE_BUFFER);
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });
        rx
    }

    /// Applies commands from `lines` until the channel closes or the system halts.
    pub async fn run(self, mut lines: mpsc::Receiver<String>) {
        info!("{}", Self::HELP);
        while let Some(line) = lines.recv().await {
            match line.parse::<Command>() {
                Ok(command) => {
                    log!("Console command: {command:?}");
                    command.apply_to(&self.guard).await;
                }
                Err(CommandParseError::Empty) => {}
                Err(e) => warn!("{e}; {}", Self::HELP),
            }
            if !self.guard.is_active().await {
                break;
            }
        }
        log!("Console endpoint closed");
    }
}

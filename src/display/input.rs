//! Interactive file selection from stdin.

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;

use crate::actor::messages::CoordinatorMsg;
use crate::core::{is_shutdown, request_shutdown};
use crate::utils::path::expand_input_path;

const QUIT_COMMANDS: &[&str] = &[":q", "quit", "exit"];

/// What one input line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select(std::path::PathBuf),
    Quit,
    Nothing,
}

fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if QUIT_COMMANDS.contains(&trimmed) {
        return Command::Quit;
    }
    expand_input_path(trimmed).map_or(Command::Nothing, Command::Select)
}

/// Read one path per line from stdin on a dedicated thread.
///
/// EOF and the quit commands send `Shutdown`.
pub fn spawn_input_reader(tx: mpsc::UnboundedSender<CoordinatorMsg>) -> JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if is_shutdown() {
                return;
            }
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    crate::log!("error"; "stdin: {}", e);
                    break;
                }
            };
            let msg = match parse_line(&line) {
                Command::Select(path) => CoordinatorMsg::Select(path),
                Command::Quit => break,
                Command::Nothing => continue,
            };
            if tx.send(msg).is_err() {
                return;
            }
        }

        request_shutdown();
        let _ = tx.send(CoordinatorMsg::Shutdown);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_quit_commands() {
        assert_eq!(parse_line(":q"), Command::Quit);
        assert_eq!(parse_line("  quit\n"), Command::Quit);
        assert_eq!(parse_line("exit"), Command::Quit);
    }

    #[test]
    fn test_select_line() {
        assert_eq!(
            parse_line("'/tmp/data.json'\n"),
            Command::Select(PathBuf::from("/tmp/data.json"))
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   "), Command::Nothing);
    }

    #[test]
    fn test_quit_is_exact() {
        assert_eq!(
            parse_line("quit.json"),
            Command::Select(PathBuf::from("quit.json"))
        );
    }
}

//! Line-based keyboard stand-in for the headless runner.
//!
//! Each word on stdin becomes key events. `up` and `down` toggle holding
//! the arrow key, so a paddle keeps moving until the same word is typed
//! again; the other words are a press followed by a release.

use std::collections::HashSet;

use flatland_engine::input::{keys, InputSender, KeyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Toggle holding a key.
    Hold(KeyCode),
    /// Press and release a key.
    Tap(KeyCode),
    Quit,
}

pub fn parse_command(word: &str) -> Option<ConsoleCommand> {
    let command = match word.trim().to_ascii_lowercase().as_str() {
        "up" => ConsoleCommand::Hold(keys::ARROW_UP),
        "down" => ConsoleCommand::Hold(keys::ARROW_DOWN),
        "esc" | "pause" => ConsoleCommand::Tap(keys::ESCAPE),
        "enter" => ConsoleCommand::Tap(keys::ENTER),
        "dev" => ConsoleCommand::Tap(keys::I),
        "fps" => ConsoleCommand::Tap(keys::L),
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Feeds parsed console commands into the engine's input queue.
pub struct Console {
    input: InputSender,
    held: HashSet<KeyCode>,
}

impl Console {
    pub fn new(input: InputSender) -> Self {
        Self {
            input,
            held: HashSet::new(),
        }
    }

    /// Handle one line of input. Returns `false` once the user asked to quit.
    pub fn handle_line(&mut self, line: &str) -> bool {
        for word in line.split_whitespace() {
            match parse_command(word) {
                Some(ConsoleCommand::Hold(code)) => {
                    if self.held.remove(&code) {
                        self.input.key_released(code);
                    } else {
                        self.held.insert(code);
                        self.input.key_pressed(code);
                    }
                }
                Some(ConsoleCommand::Tap(code)) => {
                    self.input.key_pressed(code);
                    self.input.key_released(code);
                }
                Some(ConsoleCommand::Quit) => return false,
                None => tracing::warn!("Unknown command {:?}", word),
            }
        }
        true
    }
}

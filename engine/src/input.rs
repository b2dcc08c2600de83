//! Discrete input events handed over by the capture layer.
//!
//! The capture side holds a cloneable [`InputSender`]; the game owns the
//! matching [`InputQueue`] and drains it once per logic tick, paused or not.

use std::collections::HashSet;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};

pub type KeyCode = u32;

/// Key codes the engine and the bundled game care about.
pub mod keys {
    use super::KeyCode;

    pub const ENTER: KeyCode = 10;
    pub const ESCAPE: KeyCode = 27;
    pub const ARROW_UP: KeyCode = 38;
    pub const ARROW_DOWN: KeyCode = 40;
    pub const I: KeyCode = 73;
    pub const L: KeyCode = 76;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key {
        code: KeyCode,
        pressed: bool,
    },
    Mouse {
        x: i32,
        y: i32,
        button: MouseButton,
        pressed: bool,
    },
}

/// Producer handle for the capture layer.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::Sender<InputEvent>,
}

impl InputSender {
    /// Queue an event without blocking. Returns false if it was dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!("Input queue full, dropping {:?}", event);
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }

    pub fn key_pressed(&self, code: KeyCode) -> bool {
        self.send(InputEvent::Key {
            code,
            pressed: true,
        })
    }

    pub fn key_released(&self, code: KeyCode) -> bool {
        self.send(InputEvent::Key {
            code,
            pressed: false,
        })
    }

    pub fn click(&self, x: i32, y: i32, button: MouseButton) -> bool {
        self.send(InputEvent::Mouse {
            x,
            y,
            button,
            pressed: true,
        }) && self.send(InputEvent::Mouse {
            x,
            y,
            button,
            pressed: false,
        })
    }
}

/// Consumer side, owned by the game.
#[derive(Debug)]
pub struct InputQueue {
    rx: mpsc::Receiver<InputEvent>,
    held: HashSet<KeyCode>,
}

impl InputQueue {
    /// Take every pending event in arrival order. A press of a key that is
    /// already held is swallowed, so holding a key never repeats.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        loop {
            let event = match self.rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            if let InputEvent::Key { code, pressed } = event {
                if pressed {
                    if !self.held.insert(code) {
                        continue;
                    }
                } else {
                    self.held.remove(&code);
                }
            }
            events.push(event);
        }
        events
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }
}

pub fn input_channel(capacity: usize) -> (InputSender, InputQueue) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        InputSender { tx },
        InputQueue {
            rx,
            held: HashSet::new(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, pressed: bool) -> InputEvent {
        InputEvent::Key { code, pressed }
    }

    #[test]
    fn events_arrive_in_order() {
        let (tx, mut queue) = input_channel(16);
        tx.key_pressed(keys::ARROW_UP);
        tx.key_released(keys::ARROW_UP);
        tx.key_pressed(keys::ESCAPE);
        assert_eq!(
            queue.drain(),
            vec![
                key(keys::ARROW_UP, true),
                key(keys::ARROW_UP, false),
                key(keys::ESCAPE, true),
            ]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn repeated_press_while_held_is_suppressed() {
        let (tx, mut queue) = input_channel(16);
        tx.key_pressed(keys::ARROW_DOWN);
        tx.key_pressed(keys::ARROW_DOWN);
        assert_eq!(queue.drain(), vec![key(keys::ARROW_DOWN, true)]);
        assert!(queue.is_held(keys::ARROW_DOWN));

        tx.key_pressed(keys::ARROW_DOWN);
        assert!(queue.drain().is_empty());

        tx.key_released(keys::ARROW_DOWN);
        tx.key_pressed(keys::ARROW_DOWN);
        assert_eq!(
            queue.drain(),
            vec![key(keys::ARROW_DOWN, false), key(keys::ARROW_DOWN, true)]
        );
    }

    #[test]
    fn full_queue_drops_event() {
        let (tx, mut queue) = input_channel(1);
        assert!(tx.key_pressed(keys::L));
        assert!(!tx.key_pressed(keys::I));
        assert_eq!(queue.drain(), vec![key(keys::L, true)]);
    }

    #[test]
    fn click_queues_press_and_release() {
        let (tx, mut queue) = input_channel(4);
        assert!(tx.click(5, 6, MouseButton::Primary));
        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            InputEvent::Mouse {
                x: 5,
                y: 6,
                pressed: true,
                ..
            }
        ));
    }

    #[test]
    fn closed_sender_side_is_not_an_error() {
        let (tx, mut queue) = input_channel(4);
        drop(tx);
        assert!(queue.drain().is_empty());
    }
}

//! Blocking terminal reader running on its own thread.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event;
use tokio::sync::mpsc::UnboundedSender;

use crate::map::{classify, KeyInput};
use crate::types::GameAction;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Forward mapped key presses to `tx` until the player quits, the receiver
/// goes away, or the terminal fails. Returning drops `tx`, which closes the
/// action stream on the driver side.
pub fn spawn_reader(tx: UnboundedSender<GameAction>) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || loop {
        if tx.is_closed() {
            return Ok(());
        }
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match classify(&event::read()?) {
            KeyInput::Action(action) => {
                if tx.send(action).is_err() {
                    return Ok(());
                }
            }
            KeyInput::Quit => return Ok(()),
            KeyInput::Ignored => {}
        }
    })
}

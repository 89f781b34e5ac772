use crossterm::event::{read, Event, KeyCode};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// A struct for managing keypresses that automatically
/// starts a thread that grabs key events from the terminal.
pub struct KeyManager {
    stop: Arc<Mutex<bool>>,
    receiver: Receiver<KeyCode>,
    _event_listener: JoinHandle<()>,
}

impl KeyManager {
    // Start event listener thread
    pub fn new() -> KeyManager {
        let (sender, receiver) = channel();
        let stop = Arc::new(Mutex::new(false));
        let event_listener = event_listener(sender, stop.clone());
        KeyManager {
            stop,
            receiver,
            _event_listener: event_listener,
        }
    }

    /// The key presses received since the last call.
    pub fn drain(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.receiver.try_iter()
    }
}

impl Drop for KeyManager {
    fn drop(&mut self) {
        // Tell the event listener to stop
        *self.stop.lock().unwrap() = true;
    }
}

/// Starts a thread that listens for key events and sends them over a channel.
fn event_listener(sender: Sender<KeyCode>, stop: Arc<Mutex<bool>>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match read() {
            Ok(event) => event,
            Err(_) => break,
        };
        log::trace!("Got event {:?}", event);

        // Check the shared data, and possibly stop
        if *stop.lock().unwrap() {
            break;
        }

        if let Event::Key(key_event) = event {
            if sender.send(key_event.code).is_err() {
                break;
            }
        }
    })
}

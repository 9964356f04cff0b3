use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::devices::CommandPort;

/// Command lines from stdin. A background thread blocks on the read side and
/// feeds a channel, so the engine's poll stays non-blocking.
pub struct StdinPort {
    receiver: Receiver<String>,
}

impl StdinPort {
    pub fn new() -> Result<StdinPort, String> {
        let (sender, receiver) = mpsc::channel();

        let res = thread::Builder::new()
            .name("CommandPort".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    match line {
                        Ok(line) => {
                            if sender.send(line).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            log::warn!("Failed to read command input: {err}");
                            break;
                        }
                    }
                }
            });
        if let Err(error) = res {
            return Err(format!("Failed to create thread: {}", error));
        }

        Ok(StdinPort { receiver })
    }
}

impl CommandPort for StdinPort {
    fn poll_line(&mut self) -> Option<String> {
        match self.receiver.try_recv() {
            Ok(line) => Some(line),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

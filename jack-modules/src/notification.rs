//! # Notification
//!
//! JACK notification handler which allows to block thread until client is shut down and learn
//! the status the server gave.
use crossbeam_channel::{bounded, Receiver, Sender};

pub struct Notification {
    shutdown: Sender<jack::ClientStatus>,
}

impl Notification {
    /// Create new notification handler and return receiver which blocks until client is shut down.
    pub fn new() -> (Self, Receiver<jack::ClientStatus>) {
        let (tx, rx) = bounded(1);
        (Notification { shutdown: tx }, rx)
    }

    fn shut_down(&mut self, status: jack::ClientStatus) {
        // Only the first shutdown matters, and nobody may be waiting anymore.
        let _ = self.shutdown.try_send(status);
    }
}

impl jack::NotificationHandler for Notification {
    // Runs like a signal handler: no allocation, so the reason string is not kept.
    unsafe fn shutdown(&mut self, status: jack::ClientStatus, _reason: &str) {
        self.shut_down(status);
    }
}

//! Tap queue between the UI side and the game loop
//!
//! Uses crossbeam-channel so taps can be submitted from any thread without
//! blocking. The loop drains the queue at the start of each frame, which
//! keeps every mutation of the bird set on the loop's own task.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::util::vec2::Vec2;

/// A player tap in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub point: Vec2,
}

impl Tap {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            point: Vec2::new(x, y),
        }
    }
}

/// Bounded tap queue
pub struct TapBuffer {
    sender: Sender<Tap>,
    receiver: Receiver<Tap>,
    capacity: usize,
}

impl TapBuffer {
    /// Create a new tap buffer with given capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Handle for a producer (UI thread, autoplayer)
    pub fn sender(&self) -> TapSender {
        TapSender {
            sender: self.sender.clone(),
        }
    }

    /// Try to submit a tap (non-blocking). False if the queue is full.
    #[inline]
    pub fn try_submit(&self, tap: Tap) -> bool {
        self.sender.try_send(tap).is_ok()
    }

    /// Drain all pending taps for this frame, oldest first
    pub fn drain(&self) -> Vec<Tap> {
        self.receiver.try_iter().collect()
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Clonable sender handle
#[derive(Clone)]
pub struct TapSender {
    sender: Sender<Tap>,
}

impl TapSender {
    /// Try to submit a tap (non-blocking)
    ///
    /// Returns Err with the tap if the queue is full or the loop is gone
    pub fn try_submit(&self, tap: Tap) -> Result<(), Tap> {
        self.sender.try_send(tap).map_err(|e| match e {
            TrySendError::Full(t) | TrySendError::Disconnected(t) => t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_drain() {
        let buffer = TapBuffer::new(8);

        assert!(buffer.try_submit(Tap::at(1.0, 2.0)));
        assert!(buffer.try_submit(Tap::at(3.0, 4.0)));
        assert_eq!(buffer.pending_count(), 2);

        let taps = buffer.drain();
        assert_eq!(taps, vec![Tap::at(1.0, 2.0), Tap::at(3.0, 4.0)]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_full_buffer_rejects() {
        let buffer = TapBuffer::new(2);
        assert!(buffer.try_submit(Tap::at(0.0, 0.0)));
        assert!(buffer.try_submit(Tap::at(0.0, 0.0)));
        assert!(!buffer.try_submit(Tap::at(0.0, 0.0)));
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn test_sender_from_other_thread() {
        let buffer = TapBuffer::new(100);
        let sender = buffer.sender();

        let handle = std::thread::spawn(move || {
            for i in 0..10 {
                sender.try_submit(Tap::at(i as f32, 0.0)).unwrap();
            }
        });
        handle.join().unwrap();

        let taps = buffer.drain();
        assert_eq!(taps.len(), 10);
        assert_eq!(taps[9], Tap::at(9.0, 0.0));
    }

    #[test]
    fn test_sender_reports_full() {
        let buffer = TapBuffer::new(1);
        let sender = buffer.sender();
        assert!(sender.try_submit(Tap::at(1.0, 1.0)).is_ok());
        assert_eq!(sender.try_submit(Tap::at(2.0, 2.0)), Err(Tap::at(2.0, 2.0)));
    }
}

//! Single-shot, cancellable expiry for a held value.
//!
//! An [`UndoWindow`] keeps one payload alive until a deadline. The owner either takes
//! the payload back before the deadline ([`UndoWindow::take`]) or lets it lapse, at
//! which point [`UndoWindow::fire_due`] discards it. Nothing runs in the background:
//! callers pass the current `Instant` and can sleep until [`UndoWindow::next_deadline`].

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Armed<T> {
    payload: T,
    deadline: Instant,
}

#[derive(Debug)]
pub struct UndoWindow<T> {
    window: Duration,
    armed: Option<Armed<T>>,
}

impl<T> UndoWindow<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Hold `payload` until `now + window`. Any payload already held is cancelled and
    /// returned.
    pub fn arm(&mut self, payload: T, now: Instant) -> Option<T> {
        let deadline = now + self.window;
        self.armed
            .replace(Armed { payload, deadline })
            .map(|prev| prev.payload)
    }

    /// Cancel without using the payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.armed.take().map(|a| a.payload)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.as_ref().map(|a| a.deadline)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.armed.as_ref().is_some_and(|a| now >= a.deadline)
    }

    /// Discard the payload if its deadline has passed. Returns the discarded payload.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        if self.is_due(now) {
            self.cancel()
        } else {
            None
        }
    }

    /// Whether a payload is held and still within its window.
    pub fn is_pending(&self, now: Instant) -> bool {
        self.armed.is_some() && !self.is_due(now)
    }

    /// Take the payload if still within its window. An expired payload is discarded.
    pub fn take(&mut self, now: Instant) -> Option<T> {
        self.fire_due(now);
        self.cancel()
    }

    pub fn peek(&self) -> Option<&T> {
        self.armed.as_ref().map(|a| &a.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(5);

    #[test]
    fn take_within_window_returns_payload_once() {
        let t0 = Instant::now();
        let mut w = UndoWindow::new(WINDOW);
        w.arm("x", t0);

        assert!(w.is_pending(t0 + Duration::from_secs(4)));
        assert_eq!(w.take(t0 + Duration::from_secs(4)), Some("x"));
        assert_eq!(w.take(t0 + Duration::from_secs(4)), None);
        assert_eq!(w.next_deadline(), None);
    }

    #[test]
    fn expires_at_deadline() {
        let t0 = Instant::now();
        let mut w = UndoWindow::new(WINDOW);
        w.arm("x", t0);

        assert!(!w.is_due(t0 + Duration::from_millis(4999)));
        assert!(w.is_due(t0 + WINDOW));
        assert_eq!(w.take(t0 + WINDOW), None);
    }

    #[test]
    fn fire_due_only_discards_after_deadline() {
        let t0 = Instant::now();
        let mut w = UndoWindow::new(WINDOW);
        w.arm(1, t0);

        assert_eq!(w.fire_due(t0 + Duration::from_secs(1)), None);
        assert_eq!(w.peek(), Some(&1));
        assert_eq!(w.fire_due(t0 + Duration::from_secs(6)), Some(1));
        assert_eq!(w.peek(), None);
    }

    #[test]
    fn rearming_replaces_payload_and_deadline() {
        let t0 = Instant::now();
        let mut w = UndoWindow::new(WINDOW);
        w.arm("first", t0);

        let t1 = t0 + Duration::from_secs(3);
        assert_eq!(w.arm("second", t1), Some("first"));
        assert_eq!(w.next_deadline(), Some(t1 + WINDOW));

        // The first deadline no longer applies.
        assert!(w.is_pending(t0 + Duration::from_secs(6)));
        assert_eq!(w.take(t0 + Duration::from_secs(6)), Some("second"));
    }

    #[test]
    fn cancel_clears_without_waiting() {
        let t0 = Instant::now();
        let mut w = UndoWindow::new(WINDOW);
        w.arm("x", t0);
        assert_eq!(w.cancel(), Some("x"));
        assert!(!w.is_pending(t0));
    }
}

//! Navigation key coalescing.
//!
//! Holding an arrow key floods the event queue, and every navigation step
//! redraws a full image. The throttle keeps only the latest navigation
//! action and releases at most one per interval. Quit is never delayed.

use crate::types::ViewerAction;

#[derive(Debug, Clone)]
pub struct KeyThrottle {
    interval_ms: u64,
    pending: Option<ViewerAction>,
    last_emit_ms: Option<u64>,
}

impl KeyThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            pending: None,
            last_emit_ms: None,
        }
    }

    /// Queue an action. Returns it straight back if it must not wait (quit).
    pub fn push(&mut self, action: ViewerAction) -> Option<ViewerAction> {
        if action.is_quit() {
            self.pending = None;
            return Some(action);
        }
        self.pending = Some(action);
        None
    }

    /// Release the pending action if the interval has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<ViewerAction> {
        if self.pending.is_none() || !self.ready(now_ms) {
            return None;
        }
        self.last_emit_ms = Some(now_ms);
        self.pending.take()
    }

    /// Milliseconds until a pending action can be released.
    pub fn time_until_ready(&self, now_ms: u64) -> Option<u64> {
        self.pending?;
        match self.last_emit_ms {
            Some(last) => Some((last + self.interval_ms).saturating_sub(now_ms)),
            None => Some(0),
        }
    }

    fn ready(&self, now_ms: u64) -> bool {
        match self.last_emit_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_action_is_released_immediately() {
        let mut t = KeyThrottle::new(333);
        assert_eq!(t.push(ViewerAction::Next), None);
        assert_eq!(t.time_until_ready(0), Some(0));
        assert_eq!(t.poll(0), Some(ViewerAction::Next));
        assert_eq!(t.poll(1), None);
    }

    #[test]
    fn latest_action_wins_within_interval() {
        let mut t = KeyThrottle::new(333);
        t.push(ViewerAction::Next);
        assert_eq!(t.poll(0), Some(ViewerAction::Next));

        t.push(ViewerAction::Next);
        t.push(ViewerAction::Prev);
        assert_eq!(t.poll(100), None);
        assert_eq!(t.time_until_ready(100), Some(233));
        assert_eq!(t.poll(333), Some(ViewerAction::Prev));
        assert_eq!(t.time_until_ready(400), None);
    }

    #[test]
    fn quit_bypasses_the_interval() {
        let mut t = KeyThrottle::new(333);
        t.push(ViewerAction::Next);
        t.poll(0);
        t.push(ViewerAction::Prev);
        assert_eq!(t.push(ViewerAction::Quit), Some(ViewerAction::Quit));
        assert_eq!(t.poll(1000), None);
    }
}

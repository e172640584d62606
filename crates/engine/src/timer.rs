//! Fixed-interval gravity timer.

use std::time::{Duration, Instant};

/// Deadline-based periodic timer that can be cancelled once.
#[derive(Debug, Clone)]
pub struct GravityTimer {
    interval: Duration,
    deadline: Instant,
    cancelled: bool,
}

impl GravityTimer {
    /// Start a timer whose first deadline is one interval after `now`.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
            cancelled: false,
        }
    }

    /// Next deadline, `None` once cancelled.
    pub fn deadline(&self) -> Option<Instant> {
        (!self.cancelled).then_some(self.deadline)
    }

    /// Time left until the deadline (zero if overdue), `None` once cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|d| d.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.deadline
    }

    /// Move the deadline one interval past `now`.
    pub fn reschedule(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop the timer. Returns true only for the call that actually cancelled it.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_after_one_interval() {
        let t0 = Instant::now();
        let timer = GravityTimer::start(Duration::from_millis(500), t0);
        assert!(!timer.is_due(t0));
        assert!(!timer.is_due(t0 + Duration::from_millis(499)));
        assert!(timer.is_due(t0 + Duration::from_millis(500)));
        assert_eq!(
            timer.remaining(t0 + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(
            timer.remaining(t0 + Duration::from_secs(2)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn reschedule_moves_deadline() {
        let t0 = Instant::now();
        let mut timer = GravityTimer::start(Duration::from_millis(10), t0);
        let later = t0 + Duration::from_millis(15);
        timer.reschedule(later);
        assert_eq!(timer.deadline(), Some(later + Duration::from_millis(10)));
    }

    #[test]
    fn cancel_only_once() {
        let t0 = Instant::now();
        let mut timer = GravityTimer::start(Duration::from_millis(10), t0);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(timer.is_cancelled());
        assert!(!timer.is_due(t0 + Duration::from_secs(1)));
        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.remaining(t0), None);
    }
}

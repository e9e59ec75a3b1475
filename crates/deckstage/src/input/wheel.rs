use std::time::{Duration, Instant};

use crate::scheduler::{Scheduler, TaskHandle};

use super::Intent;

pub const WHEEL_DEBOUNCE: Duration = Duration::from_millis(50);

/// Collapses a burst of wheel events into one navigation intent.
///
/// Every event restarts the timer, so the intent fires `delay` after the last
/// event of a burst and follows that event's direction.
pub struct WheelDebouncer {
    delay: Duration,
    timers: Scheduler<Intent>,
    pending: Option<TaskHandle>,
}

impl Default for WheelDebouncer {
    fn default() -> Self {
        Self::new(WHEEL_DEBOUNCE)
    }
}

impl WheelDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: Scheduler::new(),
            pending: None,
        }
    }

    /// Record a wheel event. `delta_y` uses page convention: positive scrolls down.
    pub fn on_wheel(&mut self, delta_y: f32, now: Instant) {
        if delta_y == 0.0 || delta_y.is_nan() {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
        let intent = if delta_y > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        };
        self.pending = Some(self.timers.schedule_after(now, self.delay, intent));
    }

    /// Returns the settled intent once the debounce window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Intent> {
        let fired = self.timers.drain_due(now).pop();
        if fired.is_some() {
            self.pending = None;
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.timers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_single_event_fires_after_delay() {
        let t0 = Instant::now();
        let mut wheel = WheelDebouncer::default();
        wheel.on_wheel(3.0, t0);
        assert_eq!(wheel.poll(t0 + ms(49)), None);
        assert_eq!(wheel.poll(t0 + ms(50)), Some(Intent::Advance));
        assert_eq!(wheel.poll(t0 + ms(200)), None);
    }

    #[test]
    fn test_burst_collapses_to_last_direction() {
        let t0 = Instant::now();
        let mut wheel = WheelDebouncer::default();
        wheel.on_wheel(4.0, t0);
        wheel.on_wheel(2.0, t0 + ms(20));
        assert_eq!(wheel.poll(t0 + ms(60)), None, "timer restarted at 20ms");
        wheel.on_wheel(-1.0, t0 + ms(65));
        assert_eq!(wheel.poll(t0 + ms(100)), None);
        assert_eq!(wheel.poll(t0 + ms(115)), Some(Intent::Retreat));
        assert_eq!(wheel.poll(t0 + ms(500)), None, "burst produced one intent");
    }

    #[test]
    fn test_zero_delta_is_ignored() {
        let t0 = Instant::now();
        let mut wheel = WheelDebouncer::default();
        wheel.on_wheel(0.0, t0);
        assert_eq!(wheel.next_deadline(), None);
        wheel.on_wheel(-2.0, t0);
        wheel.on_wheel(0.0, t0 + ms(40));
        assert_eq!(wheel.poll(t0 + ms(50)), Some(Intent::Retreat));
    }

    #[test]
    fn test_cancel_drops_pending_intent() {
        let t0 = Instant::now();
        let mut wheel = WheelDebouncer::default();
        wheel.on_wheel(1.0, t0);
        wheel.cancel();
        assert_eq!(wheel.poll(t0 + ms(100)), None);
    }
}

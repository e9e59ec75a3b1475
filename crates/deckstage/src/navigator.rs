//! Slide navigation: the current index, the transition lock, and the
//! indicators derived from them.

use std::time::{Duration, Instant};

use crate::input::Intent;
use crate::scheduler::{Scheduler, TaskHandle};

/// How long a slide change holds the lock. Matches the visual transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(900);

/// Opacity of an arrow control at the edge of the deck.
pub const DISABLED_ARROW_OPACITY: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowState {
    pub enabled: bool,
    pub opacity: f32,
}

impl ArrowState {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            opacity: if enabled { 1.0 } else { DISABLED_ARROW_OPACITY },
        }
    }
}

/// Everything the chrome shows about the current position.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicators {
    /// Progress bar fill, 0..=100.
    pub progress_percent: f32,
    /// 1-based slide number, zero-padded to two digits.
    pub counter: String,
    /// One entry per slide; exactly one is `true`.
    pub dots: Vec<bool>,
    pub prev: ArrowState,
    pub next: ArrowState,
}

impl Indicators {
    fn compute(current: usize, slide_count: usize) -> Self {
        Self {
            progress_percent: (current + 1) as f32 / slide_count as f32 * 100.0,
            counter: format!("{:02}", current + 1),
            dots: (0..slide_count).map(|i| i == current).collect(),
            prev: ArrowState::new(current > 0),
            next: ArrowState::new(current + 1 < slide_count),
        }
    }

    #[allow(dead_code)]
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|&active| active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transitioning {
        from: usize,
        started: Instant,
        unlock: TaskHandle,
    },
}

/// Marker task for the lock release.
struct Unlock;

pub struct Navigator {
    slide_count: usize,
    current: usize,
    phase: Phase,
    transition: Duration,
    timers: Scheduler<Unlock>,
    indicators: Indicators,
}

impl Navigator {
    #[allow(dead_code)]
    pub fn new(slide_count: usize) -> anyhow::Result<Self> {
        Self::with_start(slide_count, 0)
    }

    /// Open the deck on `start`, clamped to the last slide, without a transition.
    pub fn with_start(slide_count: usize, start: usize) -> anyhow::Result<Self> {
        if slide_count == 0 {
            anyhow::bail!("Cannot navigate an empty deck");
        }
        let current = start.min(slide_count - 1);
        Ok(Self {
            slide_count,
            current,
            phase: Phase::Idle,
            transition: TRANSITION_DURATION,
            timers: Scheduler::new(),
            indicators: Indicators::compute(current, slide_count),
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    /// Move to `index`. Returns `false` (and changes nothing) while a
    /// transition is in flight, for the current index, or out of range.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if self.is_transitioning() {
            log::trace!("navigation to {index} dropped: transition in flight");
            return false;
        }
        if index == self.current || index >= self.slide_count {
            return false;
        }

        let from = self.current;
        self.current = index;
        self.indicators = Indicators::compute(self.current, self.slide_count);

        let unlock = self.timers.schedule_after(now, self.transition, Unlock);
        self.phase = Phase::Transitioning {
            from,
            started: now,
            unlock,
        };
        log::debug!("slide {} -> {}", from + 1, index + 1);
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if self.current + 1 >= self.slide_count {
            return false;
        }
        self.go_to(self.current + 1, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        self.go_to(self.current - 1, now)
    }

    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> bool {
        match intent {
            Intent::Advance => self.next(now),
            Intent::Retreat => self.prev(now),
            Intent::JumpTo(index) => self.go_to(index, now),
            Intent::First => self.go_to(0, now),
            Intent::Last => self.go_to(self.slide_count - 1, now),
        }
    }

    /// Release the lock once its timer is due.
    pub fn tick(&mut self, now: Instant) {
        if self.timers.drain_due(now).is_empty() {
            return;
        }
        if self.is_transitioning() {
            self.phase = Phase::Idle;
            log::trace!("transition to slide {} settled", self.current + 1);
        }
    }

    /// `(from, to, t)` with `t` in `0..=1` while a transition is in flight.
    pub fn transition_progress(&self, now: Instant) -> Option<(usize, usize, f32)> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { from, started, .. } => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                let t = (elapsed / self.transition.as_secs_f32()).clamp(0.0, 1.0);
                Some((from, self.current, t))
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancel the pending unlock and return to idle.
    pub fn shutdown(&mut self) {
        if let Phase::Transitioning { unlock, .. } = self.phase {
            self.timers.cancel(unlock);
        }
        self.timers.clear();
        self.phase = Phase::Idle;
    }
}

use eframe::egui::{Pos2, TouchId, TouchPhase};

use super::Intent;

/// Minimum travel, in points, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Classify a finished swipe.
///
/// `dx` and `dy` are measured start minus end, so a finger moving left or
/// up gives positive values. Horizontal wins when it is the dominant axis and
/// crosses the threshold; otherwise a vertical swipe past the threshold
/// counts. Swiping up advances.
pub fn classify(dx: f32, dy: f32) -> Option<Intent> {
    let direction = |d: f32| {
        if d > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        }
    };

    if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD {
        Some(direction(dx))
    } else if dy.abs() > SWIPE_THRESHOLD {
        Some(direction(dy))
    } else {
        None
    }
}

/// Follows one touch from start to end.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    active: Option<(TouchId, Pos2)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a touch event. Returns an intent when a tracked touch ends as a swipe.
    pub fn on_touch(&mut self, id: TouchId, phase: TouchPhase, pos: Pos2) -> Option<Intent> {
        match phase {
            TouchPhase::Start => {
                if self.active.is_none() {
                    self.active = Some((id, pos));
                }
                None
            }
            TouchPhase::Move => None,
            TouchPhase::End => match self.active {
                Some((tracked, start)) if tracked == id => {
                    self.active = None;
                    classify(start.x - pos.x, start.y - pos.y)
                }
                _ => None,
            },
            TouchPhase::Cancel => {
                if self.active.is_some_and(|(tracked, _)| tracked == id) {
                    self.active = None;
                }
                None
            }
        }
    }

    #[allow(dead_code)]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(classify(60.0, 5.0), Some(Intent::Advance));
        assert_eq!(classify(-60.0, 5.0), Some(Intent::Retreat));
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        assert_eq!(classify(30.0, 5.0), None);
        assert_eq!(classify(50.0, 0.0), None, "threshold is exclusive");
        assert_eq!(classify(-20.0, 40.0), None);
    }

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(classify(5.0, 80.0), Some(Intent::Advance));
        assert_eq!(classify(5.0, -80.0), Some(Intent::Retreat));
    }

    #[test]
    fn test_diagonal_falls_back_to_vertical() {
        // dominant axis is vertical, so horizontal is never considered
        assert_eq!(classify(-55.0, 70.0), Some(Intent::Advance));
        // equal travel is not horizontal-dominant
        assert_eq!(classify(60.0, -60.0), Some(Intent::Retreat));
    }

    #[test]
    fn test_tracker_reports_swipe_on_end() {
        let mut tracker = SwipeTracker::new();
        let id = TouchId(1);
        assert_eq!(tracker.on_touch(id, TouchPhase::Start, pos2(300.0, 200.0)), None);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.on_touch(id, TouchPhase::Move, pos2(270.0, 200.0)), None);
        assert_eq!(
            tracker.on_touch(id, TouchPhase::End, pos2(240.0, 195.0)),
            Some(Intent::Advance)
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_tracker_ignores_other_touches() {
        let mut tracker = SwipeTracker::new();
        tracker.on_touch(TouchId(1), TouchPhase::Start, pos2(100.0, 100.0));
        tracker.on_touch(TouchId(2), TouchPhase::Start, pos2(500.0, 100.0));
        assert_eq!(
            tracker.on_touch(TouchId(2), TouchPhase::End, pos2(100.0, 100.0)),
            None
        );
        assert_eq!(
            tracker.on_touch(TouchId(1), TouchPhase::End, pos2(200.0, 100.0)),
            Some(Intent::Retreat)
        );
    }

    #[test]
    fn test_cancel_drops_touch() {
        let mut tracker = SwipeTracker::new();
        let id = TouchId(7);
        tracker.on_touch(id, TouchPhase::Start, pos2(0.0, 300.0));
        tracker.on_touch(id, TouchPhase::Cancel, pos2(0.0, 300.0));
        assert_eq!(tracker.on_touch(id, TouchPhase::End, pos2(0.0, 100.0)), None);
    }
}

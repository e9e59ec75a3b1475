/// Length of the volume fade at the end of a media segment, in seconds.
pub const FADE_WINDOW: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Ended,
}

/// Playback clock for a slide's timed media segment.
///
/// Volume fades out linearly over the last [`FADE_WINDOW`] seconds and comes
/// back to full when playback restarts from before that window. Reaching the
/// end reports [`MediaEvent::Ended`] once.
#[derive(Debug, Clone)]
pub struct MediaPlayback {
    duration: f32,
    position: f32,
    volume: f32,
    playing: bool,
}

impl MediaPlayback {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            position: 0.0,
            volume: 1.0,
            playing: false,
        }
    }

    fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Fraction of the segment played, 0..=1.
    pub fn progress(&self) -> f32 {
        if self.has_duration() {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn play(&mut self) {
        if !self.has_duration() {
            return;
        }
        if self.position >= self.duration {
            self.position = 0.0;
        }
        if self.position < self.duration - FADE_WINDOW {
            self.volume = 1.0;
        }
        self.playing = true;
        log::debug!(
            "media playing from {:.1}s of {:.1}s",
            self.position,
            self.duration
        );
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move the playhead to `position` seconds, as a user scrub would.
    pub fn seek(&mut self, position: f32) {
        if !self.has_duration() {
            return;
        }
        self.position = position.clamp(0.0, self.duration);
        self.update_volume();
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Option<MediaEvent> {
        if !self.playing || !self.has_duration() {
            return None;
        }
        self.position = (self.position + dt.max(0.0)).min(self.duration);
        self.update_volume();
        if self.position >= self.duration {
            self.playing = false;
            log::debug!("media ended");
            return Some(MediaEvent::Ended);
        }
        None
    }

    fn update_volume(&mut self) {
        let time_left = self.duration - self.position;
        if time_left <= FADE_WINDOW && time_left > 0.0 {
            self.volume = (time_left / FADE_WINDOW).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_full_volume_before_fade_window() {
        let mut media = MediaPlayback::new(10.0);
        media.play();
        assert_eq!(media.advance(7.0), None);
        assert_close(media.volume(), 1.0);
    }

    #[test]
    fn test_linear_fade_in_last_seconds() {
        let mut media = MediaPlayback::new(10.0);
        media.play();
        media.advance(8.0);
        assert_close(media.volume(), 0.8);
        media.advance(0.75);
        assert_close(media.volume(), 0.5);
        media.advance(1.0);
        assert_close(media.volume(), 0.1);
    }

    #[test]
    fn test_end_reports_once_and_stops() {
        let mut media = MediaPlayback::new(3.0);
        media.play();
        assert_eq!(media.advance(2.0), None);
        assert_eq!(media.advance(2.0), Some(MediaEvent::Ended));
        assert!(!media.is_playing());
        assert_eq!(media.advance(1.0), None);
        assert_close(media.progress(), 1.0);
    }

    #[test]
    fn test_replay_resets_volume() {
        let mut media = MediaPlayback::new(10.0);
        media.play();
        media.advance(9.0);
        assert_close(media.volume(), 0.4);

        media.pause();
        media.seek(2.0);
        media.play();
        assert_close(media.volume(), 1.0);
    }

    #[test]
    fn test_replay_after_end_restarts() {
        let mut media = MediaPlayback::new(4.0);
        media.play();
        media.advance(10.0);
        media.play();
        assert!(media.is_playing());
        assert_close(media.position(), 0.0);
        assert_close(media.volume(), 1.0);
    }

    #[test]
    fn test_resume_inside_fade_window_keeps_volume() {
        let mut media = MediaPlayback::new(10.0);
        media.play();
        media.advance(9.0);
        media.pause();
        media.play();
        assert_close(media.volume(), 0.4);
    }

    #[test]
    fn test_invalid_duration_never_plays() {
        for duration in [0.0, -1.0, f32::NAN] {
            let mut media = MediaPlayback::new(duration);
            media.play();
            assert!(!media.is_playing());
            assert_eq!(media.advance(1.0), None);
            assert_close(media.volume(), 1.0);
        }
    }

    #[test]
    fn test_paused_media_does_not_move() {
        let mut media = MediaPlayback::new(5.0);
        assert_eq!(media.advance(1.0), None);
        assert_close(media.position(), 0.0);
        media.toggle();
        media.advance(1.0);
        media.toggle();
        media.advance(1.0);
        assert_close(media.position(), 1.0);
    }
}

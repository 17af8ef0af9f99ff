/// Seconds jumped by the rewind and forward buttons.
pub const SKIP_SECONDS: f64 = 10.0;

/// Join the API base URL and a server-relative narration path.
#[must_use]
pub fn audio_url(api_base: &str, voice_file: &str) -> String {
    let base = api_base.trim_end_matches('/');
    let path = voice_file.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Format seconds as `m:ss`. Non-finite or negative input shows `0:00`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        // Truncation matches a media clock display.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            seconds.floor() as u64
        }
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Playback position of the narration element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudioClock {
    pub current: f64,
    pub duration: f64,
}

impl AudioClock {
    #[must_use]
    pub const fn new(current: f64, duration: f64) -> Self {
        Self { current, duration }
    }

    /// Duration is unknown until the element has loaded metadata.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.has_duration() {
            (self.current / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn rewound(&self) -> f64 {
        (self.current - SKIP_SECONDS).max(0.0)
    }

    #[must_use]
    pub fn forwarded(&self) -> f64 {
        let target = self.current + SKIP_SECONDS;
        if self.has_duration() {
            target.min(self.duration)
        } else {
            target
        }
    }

    /// Position for a click at `offset` pixels into a bar `width` pixels wide.
    #[must_use]
    pub fn seek_target(&self, offset: f64, width: f64) -> Option<f64> {
        if !self.has_duration() || width <= 0.0 {
            return None;
        }
        Some((offset / width).clamp(0.0, 1.0) * self.duration)
    }

    #[must_use]
    pub fn current_label(&self) -> String {
        format_time(self.current)
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }
}

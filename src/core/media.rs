//! Playback state for hover previews and the showreel player
//!
//! The state here never touches a media element. Input handlers return a
//! [`MediaCommand`] that the component applies to its `<video>`, and the element's
//! native events flow back in through the `on_*` methods.

use derive_more::Display;

/// How the visitor points at things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    /// Fine pointer with hover (mouse, trackpad)
    #[default]
    Hover,
    /// Touch-only device, no hover
    Touch,
}

impl PointerMode {
    /// From the result of the `(hover: hover)` media query
    pub fn detect(can_hover: bool) -> Self {
        if can_hover {
            PointerMode::Hover
        } else {
            PointerMode::Touch
        }
    }
}

/// Speeds offered by the showreel rate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PlaybackRate {
    #[display("0.5×")]
    Half,
    #[default]
    #[display("1×")]
    Normal,
    #[display("1.5×")]
    OneAndHalf,
    #[display("2×")]
    Double,
}

impl PlaybackRate {
    pub fn as_f64(&self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Next speed, wrapping after 2×
    pub fn next(&self) -> Self {
        match self {
            PlaybackRate::Half => PlaybackRate::Normal,
            PlaybackRate::Normal => PlaybackRate::OneAndHalf,
            PlaybackRate::OneAndHalf => PlaybackRate::Double,
            PlaybackRate::Double => PlaybackRate::Half,
        }
    }
}

/// What the component should do to its media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    /// Pause and jump back to the first frame
    Rewind,
    Seek(f64),
    SetMuted(bool),
    SetRate(f64),
    Fullscreen,
}

/// Seconds skipped by the arrow keys
pub const SEEK_STEP_SECS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    mode: PointerMode,
    playing: bool,
    muted: bool,
    position: f64,
    duration: f64,
    rate: PlaybackRate,
}

impl Playback {
    pub fn new(mode: PointerMode, muted: bool) -> Self {
        Self {
            mode,
            playing: false,
            muted,
            position: 0.0,
            duration: 0.0,
            rate: PlaybackRate::Normal,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PointerMode) {
        self.mode = mode;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    /// Played fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn pointer_enter(&mut self) -> Option<MediaCommand> {
        match self.mode {
            PointerMode::Hover if !self.playing => Some(MediaCommand::Play),
            _ => None,
        }
    }

    pub fn pointer_leave(&mut self) -> Option<MediaCommand> {
        match self.mode {
            PointerMode::Hover => {
                self.playing = false;
                self.position = 0.0;
                Some(MediaCommand::Rewind)
            }
            PointerMode::Touch => None,
        }
    }

    /// Touch devices toggle on tap; with a hover pointer taps are left to links.
    pub fn tap(&mut self) -> Option<MediaCommand> {
        match self.mode {
            PointerMode::Touch => Some(self.toggle()),
            PointerMode::Hover => None,
        }
    }

    pub fn toggle(&mut self) -> MediaCommand {
        if self.playing {
            MediaCommand::Pause
        } else {
            MediaCommand::Play
        }
    }

    pub fn toggle_mute(&mut self) -> MediaCommand {
        self.muted = !self.muted;
        MediaCommand::SetMuted(self.muted)
    }

    pub fn cycle_rate(&mut self) -> MediaCommand {
        self.rate = self.rate.next();
        MediaCommand::SetRate(self.rate.as_f64())
    }

    /// Seek to a fraction of the duration (progress bar click)
    pub fn seek_fraction(&mut self, fraction: f64) -> MediaCommand {
        let target = fraction.clamp(0.0, 1.0) * self.duration;
        self.position = target;
        MediaCommand::Seek(target)
    }

    pub fn seek_by(&mut self, delta: f64) -> MediaCommand {
        let upper = if self.duration > 0.0 { self.duration } else { f64::MAX };
        let target = (self.position + delta).clamp(0.0, upper);
        self.position = target;
        MediaCommand::Seek(target)
    }

    /// Showreel keyboard shortcuts
    pub fn handle_key(&mut self, key: &str) -> Option<MediaCommand> {
        match key {
            " " | "k" | "K" => Some(self.toggle()),
            "m" | "M" => Some(self.toggle_mute()),
            "f" | "F" => Some(MediaCommand::Fullscreen),
            "ArrowRight" => Some(self.seek_by(SEEK_STEP_SECS)),
            "ArrowLeft" => Some(self.seek_by(-SEEK_STEP_SECS)),
            _ => None,
        }
    }

    /// Native `play` event
    pub fn on_play(&mut self) {
        self.playing = true;
    }

    /// Native `pause` / `ended` event
    pub fn on_pause(&mut self) {
        self.playing = false;
    }

    /// Native `timeupdate` / `loadedmetadata` event
    pub fn on_time_update(&mut self, position: f64, duration: f64) {
        if position.is_finite() {
            self.position = position.max(0.0);
        }
        if duration.is_finite() {
            self.duration = duration.max(0.0);
        }
    }

    /// `play()` promise rejected (autoplay policy and friends)
    pub fn on_play_rejected(&mut self) {
        self.playing = false;
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(PointerMode::Hover, true)
    }
}

/// `m:ss` (or `h:mm:ss` past an hour)
pub fn format_timestamp(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_plays_and_leave_rewinds() {
        let mut p = Playback::new(PointerMode::Hover, true);
        assert_eq!(p.pointer_enter(), Some(MediaCommand::Play));
        p.on_play();
        p.on_time_update(3.2, 10.0);
        assert_eq!(p.pointer_enter(), None);

        assert_eq!(p.pointer_leave(), Some(MediaCommand::Rewind));
        assert!(!p.is_playing());
        assert_eq!(p.position(), 0.0);
    }

    #[test]
    fn test_touch_ignores_hover_and_toggles_on_tap() {
        let mut p = Playback::new(PointerMode::detect(false), true);
        assert_eq!(p.mode(), PointerMode::Touch);
        assert_eq!(p.pointer_enter(), None);
        assert_eq!(p.pointer_leave(), None);

        assert_eq!(p.tap(), Some(MediaCommand::Play));
        p.on_play();
        assert_eq!(p.tap(), Some(MediaCommand::Pause));
    }

    #[test]
    fn test_tap_with_hover_pointer_does_nothing() {
        let mut p = Playback::default();
        assert_eq!(p.tap(), None);
    }

    #[test]
    fn test_rejected_play_resets_flag() {
        let mut p = Playback::default();
        p.on_play();
        p.on_play_rejected();
        assert!(!p.is_playing());
    }

    #[test]
    fn test_rate_cycles() {
        let mut p = Playback::default();
        assert_eq!(p.cycle_rate(), MediaCommand::SetRate(1.5));
        assert_eq!(p.cycle_rate(), MediaCommand::SetRate(2.0));
        assert_eq!(p.cycle_rate(), MediaCommand::SetRate(0.5));
        assert_eq!(p.rate().to_string(), "0.5×");
        assert_eq!(p.cycle_rate(), MediaCommand::SetRate(1.0));
    }

    #[test]
    fn test_seek_clamps() {
        let mut p = Playback::default();
        p.on_time_update(2.0, 60.0);
        assert_eq!(p.seek_by(-10.0), MediaCommand::Seek(0.0));
        assert_eq!(p.seek_fraction(1.5), MediaCommand::Seek(60.0));
        assert_eq!(p.seek_by(5.0), MediaCommand::Seek(60.0));
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut p = Playback::new(PointerMode::Hover, false);
        p.on_time_update(10.0, 100.0);
        assert_eq!(p.handle_key(" "), Some(MediaCommand::Play));
        assert_eq!(p.handle_key("m"), Some(MediaCommand::SetMuted(true)));
        assert_eq!(p.handle_key("ArrowRight"), Some(MediaCommand::Seek(15.0)));
        assert_eq!(p.handle_key("f"), Some(MediaCommand::Fullscreen));
        assert_eq!(p.handle_key("x"), None);
    }

    #[test]
    fn test_time_update_ignores_nan() {
        let mut p = Playback::default();
        p.on_time_update(f64::NAN, f64::NAN);
        assert_eq!(p.duration(), 0.0);
        assert_eq!(p.progress(), 0.0);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(7.9), "0:07");
        assert_eq!(format_timestamp(125.0), "2:05");
        assert_eq!(format_timestamp(3725.0), "1:02:05");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
    }
}

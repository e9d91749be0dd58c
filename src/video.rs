// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Video playback facade.
//!
//! Actual decoding is out of scope; the app talks to an abstract
//! [`PlayerBackend`] through [`VideoController`], which owns the logic
//! that would otherwise leak into the UI: deriving a platform video id
//! from a pasted URL, queuing a load requested before the backend is
//! ready (flushed exactly once on the ready event), and mapping numeric
//! player error codes to readable categories.

use std::time::Instant;
use url::Url;

/// Events surfaced by a player backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Ready,
    Error(i32),
}

/// Minimal control surface of an embeddable video player.
pub trait PlayerBackend {
    fn load(&mut self, video_id: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    fn set_muted(&mut self, muted: bool);
    fn muted(&self) -> bool;
    fn current_time(&self) -> f64;
    /// Drain pending events; called once per UI frame.
    fn tick(&mut self) -> Vec<PlayerEvent>;
}

/// Facade over a player backend.
pub struct VideoController<B> {
    backend: B,
    ready: bool,
    pending_load: Option<String>,
    last_error: Option<String>,
}

impl<B: PlayerBackend> VideoController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            ready: false,
            pending_load: None,
            last_error: None,
        }
    }

    /// Request a video load, queuing it until the backend is ready.
    pub fn request_load(&mut self, video_id: &str) {
        if video_id.is_empty() {
            return;
        }
        if self.ready {
            log::info!("Loading video {}", video_id);
            self.backend.load(video_id);
        } else {
            log::info!("Player not ready, queuing video {}", video_id);
            self.pending_load = Some(video_id.to_string());
        }
    }

    /// Poll the backend, handling ready and error events.
    ///
    /// Returns an error message for display if the player reported one
    /// this tick.
    pub fn poll(&mut self) -> Option<String> {
        let mut message = None;
        for event in self.backend.tick() {
            match event {
                PlayerEvent::Ready => {
                    self.ready = true;
                    if let Some(id) = self.pending_load.take() {
                        log::info!("Player ready, loading queued video {}", id);
                        self.backend.load(&id);
                    }
                }
                PlayerEvent::Error(code) => {
                    let text = format!("Player error: {}", describe_error(code));
                    log::error!("{} (code {})", text, code);
                    self.last_error = Some(text.clone());
                    message = Some(text);
                }
            }
        }
        message
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn play(&mut self) {
        self.backend.play();
    }

    pub fn pause(&mut self) {
        self.backend.pause();
    }

    pub fn seek(&mut self, seconds: f64) {
        self.backend.seek(seconds.max(0.0));
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.backend.muted();
        self.backend.set_muted(!muted);
    }

    pub fn muted(&self) -> bool {
        self.backend.muted()
    }

    /// Current playback position; 0.0 until the backend is ready.
    pub fn current_time(&self) -> f64 {
        if self.ready {
            self.backend.current_time()
        } else {
            0.0
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Map an embedded-player error code to a readable category.
pub fn describe_error(code: i32) -> &'static str {
    match code {
        2 => "invalid video parameter",
        5 => "playback error",
        100 => "video not found",
        101 | 150 => "embedding disallowed for this video",
        _ => "unknown error",
    }
}

/// Extract a platform video id from a pasted URL.
///
/// Recognized shapes: short-link hosts (`youtu.be/<id>`), a `v` query
/// parameter, and `/embed/<id>` paths. Anything else yields an empty
/// string, which callers surface as a user message.
pub fn extract_video_id(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw.trim()) else {
        return String::new();
    };

    let host = parsed.host_str().unwrap_or("");
    let mut segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if host.eq_ignore_ascii_case("youtu.be") {
        return segments.first().copied().unwrap_or("").to_string();
    }

    if let Some((_, id)) = parsed.query_pairs().find(|(k, _)| k == "v") {
        return id.into_owned();
    }

    if let Some(pos) = segments.iter().position(|&seg| seg == "embed") {
        segments.drain(..=pos);
        return segments.first().copied().unwrap_or("").to_string();
    }

    String::new()
}

/// Wall-clock simulated backend.
///
/// Stands in for a real embedded player: position advances in real time
/// while playing, and the ready event fires on the first tick after
/// construction, so the controller's queued-load path behaves exactly
/// as it would against an asynchronous player.
pub struct ClockPlayer {
    loaded: Option<String>,
    playing: bool,
    muted: bool,
    position: f64,
    last_advance: Instant,
    announced_ready: bool,
}

impl ClockPlayer {
    pub fn new() -> Self {
        Self {
            loaded: None,
            playing: false,
            muted: false,
            position: 0.0,
            last_advance: Instant::now(),
            announced_ready: false,
        }
    }

    fn advance(&mut self) {
        let now = Instant::now();
        if self.playing {
            self.position += now.duration_since(self.last_advance).as_secs_f64();
        }
        self.last_advance = now;
    }
}

impl Default for ClockPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerBackend for ClockPlayer {
    fn load(&mut self, video_id: &str) {
        self.loaded = Some(video_id.to_string());
        self.playing = false;
        self.position = 0.0;
        self.last_advance = Instant::now();
    }

    fn play(&mut self) {
        if self.loaded.is_none() {
            return;
        }
        self.advance();
        self.playing = true;
    }

    fn pause(&mut self) {
        self.advance();
        self.playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.advance();
        self.position = seconds.max(0.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn current_time(&self) -> f64 {
        let mut position = self.position;
        if self.playing {
            position += self.last_advance.elapsed().as_secs_f64();
        }
        position
    }

    fn tick(&mut self) -> Vec<PlayerEvent> {
        self.advance();
        if !self.announced_ready {
            self.announced_ready = true;
            return vec![PlayerEvent::Ready];
        }
        Vec::new()
    }
}

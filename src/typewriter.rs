//! Tick-driven typewriter effect for the hero banner.
//!
//! The component owns an interval and calls [`Typewriter::tick`] on every
//! beat; everything else here is plain state so it can be tested without a
//! browser.

pub const TICK_MS: u64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Ticks to keep a fully typed phrase on screen.
    pub hold_ticks: u32,
    /// Ticks to wait on an empty line before typing the next phrase.
    pub pause_ticks: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            hold_ticks: 20,
            pause_ticks: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding(u32),
    Deleting,
    Pausing(u32),
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    current: usize,
    // counted in chars, not bytes
    visible: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            current: 0,
            visible: 0,
            phase: Phase::Typing,
            timing: TypewriterTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: TypewriterTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.current
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.current)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        let len = self.phrase_len();
        self.phase = match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(len);
                if self.visible == len {
                    Phase::Holding(self.timing.hold_ticks)
                } else {
                    Phase::Typing
                }
            }
            Phase::Holding(0) => Phase::Deleting,
            Phase::Holding(n) => Phase::Holding(n - 1),
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.current = (self.current + 1) % self.phrases.len();
                    Phase::Pausing(self.timing.pause_ticks)
                } else {
                    Phase::Deleting
                }
            }
            Phase::Pausing(0) => Phase::Typing,
            Phase::Pausing(n) => Phase::Pausing(n - 1),
        };
    }

    /// Currently visible prefix of the active phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.current) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.visible)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }
}

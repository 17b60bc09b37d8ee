use std::time::{Duration, Instant};

/// Character-by-character reveal of one message. Starts on first render.
#[derive(Debug)]
pub struct Typewriter {
    per_char: Duration,
    started: Option<Instant>,
}

impl Typewriter {
    pub fn new(per_char: Duration) -> Self {
        Self {
            per_char,
            started: None,
        }
    }

    /// Prefix of `text` visible at `now`, and whether the reveal is complete.
    pub fn visible<'a>(&mut self, text: &'a str, now: Instant) -> (&'a str, bool) {
        let started = *self.started.get_or_insert(now);
        if self.per_char.is_zero() {
            return (text, true);
        }
        let elapsed = now.saturating_duration_since(started);
        let shown =
            usize::try_from(elapsed.as_nanos() / self.per_char.as_nanos()).unwrap_or(usize::MAX);
        match text.char_indices().nth(shown) {
            Some((byte_index, _)) => (&text[..byte_index], false),
            None => (text, true),
        }
    }
}

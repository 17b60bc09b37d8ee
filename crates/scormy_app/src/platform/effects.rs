use std::time::{Duration, Instant};

use eframe::egui;
use scormy_core::Effect;
use scormy_logging::{chat_debug, chat_info};

/// Collaborator that opens external resources and wakes the UI later.
pub trait Navigator {
    fn open_external(&self, url: &str);
    fn wake_after(&self, delay: Duration);
}

impl Navigator for egui::Context {
    fn open_external(&self, url: &str) {
        self.open_url(egui::OpenUrl::new_tab(url));
    }

    fn wake_after(&self, delay: Duration) {
        self.request_repaint_after(delay);
    }
}

/// One-shot deferred scroll owned by the shell. Dropped with it.
#[derive(Debug, Default)]
pub struct DeferredScroll {
    pending: Option<(String, Instant)>,
}

impl DeferredScroll {
    /// Schedules `section`, replacing any scroll that has not fired yet.
    pub fn schedule(&mut self, section: String, due: Instant) {
        self.pending = Some((section, due));
    }

    /// Returns whether a pending scroll was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Hands out the section once its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, due)) if *due <= now => self.pending.take().map(|(section, _)| section),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct EffectRunner {
    scroll: DeferredScroll,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, effects: Vec<Effect>, navigator: &impl Navigator, now: Instant) {
        for effect in effects {
            match effect {
                Effect::OpenExternal { url } => {
                    chat_info!("OpenExternal url_len={} url={}", url.len(), url);
                    navigator.open_external(&url);
                }
                Effect::ScrollToSection { section, delay } => {
                    chat_info!(
                        "ScrollToSection section={} delay_ms={}",
                        section,
                        delay.as_millis()
                    );
                    self.scroll.schedule(section, now + delay);
                    navigator.wake_after(delay);
                }
                Effect::CancelDeferred => {
                    if self.scroll.cancel() {
                        chat_debug!("Cancelled pending scroll");
                    }
                }
            }
        }
    }

    /// Section whose scroll delay has elapsed, if any.
    pub fn due_scroll(&mut self, now: Instant) -> Option<String> {
        self.scroll.poll(now)
    }
}

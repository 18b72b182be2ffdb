// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive session state: current locale, transcript and boot timer.
//!
//! The session is single-threaded. The only deferred work is the boot
//! welcome, modelled as a deadline the host polls with [`Session::tick`]
//! instead of a background thread.

mod timer;

pub use timer::BootTimer;

use crate::config::SessionConfig;
use crate::i18n::Locale;
use crate::interpreter::{self, Action, Interpretation};
use crate::transcript::Transcript;
use crate::types::TranscriptEntry;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Session {
    locale: Locale,
    transcript: Transcript,
    boot: BootTimer,
}

impl Session {
    /// Start a session at `now`; the welcome fires `boot_delay` later.
    pub fn start(config: &SessionConfig, now: Instant) -> Self {
        debug!(
            locale = %config.default_locale,
            delay_ms = config.boot_delay_ms,
            "session started"
        );
        Self {
            locale: config.default_locale,
            transcript: Transcript::new(),
            boot: if config.welcome {
                BootTimer::arm(now, config.boot_delay())
            } else {
                BootTimer::disarmed()
            },
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn boot_pending(&self) -> bool {
        self.boot.is_armed()
    }

    /// Time until the boot welcome is due, if it is still pending.
    pub fn boot_remaining(&self, now: Instant) -> Option<Duration> {
        self.boot.remaining(now)
    }

    /// Interpret `raw` with the current locale and apply the result.
    pub fn submit_command(&mut self, raw: &str) -> Interpretation {
        let interpretation = interpreter::interpret(raw, self.locale);

        if let Some(target) = interpretation.locale_change {
            info!(from = %self.locale, to = %target, "locale changed");
            self.locale = target;
        }

        match &interpretation.action {
            Action::Append(response) => {
                self.transcript
                    .append(TranscriptEntry::new(raw, response.clone()));
            }
            Action::Clear => {
                info!(entries = self.transcript.len(), "transcript cleared");
                self.transcript.clear();
            }
            Action::Ignore => {}
        }

        interpretation
    }

    /// Flip to the other locale and record a system notice about it.
    pub fn toggle_locale(&mut self) -> Locale {
        let target = self.locale.other();
        info!(from = %self.locale, to = %target, "locale toggled");
        self.locale = target;
        self.transcript
            .append(TranscriptEntry::system(interpreter::toggle_notice(target)));
        target
    }

    /// Fire the boot welcome if its deadline has passed.
    ///
    /// The welcome uses the locale active now, not the one the session
    /// started with, and always lands at index 0.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.boot.take_if_due(now) {
            return false;
        }
        self.insert_welcome();
        true
    }

    /// Fire the boot welcome immediately if it has not fired yet.
    pub fn complete_boot(&mut self) -> bool {
        if !self.boot.take() {
            return false;
        }
        self.insert_welcome();
        true
    }

    pub fn cancel_boot(&mut self) {
        if self.boot.take() {
            debug!("boot welcome cancelled");
        }
    }

    fn insert_welcome(&mut self) {
        debug!(locale = %self.locale, "boot welcome fired");
        self.transcript
            .insert_first(TranscriptEntry::system(interpreter::welcome(self.locale)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::lookup;
    use crate::types::Response;

    fn session_at(now: Instant) -> Session {
        Session::start(&SessionConfig::default(), now)
    }

    #[test]
    fn welcome_waits_for_the_delay() {
        let t0 = Instant::now();
        let mut session = session_at(t0);
        assert!(!session.tick(t0 + Duration::from_millis(100)));
        assert!(session.transcript().is_empty());
        assert!(session.tick(t0 + Duration::from_millis(500)));
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.tick(t0 + Duration::from_secs(10)));
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn welcome_uses_locale_at_fire_time() {
        let t0 = Instant::now();
        let mut session = session_at(t0);
        session.submit_command("lang en");
        session.tick(t0 + Duration::from_secs(1));
        let first = &session.transcript().entries()[0];
        assert!(first.is_system());
        assert_eq!(
            first.response,
            Response::text(lookup(Locale::En).welcome, crate::types::Tone::Muted)
        );
        assert_eq!(session.transcript().entries()[1].command, "lang en");
    }

    #[test]
    fn cancelled_welcome_never_fires() {
        let t0 = Instant::now();
        let mut session = session_at(t0);
        session.cancel_boot();
        assert!(!session.boot_pending());
        assert!(!session.tick(t0 + Duration::from_secs(5)));
        assert!(!session.complete_boot());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn welcome_disabled_in_config() {
        let config = SessionConfig {
            welcome: false,
            ..SessionConfig::default()
        };
        let t0 = Instant::now();
        let mut session = Session::start(&config, t0);
        assert!(!session.boot_pending());
        assert_eq!(session.boot_remaining(t0), None);
        assert!(!session.tick(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn whitespace_input_leaves_transcript_alone() {
        let mut session = session_at(Instant::now());
        session.submit_command("");
        session.submit_command("    ");
        assert_eq!(session.transcript().revision(), 0);
    }

    #[test]
    fn raw_command_text_is_recorded() {
        let mut session = session_at(Instant::now());
        session.submit_command("  HELP ");
        assert_eq!(session.transcript().entries()[0].command, "  HELP ");
    }

    #[test]
    fn bad_lang_keeps_locale() {
        let mut session = session_at(Instant::now());
        session.submit_command("lang xx");
        assert_eq!(session.locale(), Locale::Vi);
        assert_eq!(session.transcript().len(), 1);
    }
}

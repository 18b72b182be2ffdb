// SPDX-License-Identifier: PMPL-1.0-or-later

//! Renderers: turn session state into something a person can read.

pub mod formatter;
pub mod output;
pub mod shell;

use crate::session::Session;
use anyhow::Result;

pub use formatter::TranscriptFormatter;
pub use output::{OutputFormat, TranscriptSnapshot};
pub use shell::Shell;

/// Serialize the session's transcript and locale in `format`.
pub fn render_session(session: &Session, format: OutputFormat, prompt: &str) -> Result<String> {
    let snapshot = TranscriptSnapshot {
        locale: session.locale(),
        entries: session.transcript().entries(),
    };
    format.serialize(&snapshot, prompt)
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ordered transcript of command/response entries.
//!
//! Entries are only ever appended, cleared wholesale, or (once per session)
//! preceded by the boot welcome. Every mutation bumps [`Transcript::revision`]
//! so renderers can redraw only when something changed.

use crate::types::TranscriptEntry;

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A command-less entry with no payload carries nothing
    /// to show and is dropped.
    pub fn append(&mut self, entry: TranscriptEntry) -> bool {
        if entry.command.trim().is_empty() && entry.response.is_none() {
            return false;
        }
        self.entries.push(entry);
        self.revision += 1;
        true
    }

    /// Place `entry` ahead of everything already recorded.
    pub fn insert_first(&mut self, entry: TranscriptEntry) {
        self.entries.insert(0, entry);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Response, Tone};

    fn entry(cmd: &str) -> TranscriptEntry {
        TranscriptEntry::new(cmd, Response::text(cmd, Tone::Plain))
    }

    #[test]
    fn append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(entry("a"));
        transcript.append(entry("b"));
        transcript.append(entry("c"));
        let commands: Vec<&str> = transcript
            .entries()
            .iter()
            .map(|e| e.command.as_str())
            .collect();
        assert_eq!(commands, ["a", "b", "c"]);
    }

    #[test]
    fn empty_entry_is_rejected() {
        let mut transcript = Transcript::new();
        assert!(!transcript.append(TranscriptEntry::new("   ", Response::None)));
        assert!(transcript.is_empty());
        assert_eq!(transcript.revision(), 0);
    }

    #[test]
    fn clear_empties_and_bumps_revision() {
        let mut transcript = Transcript::new();
        transcript.append(entry("a"));
        transcript.append(entry("b"));
        let before = transcript.revision();
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(transcript.revision() > before);
    }

    #[test]
    fn insert_first_goes_to_index_zero() {
        let mut transcript = Transcript::new();
        transcript.append(entry("help"));
        transcript.insert_first(TranscriptEntry::system(Response::text("hi", Tone::Muted)));
        assert_eq!(transcript.len(), 2);
        assert!(transcript.entries()[0].is_system());
        assert_eq!(transcript.entries()[1].command, "help");
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of a finished transcript for non-interactive runs.

use crate::i18n::Locale;
use crate::render::formatter::TranscriptFormatter;
use crate::types::TranscriptEntry;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// What a renderer sees: the current locale and every entry.
#[derive(Debug, Serialize)]
pub struct TranscriptSnapshot<'a> {
    pub locale: Locale,
    pub entries: &'a [TranscriptEntry],
}

impl OutputFormat {
    pub fn serialize(&self, snapshot: &TranscriptSnapshot<'_>, prompt: &str) -> Result<String> {
        match self {
            OutputFormat::Text => {
                let formatter = TranscriptFormatter::new(prompt);
                Ok(formatter.transcript_lines(snapshot.entries).join("\n"))
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(snapshot)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Response, Tone};

    #[test]
    fn json_snapshot_lists_entries() {
        let entries = vec![
            TranscriptEntry::system(Response::text("hi", Tone::Muted)),
            TranscriptEntry::new("stack", Response::List { items: vec!["Bash".into()] }),
        ];
        let snapshot = TranscriptSnapshot {
            locale: Locale::En,
            entries: &entries,
        };
        let json = OutputFormat::Json.serialize(&snapshot, "$").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["locale"], "en");
        assert_eq!(value["entries"][1]["command"], "stack");
        assert_eq!(value["entries"][1]["response"]["kind"], "list");
    }

    #[test]
    fn yaml_snapshot_names_locale() {
        let snapshot = TranscriptSnapshot {
            locale: Locale::Vi,
            entries: &[],
        };
        let yaml = OutputFormat::Yaml.serialize(&snapshot, "$").unwrap();
        assert!(yaml.contains("locale: vi"));
    }
}

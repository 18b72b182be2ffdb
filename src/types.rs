// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for profile-term
//!
//! Responses are structured values, never markup: the renderer decides how
//! a [`Response`] variant looks on screen.

use serde::{Deserialize, Serialize};

/// Visual intent of a text response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Plain,
    /// Greeting and other low-emphasis text.
    Muted,
    Success,
    /// Recognised command used with bad arguments.
    Warning,
    /// Unrecognised command.
    Error,
    /// System notice that did not come from a typed command.
    Notice,
}

/// One row of a key/value block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            href: None,
        }
    }

    pub fn with_href(mut self, href: Option<&str>) -> Self {
        self.href = href.map(str::to_string);
        self
    }
}

/// Renderer-agnostic reply payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    None,
    Text {
        text: String,
        tone: Tone,
    },
    List {
        items: Vec<String>,
    },
    KeyValue {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        rows: Vec<Row>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    Link {
        title: String,
        description: String,
        label: String,
        url: String,
    },
}

impl Response {
    pub fn text(text: impl Into<String>, tone: Tone) -> Self {
        Response::Text {
            text: text.into(),
            tone,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Response::None)
    }

    /// Every human-readable string carried by the payload, in display order.
    pub fn strings(&self) -> Vec<&str> {
        match self {
            Response::None => Vec::new(),
            Response::Text { text, .. } => vec![text.as_str()],
            Response::List { items } => items.iter().map(String::as_str).collect(),
            Response::KeyValue {
                heading,
                rows,
                body,
            } => {
                let mut out = Vec::new();
                if let Some(heading) = heading {
                    out.push(heading.as_str());
                }
                for row in rows {
                    out.push(row.label.as_str());
                    out.push(row.value.as_str());
                }
                if let Some(body) = body {
                    out.push(body.as_str());
                }
                out
            }
            Response::Link {
                title,
                description,
                label,
                ..
            } => vec![title.as_str(), description.as_str(), label.as_str()],
        }
    }
}

/// One line of the transcript: what was typed and what came back.
///
/// `command` holds the raw input as typed. It is empty for entries the
/// system produced on its own (welcome, locale notices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub command: String,
    pub response: Response,
}

impl TranscriptEntry {
    pub fn new(command: impl Into<String>, response: Response) -> Self {
        Self {
            command: command.into(),
            response,
        }
    }

    pub fn system(response: Response) -> Self {
        Self::new(String::new(), response)
    }

    pub fn is_system(&self) -> bool {
        self.command.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_with_kind_tag() {
        let json = serde_json::to_value(Response::text("hi", Tone::Success)).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["tone"], "success");
        assert_eq!(json["text"], "hi");
    }

    #[test]
    fn key_value_skips_empty_optionals() {
        let response = Response::KeyValue {
            heading: None,
            rows: vec![Row::new("Email", "a@b.c")],
            body: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["kind"], "key_value");
        assert!(json.get("heading").is_none());
        assert!(json["rows"][0].get("href").is_none());
    }

    #[test]
    fn strings_walk_key_value_in_order() {
        let response = Response::KeyValue {
            heading: Some("H".into()),
            rows: vec![Row::new("k", "v")],
            body: Some("B".into()),
        };
        assert_eq!(response.strings(), vec!["H", "k", "v", "B"]);
    }

    #[test]
    fn system_entries_have_no_command() {
        let entry = TranscriptEntry::system(Response::None);
        assert!(entry.is_system());
        assert!(!TranscriptEntry::new("help", Response::None).is_system());
    }
}

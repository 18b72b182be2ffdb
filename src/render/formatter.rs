// SPDX-License-Identifier: PMPL-1.0-or-later

//! Plain-terminal rendering of transcript entries.

use crate::types::*;
use colored::*;

const LABEL_WIDTH: usize = 10;

pub struct TranscriptFormatter {
    prompt: String,
}

impl TranscriptFormatter {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn prompt(&self) -> ColoredString {
        self.prompt.green().bold()
    }

    /// All display lines for a transcript, oldest first.
    pub fn transcript_lines(&self, entries: &[TranscriptEntry]) -> Vec<String> {
        entries.iter().flat_map(|entry| self.entry_lines(entry)).collect()
    }

    pub fn entry_lines(&self, entry: &TranscriptEntry) -> Vec<String> {
        let mut lines = Vec::new();
        if !entry.command.is_empty() {
            lines.push(format!("{} {}", self.prompt(), entry.command));
        }
        lines.extend(self.response_lines(&entry.response));
        lines
    }

    pub fn response_lines(&self, response: &Response) -> Vec<String> {
        match response {
            Response::None => Vec::new(),
            Response::Text { text, tone } => text
                .lines()
                .map(|line| paint(line, *tone).to_string())
                .collect(),
            Response::List { items } => {
                let tags: Vec<String> = items.iter().map(|item| format!("[{}]", item)).collect();
                vec![tags.join(" ").white().to_string()]
            }
            Response::KeyValue {
                heading,
                rows,
                body,
            } => {
                let mut lines = Vec::new();
                if let Some(heading) = heading {
                    lines.push(heading.bold().to_string());
                }
                for row in rows {
                    lines.push(self.row_line(row));
                }
                if let Some(body) = body {
                    lines.push(String::new());
                    lines.extend(body.lines().map(|line| format!("  {}", line.dimmed())));
                }
                lines
            }
            Response::Link {
                title,
                description,
                label,
                url,
            } => {
                let mut lines = vec![title.magenta().bold().to_string()];
                lines.extend(description.lines().map(str::to_string));
                lines.push(format!(
                    "  ↗ {} {}",
                    label.cyan().underline(),
                    format!("<{}>", url).dimmed()
                ));
                lines
            }
        }
    }

    fn row_line(&self, row: &Row) -> String {
        let label = format!("{:<width$}", row.label, width = LABEL_WIDTH);
        let value = match &row.href {
            Some(href) => format!(
                "{} {}",
                row.value.cyan().underline(),
                format!("<{}>", href).dimmed()
            ),
            None => row.value.normal().to_string(),
        };
        format!("  {} {}", label.green(), value)
    }
}

fn paint(line: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => line.normal(),
        Tone::Muted => line.dimmed(),
        Tone::Success => line.green(),
        Tone::Warning => line.yellow(),
        Tone::Error => line.red(),
        Tone::Notice => line.dimmed().italic(),
    }
}

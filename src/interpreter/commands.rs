// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in command table and the responses each command builds.

use crate::i18n::literals::{self, ContactChannel};
use crate::i18n::{lookup, ContentTable, Locale};
use crate::types::{Response, Row, Tone};

/// Recognised command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    About,
    Stack,
    Smm,
    Contact,
    Lang,
    Clear,
}

impl Command {
    /// Resolve a lower-cased command word. `ls` is an alias of `help`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "help" | "ls" => Some(Command::Help),
            "about" => Some(Command::About),
            "stack" => Some(Command::Stack),
            "smm" => Some(Command::Smm),
            "contact" => Some(Command::Contact),
            "lang" => Some(Command::Lang),
            "clear" => Some(Command::Clear),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Stack => "stack",
            Command::Smm => "smm",
            Command::Contact => "contact",
            Command::Lang => "lang",
            Command::Clear => "clear",
        }
    }

    /// Commands listed by `help`, in display order.
    pub fn listed() -> &'static [Command] {
        &[
            Command::About,
            Command::Stack,
            Command::Smm,
            Command::Contact,
            Command::Lang,
            Command::Clear,
        ]
    }

    /// Localized one-liner for `help`. `help` itself has no entry.
    pub fn description(self, table: &ContentTable) -> Option<&'static str> {
        match self {
            Command::Help => None,
            Command::About => Some(table.commands.about),
            Command::Stack => Some(table.commands.stack),
            Command::Smm => Some(table.commands.smm),
            Command::Contact => Some(table.commands.contact),
            Command::Lang => Some(table.commands.lang),
            Command::Clear => Some(table.commands.clear),
        }
    }
}

pub(crate) fn help(table: &ContentTable) -> Response {
    let rows = Command::listed()
        .iter()
        .filter_map(|cmd| cmd.description(table).map(|desc| Row::new(cmd.name(), desc)))
        .collect();
    Response::KeyValue {
        heading: Some(table.help_title.to_string()),
        rows,
        body: None,
    }
}

pub(crate) fn about(table: &ContentTable) -> Response {
    Response::KeyValue {
        heading: None,
        rows: vec![
            Row::new(table.about_labels.user, literals::USER_NAME),
            Row::new(table.about_labels.role, table.role),
            Row::new(table.about_labels.status, table.status),
        ],
        body: Some(table.bio.to_string()),
    }
}

pub(crate) fn stack() -> Response {
    Response::List {
        items: literals::STACK.iter().map(|tag| tag.to_string()).collect(),
    }
}

pub(crate) fn smm(table: &ContentTable) -> Response {
    Response::Link {
        title: table.smm.title.to_string(),
        description: table.smm.description.to_string(),
        label: literals::SMM_LABEL.to_string(),
        url: literals::SMM_URL.to_string(),
    }
}

pub(crate) fn contact(table: &ContentTable) -> Response {
    let rows = ContactChannel::all()
        .iter()
        .map(|&channel| {
            let label = match channel {
                ContactChannel::Email => table.contact.email,
                ContactChannel::Facebook => table.contact.facebook,
                ContactChannel::Telegram => table.contact.telegram,
                ContactChannel::Youtube => table.contact.youtube,
            };
            Row::new(label, channel.value()).with_href(channel.href())
        })
        .collect();
    Response::KeyValue {
        heading: None,
        rows,
        body: None,
    }
}

/// Confirmation for a locale switch, worded in the destination locale.
pub(crate) fn lang_switched(target: Locale) -> Response {
    Response::text(lookup(target).lang_switched, Tone::Success)
}

pub(crate) fn lang_usage(table: &ContentTable) -> Response {
    Response::text(table.lang_usage, Tone::Warning)
}

pub(crate) fn not_found(table: &ContentTable, normalized: &str) -> Response {
    Response::text(format!("{} {}", table.not_found, normalized), Tone::Error)
}

/// Greeting inserted when the boot timer fires.
pub fn welcome(locale: Locale) -> Response {
    Response::text(lookup(locale).welcome, Tone::Muted)
}

/// Notice appended by the locale toggle, worded in the destination locale.
pub fn toggle_notice(target: Locale) -> Response {
    Response::text(lookup(target).toggle_notice, Tone::Notice)
}

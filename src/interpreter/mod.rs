// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command interpreter.
//!
//! [`interpret`] is a total function: every input string, including empty,
//! whitespace-only and non-ASCII input, yields an [`Interpretation`]. An
//! unknown command or a bad `lang` argument is an ordinary reply flagged in
//! [`Interpretation::fault`], never an `Err`.

mod commands;

pub use commands::{toggle_notice, welcome, Command};

use crate::i18n::{lookup, Locale};
use crate::types::Response;
use tracing::debug;

/// What the session should do with the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Append(Response),
    /// Empty the transcript without recording the command.
    Clear,
    /// Blank input: leave the transcript untouched.
    Ignore,
}

/// Input the user got wrong. Both kinds still produce a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFault {
    UnrecognizedInput,
    InvalidUsage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub action: Action,
    /// Set only by a successful `lang`.
    pub locale_change: Option<Locale>,
    pub fault: Option<InputFault>,
}

impl Interpretation {
    fn reply(response: Response) -> Self {
        Self {
            action: Action::Append(response),
            locale_change: None,
            fault: None,
        }
    }

    fn faulty(response: Response, fault: InputFault) -> Self {
        Self {
            action: Action::Append(response),
            locale_change: None,
            fault: Some(fault),
        }
    }

    /// The payload to append, if any.
    pub fn response(&self) -> Option<&Response> {
        match &self.action {
            Action::Append(response) => Some(response),
            Action::Clear | Action::Ignore => None,
        }
    }
}

/// Trim, lower-case and split on single spaces.
///
/// Runs of spaces produce empty arguments, so `"lang  vi"` has an empty
/// `args[1]`.
pub fn normalize(raw: &str) -> (String, Vec<String>) {
    let normalized = raw.trim().to_lowercase();
    let args = normalized.split(' ').map(str::to_string).collect();
    (normalized, args)
}

/// Resolve `raw` against the command table using `locale`'s content.
pub fn interpret(raw: &str, locale: Locale) -> Interpretation {
    let (normalized, args) = normalize(raw);
    let name = args.first().map(String::as_str).unwrap_or("");
    let table = lookup(locale);

    if name.is_empty() {
        return Interpretation {
            action: Action::Ignore,
            locale_change: None,
            fault: None,
        };
    }

    let Some(command) = Command::parse(name) else {
        debug!(input = %normalized, "unrecognized command");
        return Interpretation::faulty(
            commands::not_found(table, &normalized),
            InputFault::UnrecognizedInput,
        );
    };

    debug!(command = command.name(), %locale, "dispatching command");
    match command {
        Command::Help => Interpretation::reply(commands::help(table)),
        Command::About => Interpretation::reply(commands::about(table)),
        Command::Stack => Interpretation::reply(commands::stack()),
        Command::Smm => Interpretation::reply(commands::smm(table)),
        Command::Contact => Interpretation::reply(commands::contact(table)),
        Command::Lang => match args.get(1).and_then(|arg| Locale::from_alias(arg)) {
            Some(target) => Interpretation {
                action: Action::Append(commands::lang_switched(target)),
                locale_change: Some(target),
                fault: None,
            },
            None => Interpretation::faulty(commands::lang_usage(table), InputFault::InvalidUsage),
        },
        Command::Clear => Interpretation {
            action: Action::Clear,
            locale_change: None,
            fault: None,
        },
    }
}

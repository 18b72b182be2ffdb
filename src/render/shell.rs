// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive raw-mode terminal around a [`Session`].

use crate::config::SessionConfig;
use crate::i18n::Locale;
use crate::render::formatter::TranscriptFormatter;
use crate::session::Session;
use anyhow::Result;
use chrono::Local;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const BANNER: &[&str] = &[
    r"   ____  _   _ __   __  ______  _   _  _    _______",
    r"  / __ \| | | |\ \ / / |  ____|| \ | || |  |__   __|",
    r" | |  | | | | | \ V /  | |__   |  \| || |     | |",
    r" | |  | | | | |  | |   |  __|  | . ` || |     | |",
    r" | |__| | |_| |  | |   | |____ | |\  || |____ | |",
    r"  \___\_\\___/   |_|   |______||_| \_||______||_|",
];

pub struct Shell;

impl Shell {
    pub fn run(config: &SessionConfig) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(config);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(config: &SessionConfig) -> Result<()> {
        let mut stdout = stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::MoveTo(0, 0))?;
        let result = Self::event_loop(&mut stdout, config);
        execute!(stdout, terminal::LeaveAlternateScreen)?;
        result
    }

    fn event_loop(stdout: &mut impl Write, config: &SessionConfig) -> Result<()> {
        let formatter = TranscriptFormatter::new(config.prompt.clone());
        let mut session = Session::start(config, Instant::now());
        let mut input = String::new();
        let mut dirty = true;
        let mut clock = clock_label();

        loop {
            if session.tick(Instant::now()) {
                dirty = true;
            }
            let now_label = clock_label();
            if now_label != clock {
                clock = now_label;
                dirty = true;
            }
            if dirty {
                Self::render(stdout, &session, &formatter, &input, &clock)?;
                dirty = false;
            }

            let timeout = session
                .boot_remaining(Instant::now())
                .map(|remaining| remaining.min(POLL_INTERVAL))
                .unwrap_or(POLL_INTERVAL);
            if !event::poll(timeout)? {
                continue;
            }

            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind,
                    ..
                }) => {
                    if kind == KeyEventKind::Release {
                        continue;
                    }
                    match code {
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Esc => break,
                        KeyCode::Tab | KeyCode::F(2) => {
                            session.toggle_locale();
                        }
                        KeyCode::Enter => {
                            let line = std::mem::take(&mut input);
                            let outcome = session.submit_command(&line);
                            debug!(fault = ?outcome.fault, "command submitted");
                        }
                        KeyCode::Backspace => {
                            input.pop();
                        }
                        KeyCode::Char(c) => input.push(c),
                        _ => continue,
                    }
                    dirty = true;
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        Ok(())
    }

    fn render(
        stdout: &mut impl Write,
        session: &Session,
        formatter: &TranscriptFormatter,
        input: &str,
        clock: &str,
    ) -> Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let header = header_lines(session.locale(), clock);
        for line in &header {
            write!(stdout, "{}\r\n", line)?;
        }

        let (_, rows) = terminal::size()?;
        let height = (rows as usize).saturating_sub(header.len() + 2);
        let lines = formatter.transcript_lines(session.transcript().entries());
        for line in visible_tail(&lines, height) {
            write!(stdout, "{}\r\n", line)?;
        }

        write!(stdout, "{} {}", formatter.prompt(), input)?;
        stdout.flush()?;
        Ok(())
    }
}

fn clock_label() -> String {
    Local::now().format("%-I:%M %p | %-m/%-d").to_string()
}

fn header_lines(locale: Locale, clock: &str) -> Vec<String> {
    let indicator = |candidate: Locale| {
        let code = candidate.code().to_uppercase();
        if candidate == locale {
            code.green().bold().to_string()
        } else {
            code.dimmed().to_string()
        }
    };
    let mut lines = vec![
        format!(
            "{}  {}  {} {} {}",
            "Profile QuyenLT".bold(),
            clock.magenta(),
            indicator(Locale::Vi),
            "|".dimmed(),
            indicator(Locale::En)
        ),
        String::new(),
    ];
    lines.extend(BANNER.iter().map(|line| line.yellow().to_string()));
    lines.push(String::new());
    lines.push(
        "Type 'help' to initialize key commands. [Tab] language, [Esc] quit."
            .dimmed()
            .italic()
            .to_string(),
    );
    lines.push(String::new());
    lines
}

/// The last `height` lines, so the newest output stays on screen.
fn visible_tail(lines: &[String], height: usize) -> &[String] {
    let start = lines.len().saturating_sub(height);
    &lines[start..]
}

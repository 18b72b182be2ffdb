// SPDX-License-Identifier: PMPL-1.0-or-later

//! profile-term — a bilingual simulated terminal.
//!
//! Visitors type short commands (`help`, `about`, `stack`, `smm`,
//! `contact`, `lang`, `clear`) and get structured replies appended to a
//! transcript. The crate keeps rendering apart from the core:
//!
//! 1. **Interpreter**: total function from raw input and locale to an
//!    action plus an optional locale change.
//! 2. **Session**: owns the locale, the [`transcript::Transcript`] and the
//!    one-shot boot welcome.
//! 3. **i18n**: one static content table per locale.
//!
//! Renderers in [`render`] read the session and never mutate it except
//! through [`session::Session::submit_command`] and
//! [`session::Session::toggle_locale`].

pub mod config;
pub mod i18n;
pub mod interpreter;
pub mod render;
pub mod session;
pub mod transcript;
pub mod types;

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for profile-term.
//!
//! ## Supported locales
//!
//! | Code | Language   | Native name |
//! |------|------------|-------------|
//! | vi   | Vietnamese | Tiếng Việt  |
//! | en   | English    | English     |
//!
//! ## Design
//!
//! Unlike a key/value catalog, each locale is a typed [`ContentTable`]
//! record. Lookup is an exhaustive `match` over [`Locale`], so there is no
//! fallback path: every locale carries every string. Values that never
//! change with the language (stack tags, contact addresses) live in
//! [`literals`].
//!
//! The tables are static data: no file I/O, no initialisation order, no
//! mutation after startup.

mod catalog;
pub mod literals;

pub use catalog::{
    lookup, verify_catalog, AboutLabels, CommandHelp, ContactLabels, ContentTable, Locale,
    Project, SmmContent,
};

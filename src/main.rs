// SPDX-License-Identifier: PMPL-1.0-or-later

//! profile-term: bilingual simulated terminal
//!
//! Runs the interactive shell by default; `exec` replays commands and prints
//! the transcript, `catalog` dumps the content tables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use profile_term::config::SessionConfig;
use profile_term::i18n::{self, Locale};
use profile_term::render::{self, OutputFormat, Shell};
use profile_term::session::Session;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "profile-term")]
#[command(version)]
#[command(about = "Bilingual simulated terminal profile")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal
    Shell {
        /// Starting language
        #[arg(short, long, value_enum)]
        lang: Option<LocaleArg>,

        /// Session config file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Submit commands in order and print the resulting transcript
    Exec {
        /// Commands to submit, one per argument
        #[arg(value_name = "COMMAND")]
        commands: Vec<String>,

        /// Starting language
        #[arg(short, long, value_enum)]
        lang: Option<LocaleArg>,

        /// Session config file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Skip the boot welcome entry
        #[arg(long)]
        no_welcome: bool,
    },

    /// Verify the content catalog and print it as JSON
    Catalog {
        /// Only print this locale
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    #[value(alias = "vn")]
    Vi,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Vi => Locale::Vi,
            LocaleArg::En => Locale::En,
        }
    }
}

fn load_config(path: Option<PathBuf>, lang: Option<LocaleArg>) -> Result<SessionConfig> {
    let mut config = SessionConfig::load_or_default(path.as_deref())?;
    if let Some(lang) = lang {
        config.default_locale = lang.into();
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    i18n::verify_catalog()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell {
        lang: None,
        config: None,
    }) {
        Commands::Shell { lang, config } => {
            let config = load_config(config, lang)?;
            Shell::run(&config).context("running interactive shell")?;
        }

        Commands::Exec {
            commands,
            lang,
            config,
            format,
            no_welcome,
        } => {
            let mut config = load_config(config, lang)?;
            if no_welcome {
                config.welcome = false;
            }

            let mut session = Session::start(&config, Instant::now());
            session.complete_boot();
            for command in &commands {
                session.submit_command(command);
            }

            println!("{}", render::render_session(&session, format, &config.prompt)?);
        }

        Commands::Catalog { locale } => {
            let json = match locale {
                Some(locale) => serde_json::to_string_pretty(i18n::lookup(locale.into()))?,
                None => {
                    let tables: std::collections::BTreeMap<&str, _> = Locale::all()
                        .iter()
                        .map(|&locale| (locale.code(), i18n::lookup(locale)))
                        .collect();
                    serde_json::to_string_pretty(&tables)?
                }
            };
            println!("{}", json);
        }
    }

    Ok(())
}

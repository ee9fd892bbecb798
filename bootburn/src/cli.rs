// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use bootburn_common::Translator;

pub const BURN_BOOTLOADER_ABOUT: &str = "Upload the bootloader.";
pub const BURN_BOOTLOADER_LONG_ABOUT: &str =
    "Upload the bootloader on the board using an external programmer.";
pub const BURN_BOOTLOADER_EXAMPLE: &str = "  bootburn burn-bootloader -b arduino:avr:uno -P atmel_ice";

/// Flag descriptions, keyed by argument id. Used as message ids.
const FLAG_HELP: &[(&str, &str)] = &[
    ("fqbn", "Fully Qualified Board Name, e.g.: arduino:avr:uno"),
    ("port", "Upload port, e.g.: COM10 or /dev/ttyACM0"),
    ("verify", "Verify uploaded binary after the upload."),
    ("verbose", "Turns on verbose mode."),
    ("programmer", "Use the specified programmer to upload."),
    ("dry_run", "Do not perform the actual upload, just log out actions"),
];

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bootburn")]
#[command(about = "Bootloader burning tool", version)]
pub struct Cli {
    /// Additional configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    BurnBootloader(CommandOptions),
}

/// Options of the `burn-bootloader` command.
///
/// Built fresh by every parse; nothing is shared between invocations.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    #[arg(short = 'b', long, default_value = "")]
    pub fqbn: String,

    #[arg(short, long, default_value = "")]
    pub port: String,

    #[arg(short = 't', long)]
    pub verify: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short = 'P', long, default_value = "")]
    pub programmer: String,

    #[arg(long, hide = true)]
    pub dry_run: bool,

    /// Accepted for compatibility, not used
    #[arg(value_name = "SKETCH")]
    pub sketch: Option<String>,
}

/// Build the clap command tree with every help text run through `tr`.
pub fn command(tr: &dyn Translator) -> clap::Command {
    Cli::command().mut_subcommand("burn-bootloader", |sub| {
        let sub = sub
            .about(tr.translate(BURN_BOOTLOADER_ABOUT).into_owned())
            .long_about(tr.translate(BURN_BOOTLOADER_LONG_ABOUT).into_owned())
            .after_help(BURN_BOOTLOADER_EXAMPLE);

        FLAG_HELP.iter().fold(sub, |sub, (id, help)| {
            let help = tr.translate(help).into_owned();
            sub.mut_arg(*id, |arg| arg.help(help))
        })
    })
}

/// Parse `args` (including the binary name) into a [`Cli`].
pub fn parse_from<I, T>(args: I, tr: &dyn Translator) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = command(tr);
    let matches = command.try_get_matches_from_mut(args)?;
    Cli::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
}

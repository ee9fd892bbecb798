// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for command-line parsing.

use std::collections::HashMap;
use std::path::PathBuf;

use bootburn::cli::{self, CommandOptions, Commands};
use bootburn_common::{Catalog, IdentityTranslator};
use clap::error::ErrorKind;
use rstest::rstest;

fn parse(args: &[&str]) -> Result<CommandOptions, clap::Error> {
    let argv = std::iter::once("bootburn").chain(args.iter().copied());
    cli::parse_from(argv, &IdentityTranslator).map(|cli| match cli.command {
        Commands::BurnBootloader(options) => options,
    })
}

fn help_text(tr: &dyn bootburn_common::Translator) -> String {
    let mut command = cli::command(tr);
    command
        .find_subcommand_mut("burn-bootloader")
        .unwrap()
        .render_long_help()
        .to_string()
}

// --- Defaults ---

#[test]
fn test_defaults_without_flags() {
    let options = parse(&["burn-bootloader"]).unwrap();
    assert_eq!(options, CommandOptions::default());
    assert_eq!(options.fqbn, "");
    assert_eq!(options.port, "");
    assert_eq!(options.programmer, "");
    assert!(!options.verify);
    assert!(!options.verbose);
    assert!(!options.dry_run);
}

// --- Flags ---

#[rstest]
#[case(&["-b", "arduino:avr:uno"])]
#[case(&["--fqbn", "arduino:avr:uno"])]
#[case(&["--fqbn=arduino:avr:uno"])]
fn test_fqbn_forms(#[case] flags: &[&str]) {
    let args: Vec<&str> = std::iter::once("burn-bootloader").chain(flags.iter().copied()).collect();
    assert_eq!(parse(&args).unwrap().fqbn, "arduino:avr:uno");
}

#[test]
fn test_short_flags() {
    let options = parse(&[
        "burn-bootloader",
        "-b",
        "arduino:avr:mega",
        "-p",
        "/dev/ttyACM0",
        "-t",
        "-v",
        "-P",
        "usbasp",
    ])
    .unwrap();

    assert_eq!(options.fqbn, "arduino:avr:mega");
    assert_eq!(options.port, "/dev/ttyACM0");
    assert!(options.verify);
    assert!(options.verbose);
    assert_eq!(options.programmer, "usbasp");
    assert!(!options.dry_run);
}

#[test]
fn test_long_flags() {
    let options = parse(&[
        "burn-bootloader",
        "--fqbn",
        "arduino:samd:mkr1000",
        "--port",
        "COM10",
        "--verify",
        "--verbose",
        "--programmer",
        "atmel_ice",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(options.fqbn, "arduino:samd:mkr1000");
    assert_eq!(options.port, "COM10");
    assert!(options.verify);
    assert!(options.verbose);
    assert_eq!(options.programmer, "atmel_ice");
    assert!(options.dry_run);
}

#[test]
fn test_dry_run_is_accepted() {
    assert!(parse(&["burn-bootloader", "--dry-run"]).unwrap().dry_run);
}

#[test]
fn test_unknown_flag_is_rejected() {
    let err = parse(&["burn-bootloader", "--force"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

// --- Positional arguments ---

#[test]
fn test_one_positional_is_accepted() {
    let options = parse(&["burn-bootloader", "MySketch"]).unwrap();
    assert_eq!(options.sketch.as_deref(), Some("MySketch"));
}

#[test]
fn test_two_positionals_are_rejected() {
    let err = parse(&["burn-bootloader", "one", "two"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

// --- Global options ---

#[test]
fn test_config_file_after_subcommand() {
    let argv = ["bootburn", "burn-bootloader", "--config-file", "/tmp/bootburn.toml"];
    let cli = cli::parse_from(argv, &IdentityTranslator).unwrap();
    assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/bootburn.toml")));
}

// --- Help ---

#[test]
fn test_help_lists_flags() {
    let help = help_text(&IdentityTranslator);
    for flag in ["--fqbn", "--port", "--verify", "--verbose", "--programmer"] {
        assert!(help.contains(flag), "missing {} in help:\n{}", flag, help);
    }
    assert!(help.contains("Upload the bootloader on the board using an external programmer."));
    assert!(help.contains("burn-bootloader -b arduino:avr:uno -P atmel_ice"));
}

#[test]
fn test_help_hides_dry_run() {
    let help = help_text(&IdentityTranslator);
    assert!(!help.contains("dry-run"));
    assert!(!help.contains("Do not perform the actual upload"));
}

#[test]
fn test_help_is_translated() {
    let mut messages = HashMap::new();
    messages.insert(
        "Turns on verbose mode.".to_string(),
        "Active le mode verbeux.".to_string(),
    );
    messages.insert(
        "Upload the bootloader on the board using an external programmer.".to_string(),
        "Téléverse le bootloader avec un programmateur externe.".to_string(),
    );
    let help = help_text(&Catalog::new(messages));

    assert!(help.contains("Active le mode verbeux."));
    assert!(help.contains("Téléverse le bootloader avec un programmateur externe."));
    assert!(!help.contains("Turns on verbose mode."));
}

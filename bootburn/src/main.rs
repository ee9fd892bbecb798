// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bootloader burning tool.
//!
//! Usage:
//!   bootburn burn-bootloader -b arduino:avr:uno -P atmel_ice
//!   bootburn burn-bootloader -b arduino:avr:uno -p /dev/ttyACM0 -P avrisp --verify

use std::process::ExitCode;

fn main() -> ExitCode {
    bootburn::app::run(std::env::args_os().collect()).into()
}

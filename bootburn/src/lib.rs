// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bootloader burning front end.
//!
//! Parses the `burn-bootloader` command line, turns it into a request and
//! hands that to an upload backend, by default an external upload tool.

pub mod app;
pub mod cli;
pub mod commands;
pub mod feedback;
pub mod logging;
pub mod process;
pub mod settings;

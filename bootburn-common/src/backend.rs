// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Interfaces to the services that do the actual device work.

use std::io::Write;

use anyhow::Result;

use crate::request::{BurnBootloaderRequest, BurnBootloaderResponse, Instance};

/// Creates and initialises backend sessions.
pub trait InstanceProvider {
    /// Create a session handle. Failures are fatal to the calling command.
    fn create_and_init(&self) -> Result<Instance>;
}

/// The upload subsystem.
pub trait UploadBackend {
    /// Burn the bootloader described by `request`.
    ///
    /// Blocks until the operation completes. Progress text goes to `out`,
    /// diagnostics to `err`.
    fn burn_bootloader(
        &self,
        request: BurnBootloaderRequest,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<BurnBootloaderResponse>;
}

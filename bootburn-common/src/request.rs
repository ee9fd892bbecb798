// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Request types exchanged with the upload backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a backend session.
///
/// Issued by an [`InstanceProvider`](crate::InstanceProvider); the command
/// only carries it inside a request and never inspects it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instance {
    id: u32,
}

impl Instance {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance#{}", self.id)
    }
}

/// Everything the backend needs to burn a bootloader.
///
/// Empty strings mean "not given"; the backend picks its own defaults
/// (e.g. a detected board or port) in that case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BurnBootloaderRequest {
    pub instance: Instance,
    pub fqbn: String,
    pub port: String,
    pub verbose: bool,
    pub verify: bool,
    pub programmer: String,
    pub dry_run: bool,
}

/// Result of a successful burn. Carries no data.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BurnBootloaderResponse;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and interfaces for bootburn.
//!
//! This crate holds everything the command front end shares with the
//! services it talks to:
//! - `request`: the burn-bootloader request and the opaque session handle
//! - `backend`: the instance provider and upload backend seams
//! - `exit_code`: process exit codes
//! - `i18n`: message translation and formatting

pub mod backend;
pub mod exit_code;
pub mod i18n;
pub mod request;

// Re-export commonly used types
pub use backend::{InstanceProvider, UploadBackend};
pub use exit_code::ExitStatus;
pub use i18n::{format_message, Catalog, IdentityTranslator, Translator};
pub use request::{BurnBootloaderRequest, BurnBootloaderResponse, Instance};

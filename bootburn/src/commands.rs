// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info_span};

use bootburn_common::{
    format_message, BurnBootloaderRequest, BurnBootloaderResponse, ExitStatus, Instance,
    InstanceProvider, Translator, UploadBackend,
};

use crate::cli::CommandOptions;
use crate::feedback::Feedback;

pub const INSTANCE_ERROR: &str = "Error creating instance: {}";
pub const UPLOAD_ERROR: &str = "Error during Upload: {}";

/// Step of the command that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Instance,
    Upload,
}

impl Stage {
    /// Message id of the error template for this step.
    pub fn template(self) -> &'static str {
        match self {
            Stage::Instance => INSTANCE_ERROR,
            Stage::Upload => UPLOAD_ERROR,
        }
    }
}

/// Result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure { stage: Stage, message: String },
}

impl Outcome {
    /// Failure carrying the whole error chain of `error`.
    pub fn failure(stage: Stage, error: &anyhow::Error) -> Self {
        Outcome::Failure {
            stage,
            message: format!("{:#}", error),
        }
    }
}

/// Map the parsed options onto a request for `instance`, field by field.
pub fn build_request(options: CommandOptions, instance: Instance) -> BurnBootloaderRequest {
    BurnBootloaderRequest {
        instance,
        fqbn: options.fqbn,
        port: options.port,
        verbose: options.verbose,
        verify: options.verify,
        programmer: options.programmer,
        dry_run: options.dry_run,
    }
}

/// Hand `request` to the backend and wait for it to finish.
pub fn dispatch(
    backend: &dyn UploadBackend,
    request: BurnBootloaderRequest,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<BurnBootloaderResponse> {
    debug!(?request, "Dispatching burn-bootloader");
    backend.burn_bootloader(request, out, err)
}

/// Run `burn-bootloader`: acquire an instance, build the request, dispatch it once.
pub fn burn_bootloader(
    options: CommandOptions,
    provider: &dyn InstanceProvider,
    backend: &dyn UploadBackend,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Outcome {
    if let Some(sketch) = &options.sketch {
        debug!(sketch = %sketch, "Ignoring positional argument");
    }

    let instance = match provider.create_and_init() {
        Ok(instance) => instance,
        Err(e) => return Outcome::failure(Stage::Instance, &e),
    };

    let _span = info_span!("burn_bootloader", %instance).entered();
    let request = build_request(options, instance);
    match dispatch(backend, request, out, err) {
        Ok(_) => Outcome::Success,
        Err(e) => Outcome::failure(Stage::Upload, &e),
    }
}

/// Report `outcome` to the user and pick the exit status.
pub fn report(outcome: &Outcome, tr: &dyn Translator, feedback: &mut Feedback) -> ExitStatus {
    match outcome {
        Outcome::Success => ExitStatus::Success,
        Outcome::Failure { stage, message } => {
            feedback.error(&format_message(&tr.translate(stage.template()), &[message]));
            ExitStatus::Generic
        }
    }
}

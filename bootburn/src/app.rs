// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Top-level wiring: settings, logging, translation, then the command.

use std::ffi::OsString;
use std::io::{self, Write};

use tracing::debug;

use bootburn_common::{
    Catalog, ExitStatus, IdentityTranslator, InstanceProvider, Translator, UploadBackend,
};

use crate::cli::{self, Commands};
use crate::commands;
use crate::feedback::Feedback;
use crate::logging::{self, LoggingError};
use crate::process::ProcessBackend;
use crate::settings::{find_config_file_in_args, I18nSettings, Settings, Sources};

/// Run the tool with the process arguments and the external upload tool
/// as backend. Returns the exit status instead of exiting.
pub fn run(args: Vec<OsString>) -> ExitStatus {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let sources = Sources::discover(find_config_file_in_args(&args));
    let settings = match Settings::load(&sources) {
        Ok(settings) => settings,
        Err(e) => {
            Feedback::new(&mut stderr).error(&format!("{:#}", e));
            return ExitStatus::CoreConfig;
        }
    };

    match logging::initialize(&settings.logging) {
        Ok(()) => {}
        // Already installed by an earlier run in this process
        Err(LoggingError::Init { .. }) => {}
        Err(e) => {
            Feedback::new(&mut stderr).error(&e.to_string());
            return ExitStatus::CoreConfig;
        }
    }
    debug!(?sources, "Settings loaded");

    let translator = match load_translator(&settings.i18n) {
        Ok(translator) => translator,
        Err(e) => {
            Feedback::new(&mut stderr).error(&format!("{:#}", e));
            return ExitStatus::CoreConfig;
        }
    };

    let backend = ProcessBackend::from_settings(&settings.backend);
    execute(
        args,
        translator.as_ref(),
        &backend,
        &backend,
        &mut stdout,
        &mut stderr,
    )
}

fn load_translator(settings: &I18nSettings) -> anyhow::Result<Box<dyn Translator>> {
    match settings.catalog_path() {
        Some(path) => {
            let catalog = Catalog::load(&path)?;
            debug!(path = %path.display(), messages = catalog.len(), "Message catalog loaded");
            Ok(Box::new(catalog))
        }
        None => Ok(Box::new(IdentityTranslator)),
    }
}

/// Parse `args` and run the selected command against the given collaborators.
pub fn execute<I, T>(
    args: I,
    tr: &dyn Translator,
    provider: &dyn InstanceProvider,
    backend: &dyn UploadBackend,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match cli::parse_from(args, tr) {
        Ok(cli) => cli,
        Err(e) => return report_usage(&e, out, err),
    };

    match cli.command {
        Commands::BurnBootloader(options) => {
            let outcome = commands::burn_bootloader(options, provider, backend, out, err);
            commands::report(&outcome, tr, &mut Feedback::new(err))
        }
    }
}

/// Print a parse error (or requested help/version) and pick the exit status.
fn report_usage(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> ExitStatus {
    let text = e.render();
    if e.use_stderr() {
        let _ = write!(err, "{}", text);
        ExitStatus::BadCall
    } else {
        let _ = write!(out, "{}", text);
        ExitStatus::Success
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tracing setup. Logs go to stderr; stdout belongs to the upload tool.

use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::settings::LogSettings;

pub const LOG_ENV: &str = "BOOTBURN_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {source}")]
    Filter {
        #[from]
        source: ParseError,
    },
    #[error("Unable to initialize tracing: {source}")]
    Init {
        #[from]
        source: TryInitError,
    },
}

/// Filter from `BOOTBURN_LOG`, falling back to the configured level.
pub fn filter(settings: &LogSettings) -> Result<EnvFilter, LoggingError> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::try_new(&settings.level)?),
    }
}

pub fn initialize(settings: &LogSettings) -> Result<(), LoggingError> {
    let logging_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter(settings)?)
        .with(logging_layer)
        .try_init()?;

    Ok(())
}

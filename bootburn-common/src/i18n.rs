// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Message translation.
//!
//! User-facing strings are written in English and used as message ids.
//! A [`Translator`] maps an id to its localized text; templates use `{}`
//! placeholders that [`format_message`] fills in order.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{Display, Write};
use std::fs;
use std::path::{Path, PathBuf};

/// Maps message ids to localized text.
pub trait Translator {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Returns every message id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read message catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse message catalog {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A message catalog: a flat JSON object of `msgid -> msgstr`.
///
/// Ids missing from the catalog, or mapped to an empty string, fall back
/// to the id itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, CatalogError> {
        let messages = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(messages))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.messages.get(msgid) {
            Some(msgstr) if !msgstr.is_empty() => Cow::Borrowed(msgstr.as_str()),
            _ => Cow::Borrowed(msgid),
        }
    }
}

/// Fill the `{}` placeholders of `template` with `args`, in order.
///
/// `{{` and `}}` produce literal braces. Placeholders without a matching
/// argument are kept verbatim; surplus arguments are ignored.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    // Writing into a String cannot fail
                    Some(arg) => {
                        let _ = write!(out, "{}", arg);
                    }
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(c),
        }
    }

    out
}

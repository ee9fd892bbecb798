// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! User feedback channel.

use std::io::Write;

/// Writes user-facing messages to an error stream.
pub struct Feedback<'a> {
    err: &'a mut dyn Write,
}

impl<'a> Feedback<'a> {
    pub fn new(err: &'a mut dyn Write) -> Self {
        Self { err }
    }

    /// Emit one error line.
    pub fn error(&mut self, message: &str) {
        // Nowhere left to report a broken stderr
        let _ = writeln!(self.err, "{}", message);
        let _ = self.err.flush();
    }
}

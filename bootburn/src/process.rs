// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload backend that delegates to an external upload tool.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use bootburn_common::{
    BurnBootloaderRequest, BurnBootloaderResponse, Instance, InstanceProvider, UploadBackend,
};

use crate::settings::BackendSettings;

const READ_CHUNK_SIZE: usize = 4096;

static NEXT_INSTANCE_ID: AtomicU32 = AtomicU32::new(1);

enum Chunk {
    Out(Vec<u8>),
    Err(Vec<u8>),
}

/// Runs `program args... <request flags>` for every burn.
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    program: String,
    args: Vec<String>,
}

impl ProcessBackend {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self::new(settings.program.clone(), settings.args.clone())
    }

    /// Full argument list passed to the tool for `request`.
    pub fn command_args(&self, request: &BurnBootloaderRequest) -> Vec<String> {
        let mut args = self.args.clone();

        for (flag, value) in [
            ("--fqbn", &request.fqbn),
            ("--port", &request.port),
            ("--programmer", &request.programmer),
        ] {
            if !value.is_empty() {
                args.push(flag.to_string());
                args.push(value.clone());
            }
        }

        for (flag, set) in [
            ("--verify", request.verify),
            ("--verbose", request.verbose),
            ("--dry-run", request.dry_run),
        ] {
            if set {
                args.push(flag.to_string());
            }
        }

        args
    }
}

impl InstanceProvider for ProcessBackend {
    fn create_and_init(&self) -> Result<Instance> {
        if self.program.is_empty() {
            bail!("no backend program configured");
        }
        let path = which::which(&self.program)
            .with_context(|| format!("backend program '{}' not found", self.program))?;
        let instance = Instance::new(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed));
        debug!(program = %path.display(), %instance, "Backend instance ready");
        Ok(instance)
    }
}

impl UploadBackend for ProcessBackend {
    fn burn_bootloader(
        &self,
        request: BurnBootloaderRequest,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<BurnBootloaderResponse> {
        let args = self.command_args(&request);
        debug!(program = %self.program, ?args, "Spawning upload tool");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.program))?;

        let (tx, rx) = mpsc::channel();
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(spawn_reader(stdout, tx.clone(), Chunk::Out));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(spawn_reader(stderr, tx.clone(), Chunk::Err));
        }
        drop(tx);

        // Ends once both pipes are closed
        let mut sink_error = None;
        for chunk in rx {
            let written = match chunk {
                Chunk::Out(data) => out.write_all(&data).and_then(|_| out.flush()),
                Chunk::Err(data) => err.write_all(&data).and_then(|_| err.flush()),
            };
            if let Err(e) = written {
                sink_error.get_or_insert(e);
            }
        }

        for reader in readers {
            if reader.join().is_err() {
                warn!("Output reader thread panicked");
            }
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for {}", self.program))?;

        if let Some(e) = sink_error {
            return Err(e).context("Failed to forward upload tool output");
        }

        if !status.success() {
            match status.code() {
                Some(code) => bail!("{} exited with status {}", self.program, code),
                None => bail!("{} was terminated by a signal", self.program),
            }
        }

        Ok(BurnBootloaderResponse)
    }
}

fn spawn_reader<R>(
    mut pipe: R,
    tx: mpsc::Sender<Chunk>,
    wrap: fn(Vec<u8>) -> Chunk,
) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = [0u8; READ_CHUNK_SIZE];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(wrap(buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Failed to read upload tool output: {}", e);
                    break;
                }
            }
        }
    })
}

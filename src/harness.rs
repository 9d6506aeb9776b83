//! Drives the Pioneer engine subprocess through its perft protocol.
//!
//! The engine speaks line-oriented text on stdin/stdout. A run looks like:
//! wait for the `PioneerV4.0>` prompt, send `go perft <depth>`, collect
//! `token: value` lines until one contains `Total Moves: `, then send
//! `exit` and reap the process.

use std::io::{BufReader, Read, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Prompt sentinel, matched by substring containment.
pub const PROMPT: &str = "PioneerV4.0>";
/// Substring marking the end of perft output.
pub const TOTAL_SENTINEL: &str = "Total Moves: ";

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to spawn engine {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to engine stdin: {0}")]
    Write(#[source] std::io::Error),
    #[error("engine exited before completing its output")]
    EngineExited,
    #[error("timed out waiting for engine output")]
    Timeout,
    #[error("failed to wait on engine: {0}")]
    Wait(#[source] std::io::Error),
}

#[derive(Debug)]
pub struct EngineHarness {
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
    timeout: Option<Duration>,
}

impl EngineHarness {
    /// Spawns the engine with piped stdin/stdout. A reader thread frames the
    /// output into whole lines; the prompt is not newline-terminated, so it
    /// is flushed as its own line when it appears at the end of the buffer.
    pub fn spawn(program: &str) -> Result<Self, HarnessError> {
        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                program: program.to_string(),
                source,
            })?;
        let stdin = child.stdin.take().expect("stdin was piped");
        let stdout = child.stdout.take().expect("stdout was piped");

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut reader = BufReader::new(stdout);
            let mut buf: Vec<u8> = Vec::new();
            let mut byte = [0u8; 1];
            loop {
                match reader.read(&mut byte) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }
                if byte[0] == b'\n' {
                    let line = String::from_utf8_lossy(&buf)
                        .trim_end_matches('\r')
                        .to_string();
                    buf.clear();
                    if tx.send(line).is_err() {
                        return;
                    }
                } else {
                    buf.push(byte[0]);
                    if buf.ends_with(PROMPT.as_bytes()) {
                        let line = String::from_utf8_lossy(&buf).into_owned();
                        buf.clear();
                        if tx.send(line).is_err() {
                            return;
                        }
                    }
                }
            }
            if !buf.is_empty() {
                let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
            }
            // Dropping the sender signals EOF to the receiver.
        });

        Ok(Self {
            child,
            stdin,
            lines: rx,
            timeout: None,
        })
    }

    /// `None` (the default) blocks indefinitely, matching the legacy
    /// harness. With a timeout set, any single wait that exceeds it fails
    /// with [`HarnessError::Timeout`].
    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    fn next_line(&mut self) -> Result<Option<String>, HarnessError> {
        match self.timeout {
            None => Ok(self.lines.recv().ok()),
            Some(limit) => match self.lines.recv_timeout(limit) {
                Ok(line) => Ok(Some(line)),
                Err(RecvTimeoutError::Disconnected) => Ok(None),
                Err(RecvTimeoutError::Timeout) => Err(HarnessError::Timeout),
            },
        }
    }

    /// Reads until a line containing the prompt sentinel appears.
    pub fn wait_for_prompt(&mut self) -> Result<(), HarnessError> {
        loop {
            match self.next_line()? {
                Some(line) if line.contains(PROMPT) => {
                    log::debug!("prompt: {line}");
                    return Ok(());
                }
                Some(line) => log::debug!("pre-prompt: {line}"),
                None => return Err(HarnessError::EngineExited),
            }
        }
    }

    pub fn send_line(&mut self, cmd: &str) -> Result<(), HarnessError> {
        log::debug!("send: {cmd}");
        writeln!(self.stdin, "{cmd}").map_err(HarnessError::Write)?;
        self.stdin.flush().map_err(HarnessError::Write)
    }

    /// Sends `go perft <depth>` and collects the payload lines. A line
    /// containing the total sentinel ends the run normally; an empty line or
    /// end-of-stream means the engine died mid-output.
    pub fn capture_perft(&mut self, depth: u32) -> Result<Vec<String>, HarnessError> {
        self.send_line(&format!("go perft {depth}"))?;
        let mut records = Vec::new();
        loop {
            match self.next_line()? {
                None => return Err(HarnessError::EngineExited),
                Some(line) if line.is_empty() => return Err(HarnessError::EngineExited),
                Some(line) if line.contains(TOTAL_SENTINEL) => {
                    log::debug!("perft done: {line}");
                    return Ok(records);
                }
                Some(line) => records.push(line),
            }
        }
    }

    /// Requests graceful shutdown and reports the engine's exit status.
    pub fn quit(mut self) -> Result<ExitStatus, HarnessError> {
        self.send_line("exit")?;
        let status = self.child.wait().map_err(HarnessError::Wait)?;
        log::info!("engine exited with {status}");
        Ok(status)
    }
}

impl Drop for EngineHarness {
    fn drop(&mut self) {
        // Reap the child if quit() was never reached.
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

//!
//! The bounded benchmark executable invocation.
//!

use std::io::Read;
use std::path::Path;
use std::process::Child;
use std::process::Command;
use std::process::Stdio;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

use crate::issue::artifact_failure::ArtifactFailure;

///
/// Runs a benchmark executable to completion or until the wall-clock bound expires.
///
/// The standard streams are drained by helper threads while the child is running.
///
#[derive(Debug, Clone, Copy)]
pub struct Executor {
    /// The wall-clock bound.
    timeout: Duration,
}

impl Executor {
    /// The interval between the child status checks.
    const POLL_INTERVAL: Duration = Duration::from_millis(10);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    ///
    /// Runs the executable without arguments and returns its standard output.
    ///
    /// A hung executable is killed and reported as a timeout. The same bound applies to
    /// collecting its output, which a leftover background process may keep open. There are
    /// no retries.
    ///
    pub fn execute(&self, path: &Path) -> Result<String, ArtifactFailure> {
        let deadline = Instant::now() + self.timeout;
        let mut child = Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| ArtifactFailure::Spawn(error.to_string()))?;

        let stdout = Self::drain(child.stdout.take());
        let stderr = Self::drain(child.stderr.take());

        let status = self.wait(&mut child, deadline)?;
        let stdout = self.collect(stdout, deadline)?;
        let stderr = self.collect(stderr, deadline)?;

        if !status.success() {
            return Err(ArtifactFailure::ExitStatus {
                code: status.code(),
                stderr: stderr
                    .lines()
                    .rev()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .unwrap_or_default()
                    .to_owned(),
            });
        }
        if stdout.trim().is_empty() {
            return Err(ArtifactFailure::EmptyOutput);
        }
        Ok(stdout)
    }

    ///
    /// Polls the child until it exits, killing it once the bound expires.
    ///
    fn wait(
        &self,
        child: &mut Child,
        deadline: Instant,
    ) -> Result<std::process::ExitStatus, ArtifactFailure> {
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ArtifactFailure::Timeout(self.timeout));
                }
                Ok(None) => std::thread::sleep(Self::POLL_INTERVAL),
                Err(error) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ArtifactFailure::Spawn(error.to_string()));
                }
            }
        }
    }

    ///
    /// Waits for a drained stream until the deadline, abandoning the helper thread after it.
    ///
    fn collect(
        &self,
        handle: JoinHandle<String>,
        deadline: Instant,
    ) -> Result<String, ArtifactFailure> {
        while !handle.is_finished() {
            if Instant::now() >= deadline {
                return Err(ArtifactFailure::Timeout(self.timeout));
            }
            std::thread::sleep(Self::POLL_INTERVAL);
        }
        Ok(handle.join().unwrap_or_default())
    }

    ///
    /// Reads a child stream to the end on a helper thread, replacing invalid UTF-8.
    ///
    fn drain<R>(stream: Option<R>) -> JoinHandle<String>
    where
        R: Read + Send + 'static,
    {
        std::thread::spawn(move || {
            let mut buffer = Vec::new();
            if let Some(mut stream) = stream {
                let _ = stream.read_to_end(&mut buffer);
            }
            String::from_utf8_lossy(buffer.as_slice()).into_owned()
        })
    }
}

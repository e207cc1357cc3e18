use crate::{CycleProbe, mentions_cycle};
use anyhow::Context;
use camino::Utf8PathBuf;
use std::io::Read;
use std::process::{Child, ChildStderr, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);
/// Upper bound on captured stderr.
const STDERR_CAP: u64 = 1024 * 1024;

/// Runs `<program> ls --all --depth=<depth>` and inspects stderr.
#[derive(Clone, Debug)]
pub struct CommandProbe {
    pub program: String,
    pub depth: u32,
    pub working_dir: Option<Utf8PathBuf>,
    pub timeout: Duration,
    pub indicators: Vec<String>,
}

/// What the child process did, as far as the probe cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Exited { success: bool, stderr: String },
    TimedOut,
}

impl CommandProbe {
    pub fn args(&self) -> Vec<String> {
        vec![
            "ls".to_string(),
            "--all".to_string(),
            format!("--depth={}", self.depth),
        ]
    }

    /// Spawn the listing command and wait for it, killing it at the timeout.
    ///
    /// Returns by the deadline even when a grandchild keeps the stderr pipe open; whatever
    /// stderr arrived by then is what gets inspected.
    pub fn run(&self) -> anyhow::Result<CommandOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let deadline = Instant::now().checked_add(self.timeout);
        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawn {}", self.program))?;
        let stderr = child.stderr.take().context("take stderr")?;
        let chunks = spawn_stderr_reader(stderr);

        let Some(status) = wait_until(&mut child, deadline)? else {
            // The reader thread is detached; it ends once the last pipe holder exits.
            return Ok(CommandOutcome::TimedOut);
        };

        let bytes = drain_until(&chunks, deadline);
        Ok(CommandOutcome::Exited {
            success: status.success(),
            stderr: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Forward stderr in chunks, up to [`STDERR_CAP`] bytes, until EOF or the receiver is gone.
fn spawn_stderr_reader(stderr: ChildStderr) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut limited = stderr.take(STDERR_CAP);
        let mut buf = [0u8; 8 * 1024];
        loop {
            match limited.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
    });
    rx
}

/// Collect chunks until the reader hangs up or the deadline passes.
fn drain_until(chunks: &Receiver<Vec<u8>>, deadline: Option<Instant>) -> Vec<u8> {
    let mut bytes = Vec::new();
    loop {
        let next = match deadline {
            Some(d) => chunks.recv_timeout(d.saturating_duration_since(Instant::now())),
            None => chunks.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match next {
            Ok(chunk) => bytes.extend_from_slice(&chunk),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                tracing::debug!("stderr still open at the deadline; using what arrived");
                break;
            }
        }
    }
    bytes
}

impl CycleProbe for CommandProbe {
    fn detect_cycle(&self) -> bool {
        match self.run() {
            Ok(CommandOutcome::Exited { success: true, .. }) => false,
            Ok(CommandOutcome::Exited {
                success: false,
                stderr,
            }) => {
                let found = mentions_cycle(&stderr, &self.indicators);
                tracing::debug!(program = %self.program, cycle = found, "tree listing failed");
                found
            }
            Ok(CommandOutcome::TimedOut) => {
                tracing::debug!(
                    program = %self.program,
                    timeout = ?self.timeout,
                    "tree listing timed out"
                );
                false
            }
            Err(err) => {
                tracing::debug!(program = %self.program, "cycle probe skipped: {err:#}");
                false
            }
        }
    }
}

/// `Ok(None)` means the child was killed at the deadline.
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> anyhow::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait().context("try_wait child")? {
            return Ok(Some(status));
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            let _ = child.kill();
            child.wait().context("wait child after kill")?;
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

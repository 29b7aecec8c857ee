//! SENNA tagger collaborator.
//!
//! Spawns the platform-specific SENNA executable from an explicitly
//! configured installation directory, feeds it sentences on stdin, and
//! captures the tag table it writes to stdout. SENNA resolves its model
//! files relative to its own directory, so the child process runs with its
//! working directory set there; the caller's working directory is never
//! touched.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::backends::Tagger;
use crate::{Error, Result};

/// SENNA pipeline tagger.
///
/// # Example
///
/// ```rust,no_run
/// use glossa::{SennaTagger, Tagger};
///
/// let tagger = SennaTagger::new("/opt/senna");
/// let table = tagger.tag("John hit the ball.")?;
/// # Ok::<(), glossa::Error>(())
/// ```
pub struct SennaTagger {
    senna_dir: PathBuf,
    executable: PathBuf,
}

impl SennaTagger {
    /// Create a tagger for the SENNA installation at `senna_dir`.
    ///
    /// The executable name is chosen per platform: `senna-linux64` /
    /// `senna-linux32` on Linux (by pointer width), `senna-win32.exe` on
    /// Windows, `senna-osx` on macOS, plain `senna` elsewhere.
    #[must_use]
    pub fn new(senna_dir: impl Into<PathBuf>) -> Self {
        let senna_dir = senna_dir.into();
        let executable = senna_dir.join(platform_executable());
        Self {
            senna_dir,
            executable,
        }
    }

    /// Override the executable path (e.g. a custom-built binary).
    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// The executable this tagger will spawn.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn run(&self, input: &str) -> Result<String> {
        log::debug!("spawning {}", self.executable.display());
        let mut child = Command::new(&self.executable)
            .current_dir(&self.senna_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::tagger(format!(
                    "failed to spawn {}: {e}",
                    self.executable.display()
                ))
            })?;

        child
            .stdin
            .take()
            .ok_or_else(|| Error::tagger("child stdin unavailable"))?
            .write_all(input.as_bytes())
            .map_err(|e| Error::tagger(format!("failed to write input: {e}")))?;

        let output = child
            .wait_with_output()
            .map_err(|e| Error::tagger(format!("failed to read output: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tagger(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::tagger(format!("non-UTF-8 output: {e}")))
    }
}

impl Tagger for SennaTagger {
    fn tag(&self, sentence: &str) -> Result<String> {
        self.run(sentence)
    }

    fn is_available(&self) -> bool {
        self.executable.exists()
    }

    fn name(&self) -> &'static str {
        "senna"
    }
}

/// Platform-specific SENNA executable name.
fn platform_executable() -> &'static str {
    if cfg!(target_os = "linux") {
        if cfg!(target_pointer_width = "64") {
            "senna-linux64"
        } else {
            "senna-linux32"
        }
    } else if cfg!(target_os = "windows") {
        "senna-win32.exe"
    } else if cfg!(target_os = "macos") {
        "senna-osx"
    } else {
        "senna"
    }
}

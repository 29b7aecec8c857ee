//! Stanford dependency extractor collaborator.
//!
//! Runs `edu.stanford.nlp.trees.EnglishGrammaticalStructure` from the
//! Stanford parser jar over a tree file. The tool reads trees from a file,
//! so the input is staged in a scoped temporary file that is removed on
//! every exit path.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::backends::DependencyExtractor;
use crate::{Error, Result};

/// Java entry point that converts trees to (collapsed) dependencies.
const GRAMMATICAL_STRUCTURE_CLASS: &str = "edu.stanford.nlp.trees.EnglishGrammaticalStructure";

/// Stanford dependency extractor.
///
/// # Example
///
/// ```rust,no_run
/// use glossa::{DependencyExtractor, StanfordExtractor};
///
/// let extractor = StanfordExtractor::new("/opt/stanford/stanford-parser.jar");
/// let relations = extractor.extract("(S1(S(NP(PRP He))(VP(VBD ran))))")?;
/// # Ok::<(), glossa::Error>(())
/// ```
pub struct StanfordExtractor {
    parser_jar: PathBuf,
    java: PathBuf,
}

impl StanfordExtractor {
    /// Create an extractor using the given `stanford-parser.jar` and the
    /// `java` found on `PATH`.
    #[must_use]
    pub fn new(parser_jar: impl Into<PathBuf>) -> Self {
        Self {
            parser_jar: parser_jar.into(),
            java: PathBuf::from("java"),
        }
    }

    /// Override the java executable.
    #[must_use]
    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = java.into();
        self
    }
}

impl DependencyExtractor for StanfordExtractor {
    fn extract(&self, trees: &str) -> Result<String> {
        let mut staged = tempfile::NamedTempFile::new()?;
        staged.write_all(trees.as_bytes())?;
        staged.flush()?;

        log::debug!(
            "running {} -cp {} {}",
            self.java.display(),
            self.parser_jar.display(),
            GRAMMATICAL_STRUCTURE_CLASS
        );
        let output = Command::new(&self.java)
            .arg("-cp")
            .arg(&self.parser_jar)
            .arg(GRAMMATICAL_STRUCTURE_CLASS)
            .arg("-treeFile")
            .arg(staged.path())
            .arg("-collapsed")
            .output()
            .map_err(|e| {
                Error::dependency(format!("failed to run {}: {e}", self.java.display()))
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::dependency(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::dependency(format!("non-UTF-8 output: {e}")))
    }

    fn is_available(&self) -> bool {
        self.parser_jar.exists()
    }

    fn name(&self) -> &'static str {
        "stanford"
    }
}

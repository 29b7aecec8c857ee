//! # glossa
//!
//! Structured linguistic annotations from word-level tagger output.
//!
//! A SENNA-compatible tagger emits a flat, column-oriented tag table per
//! sentence. glossa decodes it into per-token part-of-speech, named-entity,
//! and chunk labels, reconstructs semantic-role argument spans per
//! predicate, rebuilds the bracketed constituency tree, and can attach a
//! dependency parse by handing that tree to a Stanford-compatible
//! extractor.
//!
//! ```text
//! raw tagger text → SentenceTagBlock → {decode_roles × predicates,
//!                   build_syntax_tree} → Annotation → (optional) dependency
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glossa::{Annotator, SennaTagger, StanfordExtractor};
//!
//! let annotator = Annotator::new(Box::new(SennaTagger::new("/opt/senna")))
//!     .with_extractor(Box::new(StanfordExtractor::new(
//!         "/opt/stanford/stanford-parser.jar",
//!     )));
//!
//! let annotation = annotator.annotate("John hit the ball.")?;
//! println!("{:?}", annotation.srl);
//! println!("{}", annotation.syntax_tree);
//! # Ok::<(), glossa::Error>(())
//! ```
//!
//! ## Decoding without the external tools
//!
//! The decoding core is pure: if you already have tagger output, no process
//! is ever spawned.
//!
//! ```rust
//! use glossa::{decode_annotation, SentenceTagBlock};
//!
//! let raw = "John\tNNP\tS-NP\tS-PER\t-\tS-A0\t(S1(S(NP*)\n\
//!            hit\tVBD\tS-VP\tO\thit\tS-V\t(VP*\n\
//!            the\tDT\tB-NP\tO\t-\tB-A1\t(NP*\n\
//!            ball\tNN\tE-NP\tO\t-\tE-A1\t*))\n\
//!            .\t.\tO\tO\t-\tO\t*))\n";
//! let block = SentenceTagBlock::parse(raw).unwrap();
//! let annotation = decode_annotation(&block);
//! assert_eq!(annotation.srl[0]["A0"], "John");
//! assert_eq!(annotation.srl[0]["A1"], "the ball");
//! ```
//!
//! ## Design Notes
//!
//! - **One decode path**: batch annotation maps over the single-sentence
//!   decode; only the alignment-checked dependency attachment differs.
//! - **Explicit configuration**: collaborator locations are passed at
//!   construction. Nothing mutates the process working directory.
//! - **Degrade, don't fail**: a misaligned dependency batch leaves every
//!   `dependency_parse` empty; an unterminated argument span is discarded
//!   at sentence end. Process-level collaborator failures, by contrast, are
//!   always surfaced as errors.

#![warn(missing_docs)]

pub mod annotation;
pub mod annotator;
pub mod backends;
mod error;
pub mod srl;
pub mod syntax;
pub mod tags;

pub use annotation::Annotation;
pub use annotator::{decode_annotation, Annotator};
pub use backends::{DependencyExtractor, SennaTagger, StanfordExtractor, Tagger};
pub use error::{Error, Result};
pub use srl::{decode_roles, RoleMap, VERB_ROLE};
pub use syntax::build_syntax_tree;
pub use tags::{split_blocks, SentenceTagBlock, TagRow};

/// A canned-response tagger for tests.
///
/// Holds pre-recorded tag tables: `tag` returns the first block, and
/// `tag_batch` returns one block per sentence, erroring if the fixture
/// holds too few.
///
/// # Example
///
/// ```rust
/// use glossa::{MockTagger, Tagger};
///
/// let tagger = MockTagger::new()
///     .with_block("He\tPRP\tS-NP\tO\t-\t(S1(S(NP*)\nran\tVBD\tS-VP\tO\t-\t(VP*)))\n");
/// let table = tagger.tag("He ran.").unwrap();
/// assert!(table.starts_with("He\t"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    blocks: Vec<String>,
}

impl MockTagger {
    /// Create a mock with no canned blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a canned tag table.
    #[must_use]
    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.blocks.push(block.into());
        self
    }
}

impl Tagger for MockTagger {
    fn tag(&self, _sentence: &str) -> Result<String> {
        self.blocks
            .first()
            .cloned()
            .ok_or_else(|| Error::tagger("mock tagger has no canned blocks"))
    }

    fn tag_batch(&self, sentences: &[&str]) -> Result<Vec<String>> {
        if sentences.len() > self.blocks.len() {
            return Err(Error::tagger(format!(
                "mock tagger has {} canned blocks for {} sentences",
                self.blocks.len(),
                sentences.len()
            )));
        }
        Ok(self.blocks[..sentences.len()].to_vec())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// A canned-response dependency extractor for tests.
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    response: String,
}

impl MockExtractor {
    /// Create a mock that replies with `response` to every call.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl DependencyExtractor for MockExtractor {
    fn extract(&self, _trees: &str) -> Result<String> {
        Ok(self.response.clone())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

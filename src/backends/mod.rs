//! External collaborator backends.
//!
//! The decoding core is pure; everything that touches a process lives here,
//! behind two traits:
//!
//! | Trait | Contract |
//! |-------|----------|
//! | [`Tagger`] | plain sentences in, tab-separated tag tables out |
//! | [`DependencyExtractor`] | bracketed trees in, dependency-relation text out |
//!
//! Batched tagger output frames sentences with a blank line, and the
//! returned block count equals the number of sentences submitted. The
//! dependency extractor frames its reply the same way, one block per input
//! tree, in submission order.
//!
//! Shipped implementations: [`SennaTagger`] (SENNA pipeline) and
//! [`StanfordExtractor`] (Stanford dependency extractor). For tests without
//! installed tools, use [`MockTagger`](crate::MockTagger) and
//! [`MockExtractor`](crate::MockExtractor).

mod senna;
mod stanford;

pub use senna::SennaTagger;
pub use stanford::StanfordExtractor;

use crate::tags::split_blocks;
use crate::Result;

/// A word-level tagger collaborator.
///
/// Opaque black box: "tagged text in, tagged text out". Implementations
/// report process-level failures as
/// [`Error::Tagger`](crate::Error::Tagger); they never silently swallow
/// them.
pub trait Tagger: Send + Sync {
    /// Tag a single sentence, returning its raw tag table.
    fn tag(&self, sentence: &str) -> Result<String>;

    /// Tag a batch of sentences in one call, returning one raw tag table
    /// per sentence, in submission order.
    ///
    /// The default implementation joins the sentences with newlines, makes
    /// a single [`tag`](Tagger::tag) call, and splits the reply on its
    /// blank-line sentence boundaries.
    fn tag_batch(&self, sentences: &[&str]) -> Result<Vec<String>> {
        let raw = self.tag(&sentences.join("\n"))?;
        Ok(split_blocks(&raw)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Whether the collaborator looks runnable (e.g. its executable exists).
    fn is_available(&self) -> bool;

    /// Short identifier for logs and CLI output.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// A constituency-tree to dependency-relations collaborator.
pub trait DependencyExtractor: Send + Sync {
    /// Convert one or more concatenated bracketed trees into
    /// dependency-relation text, one blank-line-delimited block per tree.
    fn extract(&self, trees: &str) -> Result<String>;

    /// Whether the collaborator looks runnable.
    fn is_available(&self) -> bool;

    /// Short identifier for logs and CLI output.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

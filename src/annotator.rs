//! Annotation assembly and collaborator orchestration.
//!
//! [`decode_annotation`] is the single-sentence decode path; everything else
//! maps over it. [`Annotator`] adds the two external collaborators: a
//! [`Tagger`] producing raw tag tables and an optional
//! [`DependencyExtractor`] turning constituency trees into dependency
//! relations.

use crate::annotation::Annotation;
use crate::backends::{DependencyExtractor, Tagger};
use crate::srl::{decode_roles, VERB_ROLE};
use crate::syntax::build_syntax_tree;
use crate::tags::{split_blocks, SentenceTagBlock};
use crate::Result;

/// Decode one sentence's tag block into an [`Annotation`].
///
/// One pass over the rows collects words, POS/NER/chunk pairs, and predicate
/// triggers; the span decoder then runs once per predicate column, keeping
/// only role maps that resolved a [`V`](VERB_ROLE) role; finally the
/// constituency tree is rebuilt from the syntax fragments.
/// `dependency_parse` is left empty.
#[must_use]
pub fn decode_annotation(block: &SentenceTagBlock) -> Annotation {
    let mut words = Vec::with_capacity(block.len());
    let mut pos_tags = Vec::with_capacity(block.len());
    let mut chunk_tags = Vec::with_capacity(block.len());
    let mut ner_tags = Vec::with_capacity(block.len());
    let mut verbs = Vec::new();

    for row in block.rows() {
        words.push(row.word.clone());
        pos_tags.push((row.word.clone(), row.pos.clone()));
        chunk_tags.push((row.word.clone(), row.chunk_tag.clone()));
        ner_tags.push((row.word.clone(), row.ner_tag.clone()));
        if row.is_predicate() {
            verbs.push(row.predicate_marker.clone());
        }
    }

    let srl = (0..block.predicate_columns())
        .map(|column| decode_roles(block, column))
        .filter(|role| role.contains_key(VERB_ROLE))
        .collect();

    Annotation {
        words,
        pos_tags,
        chunk_tags,
        ner_tags,
        verbs,
        srl,
        syntax_tree: build_syntax_tree(block),
        dependency_parse: String::new(),
    }
}

/// Orchestrates tagging, decoding, and optional dependency extraction.
///
/// Collaborators are supplied at construction; there is no ambient
/// working-directory or path discovery at call time.
///
/// # Example
///
/// ```rust
/// use glossa::{Annotator, MockTagger};
///
/// let tagger = MockTagger::new().with_block(
///     "John\tNNP\tS-NP\tS-PER\t-\tS-A0\t(S1(S(NP*)\n\
///      hit\tVBD\tS-VP\tO\thit\tS-V\t(VP*\n\
///      the\tDT\tB-NP\tO\t-\tB-A1\t(NP*\n\
///      ball\tNN\tE-NP\tO\t-\tE-A1\t*))\n\
///      .\t.\tO\tO\t-\tO\t*))\n",
/// );
/// let annotator = Annotator::new(Box::new(tagger));
/// let annotation = annotator.annotate("John hit the ball.").unwrap();
/// assert_eq!(annotation.srl[0]["A1"], "the ball");
/// assert_eq!(annotation.verbs, vec!["hit"]);
/// ```
pub struct Annotator {
    tagger: Box<dyn Tagger>,
    extractor: Option<Box<dyn DependencyExtractor>>,
}

impl Annotator {
    /// Create an annotator over the given tagger, without dependency
    /// extraction.
    #[must_use]
    pub fn new(tagger: Box<dyn Tagger>) -> Self {
        Self {
            tagger,
            extractor: None,
        }
    }

    /// Attach a dependency extractor; annotations will carry a
    /// `dependency_parse` when its output aligns.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn DependencyExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Tag and decode a single sentence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tagger`](crate::Error::Tagger) if the tagger
    /// process fails, a decode error if its output is malformed, and
    /// [`Error::DependencyExtractor`](crate::Error::DependencyExtractor) if
    /// an attached extractor fails.
    pub fn annotate(&self, sentence: &str) -> Result<Annotation> {
        let raw = self.tagger.tag(sentence)?;
        let block = SentenceTagBlock::parse(&raw)?;
        let mut annotation = decode_annotation(&block);
        if let Some(extractor) = &self.extractor {
            annotation.dependency_parse = extractor.extract(&annotation.syntax_tree)?.trim().to_string();
        }
        Ok(annotation)
    }

    /// Tag and decode a batch of sentences in one tagger call.
    ///
    /// The outer `Result` is the tagger collaborator boundary; the inner
    /// per-sentence `Result`s isolate decode failures so one malformed
    /// sentence never corrupts its siblings.
    ///
    /// When an extractor is attached, the trees of all successfully decoded
    /// sentences go out in a single call and the blank-line-delimited reply
    /// is split back positionally. If the reply's block count does not match
    /// the number of trees submitted, every `dependency_parse` in the batch
    /// is left empty rather than risking misattachment.
    pub fn annotate_batch(&self, sentences: &[&str]) -> Result<Vec<Result<Annotation>>> {
        let blocks = self.tagger.tag_batch(sentences)?;
        let mut results: Vec<Result<Annotation>> = blocks
            .iter()
            .map(|raw| SentenceTagBlock::parse(raw).map(|block| decode_annotation(&block)))
            .collect();

        if let Some(extractor) = &self.extractor {
            self.attach_dependencies(&mut results, extractor.as_ref())?;
        }

        Ok(results)
    }

    /// Fail-fast batch variant: the first per-sentence decode error aborts
    /// the whole batch.
    pub fn annotate_batch_strict(&self, sentences: &[&str]) -> Result<Vec<Annotation>> {
        self.annotate_batch(sentences)?.into_iter().collect()
    }

    fn attach_dependencies(
        &self,
        results: &mut [Result<Annotation>],
        extractor: &dyn DependencyExtractor,
    ) -> Result<()> {
        let trees: String = results
            .iter()
            .filter_map(|result| result.as_ref().ok())
            .map(|annotation| annotation.syntax_tree.as_str())
            .collect();
        if trees.is_empty() {
            return Ok(());
        }

        let output = extractor.extract(&trees)?;
        let dependencies = split_blocks(&output);
        let tree_count = results.iter().filter(|result| result.is_ok()).count();
        if dependencies.len() != tree_count {
            log::warn!(
                "dependency extractor returned {} blocks for {} trees; leaving dependency parses empty",
                dependencies.len(),
                tree_count
            );
            return Ok(());
        }

        for (annotation, dependency) in results
            .iter_mut()
            .filter_map(|result| result.as_mut().ok())
            .zip(dependencies)
        {
            annotation.dependency_parse = dependency.trim().to_string();
        }
        Ok(())
    }
}

//! Tag-table parsing for word-level tagger output.
//!
//! A SENNA-style tagger emits one tab-separated row per token:
//!
//! ```text
//! word  POS  chunk  NER  predicate  [SRL column per predicate...]  syntax-fragment
//! ```
//!
//! Five fixed columns lead the row and the constituency-tree fragment always
//! trails it, so the number of predicate (SRL) columns is derived from the
//! row width. Batched output separates sentences with a blank line.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Fixed (non-predicate) columns in a tagger row: word, POS, chunk, NER,
/// predicate marker, plus the trailing syntax fragment.
const FIXED_COLUMNS: usize = 6;

/// Placeholder in the predicate-marker column for non-predicate tokens.
const NO_PREDICATE: &str = "-";

/// One decoded token row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRow {
    /// Surface word.
    pub word: String,
    /// Part-of-speech tag.
    pub pos: String,
    /// Shallow-parse (chunk) tag.
    pub chunk_tag: String,
    /// Named-entity tag.
    pub ner_tag: String,
    /// Predicate-trigger marker; `-` means this token is not a predicate.
    pub predicate_marker: String,
    /// Per-predicate SRL tags, one per predicate column of the sentence.
    pub srl_tags: Vec<String>,
    /// Constituency-tree fragment with a single `*` leaf placeholder.
    pub syntax_fragment: String,
}

impl TagRow {
    /// Whether this token triggers a predicate column.
    #[must_use]
    pub fn is_predicate(&self) -> bool {
        self.predicate_marker != NO_PREDICATE
    }
}

/// Ordered tag rows for one sentence.
///
/// Insertion order is token order, and that order is load-bearing: it is the
/// only thing that lets argument spans and the constituency tree be
/// reconstructed by position.
///
/// # Example
///
/// ```rust
/// use glossa::SentenceTagBlock;
///
/// let raw = "John\tNNP\tS-NP\tS-PER\t-\tS-A0\t(S1(S(NP*)\n\
///            hit\tVBD\tS-VP\tO\thit\tS-V\t(VP*\n\
///            the\tDT\tB-NP\tO\t-\tB-A1\t(NP*\n\
///            ball\tNN\tE-NP\tO\t-\tE-A1\t*))\n\
///            .\t.\tO\tO\t-\tO\t*))\n";
/// let block = SentenceTagBlock::parse(raw).unwrap();
/// assert_eq!(block.len(), 5);
/// assert_eq!(block.predicate_columns(), 1);
/// assert!(block.rows()[1].is_predicate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceTagBlock {
    rows: Vec<TagRow>,
    predicate_columns: usize,
}

impl SentenceTagBlock {
    /// Parse one sentence's worth of raw tagger output.
    ///
    /// Rows are split on newlines and columns on tabs; every column is
    /// trimmed of surrounding whitespace. Blank rows (including the trailing
    /// sentence-boundary marker of batched output) are skipped. The number
    /// of predicate columns is `first row width - 6`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBlock`] if no non-blank rows remain, and
    /// [`Error::MalformedRow`] naming the offending row index if any row's
    /// column count disagrees with the first row's.
    pub fn parse(raw: &str) -> Result<Self> {
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let first = lines.first().ok_or(Error::EmptyBlock)?;
        let expected = first.split('\t').count();
        if expected < FIXED_COLUMNS {
            return Err(Error::MalformedRow {
                row: 0,
                expected: FIXED_COLUMNS,
                found: expected,
            });
        }
        let predicate_columns = expected - FIXED_COLUMNS;

        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
            if columns.len() != expected {
                return Err(Error::MalformedRow {
                    row,
                    expected,
                    found: columns.len(),
                });
            }
            rows.push(TagRow {
                word: columns[0].to_string(),
                pos: columns[1].to_string(),
                chunk_tag: columns[2].to_string(),
                ner_tag: columns[3].to_string(),
                predicate_marker: columns[4].to_string(),
                srl_tags: columns[5..5 + predicate_columns]
                    .iter()
                    .map(|tag| (*tag).to_string())
                    .collect(),
                // The syntax fragment is always the last column, regardless
                // of how many predicate columns precede it.
                syntax_fragment: columns[expected - 1].to_string(),
            });
        }

        Ok(Self {
            rows,
            predicate_columns,
        })
    }

    /// Tag rows in token order.
    #[must_use]
    pub fn rows(&self) -> &[TagRow] {
        &self.rows
    }

    /// Number of predicate (SRL) columns in this sentence.
    #[must_use]
    pub fn predicate_columns(&self) -> usize {
        self.predicate_columns
    }

    /// Number of tokens in this sentence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the block holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split blank-line-delimited collaborator output into per-sentence blocks.
///
/// Both collaborators frame their output this way: the tagger separates
/// sentence tables with a blank line, and the dependency extractor separates
/// per-tree relation blocks with a blank line. Trailing empty fragments
/// (from the final `\n\n`) are dropped so the block count matches the number
/// of sentences submitted.
#[must_use]
pub fn split_blocks(raw: &str) -> Vec<&str> {
    let mut blocks: Vec<&str> = raw.split("\n\n").collect();
    while blocks.last().is_some_and(|block| block.trim().is_empty()) {
        blocks.pop();
    }
    blocks
}

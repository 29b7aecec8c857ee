//! The per-sentence annotation record.

use serde::{Deserialize, Serialize};

use crate::srl::RoleMap;

/// One sentence's decoded annotations.
///
/// A standalone immutable value after construction: it owns copies of every
/// field and shares nothing with the tag rows it was decoded from.
///
/// `dependency_parse` stays empty unless dependency extraction was requested
/// and its output aligned with the batch (see
/// [`Annotator`](crate::Annotator)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Surface words in token order.
    pub words: Vec<String>,
    /// `(word, POS tag)` pairs in token order.
    pub pos_tags: Vec<(String, String)>,
    /// `(word, chunk tag)` pairs in token order.
    pub chunk_tags: Vec<(String, String)>,
    /// `(word, NER tag)` pairs in token order.
    pub ner_tags: Vec<(String, String)>,
    /// Predicate-trigger words, in token order, duplicates preserved.
    pub verbs: Vec<String>,
    /// One role map per predicate that resolved a `V` role, in
    /// predicate-column order.
    pub srl: Vec<RoleMap>,
    /// Bracketed constituency tree for the sentence.
    pub syntax_tree: String,
    /// Dependency-relation text, or empty if not requested / not aligned.
    #[serde(default)]
    pub dependency_parse: String,
}

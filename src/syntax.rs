//! Constituency-tree reconstruction from per-token syntax fragments.

use crate::tags::SentenceTagBlock;

/// Rebuild one sentence's bracketed constituency tree.
///
/// Each token's syntax fragment carries a single `*` placeholder; it is
/// replaced by the POS-tagged leaf `(pos word)` and the results are
/// concatenated in token order with no separator. No bracket balancing is
/// performed: malformed fragments propagate malformed trees.
///
/// # Example
///
/// ```rust
/// use glossa::{build_syntax_tree, SentenceTagBlock};
///
/// let raw = "He\tPRP\tS-NP\tO\t-\t(S1(S(NP*)\n\
///            ran\tVBD\tS-VP\tO\t-\t(VP*)))\n";
/// let block = SentenceTagBlock::parse(raw).unwrap();
/// assert_eq!(
///     build_syntax_tree(&block),
///     "(S1(S(NP(PRP He))(VP(VBD ran))))"
/// );
/// ```
#[must_use]
pub fn build_syntax_tree(block: &SentenceTagBlock) -> String {
    let mut tree = String::new();
    for row in block.rows() {
        let leaf = format!("({} {})", row.pos, row.word);
        tree.push_str(&row.syntax_fragment.replacen('*', &leaf, 1));
    }
    tree
}

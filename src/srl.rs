//! BIOES span decoding for semantic role labels.
//!
//! Each predicate column of a sentence carries one tag per token in a
//! BIOES-style scheme:
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | `S-<role>` | Single-token span |
//! | `B-<role>` | Span opens |
//! | `I-<role>` | Span continues |
//! | `E-<role>` | Span closes |
//! | anything else | Outside, inert |
//!
//! Roles are either two-part (`S-A0`, `E-V`) or three-part (`B-AM-TMP`),
//! in which case the map key is the joined tail (`AM-TMP`). The decoder
//! merges these tag runs into a mapping from role label to assembled
//! surface text, one pass per predicate column.

use std::collections::BTreeMap;

use crate::tags::SentenceTagBlock;

/// Mapping from semantic-role label to assembled surface text.
///
/// A `BTreeMap` keeps iteration and serialization order deterministic.
pub type RoleMap = BTreeMap<String, String>;

/// The verb/predicate role label.
///
/// A resolved `V` entry is the existence proof that a predicate column was
/// genuinely annotated; role maps without it are dropped from the final
/// annotation.
pub const VERB_ROLE: &str = "V";

/// Decode one predicate column of a sentence into a role map.
///
/// A single left-to-right pass over the tokens, carrying a pending span
/// buffer. `S-V` entries overwrite (the last verb tag in token order wins);
/// other single-token spans sharing a label concatenate left-to-right into
/// one space-separated string, as do closed multi-token spans. The buffer
/// persists across non-contiguous `B`/`I` runs until the next `E`; a span
/// left open at sentence end is silently discarded.
///
/// # Panics
///
/// Panics if `column >= block.predicate_columns()`.
pub fn decode_roles(block: &SentenceTagBlock, column: usize) -> RoleMap {
    let mut role = RoleMap::new();
    let mut pending = String::new();

    for row in block.rows() {
        let tag = row.srl_tags[column].as_str();
        let parts: Vec<&str> = tag.split('-').collect();
        match parts[0] {
            "S" => match parts.len() {
                2 if parts[1] == VERB_ROLE => {
                    role.insert(VERB_ROLE.to_string(), row.word.clone());
                }
                2 => append_role(&mut role, parts[1], &row.word),
                3 => {
                    let label = format!("{}-{}", parts[1], parts[2]);
                    append_role(&mut role, &label, &row.word);
                }
                _ => {}
            },
            "B" | "I" => push_word(&mut pending, &row.word),
            "E" => {
                push_word(&mut pending, &row.word);
                match parts.len() {
                    2 if parts[1] == VERB_ROLE => {
                        role.insert(VERB_ROLE.to_string(), pending.trim().to_string());
                    }
                    2 => append_role(&mut role, parts[1], pending.trim()),
                    3 => {
                        let label = format!("{}-{}", parts[1], parts[2]);
                        append_role(&mut role, &label, pending.trim());
                    }
                    _ => {}
                }
                // Reset regardless of label arity.
                pending.clear();
            }
            _ => {}
        }
    }

    role
}

/// Append `text` to an existing role entry, space-separated, or create it.
fn append_role(role: &mut RoleMap, label: &str, text: &str) {
    match role.get_mut(label) {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(text);
        }
        None => {
            role.insert(label.to_string(), text.to_string());
        }
    }
}

fn push_word(buffer: &mut String, word: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(word);
}

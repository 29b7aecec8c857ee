//! Integration tests for the full annotation pipeline.
//!
//! Exercises the public `Annotator` API over canned collaborator output:
//! multi-predicate sentences, batch decoding, dependency attachment, and
//! per-sentence error isolation.

use glossa::{Annotator, Error, MockExtractor, MockTagger};

/// Two-predicate SENNA-style output for
/// "He killed the man with a knife and murdered him with a dagger ."
const KNIFE_DAGGER: &str = "\
He\tPRP\tS-NP\tO\t-\tS-A0\tS-A0\t(S1(S(NP*)
killed\tVBD\tS-VP\tO\tkilled\tS-V\tO\t(VP(VP*
the\tDT\tB-NP\tO\t-\tB-A1\tO\t(NP*
man\tNN\tE-NP\tO\t-\tE-A1\tO\t*)
with\tIN\tS-PP\tO\t-\tB-A2\tO\t(PP*
a\tDT\tB-NP\tO\t-\tI-A2\tO\t(NP*
knife\tNN\tE-NP\tO\t-\tE-A2\tO\t*)))
and\tCC\tO\tO\t-\tO\tO\t*
murdered\tVBD\tS-VP\tO\tmurdered\tO\tS-V\t(VP*
him\tPRP\tS-NP\tO\t-\tO\tS-A1\t(NP*)
with\tIN\tS-PP\tO\t-\tO\tB-A2\t(PP*
a\tDT\tB-NP\tO\t-\tO\tI-A2\t(NP*
dagger\tNN\tE-NP\tO\t-\tO\tE-A2\t*))))
.\t.\tO\tO\t-\tO\tO\t*))
";

const GOOD_BOY: &str = "\
He\tPRP\tS-NP\tO\t-\tS-A0\t(S1(S(NP*)
is\tVBZ\tS-VP\tO\tis\tS-V\t(VP*
a\tDT\tB-NP\tO\t-\tB-A1\t(NP*
good\tJJ\tI-NP\tO\t-\tI-A1\t*
boy\tNN\tE-NP\tO\t-\tE-A1\t*))
.\t.\tO\tO\t-\tO\t*))
";

#[test]
fn multi_predicate_sentence_decodes_both_columns() {
    let annotator = Annotator::new(Box::new(MockTagger::new().with_block(KNIFE_DAGGER)));
    let annotation = annotator
        .annotate("He killed the man with a knife and murdered him with a dagger.")
        .unwrap();

    assert_eq!(annotation.words.len(), 14);
    assert_eq!(annotation.verbs, vec!["killed", "murdered"]);
    assert_eq!(annotation.srl.len(), 2);

    let killed = &annotation.srl[0];
    assert_eq!(killed["A0"], "He");
    assert_eq!(killed["V"], "killed");
    assert_eq!(killed["A1"], "the man");
    assert_eq!(killed["A2"], "with a knife");

    let murdered = &annotation.srl[1];
    assert_eq!(murdered["A0"], "He");
    assert_eq!(murdered["V"], "murdered");
    assert_eq!(murdered["A1"], "him");
    assert_eq!(murdered["A2"], "with a dagger");

    assert!(annotation.syntax_tree.starts_with("(S1(S(NP(PRP He))"));
    assert!(annotation.dependency_parse.is_empty());
}

#[test]
fn batch_decodes_each_sentence_independently() {
    let tagger = MockTagger::new()
        .with_block(KNIFE_DAGGER)
        .with_block(GOOD_BOY);
    let annotator = Annotator::new(Box::new(tagger));

    let results = annotator
        .annotate_batch(&["first sentence", "second sentence"])
        .unwrap();
    assert_eq!(results.len(), 2);

    let first = results[0].as_ref().unwrap();
    let second = results[1].as_ref().unwrap();
    assert_eq!(first.verbs, vec!["killed", "murdered"]);
    assert_eq!(second.verbs, vec!["is"]);
    assert_eq!(second.srl[0]["A1"], "a good boy");
}

#[test]
fn aligned_dependency_batch_attaches_in_order() {
    let tagger = MockTagger::new()
        .with_block(KNIFE_DAGGER)
        .with_block(GOOD_BOY);
    let extractor = MockExtractor::new(
        "nsubj(killed-2, He-1)\ndobj(killed-2, man-4)\n\nnsubj(is-2, He-1)\n\n",
    );
    let annotator = Annotator::new(Box::new(tagger)).with_extractor(Box::new(extractor));

    let results = annotator.annotate_batch(&["a", "b"]).unwrap();
    assert_eq!(
        results[0].as_ref().unwrap().dependency_parse,
        "nsubj(killed-2, He-1)\ndobj(killed-2, man-4)"
    );
    assert_eq!(results[1].as_ref().unwrap().dependency_parse, "nsubj(is-2, He-1)");
}

#[test]
fn misaligned_dependency_batch_degrades_to_empty() {
    let tagger = MockTagger::new()
        .with_block(KNIFE_DAGGER)
        .with_block(GOOD_BOY);
    // One dependency block for two trees: whole batch degrades.
    let extractor = MockExtractor::new("nsubj(killed-2, He-1)\n\n");
    let annotator = Annotator::new(Box::new(tagger)).with_extractor(Box::new(extractor));

    let results = annotator.annotate_batch(&["a", "b"]).unwrap();
    assert_eq!(results[0].as_ref().unwrap().dependency_parse, "");
    assert_eq!(results[1].as_ref().unwrap().dependency_parse, "");
}

#[test]
fn malformed_sentence_does_not_corrupt_siblings() {
    let ragged = "He\tPRP\tS-NP\tO\t-\tS-A0\t(S1(S(NP*)\nbroken\tVBD\n";
    let tagger = MockTagger::new().with_block(GOOD_BOY).with_block(ragged);
    // Aligned with the single surviving tree.
    let extractor = MockExtractor::new("nsubj(is-2, He-1)\n\n");
    let annotator = Annotator::new(Box::new(tagger)).with_extractor(Box::new(extractor));

    let results = annotator.annotate_batch(&["good", "bad"]).unwrap();
    let good = results[0].as_ref().unwrap();
    assert_eq!(good.verbs, vec!["is"]);
    assert_eq!(good.dependency_parse, "nsubj(is-2, He-1)");

    match results[1].as_ref().unwrap_err() {
        Error::MalformedRow { row, .. } => assert_eq!(*row, 1),
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn strict_batch_fails_fast_on_malformed_sentence() {
    let ragged = "He\tPRP\tS-NP\tO\t-\tS-A0\t(S1(S(NP*)\nbroken\tVBD\n";
    let tagger = MockTagger::new().with_block(GOOD_BOY).with_block(ragged);
    let annotator = Annotator::new(Box::new(tagger));

    assert!(annotator.annotate_batch_strict(&["good", "bad"]).is_err());
    assert!(annotator.annotate_batch_strict(&["good"]).is_ok());
}

#[test]
fn tagger_failure_surfaces_as_error() {
    let annotator = Annotator::new(Box::new(MockTagger::new()));
    assert!(matches!(
        annotator.annotate("anything"),
        Err(Error::Tagger(_))
    ));
}

#[test]
fn single_sentence_dependency_attachment_trims_output() {
    let extractor = MockExtractor::new("\nnsubj(is-2, He-1)\n\n");
    let annotator =
        Annotator::new(Box::new(MockTagger::new().with_block(GOOD_BOY)))
            .with_extractor(Box::new(extractor));

    let annotation = annotator.annotate("He is a good boy.").unwrap();
    assert_eq!(annotation.dependency_parse, "nsubj(is-2, He-1)");
}

#[test]
fn annotation_serializes_to_json_and_back() {
    let annotator = Annotator::new(Box::new(MockTagger::new().with_block(GOOD_BOY)));
    let annotation = annotator.annotate("He is a good boy.").unwrap();

    let json = serde_json::to_string(&annotation).unwrap();
    let restored: glossa::Annotation = serde_json::from_str(&json).unwrap();
    assert_eq!(annotation, restored);
}

//! Integration tests for the glossa CLI.
//!
//! Only the `decode` and `info` paths run here: they need no installed
//! SENNA or Stanford tools.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const BALL: &str = "\
John\tNNP\tS-NP\tS-PER\t-\tS-A0\t(S1(S(NP*)
hit\tVBD\tS-VP\tO\thit\tS-V\t(VP*
the\tDT\tB-NP\tO\t-\tB-A1\t(NP*
ball\tNN\tE-NP\tO\t-\tE-A1\t*))
.\t.\tO\tO\t-\tO\t*))
";

#[test]
fn decode_reads_stdin_and_emits_json() {
    Command::cargo_bin("glossa")
        .unwrap()
        .arg("decode")
        .write_stdin(BALL)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""V":"hit""#))
        .stdout(predicate::str::contains(r#""A1":"the ball""#))
        .stdout(predicate::str::contains(r#""verbs":["hit"]"#));
}

#[test]
fn decode_reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BALL.as_bytes()).unwrap();
    file.flush().unwrap();

    Command::cargo_bin("glossa")
        .unwrap()
        .arg("decode")
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""A0":"John""#));
}

#[test]
fn decode_handles_batched_blocks() {
    let batched = format!("{BALL}\n{BALL}");
    let output = Command::cargo_bin("glossa")
        .unwrap()
        .arg("decode")
        .write_stdin(batched)
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn decode_text_format_prints_tree() {
    Command::cargo_bin("glossa")
        .unwrap()
        .args(["decode", "--format", "text"])
        .write_stdin(BALL)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(S1(S(NP(NNP John))(VP(VBD hit)(NP(DT the)(NN ball)))(. .)))",
        ))
        .stdout(predicate::str::contains("verbs: hit"));
}

#[test]
fn decode_reports_malformed_rows_but_keeps_going() {
    let mixed = format!("broken\trow\n\n{BALL}");
    Command::cargo_bin("glossa")
        .unwrap()
        .arg("decode")
        .write_stdin(mixed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sentence 0"))
        .stdout(predicate::str::contains(r#""V":"hit""#));
}

#[test]
fn info_reports_missing_collaborators() {
    Command::cargo_bin("glossa")
        .unwrap()
        .args(["info", "--senna-dir", "/nonexistent/senna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("senna: missing"))
        .stdout(predicate::str::contains("stanford: not configured"));
}

#[test]
fn annotate_requires_parser_jar_with_dep_parse() {
    Command::cargo_bin("glossa")
        .unwrap()
        .args([
            "annotate",
            "--senna-dir",
            "/nonexistent/senna",
            "--dep-parse",
            "some sentence",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--parser-jar"));
}

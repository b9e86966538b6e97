use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn render_is_the_default_command() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "# Hello World!\n\n<center>hi</center>\n").unwrap();

    let mut cmd = cargo_bin_cmd!("texa");
    cmd.current_dir(dir.path()).arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("id=\"hello-world!\""))
        .stdout(predicate::str::contains("<center>\nhi </center>"));
}

#[test]
fn render_reads_stdin() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("texa");
    cmd.current_dir(dir.path())
        .args(["render", "-"])
        .write_stdin("Star <bi-star>\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<i class=\"bi bi-star\"></i>"));
}

#[test]
fn render_client_environment_renders_math() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("texa");
    cmd.current_dir(dir.path())
        .args(["-", "--env", "client"])
        .write_stdin("<math>\nx^2\n</math>\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<math"))
        .stdout(predicate::str::contains("language-math").not());
}

#[test]
fn render_writes_standalone_document() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    let output_path = dir.path().join("doc.html");
    fs::write(&input_path, "# One\n\n## Two\n").unwrap();

    let mut cmd = cargo_bin_cmd!("texa");
    cmd.current_dir(dir.path())
        .arg("render")
        .arg(input_path.as_os_str())
        .arg("--standalone")
        .arg("--toc")
        .args(["--title", "Field Notes"])
        .arg("-o")
        .arg(output_path.as_os_str());
    cmd.assert().success().stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Field Notes</title>"));
    assert!(html.contains("<nav class=\"toc\">"));
    assert!(html.contains(".pica-font {"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("texa");
    cmd.current_dir(dir.path()).arg("does-not-exist.md");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn outline_prints_json() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("texa");
    cmd.current_dir(dir.path())
        .args(["outline", "-"])
        .write_stdin("# Intro\n\ntext\n\n### Deep Dive\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(entries[0]["level"], 1);
    assert_eq!(entries[0]["slug"], "intro");
    assert_eq!(entries[1]["text"], "Deep Dive");
    assert_eq!(entries[1]["slug"], "deep-dive");
}

#[test]
fn fonts_lists_registry() {
    let mut cmd = cargo_bin_cmd!("texa");
    cmd.arg("fonts");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pica"))
        .stdout(predicate::str::contains("IM Fell DW Pica"))
        .stdout(predicate::str::contains("dmsans-font"));
}

#[test]
fn generate_css_prints_stylesheet() {
    let mut cmd = cargo_bin_cmd!("texa");
    cmd.arg("generate-css");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".code-page-break"))
        .stdout(predicate::str::contains(".geist-font {"));
}

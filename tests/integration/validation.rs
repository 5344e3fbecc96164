//! Validation messages and unrecovered failure paths

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn missing_input_prints_message_and_fails() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("style.tera", "unused")?;

    let output = project.run_yslt(&["-s", "style.tera", "missing.yaml"])?;

    assert!(!output.success);
    assert_eq!(output.stdout, "Input file missing.yaml does not exist.\n");
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn input_is_checked_before_stylesheet() -> Result<()> {
    let project = TestProject::new()?;

    // Both paths are missing; only the input message is printed.
    let output = project.run_yslt(&["-s", "nope.tera", "missing.yaml"])?;

    assert!(!output.success);
    assert_eq!(output.stdout, "Input file missing.yaml does not exist.\n");
    Ok(())
}

#[test]
fn missing_stylesheet_prints_message_and_fails() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("data.yaml", "name: world\n")?;

    let output = project.run_yslt(&["-s", "nope.tera", "data.yaml"])?;

    assert!(!output.success);
    assert_eq!(output.stdout, "Stylesheet nope.tera does not exist.\n");
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn directory_input_is_not_a_regular_file() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("style.tera", "unused")?;
    project.write_file("dir/placeholder.txt", "")?;

    let output = project.run_yslt(&["-s", "style.tera", "dir"])?;

    assert!(!output.success);
    assert_eq!(output.stdout, "Input file dir does not exist.\n");
    Ok(())
}

#[test]
fn malformed_yaml_aborts_without_rendered_output() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("style.tera", "never printed")?;
    project.write_file("bad.yaml", "a: [1, 2,\n")?;

    let output = project.run_yslt(&["-s", "style.tera", "bad.yaml"])?;

    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert!(
        output.stderr.contains("Invalid YAML"),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn template_syntax_error_aborts_before_decoding() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("broken.tera", "{% if %}")?;
    project.write_file("data.yaml", "name: world\n")?;

    let output = project.run_yslt(&["-s", "broken.tera", "data.yaml"])?;

    assert!(!output.success);
    assert_eq!(output.stdout, "");
    assert!(
        output.stderr.contains("Failed to load templates"),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn undefined_variable_leaves_diagnostic_line_on_stdout() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("style.tera", "{{ context.missing_key }}")?;
    project.write_file("data.yaml", "name: world\n")?;

    let output = project.run_yslt(&["-s", "style.tera", "data.yaml"])?;

    assert!(!output.success);
    // The diagnostic line was printed before rendering failed and stays.
    assert_eq!(output.stdout, "## {\"name\":\"world\"}\n");
    assert!(
        output.stderr.contains("Failed to render stylesheet 'style.tera'"),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn missing_include_aborts_without_rendered_body() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("style.tera", "{% include \"nope.tera\" %}BODY")?;
    project.write_file("data.yaml", "name: world\n")?;

    let output = project.run_yslt(&["-s", "style.tera", "data.yaml"])?;

    assert!(!output.success);
    assert!(!output.stdout.contains("BODY"));
    Ok(())
}

#[test]
fn usage_error_for_missing_arguments() {
    let mut cmd = Command::cargo_bin("yslt").unwrap();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn usage_error_when_stylesheet_flag_is_absent() {
    let mut cmd = Command::cargo_bin("yslt").unwrap();
    cmd.arg("data.yaml")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--stylesheet"));
}

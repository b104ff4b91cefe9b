//! Command line behavior

mod common;

use assert_cmd::Command;
use common::{fixture_path, TestProject};
use predicates::prelude::*;

fn copy_scout() -> Command {
    Command::cargo_bin("copy-scout").unwrap()
}

#[test]
fn test_json_report_on_stdout() {
    let project = TestProject::new();
    project.write("a.jsx", "const A = () => <div>Welcome home</div>;\n");
    let input = project.write("content.json", r#"{"greet": "home", "none": "absent"}"#);

    let output = copy_scout()
        .arg("--input")
        .arg(&input)
        .arg("--root")
        .arg(project.root())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "greet": [{
                "file": "a.jsx",
                "occurrences": [{
                    "lineNumber": 1,
                    "preview": "const A = () => <div>Welcome {{home}}</div>;"
                }]
            }]
        })
    );
}

#[test]
fn test_skipped_files_summarized_on_stderr() {
    let project = TestProject::from_fixture();

    copy_scout()
        .arg("--input")
        .arg(fixture_path("content.json"))
        .arg("--root")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"welcome\""))
        .stderr(predicate::str::contains(
            "skipped src/pages/Broken.jsx: syntax error at line",
        ));
}

#[test]
fn test_strict_flag_fails_run() {
    let project = TestProject::from_fixture();

    copy_scout()
        .arg("--input")
        .arg(fixture_path("content.json"))
        .arg("--root")
        .arg(project.root())
        .arg("--strict")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_text_format() {
    let project = TestProject::new();
    project.write("src/a.jsx", "const A = () => <div>Welcome home</div>;\n");

    copy_scout()
        .args(["--input", "-", "--format", "text", "--root"])
        .arg(project.root())
        .write_stdin(r#"{"greet": {"text": "home"}}"#)
        .assert()
        .success()
        .stdout("greet\n  src/a.jsx:1  const A = () => <div>Welcome {{home}}</div>;\n");
}

#[test]
fn test_missing_root_exit_code() {
    let project = TestProject::new();
    let input = project.write("content.json", r#"{"a": "b"}"#);

    copy_scout()
        .arg("--input")
        .arg(&input)
        .arg("--root")
        .arg(project.root().join("missing"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot read root directory"));
}

#[test]
fn test_bad_content_exit_code() {
    let project = TestProject::new();
    let input = project.write("content.json", r#"{"a": "x", "a": "y"}"#);

    copy_scout()
        .arg("--input")
        .arg(&input)
        .arg("--root")
        .arg(project.root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate content id"));
}

#[test]
fn test_config_file_in_root_applies() {
    let project = TestProject::new();
    project.write("src/a.jsx", "const A = () => <div>Welcome home</div>;\n");
    project.write("legacy/b.jsx", "const B = () => <div>Welcome home</div>;\n");
    project.write(
        "copy-scout.toml",
        "excluded_dirs = [\"node_modules\", \"legacy\"]\nhighlight_open = \"<<\"\nhighlight_close = \">>\"\n",
    );
    let input = project.write("content.json", r#"{"greet": "home"}"#);

    copy_scout()
        .arg("--input")
        .arg(&input)
        .arg("--root")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome <<home>>"))
        .stdout(predicate::str::contains("legacy").not());
}

#[test]
fn test_zero_jobs_rejected() {
    let project = TestProject::new();
    let input = project.write("content.json", r#"{"a": "b"}"#);

    copy_scout()
        .arg("--input")
        .arg(&input)
        .arg("--root")
        .arg(project.root())
        .args(["--jobs", "0"])
        .assert()
        .code(2);
}

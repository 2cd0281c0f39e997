//! Integration tests for dirdoc


use assert_cmd::Command;
use harness::{TestProject, run_dirdoc};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Stdio;
use std::thread;
use std::time::{Duration, Instant};

/// Poll `path` until its content satisfies `check` or the timeout passes.
fn wait_for_content(path: &Path, timeout: Duration, check: impl Fn(&str) -> bool) -> Option<String> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Ok(content) = fs::read_to_string(path) {
            if check(&content) {
                return Some(content);
            }
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn test_basic_text_output() {
    let project = TestProject::python_sample();

    let (stdout, stderr, success) =
        run_dirdoc(project.path(), &["--all-files", "--no-timestamp"]);
    assert!(success, "dirdoc should succeed: {}", stderr);

    let expected = format!(
        "\
Project Directory Structure
===========================

Summary: 2 directories, 3 files

+ {}
    + a [Python Package]
        - __init__.py [Module Initializer]
        - b.py [Python Module]
    - c.txt
",
        project.name()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_python_only_by_default() {
    let project = TestProject::python_sample();

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["--no-timestamp"]);
    assert!(success);
    assert!(stdout.contains("b.py [Python Module]"));
    assert!(!stdout.contains("c.txt"), "non-module files hidden: {}", stdout);
    // The summary still counts everything scanned
    assert!(stdout.contains("Summary: 2 directories, 3 files"));
}

#[test]
fn test_timestamp_line() {
    let project = TestProject::python_sample();

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &[]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[3].starts_with("Generated: "), "got {:?}", lines[3]);
    assert_eq!(lines[3].len(), "Generated: YYYY-MM-DD HH:MM:SS".len());
}

#[test]
fn test_no_summary() {
    let project = TestProject::python_sample();

    let (stdout, _stderr, success) =
        run_dirdoc(project.path(), &["--no-summary", "--no-timestamp"]);
    assert!(success);
    assert!(!stdout.contains("Summary:"));
    assert!(!stdout.contains("Generated:"));
}

#[test]
fn test_box_style() {
    let project = TestProject::python_sample();

    let (stdout, _stderr, success) = run_dirdoc(
        project.path(),
        &["--all-files", "--no-timestamp", "--no-summary", "-s", "box"],
    );
    assert!(success);
    let expected_tree = format!(
        "\
{}/
├── a [Python Package]
│   ├── __init__.py [Module Initializer]
│   └── b.py [Python Module]
└── c.txt
",
        project.name()
    );
    assert!(stdout.ends_with(&expected_tree), "got:\n{}", stdout);
}

#[test]
fn test_ascii_style() {
    let project = TestProject::python_sample();

    let (stdout, _stderr, success) = run_dirdoc(
        project.path(),
        &["--all-files", "--no-timestamp", "--no-summary", "--style", "ascii"],
    );
    assert!(success);
    assert!(stdout.contains("+--- a [Python Package]"), "got:\n{}", stdout);
    assert!(stdout.contains("|    \\--- b.py [Python Module]"), "got:\n{}", stdout);
    assert!(stdout.contains("\\--- c.txt"), "got:\n{}", stdout);
}

#[test]
fn test_output_file_markdown_inferred() {
    let project = TestProject::python_sample();

    let (stdout, stderr, success) = run_dirdoc(
        project.path(),
        &["-o", "docs/structure.md", "--no-timestamp"],
    );
    assert!(success, "dirdoc should succeed: {}", stderr);
    assert!(stdout.is_empty(), "nothing on stdout when writing a file");

    let content = project.read("docs/structure.md");
    assert!(content.starts_with("# Project Directory Structure\n\n"));
    assert!(content.contains("- 📦 **a** *[Python Package]*"));
    assert!(content.contains("- 📄 `b.py` *[Python Module]*"));
    assert!(content.contains("\n```\n- 📁 **"), "body is fenced: {}", content);
    assert!(content.ends_with("```\n"));
}

#[test]
fn test_output_file_text_flag_wins() {
    let project = TestProject::python_sample();

    let (_stdout, _stderr, success) =
        run_dirdoc(project.path(), &["-o", "tree.md", "--text"]);
    assert!(success);
    let content = project.read("tree.md");
    assert!(content.starts_with("Project Directory Structure\n==="));
}

#[test]
fn test_output_file_is_not_listed_after_rerun() {
    let project = TestProject::python_sample();

    let (_, _, success) = run_dirdoc(project.path(), &["-o", "tree.txt", "--all-files"]);
    assert!(success);
    let (_, _, success) = run_dirdoc(
        project.path(),
        &["-o", "tree.txt", "--all-files", "-I", "tree.txt"],
    );
    assert!(success);
    assert!(!project.read("tree.txt").contains("- tree.txt"));
}

#[test]
fn test_markdown_stdout() {
    let project = TestProject::python_sample();

    Command::cargo_bin("dirdoc")
        .expect("binary built")
        .current_dir(project.path())
        .args(["-m", "-s", "box", "--no-timestamp", "--all-files"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Project Directory Structure"))
        .stdout(predicate::str::contains("```\n"))
        .stdout(predicate::str::contains("├── a [Python Package]"))
        .stdout(predicate::str::contains("└── c.txt"));
}

#[test]
fn test_markdown_stdout_module_only_last_child() {
    let project = TestProject::python_sample();

    // c.txt is filtered out, so the package is the last visible child
    Command::cargo_bin("dirdoc")
        .expect("binary built")
        .current_dir(project.path())
        .args(["-m", "-s", "box", "--no-timestamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── a [Python Package]"))
        .stdout(predicate::str::contains("c.txt").not());
}

#[test]
fn test_exclude_replaces_configured_patterns() {
    let project = TestProject::python_sample();
    project.add_file("venv/lib.py", "");
    project.add_file("build/out.py", "");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["-I", "build"]);
    assert!(success);
    assert!(!stdout.contains("build"), "excluded: {}", stdout);
    // Default patterns no longer apply once -I is given
    assert!(stdout.contains("venv"), "got: {}", stdout);
}

#[test]
fn test_exclude_pattern_with_comma_is_one_pattern() {
    let project = TestProject::python_sample();
    project.add_file("a,b.py", "");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["-I", "a,b.py"]);
    assert!(success);
    assert!(!stdout.contains("a,b.py"), "got: {}", stdout);
    assert!(stdout.contains("+ a [Python Package]"), "got: {}", stdout);
    assert!(stdout.contains("- b.py [Python Module]"), "got: {}", stdout);
}

#[test]
fn test_default_exclusions() {
    let project = TestProject::python_sample();
    project.add_file("a/__pycache__/b.cpython-312.pyc", "");
    project.add_file("stale.pyc", "");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["--all-files"]);
    assert!(success);
    assert!(!stdout.contains("__pycache__"));
    assert!(!stdout.contains("stale.pyc"));
}

#[test]
fn test_wildcard_exclude() {
    let project = TestProject::python_sample();
    project.add_file("test_a.py", "");
    project.add_file("test_b.py", "");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["-I", "test_*"]);
    assert!(success);
    assert!(!stdout.contains("test_a.py"));
    assert!(!stdout.contains("test_b.py"));
    assert!(stdout.contains("b.py"));
}

#[test]
fn test_depth_limit() {
    let project = TestProject::new();
    project.add_file("top.py", "");
    project.add_file("level1/mid.py", "");
    project.add_file("level1/level2/deep.py", "");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["-L", "2"]);
    assert!(success);
    assert!(stdout.contains("top.py"));
    assert!(stdout.contains("level1"));
    assert!(stdout.contains("mid.py"));
    assert!(!stdout.contains("deep.py"), "too deep: {}", stdout);
}

#[test]
fn test_hidden_entries() {
    let project = TestProject::python_sample();
    project.add_file(".secret/x.py", "");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &[]);
    assert!(success);
    assert!(!stdout.contains(".secret"));

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["-a"]);
    assert!(success);
    assert!(stdout.contains(".secret"), "shown with -a: {}", stdout);
}

#[test]
fn test_empty_dirs() {
    let project = TestProject::python_sample();
    project.add_dir("empty");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["--all-files"]);
    assert!(success);
    assert!(stdout.contains("- empty"));

    let (stdout, _stderr, success) =
        run_dirdoc(project.path(), &["--all-files", "--no-empty-dirs"]);
    assert!(success);
    assert!(!stdout.contains("empty"), "got: {}", stdout);
}

#[test]
fn test_settings_file_discovered() {
    let project = TestProject::python_sample();
    project.add_file(
        "dirdoc.toml",
        "python_files_only = false\ninclude_timestamp = false\ntree_style = \"box_drawing\"\n",
    );

    let (stdout, stderr, success) = run_dirdoc(project.path(), &[]);
    assert!(success, "dirdoc should succeed: {}", stderr);
    assert!(!stdout.contains("Generated:"));
    assert!(stdout.contains("├── c.txt"), "got: {}", stdout);
    assert!(stdout.contains("└── dirdoc.toml"), "got: {}", stdout);
}

#[test]
fn test_settings_file_output_path() {
    let project = TestProject::python_sample();
    project.add_file(
        "dirdoc.toml",
        "output_path = \"docs\"\noutput_file_name = \"layout.md\"\n",
    );

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &[]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(project.read("docs/layout.md").starts_with("# Project Directory Structure"));
}

#[test]
fn test_cli_flags_override_settings_file() {
    let project = TestProject::python_sample();
    project.add_file("dirdoc.toml", "python_files_only = false\n");

    let (stdout, _stderr, success) = run_dirdoc(project.path(), &["-p"]);
    assert!(success);
    assert!(!stdout.contains("c.txt"));
}

#[test]
fn test_explicit_config_file() {
    let project = TestProject::python_sample();
    let config = project.add_file("settings/custom.toml", "include_file_count = false\n");

    let (stdout, _stderr, success) =
        run_dirdoc(project.path(), &["-c", &config.to_string_lossy()]);
    assert!(success);
    assert!(!stdout.contains("Summary:"));
}

#[test]
fn test_invalid_settings_file() {
    let project = TestProject::python_sample();
    project.add_file("dirdoc.toml", "tree_style = \"fancy\"\n");

    let (_stdout, stderr, success) = run_dirdoc(project.path(), &[]);
    assert!(!success);
    assert!(stderr.contains("dirdoc: invalid settings file"), "got: {}", stderr);
}

#[test]
fn test_multiple_roots() {
    let project = TestProject::new();
    project.add_file("one/a.py", "");
    project.add_file("two/b.py", "");

    let (stdout, _stderr, success) =
        run_dirdoc(project.path(), &["one", "two", "--no-timestamp"]);
    assert!(success);
    assert!(stdout.contains("Summary: 2 directories, 2 files"));
    let one = stdout.find("+ one").expect("first root");
    let two = stdout.find("+ two").expect("second root");
    assert!(one < two);
}

#[test]
fn test_watch_rejects_bad_debounce() {
    let project = TestProject::python_sample();

    Command::cargo_bin("dirdoc")
        .expect("binary built")
        .current_dir(project.path())
        .args(["--watch", "--debounce", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --debounce"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let project = TestProject::python_sample();

    let (stdout, stderr, success) = run_dirdoc(project.path(), &["-o", "out.txt", "-v"]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("out.txt"), "info log mentions output: {}", stderr);
}

#[test]
fn test_watch_regenerates_after_change() {
    let project = TestProject::python_sample();
    let output = project.path().join("out.txt");

    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_dirdoc"))
        .args(["--watch", "--debounce", "200ms", "-o", "out.txt", "--all-files"])
        .current_dir(project.path())
        .env_remove("DIRDOC_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start dirdoc");

    let initial = wait_for_content(&output, Duration::from_secs(10), |c| c.contains("b.py"));
    // The watcher is registered right after the first write
    thread::sleep(Duration::from_millis(500));
    project.add_file("a/fresh.py", "");
    project.add_file("a/second.py", "");
    let updated = wait_for_content(&output, Duration::from_secs(10), |c| {
        c.contains("fresh.py") && c.contains("second.py")
    });

    child.kill().ok();
    child.wait().ok();

    let initial = initial.expect("initial document written");
    assert!(!initial.contains("fresh.py"));
    let updated = updated.expect("document rewritten after the change");
    // The rewrite also sees out.txt from the first pass
    assert!(updated.contains("Summary: 2 directories, 6 files"), "got: {}", updated);
}

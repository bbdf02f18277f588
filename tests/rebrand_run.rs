use std::fs;
use std::path::Path;

use rebrand::defaults::{builtin_defaults, load_config};
use rebrand::rebrand::{rewrite_file, run, FileOutcome, RunOptions, RunReport};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn run_builtin(base: &Path) -> RunReport {
    run(base, &builtin_defaults(), RunOptions::default(), |_| {}).unwrap()
}

fn updated_paths(report: &RunReport) -> Vec<String> {
    report
        .updated()
        .map(|f| f.path.replace('\\', "/"))
        .collect()
}

#[test]
fn contact_email_becomes_hello_address() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/about.md", "Contact: james@jamesspalding.org");

    let report = run_builtin(dir.path());

    assert_eq!(read(dir.path(), "src/about.md"), "Contact: hello@openclaw.io");
    assert_eq!(updated_paths(&report), vec!["src/about.md"]);
}

#[test]
fn single_occurrence_changes_nothing_else() {
    let dir = TempDir::new().unwrap();
    let original = "line one\n  visit jamesspalding.com today  \n\tline three\n";
    write(dir.path(), "src/page.tsx", original);

    run_builtin(dir.path());

    assert_eq!(
        read(dir.path(), "src/page.tsx"),
        original.replace("jamesspalding.com", "openclaw.io")
    );
}

#[test]
fn files_without_keys_are_not_touched() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/plain.css", "body { color: red; }\n");
    let path = dir.path().join("src/plain.css");
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let report = run_builtin(dir.path());

    assert_eq!(read(dir.path(), "src/plain.css"), "body { color: red; }\n");
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    assert_eq!(report.updated().count(), 0);
    assert_eq!(report.summary.unchanged, 1);
}

#[test]
fn node_modules_is_never_modified_at_any_depth() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/node_modules/lib/index.js", "jamesspalding");
    write(dir.path(), "src/app/node_modules/x/readme.md", "James Spalding");
    write(dir.path(), "src/.next/build.json", "jamesspalding.org");
    write(dir.path(), "src/.git/HEAD.yml", "jamesspalding");

    let report = run_builtin(dir.path());

    assert_eq!(read(dir.path(), "src/node_modules/lib/index.js"), "jamesspalding");
    assert_eq!(read(dir.path(), "src/app/node_modules/x/readme.md"), "James Spalding");
    assert_eq!(read(dir.path(), "src/.next/build.json"), "jamesspalding.org");
    assert_eq!(read(dir.path(), "src/.git/HEAD.yml"), "jamesspalding");
    assert_eq!(report.summary.scanned, 0);
}

#[test]
fn unrecognized_extensions_under_root_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/script.py", "jamesspalding");
    write(dir.path(), "src/data.yaml", "jamesspalding");

    run_builtin(dir.path());

    assert_eq!(read(dir.path(), "src/script.py"), "jamesspalding");
    assert_eq!(read(dir.path(), "src/data.yaml"), "openclaw");
}

#[test]
fn second_run_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/content/bio.md",
        "James Spalding | james@jamesspalding.org | https://jamesspalding.org",
    );
    write(dir.path(), "README.md", "# jamesspalding.com");

    let first = run_builtin(dir.path());
    let after_first = (read(dir.path(), "src/content/bio.md"), read(dir.path(), "README.md"));

    let second = run_builtin(dir.path());

    assert_eq!(first.summary.updated, 2);
    assert_eq!(second.summary.updated, 0);
    assert_eq!(
        (read(dir.path(), "src/content/bio.md"), read(dir.path(), "README.md")),
        after_first
    );
    assert_eq!(
        after_first.0,
        "OpenClaw | hello@openclaw.io | https://openclaw.io"
    );
}

#[test]
fn root_package_json_is_processed_and_converges_when_seen_twice() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "package.json", r#"{"author": "James Spalding"}"#);

    let report = run_builtin(dir.path());
    assert_eq!(updated_paths(&report), vec!["package.json"]);

    // processing the same path again directly yields the same content
    let map = builtin_defaults().replacement_map().unwrap();
    let outcome = rewrite_file(&dir.path().join("package.json"), &map, false);

    assert_eq!(outcome, FileOutcome::Unchanged);
    assert_eq!(read(dir.path(), "package.json"), r#"{"author": "OpenClaw"}"#);
}

#[test]
fn failing_file_does_not_stop_the_run() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a_broken.json"), [0xff, 0xfe, 0xfd]).unwrap();
    write(dir.path(), "src/b_fine.md", "jamesspalding");

    let mut lines = Vec::new();
    let report = run(dir.path(), &builtin_defaults(), RunOptions::default(), |entry| {
        lines.push((entry.path.replace('\\', "/"), entry.outcome.as_str()));
    })
    .unwrap();

    assert_eq!(
        lines,
        vec![
            ("src/a_broken.json".to_string(), "error"),
            ("src/b_fine.md".to_string(), "updated"),
        ]
    );
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.failed().count(), 1);
    assert_eq!(read(dir.path(), "src/b_fine.md"), "openclaw");
}

#[test]
fn missing_walk_root_is_fatal() {
    let dir = TempDir::new().unwrap();

    let err = run(dir.path(), &builtin_defaults(), RunOptions::default(), |_| {}).unwrap_err();

    assert_eq!(err.code.as_str(), "walk.root_not_found");
}

#[test]
fn project_config_overrides_mapping_and_root() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "rebrand.json",
        r#"{"defaults": {"root": "app", "root_files": [], "replacements": [{"from": "Acme", "to": "Zenith"}]}}"#,
    );
    write(dir.path(), "app/home.tsx", "<h1>Acme</h1>");
    write(dir.path(), "src/ignored.tsx", "<h1>Acme</h1>");

    let config = load_config(dir.path(), None).unwrap();
    let report = run(dir.path(), &config.defaults, RunOptions::default(), |_| {}).unwrap();

    assert_eq!(read(dir.path(), "app/home.tsx"), "<h1>Zenith</h1>");
    assert_eq!(read(dir.path(), "src/ignored.tsx"), "<h1>Acme</h1>");
    assert_eq!(report.root, "app");
}

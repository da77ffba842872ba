use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// cargo_bin works on every assert_cmd 2.x, the macro replacing it does not
/// Runs `binder` from inside `dir`, so no stray binder.toml is picked up
#[allow(deprecated)]
fn binder(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("binder").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn docs_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("GettingStarted.md"), "# Install\n\nRun `make`.\n").unwrap();
    fs::write(dir.path().join("API.md"), "```rust\nfn call() {}\n```\n").unwrap();
    fs::write(dir.path().join("README.md"), "repo readme").unwrap();
    fs::write(dir.path().join("_sidebar.md"), "* nav").unwrap();
    dir
}

mod collect {
    use super::*;

    #[test]
    fn reports_file_count() {
        let dir = docs_dir();

        binder(dir.path())
            .arg("collect")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Combined 2 markdown files into"));

        let combined = fs::read_to_string(dir.path().join("CombinedDocs.md")).unwrap();
        assert!(combined.starts_with("# FishNet Documentation\n\n"));
        let api = combined.find("# A P I").unwrap();
        let started = combined.find("# Getting Started").unwrap();
        assert!(api < started);
        assert!(!combined.contains("repo readme"));
    }

    #[test]
    fn runs_are_identical() {
        let dir = docs_dir();

        binder(dir.path()).arg("collect").assert().success();
        let first = fs::read(dir.path().join("CombinedDocs.md")).unwrap();
        binder(dir.path()).arg("collect").assert().success();
        let second = fs::read(dir.path().join("CombinedDocs.md")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_directory_reports_zero() {
        let dir = TempDir::new().unwrap();

        binder(dir.path())
            .arg("collect")
            .assert()
            .success()
            .stdout(predicate::str::contains("Combined 0 markdown files"));

        let combined = fs::read_to_string(dir.path().join("CombinedDocs.md")).unwrap();
        assert_eq!(combined, "# FishNet Documentation\n\n");
    }

    #[test]
    fn missing_directory_fails() {
        let dir = TempDir::new().unwrap();

        binder(dir.path())
            .args(["collect", "--source", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot read source directory"));

        assert!(!dir.path().join("nope").exists());
    }

    #[test]
    fn project_name_from_env() {
        let dir = docs_dir();

        binder(dir.path())
            .arg("collect")
            .env("BINDER_PROJECT__NAME", "Acme")
            .assert()
            .success();

        let combined = fs::read_to_string(dir.path().join("CombinedDocs.md")).unwrap();
        assert!(combined.starts_with("# Acme Documentation\n\n"));
    }
}

mod render {
    use super::*;

    #[test]
    fn missing_combined_document_fails() {
        let dir = docs_dir();

        binder(dir.path())
            .arg("render")
            .assert()
            .failure()
            .stderr(predicate::str::contains("combined document not found"));

        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn renders_after_collect() {
        let dir = docs_dir();

        binder(dir.path()).arg("collect").assert().success();
        binder(dir.path())
            .args(["render", "--no-highlight"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Markdown successfully embedded into"));

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>FishNet Docs</title>"));
        assert!(html.contains("<h1>Getting Started</h1>"));
        assert!(html.contains("<code class=\"language-rust\">"));
    }

    #[test]
    fn unknown_theme_fails() {
        let dir = docs_dir();

        binder(dir.path()).arg("collect").assert().success();
        binder(dir.path())
            .args(["render", "--theme", "does-not-exist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown syntax theme"));
    }
}

mod build {
    use super::*;

    #[test]
    fn collects_then_renders() {
        let dir = docs_dir();
        fs::write(
            dir.path().join("binder.toml"),
            "[project]\nname = \"Acme\"\ntitle = \"Acme Handbook\"\n",
        )
        .unwrap();

        binder(dir.path())
            .args(["build", "--output", "docs.html"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Combined 2 markdown files"))
            .stdout(predicate::str::contains("Markdown successfully embedded into"));

        let html = fs::read_to_string(dir.path().join("docs.html")).unwrap();
        assert!(html.contains("<title>Acme Handbook</title>"));
        assert!(html.contains("<h1>Acme Documentation</h1>"));
        // syntect output for the rust block
        assert!(html.contains("<pre style="));
    }

    #[test]
    fn requires_a_subcommand() {
        let dir = TempDir::new().unwrap();

        binder(dir.path()).assert().failure();
    }
}

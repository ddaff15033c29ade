//! Integration tests for the Jotter CLI against temporary notes files.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Path of the notes file inside a test directory.
fn notes_path(dir: &TempDir) -> PathBuf {
    dir.path().join("notes.json")
}

fn jotter_command(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jotter"));
    cmd.current_dir(dir.path())
        // Keep the user's real config out of the picture.
        .env("JOTTER_CONFIG", dir.path().join("missing-config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Run jotter with `args` and return (stdout, stderr, exit code).
fn run_jotter(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = jotter_command(dir)
        .args(args)
        .output()
        .expect("Failed to execute jotter");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run the interactive menu with `script` piped to stdin.
fn run_shell(dir: &TempDir, script: &str) -> (String, String, i32) {
    let mut child = jotter_command(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn jotter");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn read_notes(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

mod add_command {
    use super::*;

    #[test]
    fn add_creates_file() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_jotter(&dir, &["add", "Buy milk"]);

        assert_eq!(code, 0);
        assert!(stdout.contains("Note #1 added."));

        let notes = read_notes(&notes_path(&dir));
        assert_eq!(notes.as_array().unwrap().len(), 1);
        assert_eq!(notes[0]["text"], "Buy milk");
        assert_eq!(notes[0]["created"].as_str().unwrap().len(), 19);
    }

    #[test]
    fn add_blank_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (_, stderr, code) = run_jotter(&dir, &["add", "   "]);

        assert_eq!(code, 3); // INVALID_INPUT
        assert!(stderr.contains("cannot be empty"));
        assert!(!notes_path(&dir).exists());
    }

    #[test]
    fn add_keeps_non_ascii_unescaped() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "Купить молоко"]);

        let raw = std::fs::read_to_string(notes_path(&dir)).unwrap();
        assert!(raw.contains("Купить молоко"));
        assert!(raw.contains("\n  {\n    \"text\""));
    }

    #[test]
    fn add_json_output() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_jotter(&dir, &["--json", "add", "hello"]);

        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["number"], 1);
        assert_eq!(value["note"]["text"], "hello");
    }
}

mod list_command {
    use super::*;

    #[test]
    fn list_empty() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_jotter(&dir, &["list"]);

        assert_eq!(code, 0);
        assert!(stdout.contains("The note list is empty."));
    }

    #[test]
    fn list_json() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "one"]);
        run_jotter(&dir, &["add", "two"]);

        let (stdout, _, code) = run_jotter(&dir, &["list", "--json"]);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["notes"][1]["number"], 2);
        assert_eq!(value["notes"][1]["text"], "two");
    }

    #[test]
    fn list_empty_json_total() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_jotter(&dir, &["--json", "list"]);

        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["notes"], serde_json::json!([]));
    }

    #[test]
    fn list_corrupt_file_warns_and_is_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(notes_path(&dir), "{ not json").unwrap();

        let (stdout, stderr, code) = run_jotter(&dir, &["list"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("The note list is empty."));
        assert!(stderr.contains("Failed to load notes"));
    }

    #[test]
    fn count_reports_total() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "one"]);

        let (stdout, _, code) = run_jotter(&dir, &["count"]);
        assert_eq!(code, 0);
        assert_eq!(stdout.trim(), "1");
    }

    #[test]
    fn file_flag_overrides_default() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["--file", "other.json", "add", "elsewhere"]);

        assert!(dir.path().join("other.json").exists());
        assert!(!notes_path(&dir).exists());
    }
}

mod delete_command {
    use super::*;

    #[test]
    fn delete_existing() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "only"]);

        let (stdout, _, code) = run_jotter(&dir, &["delete", "1"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("Note #1 deleted."));
        assert_eq!(read_notes(&notes_path(&dir)), serde_json::json!([]));
    }

    #[test]
    fn delete_not_found() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "only"]);

        let (_, stderr, code) = run_jotter(&dir, &["delete", "2"]);
        assert_eq!(code, 2); // NOTE_NOT_FOUND
        assert!(stderr.contains("Note #2 not found"));
    }

    #[test]
    fn delete_non_numeric() {
        let dir = TempDir::new().unwrap();
        let (_, stderr, code) = run_jotter(&dir, &["delete", "abc"]);

        assert_eq!(code, 3);
        assert!(stderr.contains("Not a valid note number"));
    }
}

mod search_command {
    use super::*;

    fn seed(dir: &TempDir) {
        for text in ["Buy milk", "Call mom", "milk shake"] {
            run_jotter(dir, &["add", text]);
        }
    }

    #[test]
    fn search_case_insensitive() {
        let dir = TempDir::new().unwrap();
        seed(&dir);

        let (stdout, _, code) = run_jotter(&dir, &["--json", "search", "MILK"]);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let numbers: Vec<u64> = value["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["number"].as_u64().unwrap())
            .collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn search_no_results() {
        let dir = TempDir::new().unwrap();
        seed(&dir);

        let (stdout, _, code) = run_jotter(&dir, &["search", "bread"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("Nothing found."));
    }

    #[test]
    fn search_blank_keyword() {
        let dir = TempDir::new().unwrap();
        let (_, _, code) = run_jotter(&dir, &["search", "  "]);
        assert_eq!(code, 3);
    }
}

mod clear_command {
    use super::*;

    #[test]
    fn clear_empty_store_leaves_disk_alone() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_jotter(&dir, &["clear"]);

        assert_eq!(code, 0);
        assert!(stdout.contains("No notes to delete."));
        assert!(!notes_path(&dir).exists());
    }

    #[test]
    fn clear_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "keep me"]);

        let (_, stderr, code) = run_jotter(&dir, &["clear"]);
        assert_eq!(code, 1);
        assert!(stderr.contains("--yes"));

        let (_, _, code) = run_jotter(&dir, &["clear", "--yes"]);
        assert_eq!(code, 0);
        assert_eq!(read_notes(&notes_path(&dir)), serde_json::json!([]));
    }
}

mod shell {
    use super::*;

    #[test]
    fn shell_session_persists_notes() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_shell(&dir, "1\nBuy milk\n1\nCall mom\n3\n1\n0\n");

        assert_eq!(code, 0);
        assert!(stdout.contains("Note #2 added."));
        assert!(stdout.contains("Note #1 deleted."));

        let notes = read_notes(&notes_path(&dir));
        assert_eq!(notes.as_array().unwrap().len(), 1);
        assert_eq!(notes[0]["text"], "Call mom");
    }

    #[test]
    fn shell_reports_loaded_count() {
        let dir = TempDir::new().unwrap();
        run_jotter(&dir, &["add", "a"]);
        run_jotter(&dir, &["add", "b"]);

        let (stdout, _, code) = run_shell(&dir, "0\n");
        assert_eq!(code, 0);
        assert!(stdout.contains("Notes loaded: 2"));
        assert!(stdout.contains("Goodbye!"));
    }

    #[test]
    fn shell_exits_cleanly_on_eof() {
        let dir = TempDir::new().unwrap();
        let (stdout, _, code) = run_shell(&dir, "2\n");

        assert_eq!(code, 0);
        assert!(stdout.contains("Goodbye!"));
    }
}

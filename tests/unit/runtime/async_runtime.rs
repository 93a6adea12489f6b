use super::*;
use std::io::Write;
use std::sync::mpsc;
use std::time::Duration;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn read_file_delivers_content_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.html");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"<p>A</p>")
        .unwrap();

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.read_file("a.html".to_string(), path.clone());

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        AppMessage::FileRead {
            name,
            path: got_path,
            size,
            content,
        } => {
            assert_eq!(name, "a.html");
            assert_eq!(got_path, path);
            assert_eq!(size, 8);
            assert_eq!(content, "<p>A</p>");
        }
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn read_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.html");

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.read_file("gone.html".to_string(), path);

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        AppMessage::FileReadError { name, error, .. } => {
            assert_eq!(name, "gone.html");
            assert!(!error.is_empty());
        }
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn load_dir_lists_entries_without_hidden_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::File::create(dir.path().join("a.html")).unwrap();
    std::fs::File::create(dir.path().join(".hidden")).unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.load_dir(dir.path().to_path_buf());

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        AppMessage::DirLoaded { entries, .. } => {
            let mut names: Vec<_> = entries.iter().map(|e| e.name.clone()).collect();
            names.sort();
            assert_eq!(names, ["a.html", "sub"]);
            assert!(entries.iter().any(|e| e.name == "sub" && e.is_dir));
        }
        other => panic!("unexpected message {other:?}"),
    }
}

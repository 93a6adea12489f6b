use super::*;
use crate::kernel::notice::Severity;
use crate::kernel::picker::PickerEntry;
use crate::kernel::viewer::DEFAULT_VIEWER_TITLE;
use std::time::Duration;

fn store() -> Store {
    Store::new(KernelConfig::default(), PathBuf::from("/tmp"))
}

fn submit(store: &mut Store, paths: &[&str]) -> Vec<Effect> {
    store
        .dispatch(Action::SubmitPaths(
            paths.iter().map(PathBuf::from).collect(),
        ))
        .effects
}

fn complete_read(store: &mut Store, name: &str, content: &str) {
    store.dispatch(Action::FileRead {
        name: name.to_string(),
        size: content.len() as u64,
        content: content.to_string(),
    });
}

fn stage(store: &mut Store, name: &str, content: &str) -> RecordId {
    let effects = submit(store, &[&format!("/tmp/{name}")]);
    assert_eq!(effects.len(), 1);
    complete_read(store, name, content);
    store
        .state()
        .registry
        .find_by_name(name)
        .map(|r| r.id)
        .unwrap()
}

fn severities(store: &Store) -> Vec<Severity> {
    store.state().notices.iter().map(|n| n.severity).collect()
}

#[test]
fn non_html_batch_produces_one_error_and_no_effects() {
    let mut store = store();
    let effects = submit(&mut store, &["/tmp/b.txt"]);

    assert!(effects.is_empty());
    assert!(store.state().registry.is_empty());
    assert_eq!(severities(&store), [Severity::Error]);
}

#[test]
fn mixed_batch_reads_only_html_files() {
    let mut store = store();
    let effects = submit(&mut store, &["/tmp/a.html", "/tmp/b.txt", "/tmp/c.HTM"]);

    let names: Vec<_> = effects
        .iter()
        .map(|e| match e {
            Effect::ReadFile { name, .. } => name.as_str(),
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(names, ["a.html", "c.HTM"]);
    assert_eq!(store.state().pending_reads, 2);
    // Rejected members of a non-empty accepted batch are silent.
    assert!(store.state().notices.is_empty());
}

#[test]
fn completed_read_appends_record_and_notifies_success() {
    let mut store = store();
    stage(&mut store, "a.html", "<p>A</p>");

    let record = store.state().registry.find_by_name("a.html").unwrap();
    assert_eq!(record.size, 8);
    assert_eq!(&*record.content, "<p>A</p>");
    assert_eq!(store.state().pending_reads, 0);
    assert_eq!(severities(&store), [Severity::Success]);
}

#[test]
fn resubmitting_existing_name_warns_and_keeps_original() {
    let mut store = store();
    stage(&mut store, "a.html", "<p>A</p>");

    let effects = submit(&mut store, &["/tmp/a.html"]);
    assert!(effects.is_empty());
    assert_eq!(store.state().registry.len(), 1);
    assert_eq!(
        &*store.state().registry.find_by_name("a.html").unwrap().content,
        "<p>A</p>"
    );
    assert_eq!(severities(&store), [Severity::Success, Severity::Warning]);
}

#[test]
fn same_name_race_within_batch_is_resolved_at_append() {
    let mut store = store();
    let effects = submit(&mut store, &["/tmp/one/x.html", "/tmp/two/x.html"]);
    assert_eq!(effects.len(), 2);

    complete_read(&mut store, "x.html", "first");
    complete_read(&mut store, "x.html", "second");

    assert_eq!(store.state().registry.len(), 1);
    assert_eq!(
        &*store.state().registry.find_by_name("x.html").unwrap().content,
        "first"
    );
    assert_eq!(severities(&store), [Severity::Success, Severity::Warning]);
    assert_eq!(store.state().pending_reads, 0);
}

#[test]
fn failed_read_creates_no_record() {
    let mut store = store();
    submit(&mut store, &["/tmp/a.html"]);
    store.dispatch(Action::FileReadFailed {
        name: "a.html".to_string(),
        error: "permission denied".to_string(),
    });

    assert!(store.state().registry.is_empty());
    assert_eq!(store.state().pending_reads, 0);
    assert_eq!(severities(&store), [Severity::Error]);
}

#[test]
fn registry_order_is_completion_order() {
    let mut store = store();
    submit(&mut store, &["/tmp/a.html", "/tmp/b.html"]);
    // b's read completes first.
    complete_read(&mut store, "b.html", "b");
    complete_read(&mut store, "a.html", "a");

    let names: Vec<_> = store
        .state()
        .registry
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, ["b.html", "a.html"]);
}

#[test]
fn view_absent_id_leaves_viewer_hidden_with_one_error() {
    let mut store = store();
    store.dispatch(Action::ViewRecord {
        id: RecordId::generate(),
    });

    assert!(!store.state().viewer.is_showing());
    assert_eq!(store.state().viewer.title(), DEFAULT_VIEWER_TITLE);
    assert_eq!(severities(&store), [Severity::Error]);
}

#[test]
fn view_shows_record_through_a_live_handle() {
    let mut store = store();
    let id = stage(&mut store, "a.html", "<h1>Hi</h1><p>body</p>");
    store.dispatch(Action::ViewRecord { id });

    let pane = store.state().viewer.pane().unwrap();
    assert_eq!(pane.title, "a.html");
    assert_eq!(pane.doc.lines.len(), 2);
    assert!(store.state().handles.is_live(pane.handle));
    assert!(pane.release_at.is_some());
    assert_eq!(store.state().focus, FocusTarget::Viewer);
}

#[test]
fn handle_is_released_after_grace_period() {
    let mut store = store();
    let id = stage(&mut store, "a.html", "<p>A</p>");
    store.dispatch(Action::ViewRecord { id });
    let handle = store.state().viewer.pane().unwrap().handle;

    store.dispatch(Action::Tick {
        now: std::time::Instant::now(),
    });
    assert!(store.state().handles.is_live(handle));

    store.dispatch(Action::Tick {
        now: std::time::Instant::now() + Duration::from_secs(2),
    });
    assert!(!store.state().handles.is_live(handle));
    // The pane still shows its parsed document after release.
    assert_eq!(store.state().viewer.pane().unwrap().doc.lines.len(), 1);
}

#[test]
fn reviewing_revokes_the_previous_handle() {
    let mut store = store();
    let a = stage(&mut store, "a.html", "<p>A</p>");
    let b = stage(&mut store, "b.html", "<p>B</p>");

    store.dispatch(Action::ViewRecord { id: a });
    let first = store.state().viewer.pane().unwrap().handle;
    store.dispatch(Action::ViewRecord { id: b });
    let second = store.state().viewer.pane().unwrap().handle;

    assert_ne!(first, second);
    assert!(!store.state().handles.is_live(first));
    assert!(store.state().handles.is_live(second));
}

#[test]
fn close_viewer_revokes_handle_and_resets_title() {
    let mut store = store();
    let id = stage(&mut store, "a.html", "<p>A</p>");
    store.dispatch(Action::ViewRecord { id });
    let handle = store.state().viewer.pane().unwrap().handle;

    store.dispatch(Action::CloseViewer);
    assert!(!store.state().viewer.is_showing());
    assert_eq!(store.state().viewer.title(), DEFAULT_VIEWER_TITLE);
    assert!(!store.state().handles.is_live(handle));
    assert_eq!(store.state().handles.live_count(), 0);
    assert_eq!(store.state().focus, FocusTarget::List);
}

#[test]
fn delete_goes_through_confirmation() {
    let mut store = store();
    let id = stage(&mut store, "a.html", "<p>A</p>");

    store.dispatch(Action::RequestDelete { id });
    assert!(store.state().confirm.visible);
    assert_eq!(store.state().confirm.message, "Delete \"a.html\"?");

    store.dispatch(Action::ConfirmCancel);
    assert!(!store.state().confirm.visible);
    assert_eq!(store.state().registry.len(), 1);

    store.dispatch(Action::RequestDelete { id });
    store.dispatch(Action::ConfirmAccept);
    assert!(store.state().registry.is_empty());
}

#[test]
fn deleting_shown_record_hides_viewer() {
    let mut store = store();
    let id = stage(&mut store, "a.html", "<p>A</p>");
    store.dispatch(Action::ViewRecord { id });
    let handle = store.state().viewer.pane().unwrap().handle;

    store.dispatch(Action::RequestDelete { id });
    store.dispatch(Action::ConfirmAccept);

    assert!(!store.state().viewer.is_showing());
    assert!(!store.state().handles.is_live(handle));
}

#[test]
fn deleting_other_record_leaves_viewer_showing() {
    let mut store = store();
    let a = stage(&mut store, "a.html", "<p>A</p>");
    let b = stage(&mut store, "b.html", "<p>B</p>");
    store.dispatch(Action::ViewRecord { id: a });

    store.dispatch(Action::RequestDelete { id: b });
    store.dispatch(Action::ConfirmAccept);

    assert_eq!(store.state().viewer.showing_record(), Some(a));
    assert_eq!(store.state().registry.len(), 1);
}

#[test]
fn delete_absent_id_is_an_error_without_state_change() {
    let mut store = store();
    stage(&mut store, "a.html", "<p>A</p>");

    store.dispatch(Action::RequestDelete {
        id: RecordId::generate(),
    });
    assert!(!store.state().confirm.visible);
    assert_eq!(store.state().registry.len(), 1);
    assert_eq!(severities(&store), [Severity::Success, Severity::Error]);
}

#[test]
fn notices_expire_on_tick() {
    let mut store = store();
    submit(&mut store, &["/tmp/nope.txt"]);
    assert_eq!(store.state().notices.len(), 1);

    let result = store.dispatch(Action::Tick {
        now: std::time::Instant::now() + Duration::from_secs(6),
    });
    assert!(result.state_changed);
    assert!(store.state().notices.is_empty());
}

#[test]
fn selection_follows_deletions() {
    let mut store = store();
    stage(&mut store, "a.html", "a");
    stage(&mut store, "b.html", "b");
    let c = stage(&mut store, "c.html", "c");

    store.dispatch(Action::ListMoveSelection { delta: 2 });
    assert_eq!(store.state().list.selected, 2);

    store.dispatch(Action::RequestDelete { id: c });
    store.dispatch(Action::ConfirmAccept);
    assert_eq!(store.state().list.selected, 1);
}

#[test]
fn picker_activate_on_file_submits_and_closes() {
    let mut store = store();
    store.dispatch(Action::OpenPicker);
    store.dispatch(Action::PickerDirLoaded {
        path: PathBuf::from("/tmp"),
        entries: vec![
            PickerEntry {
                name: "chart.html".into(),
                is_dir: false,
            },
            PickerEntry {
                name: "sub".into(),
                is_dir: true,
            },
        ],
    });

    // Directories sort first; move onto the file before accepting.
    store.dispatch(Action::PickerMoveSelection { delta: 1 });
    let result = store.dispatch(Action::PickerActivate);

    assert!(!store.state().picker.visible);
    assert_eq!(
        result.effects,
        [Effect::ReadFile {
            name: "chart.html".into(),
            path: PathBuf::from("/tmp/chart.html"),
        }]
    );
}

#[test]
fn picker_activate_on_directory_descends() {
    let mut store = store();
    store.dispatch(Action::OpenPicker);
    store.dispatch(Action::PickerDirLoaded {
        path: PathBuf::from("/tmp"),
        entries: vec![PickerEntry {
            name: "sub".into(),
            is_dir: true,
        }],
    });

    let result = store.dispatch(Action::PickerActivate);
    assert_eq!(result.effects, [Effect::LoadDir(PathBuf::from("/tmp/sub"))]);
    assert!(store.state().picker.visible);
    assert!(store.state().picker.loading);
}

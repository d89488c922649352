//! The walk a shell performs: seed a root, list it, navigate into folders,
//! and come back out until the session exit signal.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use filemanager_core::fs::{entry_for, list_entries};
use filemanager_core::{EntryKind, NavigationHistory, PopOutcome, SessionConfig};
use tempfile::tempdir;

#[test]
fn a_session_walks_down_and_back_up() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("projects/rust")).unwrap();
    fs::write(root.join("projects/readme.md"), b"hello").unwrap();

    let config = SessionConfig::default().with_start_dir(root);
    let shown = Rc::new(RefCell::new(Vec::new()));

    let mut history = NavigationHistory::new();
    let sink = Rc::clone(&shown);
    history.set_on_change(move |frame| sink.borrow_mut().push(frame.entry.path.clone()));

    history.initialize(entry_for(&config.start_dir).unwrap()).unwrap();
    assert_eq!(history.depth().unwrap(), 1);

    // Open "projects" the way a tap would: find it in the listing, push it,
    // then list the new current folder.
    let entries = list_entries(&history.peek().unwrap().entry.path).unwrap();
    let projects = entries.iter().find(|entry| entry.name == "projects").unwrap();
    history.push(projects.clone()).unwrap();

    let entries = list_entries(&history.peek().unwrap().entry.path).unwrap();
    assert_eq!(entries.len(), 2);
    let rust = entries.iter().find(|entry| entry.kind == EntryKind::Folder).unwrap();
    history.push(rust.clone()).unwrap();
    assert_eq!(history.depth().unwrap(), 3);

    // A file never becomes a navigation target.
    let readme = entries.iter().find(|entry| entry.kind == EntryKind::File).unwrap();
    assert!(history.push(readme.clone()).is_err());
    assert_eq!(history.depth().unwrap(), 3);

    // Back out to the root, then get the exit signal.
    assert!(matches!(history.pop().unwrap(), PopOutcome::Popped(_)));
    assert!(matches!(history.pop().unwrap(), PopOutcome::Popped(_)));
    assert_eq!(history.pop().unwrap(), PopOutcome::AtRoot);
    assert_eq!(history.depth().unwrap(), 1);

    // The observer saw the root seed, both descents, and both returns.
    let shown = shown.borrow();
    assert_eq!(shown.len(), 5);
    assert_eq!(shown[0], root);
    assert_eq!(shown[1], root.join("projects"));
    assert_eq!(shown[2], root.join("projects/rust"));
    assert_eq!(shown[3], root.join("projects"));
    assert_eq!(shown[4], root);
}

#[test]
fn a_stale_frame_surfaces_on_the_next_listing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("transient")).unwrap();

    let mut history = NavigationHistory::new();
    history.initialize(entry_for(root).unwrap()).unwrap();

    let entries = list_entries(root).unwrap();
    history.push(entries[0].clone()).unwrap();

    // The folder vanishes between navigation and listing; the core does not
    // pre-validate, the next list call reports it.
    fs::remove_dir(root.join("transient")).unwrap();
    let result = list_entries(&history.peek().unwrap().entry.path);
    assert!(result.is_err());

    // Popping back still works; the history itself never went stale.
    assert!(matches!(history.pop().unwrap(), PopOutcome::Popped(_)));
    assert!(list_entries(&history.peek().unwrap().entry.path).is_ok());
}

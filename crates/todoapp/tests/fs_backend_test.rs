use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use todoapp::model::TodoList;
use todoapp::session::{Intent, Session};
use todoapp::store::backend::StorageBackend;
use todoapp::store::fs_backend::FsBackend;
use todoapp::store::persist::STORAGE_KEY;
use todoapp::store::TodoStore;
use todoapp::view::Filter;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_key_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.load(STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_fs_backend_basic_io() {
    let (dir, backend) = setup();
    backend.save("todos", r#"{"list":[]}"#).unwrap();

    assert_eq!(
        backend.load("todos").unwrap(),
        Some(r#"{"list":[]}"#.to_string())
    );
    assert_eq!(backend.location("todos"), dir.path().join("todos.json"));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.save("todos", "first").unwrap();
    backend.save("todos", "second").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("todos.json")).unwrap();
    assert_eq!(on_disk, "second");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_root_on_save() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("not").join("yet");
    let backend = FsBackend::new(root.clone());

    backend.save("todos", "x").unwrap();
    assert!(root.join("todos.json").exists());
}

#[test]
fn test_store_round_trips_through_disk() {
    let (dir, backend) = setup();
    let mut store = TodoStore::open(backend);
    store.add("Buy milk");
    store.add("Walk dog");
    let milk = store.todos()[0].id;
    store.toggle(milk);
    let expected = store.state().clone();
    drop(store);

    let raw = fs::read_to_string(dir.path().join("todos.json")).unwrap();
    let on_disk: TodoList = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, expected);

    let reopened = TodoStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reopened.state(), &expected);
}

#[test]
fn test_corrupt_file_opens_empty() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("todos.json"), "{ not json").unwrap();

    let store = TodoStore::open(backend);
    assert!(store.todos().is_empty());
}

#[test]
fn test_session_state_survives_restart_without_transient_state() {
    let (dir, backend) = setup();
    let now = Instant::now();
    let mut session = Session::new(TodoStore::open(backend), Duration::from_secs(5));
    session.handle(Intent::Add("a".into()), now);
    session.handle(Intent::Add("b".into()), now);
    let a = session.store().todos()[0].id;
    session.handle(Intent::Delete(a), now);
    session.handle(Intent::SetFilter(Filter::Completed), now);
    drop(session);

    let session = Session::new(
        TodoStore::open(FsBackend::new(dir.path().to_path_buf())),
        Duration::from_secs(5),
    );
    let view = session.view(now);
    assert_eq!(view.todos.len(), 1);
    assert_eq!(view.todos[0].text, "b");
    assert_eq!(view.filter, Filter::All);
    assert!(!view.undo_available);
}

use hokmah_core::{load_tasks, parse_datetime, save_tasks, Task, TaskList};
use std::fs;

fn at(value: &str) -> chrono::NaiveDateTime {
    parse_datetime(value).unwrap()
}

fn sample_list() -> TaskList {
    let mut todo = Task::todo("Read Book").unwrap();
    todo.mark_done();
    let deadline = Task::deadline("Submit report", at("2023-12-31 2359")).unwrap();
    let event = Task::event("Conference", at("2024-05-01 0900"), at("2024-05-02 1800")).unwrap();
    TaskList::from_tasks(vec![todo, deadline, event])
}

#[test]
fn save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let original = sample_list();

    save_tasks(&original, &path).unwrap();
    let loaded = load_tasks(&path).unwrap();

    assert_eq!(loaded.tasks, original);
    assert_eq!(loaded.skipped_lines, 0);
}

#[test]
fn save_writes_one_record_per_line_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");

    save_tasks(&sample_list(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "T|1|Read Book\n\
         D|0|Submit report|2023-12-31 2359\n\
         E|0|Conference|2024-05-01 0900|2024-05-02 1800\n"
    );
    assert!(!dir.path().join("tasks.txt.tmp").exists());
}

#[test]
fn save_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");

    save_tasks(&sample_list(), &path).unwrap();
    let single = TaskList::from_tasks(vec![Task::todo("only").unwrap()]);
    save_tasks(&single, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "T|0|only\n");
}

#[test]
fn load_creates_missing_file_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("tasks.txt");

    let loaded = load_tasks(&path).unwrap();

    assert!(loaded.tasks.is_empty());
    assert!(path.is_file());
}

#[test]
fn load_skips_bad_lines_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(
        &path,
        "T|0|good one\n\
         D|0|bad date|31/12/2023\n\
         \n\
         Q|1|unknown kind\n\
         E|1|reversed|2024-01-02 1000|2024-01-01 1000\n\
         D|1|good two|2024-01-01 0800\r\n",
    )
    .unwrap();

    let loaded = load_tasks(&path).unwrap();

    assert_eq!(loaded.tasks.len(), 2);
    assert_eq!(loaded.skipped_lines, 3);
    assert_eq!(loaded.tasks.get(1).unwrap().name(), "good one");
    let second = loaded.tasks.get(2).unwrap();
    assert_eq!(second.name(), "good two");
    assert!(second.is_done());
}

#[test]
fn one_good_line_and_one_bad_date_loads_one_task() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "T|0|fine\nD|0|broken|not a date\n").unwrap();

    let loaded = load_tasks(&path).unwrap();
    assert_eq!(loaded.tasks.len(), 1);
}

#[test]
fn load_tolerates_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut bytes = b"T|0|kept\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    fs::write(&path, bytes).unwrap();

    let loaded = load_tasks(&path).unwrap();
    assert_eq!(loaded.tasks.len(), 1);
    assert_eq!(loaded.skipped_lines, 1);
}

#[test]
fn load_skips_non_utf8_name_instead_of_replacing_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, b"T|0|caf\xe9\r\nT|1|ok\r\n").unwrap();

    let loaded = load_tasks(&path).unwrap();
    assert_eq!(loaded.skipped_lines, 1);
    assert_eq!(loaded.tasks.len(), 1);
    let kept = loaded.tasks.get(1).unwrap();
    assert_eq!(kept.name(), "ok");
    assert!(kept.is_done());
}

#[test]
fn load_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = load_tasks(blocker.join("tasks.txt")).unwrap_err();
    assert_eq!(err.code(), "save_dir_create_failed");
}

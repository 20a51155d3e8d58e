use super::*;
use tempfile::TempDir;

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("migrations/archive")).unwrap();
    std::fs::write(dir.path().join("migrations/0001_init.sql"), "-- +migrate Up\n").unwrap();
    std::fs::write(dir.path().join("migrations/notes.txt"), "todo").unwrap();
    dir
}

#[test]
fn test_read_dir_lists_files_and_dirs() {
    let dir = setup();
    let fs = DiskFs::new(dir.path());

    let mut entries = fs.read_dir("migrations").unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(
        entries,
        vec![
            DirEntry::file("0001_init.sql"),
            DirEntry::dir("archive"),
            DirEntry::file("notes.txt"),
        ]
    );
}

#[test]
fn test_read_dir_root() {
    let dir = setup();
    let fs = DiskFs::new(dir.path());
    let entries = fs.read_dir("").unwrap();
    assert_eq!(entries, vec![DirEntry::dir("migrations")]);
}

#[test]
fn test_read_dir_missing() {
    let dir = setup();
    let fs = DiskFs::new(dir.path());
    let err = fs.read_dir("nope").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_open_reads_content() {
    let dir = setup();
    let fs = DiskFs::new(dir.path());
    let mut content = String::new();
    fs.open("migrations/0001_init.sql")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "-- +migrate Up\n");
}

#[test]
fn test_open_missing_file() {
    let dir = setup();
    let fs = DiskFs::new(dir.path());
    let err = fs.open("migrations/0002_missing.sql").err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn test_read_dir_does_not_follow_symlinks() {
    let dir = setup();
    std::os::unix::fs::symlink(
        dir.path().join("migrations/archive"),
        dir.path().join("migrations/linked"),
    )
    .unwrap();
    let fs = DiskFs::new(dir.path());

    let entries = fs.read_dir("migrations").unwrap();
    let linked = entries.iter().find(|e| e.name == "linked").unwrap();
    assert!(!linked.is_dir);
    let archive = entries.iter().find(|e| e.name == "archive").unwrap();
    assert!(archive.is_dir);
}

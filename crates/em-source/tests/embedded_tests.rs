//! Integration tests for discovery over bundled assets

use em_parse::ScriptParser;
use em_source::{
    find_migrations, DiskFs, EmbedMigrationSource, EmbeddedFs, MigrationSource, SourceError,
    VirtualFs,
};
use rust_embed::RustEmbed;
use std::io::Read;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "tests/fixtures/bundle/"]
struct Bundle;

fn bundle_fs() -> EmbeddedFs<Bundle> {
    EmbeddedFs::new()
}

fn ids(source: &impl MigrationSource) -> Vec<String> {
    source
        .find_migrations()
        .unwrap()
        .into_iter()
        .map(|m| m.id.into_inner())
        .collect()
}

#[test]
fn test_embedded_read_dir() {
    let fs = bundle_fs();
    let mut entries = fs.read_dir("migrations").unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let names: Vec<(&str, bool)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.is_dir))
        .collect();
    assert_eq!(
        names,
        vec![
            ("0001_create_users.sql", false),
            ("0002_add_email.sql", false),
            ("0003_users_name_index.sql", false),
            ("0010_touch_trigger.sql", false),
            ("README.md", false),
            ("archive", true),
        ]
    );
}

#[test]
fn test_embedded_root_lists_top_level_dirs() {
    let fs = bundle_fs();
    let mut names: Vec<String> = fs
        .read_dir("")
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["broken", "migrations"]);
}

#[test]
fn test_embedded_open() {
    let fs = bundle_fs();
    let mut content = String::new();
    fs.open("migrations/archive/0000_legacy.sql")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert!(content.contains("never discovered"));
}

#[test]
fn test_embedded_missing_paths() {
    let fs = bundle_fs();
    assert_eq!(
        fs.read_dir("seeds").unwrap_err().kind(),
        std::io::ErrorKind::NotFound
    );
    assert_eq!(
        fs.open("migrations/0099_missing.sql").err().unwrap().kind(),
        std::io::ErrorKind::NotFound
    );
}

#[test]
fn test_bundled_migrations_in_version_order() {
    let source = EmbedMigrationSource::new(bundle_fs(), "migrations");
    assert_eq!(
        ids(&source),
        vec![
            "0001_create_users.sql",
            "0002_add_email.sql",
            "0003_users_name_index.sql",
            "0010_touch_trigger.sql",
        ]
    );
}

#[test]
fn test_bundled_migration_contents() {
    let source = EmbedMigrationSource::new(bundle_fs(), "migrations/");
    let migrations = source.find_migrations().unwrap();

    let users = &migrations[0];
    assert_eq!(users.up.len(), 1);
    assert!(users.up[0].starts_with("CREATE TABLE users ("));
    assert_eq!(users.down[0].trim(), "DROP TABLE users;");

    let email = &migrations[1];
    assert_eq!(email.up.len(), 2);
    assert_eq!(email.down.len(), 2);

    let index = &migrations[2];
    assert!(index.disable_transaction_up);
    assert!(index.disable_transaction_down);

    let trigger = &migrations[3];
    assert_eq!(trigger.up.len(), 1);
    assert!(trigger.up[0].contains("RETURN NEW;"));
    assert!(trigger.up[0].trim_end().ends_with("LANGUAGE plpgsql;"));
}

#[test]
fn test_bundled_broken_dir_fails_fast() {
    let source = EmbedMigrationSource::new(bundle_fs(), "broken");
    let err = source.find_migrations().unwrap_err();
    match &err {
        SourceError::Parse { filename, .. } => assert_eq!(filename, "0002_unterminated.sql"),
        other => panic!("expected Parse error, got {other:?}"),
    }
    assert!(err.to_string().contains("[P004]"));
}

#[test]
fn test_bundled_missing_dir() {
    let source = EmbedMigrationSource::new(bundle_fs(), "seeds");
    assert!(matches!(
        source.find_migrations(),
        Err(SourceError::List { .. })
    ));
}

#[test]
fn test_disk_and_embedded_agree() {
    let disk = DiskFs::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bundle"));
    let parser = ScriptParser::new();

    let from_disk = find_migrations(&disk, "migrations", ".sql", &parser).unwrap();
    let from_bundle = find_migrations(&bundle_fs(), "migrations", ".sql", &parser).unwrap();
    assert_eq!(from_disk, from_bundle);
}

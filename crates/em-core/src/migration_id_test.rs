use super::*;

#[test]
fn test_migration_id_creation() {
    let id = MigrationId::new("0001_init.sql");
    assert_eq!(id.as_str(), "0001_init.sql");
    assert_eq!(format!("{}", id), "0001_init.sql");
}

#[test]
fn test_migration_id_try_from_empty_fails() {
    let result: Result<MigrationId, _> = "".try_into();
    assert!(result.is_err());
    assert!(MigrationId::try_new(String::new()).is_none());
}

#[test]
fn test_migration_id_equality() {
    let id = MigrationId::new("0001_init.sql");
    assert_eq!(id, "0001_init.sql");
    assert_eq!(id, *"0001_init.sql");
    assert_eq!(id, "0001_init.sql".to_string());
}

#[test]
fn test_version_from_numeric_prefix() {
    assert_eq!(MigrationId::new("0003_add_index.sql").version(), Some(3));
    assert_eq!(MigrationId::new("20240115093000_users.sql").version(), Some(20240115093000));
    assert_eq!(MigrationId::new("42.sql").version(), Some(42));
}

#[test]
fn test_version_absent_without_leading_digit() {
    assert_eq!(MigrationId::new("init.sql").version(), None);
    assert_eq!(MigrationId::new("v1_init.sql").version(), None);
    assert_eq!(MigrationId::new("_1.sql").version(), None);
}

#[test]
fn test_version_overflow_is_not_numeric() {
    let id = MigrationId::new("99999999999999999999999_huge.sql");
    assert_eq!(id.version(), None);
}

#[test]
fn test_version_ignores_non_ascii_digits() {
    // Arabic-Indic digit three
    assert_eq!(MigrationId::new("\u{0663}_x.sql").version(), None);
}

#[test]
fn test_migration_id_serde_roundtrip() {
    let id = MigrationId::new("0001_init.sql");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#""0001_init.sql""#);
    let back: MigrationId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_migration_id_deserialize_rejects_empty() {
    let result: Result<MigrationId, _> = serde_json::from_str(r#""""#);
    assert!(result.is_err());
}

#[test]
fn test_migration_id_borrow() {
    use std::collections::HashMap;
    let mut map: HashMap<MigrationId, i32> = HashMap::new();
    map.insert(MigrationId::new("0001_init.sql"), 1);
    assert_eq!(map.get("0001_init.sql"), Some(&1));
}

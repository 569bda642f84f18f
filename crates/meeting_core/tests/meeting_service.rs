use meeting_core::{
    AppConfig, DatabaseConfig, MeetingService, MeetingStore, RepoError, ADD_SUCCESS_MESSAGE,
};
use tempfile::TempDir;

fn service() -> (TempDir, MeetingService) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database: DatabaseConfig {
            db_path: dir.path().join("database").join("meetings.db"),
        },
        ..AppConfig::default()
    };
    let service = MeetingService::open(&config).unwrap();
    (dir, service)
}

#[test]
fn open_creates_store_file() {
    let (_dir, service) = service();
    assert!(service.store().db_path().is_file());
}

#[test]
fn add_rejects_missing_required_fields() {
    let (_dir, service) = service();

    let outcome = service.add("", "14:30", "Topic", "");
    assert!(!outcome.success);
    assert!(outcome.message.contains("required"));
    assert_eq!(outcome.id, None);
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn add_rejects_bad_formats_naming_the_value() {
    let (_dir, service) = service();

    let outcome = service.add("2023/10/01", "14:30", "Topic", "");
    assert!(!outcome.success);
    assert!(outcome.message.contains("2023/10/01"));
    assert!(outcome.message.contains("YYYY-MM-DD"));

    let outcome = service.add("2023-10-01", "14:60", "Topic", "");
    assert!(!outcome.success);
    assert!(outcome.message.contains("14:60"));
    assert!(outcome.message.contains("HH:MM"));
}

#[test]
fn add_then_list_returns_stored_fields() {
    let (_dir, service) = service();

    let outcome = service.add("2023-10-01", "14:30", "Test Topics", "Test Referrals");
    assert!(outcome.success);
    assert_eq!(outcome.message, ADD_SUCCESS_MESSAGE);
    assert_eq!(outcome.message, "Meeting added successfully!");

    let meetings = service.list_all().unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(Some(meetings[0].id), outcome.id);
    assert_eq!(meetings[0].date, "2023-10-01");
    assert_eq!(meetings[0].time, "14:30");
    assert_eq!(meetings[0].topics, "Test Topics");
    assert_eq!(meetings[0].referrals, "Test Referrals");
}

#[test]
fn search_finds_single_referral_match() {
    let (_dir, service) = service();
    assert!(service.add("2023-10-01", "14:30", "Test Topics 1", "Referral 1").success);
    assert!(service.add("2023-10-02", "15:30", "Test Topics 2", "Referral 2").success);

    let hits = service.search("Referral 2").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].referrals, "Referral 2");
    assert_eq!(hits[0].topics, "Test Topics 2");
}

#[test]
fn row_count_only_grows_across_operations() {
    let (_dir, service) = service();
    let mut previous = 0;

    for (date, time) in [("2023-10-01", "09:00"), ("2023-10-02", "bad"), ("2023-10-03", "11:00")] {
        service.add(date, time, "Topic", "");
        service.search("Topic").unwrap();
        let count = service.list_all().unwrap().len();
        assert!(count >= previous);
        previous = count;
    }
    assert_eq!(previous, 2);
}

#[test]
fn reopening_the_same_store_keeps_rows() {
    let (dir, service) = service();
    assert!(service.add("2023-10-01", "14:30", "Persisted", "").success);
    drop(service);

    let reopened = MeetingService::with_store(MeetingStore::new(
        dir.path().join("database").join("meetings.db"),
    ))
    .unwrap();
    let meetings = reopened.list_all().unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].topics, "Persisted");
}

#[test]
fn storage_failure_is_reported_by_add_and_raised_by_reads() {
    let (dir, service) = service();
    let db_path = service.store().db_path().to_path_buf();

    // Replace the store directory with a plain file so every open fails.
    std::fs::remove_dir_all(db_path.parent().unwrap()).unwrap();
    std::fs::write(dir.path().join("database"), "blocker").unwrap();

    let outcome = service.add("2023-10-01", "14:30", "Topic", "");
    assert!(!outcome.success);
    assert!(outcome.message.starts_with("Failed to add meeting:"));

    assert!(matches!(service.list_all().unwrap_err(), RepoError::Db(_)));
    assert!(matches!(service.search("Topic").unwrap_err(), RepoError::Db(_)));
}

#[test]
fn statement_failure_after_open_is_reported_by_add_and_raised_by_reads() {
    let (_dir, service) = service();
    assert!(service.add("2023-10-01", "14:30", "Topic", "").success);

    service
        .store()
        .connect()
        .unwrap()
        .execute_batch("DROP TABLE meetings;")
        .unwrap();

    let outcome = service.add("2023-10-02", "15:30", "Topic", "");
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Failed to add meeting: no such table: meetings");
    assert_eq!(outcome.id, None);

    assert!(matches!(service.list_all().unwrap_err(), RepoError::Db(_)));
    assert!(matches!(service.search("Topic").unwrap_err(), RepoError::Db(_)));
}

#[test]
fn open_fails_when_store_cannot_be_created() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("database"), "blocker").unwrap();

    let store = MeetingStore::new(dir.path().join("database").join("meetings.db"));
    assert!(MeetingService::with_store(store).is_err());
}

#[test]
fn meetings_serialize_with_plain_field_names() {
    let (_dir, service) = service();
    assert!(service.add("2023-10-01", "14:30", "Topic", "").success);

    let meetings = service.list_all().unwrap();
    let json = serde_json::to_value(&meetings).unwrap();
    assert_eq!(json[0]["date"], "2023-10-01");
    assert_eq!(json[0]["referrals"], "");
    assert!(json[0]["id"].is_i64());
}

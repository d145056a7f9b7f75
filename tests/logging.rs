use projecton::error::DashboardError;
use projecton::logging::{init_logging, logging_status};
use tempfile::tempdir;

// Logging state is process-wide, so every case lives in one test.
#[test]
fn test_init_logging_is_idempotent_and_guarded() {
    let dir = tempdir().unwrap();
    let other = tempdir().unwrap();

    assert!(matches!(
        init_logging("verbose", dir.path()),
        Err(DashboardError::Logging(_))
    ));
    assert!(logging_status().is_none());

    init_logging("INFO", dir.path()).unwrap();
    init_logging("info", dir.path()).unwrap();
    assert_eq!(
        logging_status(),
        Some(("info".to_string(), dir.path().to_path_buf()))
    );

    assert!(init_logging("info", other.path()).is_err());
    assert!(init_logging("debug", dir.path()).is_err());
}

use taskpad_core::{init_logging, logging_status, LoggingError, TaskService};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().expect("temp dir should be valid UTF-8");
    let other_str = other.path().to_str().expect("temp dir should be valid UTF-8");

    init_logging("info", dir_str).expect("first init should succeed");
    init_logging(" INFO ", dir_str).expect("same config should be idempotent");

    let level_err = init_logging("debug", dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::Conflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", other_str).unwrap_err();
    assert!(matches!(dir_err, LoggingError::Conflict { .. }));

    let active = logging_status().expect("logging should be active");
    assert_eq!(active.level, "info");
    assert_eq!(active.dir, dir.path());

    let mut service = TaskService::new();
    let task = service.submit("log me").expect("added");
    service.toggle_complete(task.id());
    service.delete(task.id());
}

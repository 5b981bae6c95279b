use taskpad_core::{compute_stats, TaskService, TaskStats};

fn assert_stats(stats: TaskStats, total: usize, completed: usize, remaining: usize, progress: f64) {
    assert_eq!(stats.total, total, "total");
    assert_eq!(stats.completed, completed, "completed");
    assert_eq!(stats.remaining, remaining, "remaining");
    assert!(
        (stats.progress - progress).abs() < f64::EPSILON,
        "progress {} != {progress}",
        stats.progress
    );
}

#[test]
fn empty_collection_reports_zero_progress() {
    let service = TaskService::new();
    assert_stats(service.stats(), 0, 0, 0, 0.0);
}

#[test]
fn buy_milk_walk_dog_scenario() {
    let mut service = TaskService::new();
    let milk = service.submit("Buy milk").expect("non-empty input is added");
    let dog = service.submit("Walk dog").expect("non-empty input is added");
    assert_stats(service.stats(), 2, 0, 2, 0.0);

    service.toggle_complete(milk.id());
    assert_stats(service.stats(), 2, 1, 1, 0.5);
    assert_eq!(service.stats().progress_label().as_deref(), Some("50% Complete"));

    service.delete(dog.id());
    assert_stats(service.stats(), 1, 1, 0, 1.0);
    assert_eq!(service.stats().remaining_summary().as_deref(), Some("0 of 1 left"));
}

#[test]
fn stats_are_recomputed_after_every_mutation() {
    let mut service = TaskService::new();
    let mut ids = Vec::new();

    for i in 0..10 {
        let task = service.submit(&format!("task {i}")).expect("added");
        ids.push(task.id());
        assert_eq!(service.stats(), compute_stats(&service.snapshot()));
    }
    for id in ids.iter().step_by(2) {
        service.toggle_complete(*id);
        assert_eq!(service.stats(), compute_stats(&service.snapshot()));
    }
    assert_stats(service.stats(), 10, 5, 5, 0.5);

    for id in &ids {
        service.delete(*id);
        let stats = service.stats();
        assert_eq!(stats.total, stats.completed + stats.remaining);
        assert!((0.0..=1.0).contains(&stats.progress));
    }
    assert_stats(service.stats(), 0, 0, 0, 0.0);
}

#[test]
fn one_third_rounds_down_in_percent_label() {
    let mut service = TaskService::new();
    let first = service.submit("a").expect("added");
    service.submit("b");
    service.submit("c");
    service.toggle_complete(first.id());

    assert_eq!(service.stats().percent_complete(), 33);
    assert_eq!(service.stats().remaining_summary().as_deref(), Some("2 of 3 left"));
}

#[test]
fn stats_serialize_with_expected_fields() {
    let mut service = TaskService::new();
    let task = service.submit("a").expect("added");
    service.submit("b");
    service.toggle_complete(task.id());

    let json = serde_json::to_value(service.stats()).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["completed"], 1);
    assert_eq!(json["remaining"], 1);
    assert_eq!(json["progress"], 0.5);
}

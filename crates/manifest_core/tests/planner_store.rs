use manifest_core::db::open_db_in_memory;
use manifest_core::{
    AnnualData, App, AppError, AppPaths, DimensionConfig, DimensionData, PlannerService, Priority,
    RepoError, Task, TaskStatus,
};
use rusqlite::params;

fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        ..Task::default()
    }
}

fn year_with_dimension(year: &str) -> AnnualData {
    let mut data = AnnualData::new(year);
    data.dimension_configs.push(DimensionConfig {
        key: "health".to_string(),
        title: "Health".to_string(),
        icon: "Heart".to_string(),
        color: "#e74c3c".to_string(),
        is_default: true,
    });
    let mut dimension = DimensionData::default();
    dimension.annual_goal = "run a marathon".to_string();
    dimension.monthly_tasks[2].push(task("m1", "10k"));
    data.dimensions.insert("health".to_string(), dimension);
    data
}

#[test]
fn annual_data_save_get_and_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);

    assert!(planner.annual_data("2025").unwrap().is_none());

    let mut data = year_with_dimension("2025");
    planner.save_annual_data(&data).unwrap();
    assert_eq!(planner.annual_data("2025").unwrap(), Some(data.clone()));

    data.total_score = 42.5;
    planner.save_annual_data(&data).unwrap();
    let loaded = planner.annual_data("2025").unwrap().unwrap();
    assert_eq!(loaded.total_score, 42.5);
    assert_eq!(planner.all_annual_data().unwrap().len(), 1);
}

#[test]
fn all_annual_data_is_keyed_by_year() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);
    planner.save_annual_data(&AnnualData::new("2026")).unwrap();
    planner.save_annual_data(&AnnualData::new("2024")).unwrap();

    let all = planner.all_annual_data().unwrap();
    let years: Vec<_> = all.keys().cloned().collect();
    assert_eq!(years, vec!["2024", "2026"]);
    assert_eq!(all["2026"].year, "2026");
}

#[test]
fn delete_annual_data_removes_year_and_rejects_unknown() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);
    planner.save_annual_data(&AnnualData::new("2025")).unwrap();

    planner.delete_annual_data("2025").unwrap();
    assert!(planner.annual_data("2025").unwrap().is_none());

    let err = planner.delete_annual_data("2025").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { ref id, .. } if id == "2025"));
}

#[test]
fn empty_year_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);

    let err = planner.save_annual_data(&AnnualData::new("  ")).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn corrupt_annual_payload_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO annual_data (year, payload) VALUES (?1, ?2);",
        params!["2025", "not json"],
    )
    .unwrap();

    let err = PlannerService::new(&conn).all_annual_data().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn task_add_update_delete_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);

    let mut item = task("t1", "write report");
    item.start_date = Some("2025-03-01".to_string());
    planner.add_task(&item).unwrap();
    assert_eq!(planner.task("t1").unwrap(), Some(item.clone()));

    item.status = TaskStatus::Completed;
    item.priority = Priority::High;
    item.score = 8.0;
    item.end_date = Some("2025-03-07".to_string());
    planner.update_task(&item).unwrap();
    assert_eq!(planner.task("t1").unwrap(), Some(item));

    planner.delete_task("t1").unwrap();
    assert!(planner.task("t1").unwrap().is_none());
}

#[test]
fn duplicate_task_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);
    planner.add_task(&task("t1", "original")).unwrap();

    let err = planner.add_task(&task("t1", "copy")).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists { .. }));
    assert_eq!(planner.task("t1").unwrap().unwrap().title, "original");
}

#[test]
fn missing_task_update_and_delete_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);

    assert!(matches!(
        planner.update_task(&task("ghost", "x")).unwrap_err(),
        RepoError::NotFound { .. }
    ));
    assert!(matches!(
        planner.delete_task("ghost").unwrap_err(),
        RepoError::NotFound { .. }
    ));
}

#[test]
fn tasks_are_listed_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let planner = PlannerService::new(&conn);
    for id in ["b", "a", "c"] {
        planner.add_task(&task(id, id)).unwrap();
    }

    let ids: Vec<_> = planner.tasks().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn reset_clears_planning_data_but_keeps_accounts() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(AppPaths::new(dir.path()));
    app.new_account("alice", "").unwrap();
    app.save_annual_data(&year_with_dimension("2025")).unwrap();
    app.add_task(&task("t1", "x")).unwrap();

    app.reset_all_data().unwrap();

    assert!(app.get_all_annual_data().unwrap().is_empty());
    assert!(app.get_tasks().unwrap().is_empty());
    assert_eq!(app.get_accounts().unwrap().len(), 1);
}

#[test]
fn facade_persists_planning_data_across_calls() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(AppPaths::new(dir.path()));
    app.startup().unwrap();

    app.save_annual_data(&year_with_dimension("2025")).unwrap();
    let loaded = app.get_annual_data("2025").unwrap().unwrap();
    assert_eq!(loaded.dimensions["health"].annual_goal, "run a marathon");

    app.delete_annual_data("2025").unwrap();
    let err = app.delete_annual_data("2025").unwrap_err();
    assert!(matches!(err, AppError::Repo(RepoError::NotFound { .. })));
    assert!(err.to_string().contains("annual data not found"));
}

//! File output tests for the export loop

use ticktick_cli::export_project;
use ticktick_core::test_utils::{create_mock_tasks, mock_task};
use ticktick_core::Task;

#[test]
fn test_one_file_per_non_empty_project() {
    let dir = tempfile::tempdir().unwrap();

    let lists: Vec<(&str, Vec<Task>)> = vec![
        ("Inbox", create_mock_tasks()),
        ("Errands", vec![mock_task("Post office")]),
        ("Someday", Vec::new()),
    ];

    let mut written = 0;
    for (name, tasks) in &lists {
        if export_project(name, tasks, dir.path()).unwrap().is_some() {
            written += 1;
        }
    }

    assert_eq!(written, 2);
    assert!(dir.path().join("Inbox.csv").exists());
    assert!(dir.path().join("Errands.csv").exists());
    assert!(!dir.path().join("Someday.csv").exists());
}

#[test]
fn test_written_file_round_trips_through_csv_reader() {
    let dir = tempfile::tempdir().unwrap();

    let path = export_project("Inbox", &create_mock_tasks(), dir.path())
        .unwrap()
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers,
        csv::StringRecord::from(vec![
            "TYPE",
            "CONTENT",
            "PRIORITY",
            "INDENT",
            "AUTHOR",
            "RESPONSIBLE",
            "DATE",
            "DATE_LANG",
            "TIMEZONE",
        ])
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    // 4 top-level mock tasks, one of which carries two subtasks
    assert_eq!(records.len(), 6);
    for record in &records {
        assert_eq!(&record[0], "task");
        assert_eq!(&record[7], "en");
    }

    let parent = records
        .iter()
        .position(|r| &r[1] == "Plan trip")
        .expect("parent task present");
    assert_eq!(&records[parent][3], "1");
    assert_eq!(&records[parent + 1][1], "Book flights");
    assert_eq!(&records[parent + 1][3], "2");
    assert_eq!(&records[parent + 2][1], "Reserve hotel");
    assert_eq!(&records[parent + 2][3], "2");
}

#[test]
fn test_failed_project_does_not_disturb_others() {
    let dir = tempfile::tempdir().unwrap();

    let broken: Vec<Task> = serde_json::from_str(
        r#"[{"title": "bad rule", "repeatFlag": "RRULE:FREQ=SOMETIMES"}]"#,
    )
    .unwrap();

    assert!(export_project("Broken", &broken, dir.path()).is_err());
    assert!(export_project("Errands", &[mock_task("Post office")], dir.path())
        .unwrap()
        .is_some());

    assert!(!dir.path().join("Broken.csv").exists());
    assert!(dir.path().join("Errands.csv").exists());
}

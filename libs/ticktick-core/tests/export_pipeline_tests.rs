//! End-to-end row building tests
//!
//! Drives a project payload as the API returns it through flattening, row
//! building, and CSV serialization, checking the emitted text itself.

use ticktick_core::{to_rows, write_csv, Task};

fn project_payload() -> Vec<Task> {
    serde_json::from_str(
        r#"[
            {
                "id": "t1",
                "projectId": "p1",
                "title": "Renew library card",
                "content": "bring ID",
                "dueDate": "2023-01-01T05:00:00.000+0000",
                "timeZone": "America/Chicago"
            },
            {
                "id": "t2",
                "projectId": "p1",
                "title": "Garage sale",
                "items": [
                    {"title": "Price furniture"},
                    {"title": "Post flyers"}
                ]
            },
            {
                "id": "t3",
                "projectId": "p1",
                "title": "Mow lawn",
                "repeatFlag": "RRULE:FREQ=WEEKLY;INTERVAL=2"
            }
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_project_flattens_into_expected_row_sequence() {
    let rows = to_rows(&project_payload()).unwrap();

    let contents: Vec<&str> = rows.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "Renew library card - bring ID",
            "Garage sale",
            "Price furniture",
            "Post flyers",
            "Mow lawn",
        ]
    );

    let indents: Vec<u8> = rows.iter().map(|r| r.indent).collect();
    assert_eq!(indents, vec![1, 1, 2, 2, 1]);
}

#[test]
fn test_date_column_crosses_the_date_boundary() {
    let rows = to_rows(&project_payload()).unwrap();

    // 05:00 UTC on Jan 1 lands on Dec 31 in Chicago
    assert_eq!(rows[0].date, "2022-12-31");
    // No due date, recurrence phrase alone, no stray separator
    assert_eq!(rows[4].date, "every 2 weeks");
}

#[test]
fn test_csv_output_matches_import_format() {
    let rows = to_rows(&project_payload()).unwrap();
    let mut out = Vec::new();
    write_csv(&rows, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = "\
TYPE,CONTENT,PRIORITY,INDENT,AUTHOR,RESPONSIBLE,DATE,DATE_LANG,TIMEZONE
task,Renew library card - bring ID,1,1,,,2022-12-31,en,
task,Garage sale,1,1,,,,en,
task,Price furniture,1,2,,,,en,
task,Post flyers,1,2,,,,en,
task,Mow lawn,1,1,,,every 2 weeks,en,
";
    assert_eq!(text, expected);
}

#[test]
fn test_subtask_fields_survive_flattening() {
    let tasks: Vec<Task> = serde_json::from_str(
        r#"[{
            "title": "Prep dinner",
            "items": [{
                "title": "Defrost",
                "content": "take out in the morning",
                "dueDate": "2023-06-15T12:00:00.000+0000",
                "timeZone": "UTC"
            }]
        }]"#,
    )
    .unwrap();

    let rows = to_rows(&tasks).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].content, "Defrost - take out in the morning");
    assert_eq!(rows[1].date, "2023-06-15");
    assert_eq!(rows[1].indent, 2);
}

#[test]
fn test_one_bad_task_fails_the_whole_project() {
    let tasks: Vec<Task> = serde_json::from_str(
        r#"[
            {"title": "fine"},
            {"title": "broken", "repeatFlag": "RRULE:FREQ=FORTNIGHTLY"}
        ]"#,
    )
    .unwrap();

    assert!(to_rows(&tasks).is_err());
}

use std::cell::Cell;
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;

use lib::schedule::error::ScheduleError;
use lib::schedule::helpers::get_records;
use lib::schedule::models::schedule_model::ScheduleRecord;
use lib::schedule::record_source::{JsonFileSource, RecordSource};
use lib::schedule::run_tool::run;

const RECORDS_PATH: &str = "tests/test.records.json";

// Counts fetches, so tests can tell whether validation happened before fetching
pub struct TestSource {
    pub records_path: String,
    pub fetches: Cell<u32>,
}

impl TestSource {
    fn new() -> Self {
        TestSource {
            records_path: RECORDS_PATH.to_owned(),
            fetches: Cell::new(0),
        }
    }
}

impl RecordSource for TestSource {
    async fn fetch_records(&self) -> Result<Vec<ScheduleRecord>, Box<dyn Error>> {
        self.fetches.set(self.fetches.get() + 1);
        get_records(&PathBuf::from(&self.records_path))
    }
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[tokio::test]
async fn run_without_filters_returns_every_day() {
    let source = TestSource::new();

    let days = run(&source, &params(&[]), None).await.unwrap();

    let dates = days
        .iter()
        .map(|day| day.date.to_string())
        .collect::<Vec<_>>();
    assert_eq!(dates, vec!["2024-03-04", "2024-03-05", "2024-03-06"]);
    let subjects = days[1]
        .lessons
        .iter()
        .map(|lesson| lesson.subject.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        subjects,
        vec!["Sieci komputerowe", "Programowanie obiektowe", "Konsultacje"]
    );
    assert_eq!(source.fetches.get(), 1);
}

#[tokio::test]
async fn run_with_params_and_groups() {
    let source = TestSource::new();
    let params = params(&[("room", "WI1-215"), ("page", "3")]);

    let days = run(&source, &params, Some(&[101][..])).await.unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date.to_string(), "2024-03-05");
    assert_eq!(days[0].lessons.len(), 1);
    assert_eq!(days[0].lessons[0].subject, "Programowanie obiektowe");
    assert_eq!(days[0].lessons[0].teacher.surname, "Kowalski");
}

#[tokio::test]
async fn run_with_single_day_range() {
    let source = TestSource::new();
    let params = params(&[("dateFrom", "2024-03-05"), ("dateTo", "2024-03-05")]);

    let days = run(&source, &params, None).await.unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].lessons.len(), 3);
}

#[tokio::test]
async fn run_with_empty_groups_finds_nothing() {
    let source = TestSource::new();

    let days = run(&source, &params(&[]), Some(&[][..])).await.unwrap();

    assert!(days.is_empty());
}

#[tokio::test]
async fn run_rejects_inverted_range_before_fetching() {
    let source = TestSource::new();
    let params = params(&[("dateFrom", "2024-03-06"), ("dateTo", "2024-03-04")]);

    let err = run(&source, &params, None).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScheduleError>(),
        Some(ScheduleError::InvalidDateRange { .. })
    ));
    assert_eq!(source.fetches.get(), 0);
}

#[tokio::test]
async fn run_reports_malformed_date_param() {
    let source = TestSource::new();

    let err = run(&source, &params(&[("dateTo", "yesterday")]), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScheduleError>(),
        Some(ScheduleError::InvalidDateFormat(_))
    ));
}

#[tokio::test]
async fn json_file_source_reads_fixture() {
    let source = JsonFileSource {
        path: PathBuf::from(RECORDS_PATH),
    };

    let records = source.fetch_records().await.unwrap();

    assert_eq!(records.len(), 6);
    assert_eq!(records[4].date, "2024-03-06T00:00:00");
}

#[tokio::test]
async fn days_serialize_as_nested_json() {
    let source = TestSource::new();
    let params = params(&[("subject", "Analiza matematyczna")]);

    let days = run(&source, &params, None).await.unwrap();
    let json = serde_json::to_value(&days).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "date": "2024-03-06",
            "lessons": [{
                "room": "WE-101",
                "courseType": "exercises",
                "subject": "Analiza matematyczna",
                "semester": "4",
                "faculty": "Wydział Informatyki",
                "facultyAbbreviation": "WI",
                "fieldOfStudy": "Informatyka",
                "reservationStatus": "confirmed",
                "teacher": {
                    "academicTitle": "dr",
                    "name": "Maria",
                    "surname": "Zielińska"
                },
                "timeRange": {
                    "from": "10:15:00",
                    "to": "12:00:00"
                }
            }]
        }])
    );
}

//! Day-by-day view of a schedule, handed to whatever renders the response.
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub academic_title: String,
    pub name: String,
    pub surname: String,
}

/// Start and end of a lesson. `from <= to` is taken as given by the store.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub room: String,
    pub course_type: String,
    pub subject: String,
    pub semester: String,
    pub faculty: String,
    pub faculty_abbreviation: String,
    pub field_of_study: String,
    pub reservation_status: String,
    pub teacher: Teacher,
    pub time_range: TimeRange,
}

/// All lessons of one calendar date, ordered by start time.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub lessons: Vec<Lesson>,
}

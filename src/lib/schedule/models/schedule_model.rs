//! Flat schedule record as served by the schedule store, and the fixed set of
//! searchable fields over it.
use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::schedule::error::TextFormatError;

/// Format of every date, both in records and in search parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of lesson start and end times. Seconds are accepted too, see [`parse_time`].
pub const TIME_FORMAT: &str = "%H:%M";

const TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/* `9` stands for any ASCII digit, everything else must match literally */
const DATE_SHAPE: &str = "9999-99-99";
const DATE_TIME_SHAPE: &str = "9999-99-99T99:99:99";
const TIME_SHAPE: &str = "99:99";
const TIME_WITH_SECONDS_SHAPE: &str = "99:99:99";

/// One lesson occurrence on a specific date.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub date: String,
    pub time_from: String,
    pub time_to: String,
    pub room: String,
    pub course_type: String,
    pub subject: String,
    pub semester: String,
    pub faculty: String,
    pub faculty_abbreviation: String,
    pub field_of_study: String,
    pub reservation_status: String,
    pub academic_title: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub groups: BTreeSet<i32>,
}

impl ScheduleRecord {
    /// Text attribute matched by an equality search on `field`.
    /// Date bounds have no single attribute and yield `None`.
    pub fn attribute(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::DateFrom | Field::DateTo => return None,
            Field::Room => &self.room,
            Field::CourseType => &self.course_type,
            Field::Subject => &self.subject,
            Field::Semester => &self.semester,
            Field::Faculty => &self.faculty,
            Field::FacultyAbbreviation => &self.faculty_abbreviation,
            Field::FieldOfStudy => &self.field_of_study,
            Field::ReservationStatus => &self.reservation_status,
            Field::AcademicTitle => &self.academic_title,
            Field::Name => &self.name,
            Field::Surname => &self.surname,
        };
        Some(value)
    }
}

/// Searchable fields. Each has one canonical parameter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    DateFrom,
    DateTo,
    Room,
    CourseType,
    Subject,
    Semester,
    Faculty,
    FacultyAbbreviation,
    FieldOfStudy,
    ReservationStatus,
    AcademicTitle,
    Name,
    Surname,
}

impl Field {
    /// Every field, in the order criteria are composed.
    pub const ALL: [Field; 13] = [
        Field::DateFrom,
        Field::DateTo,
        Field::Room,
        Field::CourseType,
        Field::Subject,
        Field::Semester,
        Field::Faculty,
        Field::FacultyAbbreviation,
        Field::FieldOfStudy,
        Field::ReservationStatus,
        Field::AcademicTitle,
        Field::Name,
        Field::Surname,
    ];

    /// Parameter key accepted from callers.
    pub const fn key(self) -> &'static str {
        match self {
            Field::DateFrom => "dateFrom",
            Field::DateTo => "dateTo",
            Field::Room => "room",
            Field::CourseType => "courseType",
            Field::Subject => "subject",
            Field::Semester => "semester",
            Field::Faculty => "faculty",
            Field::FacultyAbbreviation => "facultyAbbreviation",
            Field::FieldOfStudy => "fieldOfStudy",
            Field::ReservationStatus => "reservationStatus",
            Field::AcademicTitle => "academicTitle",
            Field::Name => "name",
            Field::Surname => "surname",
        }
    }

    /// Record column the field is tested against.
    pub const fn column(self) -> &'static str {
        match self {
            Field::DateFrom | Field::DateTo => "date",
            Field::Room => "room",
            Field::CourseType => "course_type",
            Field::Subject => "subject",
            Field::Semester => "semester",
            Field::Faculty => "faculty",
            Field::FacultyAbbreviation => "faculty_abbreviation",
            Field::FieldOfStudy => "field_of_study",
            Field::ReservationStatus => "reservation_status",
            Field::AcademicTitle => "academic_title",
            Field::Name => "name",
            Field::Surname => "surname",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }
}

fn has_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'9' => c.is_ascii_digit(),
            _ => c == s,
        })
}

/// Strict `YYYY-MM-DD`: zero-padded, no sign, no surrounding whitespace.
pub fn parse_date(text: &str) -> Result<NaiveDate, TextFormatError> {
    if !has_shape(text, DATE_SHAPE) {
        return Err(TextFormatError::Shape {
            expected: "YYYY-MM-DD",
        });
    }
    Ok(NaiveDate::parse_from_str(text, DATE_FORMAT)?)
}

/// Date-only identity of a record date. A trailing `THH:MM:SS` is dropped.
pub fn parse_record_date(text: &str) -> Result<NaiveDate, TextFormatError> {
    if has_shape(text, DATE_TIME_SHAPE) {
        return Ok(NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)?.date());
    }
    parse_date(text)
}

/// Strict `HH:MM` or `HH:MM:SS`.
pub fn parse_time(text: &str) -> Result<NaiveTime, TextFormatError> {
    if has_shape(text, TIME_SHAPE) {
        Ok(NaiveTime::parse_from_str(text, TIME_FORMAT)?)
    } else if has_shape(text, TIME_WITH_SECONDS_SHAPE) {
        Ok(NaiveTime::parse_from_str(text, TIME_WITH_SECONDS_FORMAT)?)
    } else {
        Err(TextFormatError::Shape {
            expected: "HH:MM or HH:MM:SS",
        })
    }
}

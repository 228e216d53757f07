use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{
    error::ScheduleError,
    models::{
        schedule_model::{parse_record_date, parse_time, ScheduleRecord},
        view_model::{Day, Lesson, Teacher, TimeRange},
    },
};

/// Reshape flat records into days sorted by date, each with lessons sorted by
/// start time. Lessons starting at the same time keep their input order.
///
/// Fails on the first record whose date or times do not parse; no partial
/// result is produced.
pub fn days_from(records: &[ScheduleRecord]) -> Result<Vec<Day>, ScheduleError> {
    let mut days: BTreeMap<NaiveDate, Vec<Lesson>> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let date = parse_record_date(&record.date).map_err(|err| {
            malformed(index, format!("date {:?} does not parse: {}", record.date, err))
        })?;
        let lesson = lesson_from(index, record)?;
        days.entry(date).or_default().push(lesson);
    }

    Ok(days
        .into_iter()
        .map(|(date, mut lessons)| {
            /* sort_by_key is stable, equal starts stay in input order */
            lessons.sort_by_key(|lesson| lesson.time_range.from);
            Day { date, lessons }
        })
        .collect())
}

fn lesson_from(index: usize, record: &ScheduleRecord) -> Result<Lesson, ScheduleError> {
    let from = parse_time(&record.time_from).map_err(|err| {
        malformed(
            index,
            format!("time from {:?} does not parse: {}", record.time_from, err),
        )
    })?;
    let to = parse_time(&record.time_to).map_err(|err| {
        malformed(
            index,
            format!("time to {:?} does not parse: {}", record.time_to, err),
        )
    })?;

    Ok(Lesson {
        room: record.room.clone(),
        course_type: record.course_type.clone(),
        subject: record.subject.clone(),
        semester: record.semester.clone(),
        faculty: record.faculty.clone(),
        faculty_abbreviation: record.faculty_abbreviation.clone(),
        field_of_study: record.field_of_study.clone(),
        reservation_status: record.reservation_status.clone(),
        teacher: Teacher {
            academic_title: record.academic_title.clone(),
            name: record.name.clone(),
            surname: record.surname.clone(),
        },
        time_range: TimeRange { from, to },
    })
}

fn malformed(index: usize, reason: String) -> ScheduleError {
    ScheduleError::MalformedScheduleData { index, reason }
}

#[cfg(test)]
#[path = "tests/aggregator_tests.rs"]
mod tests;

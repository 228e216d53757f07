//! In-memory evaluation of search predicates against fetched records.
use chrono::NaiveDate;
use log::debug;

use super::{
    error::{ScheduleError, TextFormatError},
    models::schedule_model::{parse_record_date, ScheduleRecord},
    search::predicate::Predicate,
};

impl Predicate {
    /// Whether `record` satisfies the predicate. The record date is checked
    /// first, so a malformed one fails whatever the predicate tests.
    pub fn matches(&self, record: &ScheduleRecord) -> Result<bool, TextFormatError> {
        let date = parse_record_date(&record.date)?;
        Ok(self.holds(record, date))
    }

    fn holds(&self, record: &ScheduleRecord, date: NaiveDate) -> bool {
        match self {
            Predicate::Equals { field, value } => record.attribute(*field) == Some(value.as_str()),
            Predicate::DateRange { from, to } => {
                from.map_or(true, |from| from <= date) && to.map_or(true, |to| date <= to)
            }
            Predicate::And(preds) => preds.iter().all(|pred| pred.holds(record, date)),
            Predicate::MemberOf(ids) => !ids.is_disjoint(&record.groups),
        }
    }
}

/// Records satisfying `predicate`, in input order. `None` keeps everything.
/// With a predicate, the first record with a malformed date fails the call.
pub fn apply(
    predicate: Option<&Predicate>,
    records: Vec<ScheduleRecord>,
) -> Result<Vec<ScheduleRecord>, ScheduleError> {
    let Some(predicate) = predicate else {
        debug!("No predicate given, keeping all {} records", records.len());
        return Ok(records);
    };

    debug!("Applying predicate: {}", predicate);
    let total = records.len();
    let mut matching = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let is_match =
            predicate
                .matches(&record)
                .map_err(|err| ScheduleError::MalformedScheduleData {
                    index,
                    reason: format!("date {:?} does not parse: {}", record.date, err),
                })?;
        if is_match {
            matching.push(record);
        }
    }
    debug!("{} of {} records matched", matching.len(), total);

    Ok(matching)
}

#[cfg(test)]
#[path = "tests/executor_tests.rs"]
mod tests;

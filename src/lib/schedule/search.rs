//! Compiles caller search parameters into a single [`Predicate`].
//!
//! Only keys from [`Field::ALL`] are recognised. Unknown keys and empty
//! values are ignored, so raw query strings can be passed in as they are.
use std::collections::HashMap;

use super::{
    error::ScheduleError,
    models::schedule_model::{parse_date, Field},
};

pub mod predicate;

use predicate::Predicate;

/// One recognised, non-empty search parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub field: Field,
    pub value: String,
}

/// Predicate for `params`, or `None` when no criteria survive, meaning every
/// record matches.
pub fn compile(params: &HashMap<String, String>) -> Result<Option<Predicate>, ScheduleError> {
    validate_date_range(params)?;

    let (mut from, mut to) = (None, None);
    let mut preds = Vec::new();
    for criteria in search_criteria(params) {
        match criteria.field {
            Field::DateFrom => from = Some(parse_param_date(&criteria.value)?),
            Field::DateTo => to = Some(parse_param_date(&criteria.value)?),
            field => preds.push(Predicate::equals(field, criteria.value)),
        }
    }
    /* both bounds form one range test, placed first as the date fields lead Field::ALL */
    if from.is_some() || to.is_some() {
        preds.insert(0, Predicate::DateRange { from, to });
    }

    if preds.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Predicate::and(preds)))
    }
}

/// Like [`compile`], additionally restricted to records of `group_ids`.
/// An empty `group_ids` matches no record at all.
pub fn compile_with_groups(
    params: &HashMap<String, String>,
    group_ids: &[i32],
) -> Result<Predicate, ScheduleError> {
    let groups = Predicate::member_of(group_ids);
    Ok(match compile(params)? {
        Some(base) => Predicate::And(vec![base, groups]),
        None => groups,
    })
}

/// Criteria in [`Field::ALL`] order, so the result does not depend on the
/// iteration order of `params`.
pub fn search_criteria(params: &HashMap<String, String>) -> Vec<SearchCriteria> {
    let mut criteria = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(key, value)| {
            Field::from_key(key).map(|field| SearchCriteria {
                field,
                value: value.to_owned(),
            })
        })
        .collect::<Vec<_>>();
    criteria.sort_by_key(|criteria| criteria.field);
    criteria
}

/// Bounds are only compared when both are given; a half-open range is fine.
fn validate_date_range(params: &HashMap<String, String>) -> Result<(), ScheduleError> {
    if let (Some(from), Some(to)) = (
        non_empty_param(params, Field::DateFrom),
        non_empty_param(params, Field::DateTo),
    ) {
        let from = parse_param_date(from)?;
        let to = parse_param_date(to)?;
        if from > to {
            return Err(ScheduleError::InvalidDateRange { from, to });
        }
    }

    Ok(())
}

fn non_empty_param(params: &HashMap<String, String>, field: Field) -> Option<&str> {
    params
        .get(field.key())
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn parse_param_date(text: &str) -> Result<chrono::NaiveDate, ScheduleError> {
    parse_date(text).map_err(|err| ScheduleError::InvalidDateFormat(format!("{text:?}: {err}")))
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;

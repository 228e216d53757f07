//! Filter conditions over schedule records.
//!
//! A [`Predicate`] is only a description: executing it belongs to whoever owns
//! the records. The in-memory interpreter lives in `executor`, while the
//! [`Display`](fmt::Display) impl renders a SQL-like condition for relational
//! stores.
use std::{collections::BTreeSet, fmt};

use chrono::NaiveDate;

use crate::schedule::models::schedule_model::{Field, DATE_FORMAT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Record attribute equals the value exactly.
    Equals { field: Field, value: String },
    /// Record date lies within the bounds, both inclusive. A missing bound is open.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// Every child holds.
    And(Vec<Predicate>),
    /// Record belongs to at least one of the groups. Never holds for an empty set.
    MemberOf(BTreeSet<i32>),
}

impl Predicate {
    pub fn equals(field: Field, value: impl Into<String>) -> Self {
        Self::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn member_of(group_ids: &[i32]) -> Self {
        Self::MemberOf(group_ids.iter().copied().collect())
    }

    /// Conjunction of `preds`, collapsed to the single predicate when there is one.
    pub fn and(mut preds: Vec<Self>) -> Self {
        if preds.len() == 1 {
            preds.remove(0)
        } else {
            Self::And(preds)
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals { field, value } => {
                write!(f, "{} = '{}'", field.column(), value.replace('\'', "''"))
            }
            Predicate::DateRange { from, to } => {
                let column = Field::DateFrom.column();
                match (from, to) {
                    (Some(from), Some(to)) => write!(
                        f,
                        "{column} BETWEEN '{}' AND '{}'",
                        from.format(DATE_FORMAT),
                        to.format(DATE_FORMAT)
                    ),
                    (Some(from), None) => write!(f, "{column} >= '{}'", from.format(DATE_FORMAT)),
                    (None, Some(to)) => write!(f, "{column} <= '{}'", to.format(DATE_FORMAT)),
                    (None, None) => f.write_str("TRUE"),
                }
            }
            Predicate::And(preds) if preds.is_empty() => f.write_str("TRUE"),
            Predicate::And(preds) => {
                for (i, pred) in preds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    match pred {
                        Predicate::And(_) => write!(f, "({pred})")?,
                        _ => write!(f, "{pred}")?,
                    }
                }
                Ok(())
            }
            Predicate::MemberOf(ids) if ids.is_empty() => f.write_str("FALSE"),
            Predicate::MemberOf(ids) => {
                let ids = ids.iter().map(i32::to_string).collect::<Vec<_>>();
                write!(f, "group_id IN ({})", ids.join(", "))
            }
        }
    }
}

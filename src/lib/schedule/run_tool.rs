use std::{collections::HashMap, error::Error};

use log::info;

use super::{
    aggregator::days_from,
    executor::apply,
    models::view_model::Day,
    record_source::RecordSource,
    search::{compile, compile_with_groups},
};

/// Searches the records of `source` and shapes the hits into days.
/// Parameters are validated before anything is fetched. With `group_ids` set,
/// only records of those groups qualify.
pub async fn run<RS: RecordSource>(
    source: &RS,
    params: &HashMap<String, String>,
    group_ids: Option<&[i32]>,
) -> Result<Vec<Day>, Box<dyn Error>> {
    let predicate = match group_ids {
        Some(group_ids) => Some(compile_with_groups(params, group_ids)?),
        None => compile(params)?,
    };
    match &predicate {
        Some(predicate) => info!("Searching for {}", predicate),
        None => info!("Searching without filters"),
    }

    let records = source.fetch_records().await?;
    let matching = apply(predicate.as_ref(), records)?;
    let days = days_from(&matching)?;
    info!(
        "Found {} lesson(s) over {} day(s)",
        matching.len(),
        days.len()
    );

    Ok(days)
}

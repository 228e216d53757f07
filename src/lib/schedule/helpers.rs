use std::{
    collections::HashMap,
    error::Error,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, info};

use super::models::{schedule_model::ScheduleRecord, view_model::Day, Args, Config};

pub fn get_config(args: &Args) -> Result<Config, figment::Error> {
    let config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SCHEDULE_"))
        .extract()?;
    info!("Read config from {}", args.config_json_path.display());
    Ok(config)
}

/* `key=value` pairs into a parameter map; a later duplicate key wins */
pub fn parse_query_params(pairs: &[String]) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let mut params = HashMap::new();
    for pair in pairs.iter() {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(format!("search parameter {pair:?} is not of the form key=value").into());
        };
        debug!("Search parameter {} = {:?}", key, value);
        params.insert(key.to_owned(), value.to_owned());
    }
    Ok(params)
}

pub fn get_records(path: &Path) -> Result<Vec<ScheduleRecord>, Box<dyn Error>> {
    info!(
        "Reading schedule records from {}",
        std::path::absolute(path)?.display()
    );
    let records_file = BufReader::new(File::open(path)?);
    let records: Vec<ScheduleRecord> = serde_json::from_reader(records_file)?;
    info!("Read {} records", records.len());
    Ok(records)
}

pub fn write_days(path: Option<&Path>, days: &[Day]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            info!(
                "Writing {} days to {}",
                days.len(),
                std::path::absolute(path)?.display()
            );
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, days)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, days)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/helpers_tests.rs"]
mod tests;

use std::{error::Error, path::PathBuf, time::Duration};

use futures::future;
use log::info;
use reqwest::Client;

use super::{
    helpers::get_records,
    models::{schedule_model::ScheduleRecord, Config},
};

/// A trait, necessary for every entity that provides raw schedule records.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch_records(&self) -> Result<Vec<ScheduleRecord>, Box<dyn Error>>;
}

/// Records stored in a local JSON array file.
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl RecordSource for JsonFileSource {
    async fn fetch_records(&self) -> Result<Vec<ScheduleRecord>, Box<dyn Error>> {
        get_records(&self.path)
    }
}

/// Records served as JSON arrays by one or more HTTP endpoints.
pub struct HttpSource {
    client: Client,
    urls: Vec<String>,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            urls: config.source_urls.clone(),
        })
    }
}

async fn get_records_by_url(
    http_client: &Client,
    url: &str,
) -> Result<Vec<ScheduleRecord>, reqwest::Error> {
    info!("Getting schedule records from {}", url);
    let response = http_client.get(url).send().await?.error_for_status()?;
    response.json().await
}

/// Queries every endpoint at once and concatenates the records in endpoint order.
impl RecordSource for HttpSource {
    async fn fetch_records(&self) -> Result<Vec<ScheduleRecord>, Box<dyn Error>> {
        let records = future::join_all(
            self.urls
                .iter()
                .map(|url| get_records_by_url(&self.client, url)),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        info!(
            "Collected {} records from {} endpoint(s)",
            records.len(),
            self.urls.len()
        );
        Ok(records)
    }
}

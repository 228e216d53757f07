use std::path::PathBuf;

use clap::{command, Parser};
use serde::Deserialize;

pub mod schedule_model;
pub mod view_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the list of schedule endpoints and HTTP settings.
/// 2. Optional path to a local records file. When given, endpoints from config are not queried.
/// 3. Optional path for the resulting days. Days are printed to stdout otherwise.
/// 4. Group ids to restrict the search to. Without any, no group restriction is applied.
/// 5. Search parameters as `key=value` pairs, e.g. `room=101 dateFrom=2024-01-01`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub records_json_path: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub output_json_path: Option<PathBuf>,
    #[arg(long = "group", value_name = "ID")]
    pub group_ids: Vec<i32>,
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Endpoints serving schedule records as a JSON array
/// 2. Timeout for a single request to any of them, in seconds
#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub source_urls: Vec<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

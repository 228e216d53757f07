use lib::schedule::helpers::{get_config, parse_query_params, write_days};
use lib::schedule::models::Args;
use lib::schedule::record_source::{HttpSource, JsonFileSource};
use lib::schedule::run_tool::run;

use clap::Parser;

#[tokio::main]
async fn main() {
    /* Setup logging, stdout is kept for the resulting days */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args).unwrap();
    let params = parse_query_params(&args.params).unwrap();
    let group_ids = (!args.group_ids.is_empty()).then_some(args.group_ids.as_slice());

    /* Search and reshape */
    let days = match &args.records_json_path {
        Some(path) => {
            let source = JsonFileSource { path: path.clone() };
            run(&source, &params, group_ids).await
        }
        None => {
            let source = HttpSource::new(&config).unwrap();
            run(&source, &params, group_ids).await
        }
    }
    .unwrap();

    write_days(args.output_json_path.as_deref(), &days).unwrap();
}

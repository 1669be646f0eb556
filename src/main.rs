use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use cnholiday::configuration::Configuration;
use cnholiday::holidayerror::HolidayError;
use cnholiday::holidayservice::HolidayService;

const DEFAULT_START: &str = "2023-09-28";
const DEFAULT_END: &str = "2023-10-15";

/// `cnholiday [CONFIG_JSON] [START END]`
fn run(args: &[String]) -> Result<(), HolidayError> {
    let (config_path, range) = match args {
        [] => (None, (DEFAULT_START, DEFAULT_END)),
        [config] => (Some(config.as_str()), (DEFAULT_START, DEFAULT_END)),
        [start, end] => (None, (start.as_str(), end.as_str())),
        [config, start, end, ..] => (Some(config.as_str()), (start.as_str(), end.as_str())),
    };
    let configuration = match config_path {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::default(),
    };

    let service = HolidayService::new(configuration)?;
    let (start, end) = range;
    let workdays = service.workdays_between(start, end)?;
    println!("workdays (make-up days included): {:?}", workdays);
    let holidays = service.holidays_between(start, end)?;
    println!("holidays: {:?}", holidays);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "query failed");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::WindowArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_business_hours, parse_tz_or_input_error};

pub fn run_window(args: WindowArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let hours = parse_business_hours(&args.business_tz, &args.open, &args.close)?;
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d").map_err(|_| {
        CliError::input(format!(
            "Invalid date '{}'. Expected: YYYY-MM-DD",
            args.date
        ))
    })?;

    let (open_local, close_local) = hours.local_window_for_date(date, tz);

    let report = WindowReport {
        tz: tz.to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        business_zone: hours.zone.to_string(),
        open_local: open_local.format("%Y-%m-%dT%H:%M:%S").to_string(),
        close_local: close_local.format("%Y-%m-%dT%H:%M:%S").to_string(),
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("date: {}", report.date);
            println!("tz: {}", report.tz);
            println!("open_local: {}", report.open_local);
            println!("close_local: {}", report.close_local);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct WindowReport {
    tz: String,
    date: String,
    business_zone: String,
    open_local: String,
    close_local: String,
}

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use slotcheck_core::{Candidate, InMemoryStore, ScheduleError, Validator, Verdict};

use crate::cli::CheckArgs;
use crate::error::{CliError, CliResult, EXIT_REJECTED, EXIT_SUCCESS, OutputFormat};
use crate::shared::{
    parse_business_hours, parse_local_time, parse_rfc3339_to_utc, parse_tz_or_input_error,
};

pub fn run_check(args: CheckArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let hours = parse_business_hours(&args.business_tz, &args.open, &args.close)?;
    let start_local = parse_local_time(&args.start)?;
    let end_local = parse_local_time(&args.end)?;
    let now = match &args.now {
        Some(s) => parse_rfc3339_to_utc(s)?,
        None => Utc::now(),
    };
    let store = load_snapshot(args.store.as_deref())?;

    let mut candidate = Candidate::new(args.user, args.customer, start_local, end_local);
    if let Some(id) = args.exclude {
        candidate = candidate.excluding(id);
    }

    let validator = Validator::new(tz).with_hours(hours);
    let verdict = validator
        .validate_at(&store, &candidate, now)
        .map_err(|e| match e {
            ScheduleError::Store(_) => CliError::runtime(e.to_string()),
            _ => CliError::input(e.to_string()),
        })?;

    let (start_utc, end_utc) = validator.utc_bounds(&candidate);
    let report = CheckReport {
        tz: tz.to_string(),
        user_id: candidate.user_id,
        customer_id: candidate.customer_id,
        start_local: start_local.format("%Y-%m-%dT%H:%M:%S").to_string(),
        end_local: end_local.format("%Y-%m-%dT%H:%M:%S").to_string(),
        start_utc: slotcheck_core::tz::format_rfc3339_utc(&start_utc),
        end_utc: slotcheck_core::tz::format_rfc3339_utc(&end_utc),
        verdict,
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => match verdict {
            Verdict::Accepted => {
                println!("verdict: accepted");
                println!("start_utc: {}", report.start_utc);
                println!("end_utc: {}", report.end_utc);
            }
            Verdict::Rejected { reason } => {
                println!("verdict: rejected");
                println!("reason: {} ({})", reason, reason.message());
            }
        },
    }

    let code = if verdict.is_accepted() {
        EXIT_SUCCESS
    } else {
        EXIT_REJECTED
    };
    Ok(ExitCode::from(code))
}

/// Load the existing-appointment snapshot, or an empty store when no file
/// was given.
fn load_snapshot(path: Option<&str>) -> CliResult<InMemoryStore> {
    let Some(path) = path else {
        return Ok(InMemoryStore::default());
    };

    read_snapshot(path).map_err(|e| CliError::runtime(format!("{:#}", e)))
}

fn read_snapshot(path: &str) -> anyhow::Result<InMemoryStore> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read store file '{path}'"))?;
    let appointments = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse store file '{path}'"))?;
    Ok(InMemoryStore::new(appointments))
}

#[derive(Debug, Serialize)]
struct CheckReport {
    tz: String,
    user_id: i32,
    customer_id: i32,
    start_local: String,
    end_local: String,
    start_utc: String,
    end_utc: String,
    #[serde(flatten)]
    verdict: Verdict,
}

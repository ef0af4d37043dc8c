use clap::{Parser, Subcommand};

/// DST-safe appointment scheduling validation tool
#[derive(Parser, Debug)]
#[command(name = "slotcheck")]
#[command(about = "DST-safe appointment scheduling validation tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a candidate appointment against existing appointments
    Check(CheckArgs),
    /// Print the local-time business window for a date
    Window(WindowArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Caller's IANA timezone (candidate times are wall clocks in it)
    #[arg(short, long, default_value = "UTC")]
    pub tz: String,

    /// JSON file with existing appointments (omit for an empty store)
    #[arg(long)]
    pub store: Option<String>,

    /// User the appointment is assigned to
    #[arg(long)]
    pub user: i32,

    /// Customer the appointment is booked for
    #[arg(long)]
    pub customer: i32,

    /// Candidate start, local wall clock (e.g., 2030-06-03T10:30)
    #[arg(long)]
    pub start: String,

    /// Candidate end, local wall clock
    #[arg(long)]
    pub end: String,

    /// Appointment id to exclude when re-validating an edit
    #[arg(long)]
    pub exclude: Option<i32>,

    /// Clock override, RFC3339 (defaults to the current time)
    #[arg(long)]
    pub now: Option<String>,

    /// Business reference zone
    #[arg(long, default_value = "America/New_York")]
    pub business_tz: String,

    /// Business opening time, HH:MM in the reference zone
    #[arg(long, default_value = "09:00")]
    pub open: String,

    /// Business closing time, HH:MM in the reference zone
    #[arg(long, default_value = "17:00")]
    pub close: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct WindowArgs {
    /// Caller's IANA timezone
    #[arg(short, long)]
    pub tz: String,

    /// Local date to compute the window for (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Business reference zone
    #[arg(long, default_value = "America/New_York")]
    pub business_tz: String,

    /// Business opening time, HH:MM in the reference zone
    #[arg(long, default_value = "09:00")]
    pub open: String,

    /// Business closing time, HH:MM in the reference zone
    #[arg(long, default_value = "17:00")]
    pub close: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

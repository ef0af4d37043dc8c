use std::process::ExitCode;

use clap::Parser;

mod check_cmd;
mod cli;
mod error;
mod shared;
mod window_cmd;

use check_cmd::run_check;
use cli::{Cli, Commands};
use error::{output_format_hint, parse_output_format, render_error};
use window_cmd::run_window;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_check(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Window(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_window(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}

use std::process::ExitCode;

use log::debug;

use orfscan_cli::app::{exit_code, open_input, open_output, run};
use orfscan_cli::logging::{init_logging, resolve_level, LOG_ENV};
use orfscan_cli::CliArgs;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };

    let env_level = std::env::var(LOG_ENV).ok();
    if let Err(err) = init_logging(resolve_level(args.log_level, env_level.as_deref())) {
        eprintln!("orfscan: could not initialize logging: {err}");
    }

    let result = open_input(args.input.as_deref()).and_then(|input| {
        let output = open_output(args.output.as_deref())?;
        run(&args, input, output)
    });

    match result {
        Ok(summary) => {
            if !summary.skipped.is_empty() {
                eprintln!(
                    "orfscan: skipped {} of {} sequences",
                    summary.skipped.len(),
                    summary.records
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{err:?}");
            eprintln!("orfscan: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

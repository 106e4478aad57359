use flexi_logger::Logger;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "warn"
};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the calendar.
    let _logger = match Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL).and_then(Logger::start) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("cal: logging disabled: {err}");
            None
        }
    };

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match textcal::render_calendar(args.as_slice()) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("Arguments {args:?} rejected");
            eprintln!("cal: {err}");
            ExitCode::FAILURE
        }
    }
}

use std::path::Path;
use std::process::ExitCode;

use log_spammer::{telemetry, Config, Formatter, Shutdown, Sink, Spammer, DEFAULT_LOG_PATH};
use tracing::{error, info};

fn main() -> ExitCode {
    let _guard = telemetry::init();

    let (config, notices) = Config::from_env();
    for notice in &notices {
        info!("{notice}");
    }

    let sink = match Sink::acquire(&config.log_path, Path::new(DEFAULT_LOG_PATH)) {
        Ok(sink) => sink,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Logging every {} to {} in {} format",
        humantime::format_duration(config.interval),
        sink.path().display(),
        config.log_format
    );

    let mut formatter = Formatter::new(config.log_format, sink);
    Spammer::new(config.interval).run(&mut formatter, &Shutdown::new());

    ExitCode::SUCCESS
}

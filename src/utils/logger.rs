use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the default log filter
pub const LOG_ENV: &str = "ROSETTE_LOG";

/// Logger without timestamps; a command line run is short enough that the
/// order of lines says all a timestamp would.
///
/// Use ROSETTE_LOG=debug (or any EnvFilter directive) to change verbosity.
/// Example: ROSETTE_LOG=rosette::editing=debug rosette --load-ufo ...
pub fn init_custom_logger(debug: bool) {
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(debug)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(format)
                .with_filter(filter),
        )
        .init();
}

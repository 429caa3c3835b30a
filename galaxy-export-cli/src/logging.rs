use std::io::Write;

use log::{Level, LevelFilter};

/// Install the global logger.
///
/// Normal runs print bare messages (warnings and errors keep a level
/// prefix); `verbose` switches to env_logger's timestamped format at debug
/// level. `RUST_LOG` overrides the chosen level either way.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if !verbose {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}

//! Console logging setup.
//!
//! Normal output goes through `log::info!` so `--quiet` can silence it.
//! Plain messages are printed as-is; `--verbose` adds a timestamp and level.

use std::io::Write;

use log::LevelFilter;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stdout);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        });
    } else {
        let level = if quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        };
        builder.filter_level(level);
        // RUST_LOG still wins when set explicitly
        if !quiet {
            builder.parse_env("RUST_LOG");
        }
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.init();
}

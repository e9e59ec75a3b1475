use log::LevelFilter;

/// Pick this crate's log level from the CLI verbosity flags.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` still overrides the flags.
pub fn init(verbose: u8, quiet: bool, no_color: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level_for(verbose, quiet))
        .format_timestamp_millis()
        .parse_default_env();
    if no_color {
        builder.write_style(env_logger::WriteStyle::Never);
    }
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    field::MakeExt, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::internal_prelude::*;

/// Install the global tracing subscriber.
///
/// All log output goes to stderr, so it never interferes with a command's output on stdout.
/// The level depends on the amount of `-v` flags, but `RUST_LOG` always takes precedence.
pub fn install_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Escape codes would end up verbatim in files if stderr is redirected.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .map_fmt_fields(|f| f.debug_alt())
        .with_timer(ChronoLocal::new("%H:%M:%S".into()))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()
        .wrap_err("RUST_LOG env variable is invalid")?;

    tracing_subscriber::Registry::default()
        .with(fmt_layer.with_filter(filter_layer))
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}

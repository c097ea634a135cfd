use anyhow::Result;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::FmtSpan, Layer as FmtLayer},
    layer::SubscriberExt as _,
    Layer as _, Registry,
};

/// Plain log lines on stderr; stdout is reserved for preview output.
pub(super) fn set_up(options: &super::Options) -> Result<()> {
    let filter = if options.verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };

    let span_events = if options.verbose {
        // include enter/exit events for detailed tracing
        FmtSpan::FULL
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = FmtLayer::new()
        .with_writer(std::io::stderr)
        .with_span_events(span_events)
        .with_ansi(options.color)
        .with_filter(filter);
    let subscriber = Registry::default().with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to set up tracing: {}", e))
}

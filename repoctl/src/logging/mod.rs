mod headless;

use anyhow::Result;

pub(crate) struct Options {
    pub verbose: bool,
    pub color: bool,
}

/// Install the process-wide tracing subscriber. Call at most once.
pub(crate) fn set_up(options: Options) -> Result<()> {
    headless::set_up(&options)
}

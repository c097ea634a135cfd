use anyhow::Result;
use std::process::exit;

/// Create the single-threaded tokio runtime used by the CLI.
///
/// Panics if the runtime cannot be created.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to initialize tokio runtime")
}

/// Handle a Result, printing the error and exiting with code 1 on failure.
pub fn handle_result(r: Result<()>) {
    match r {
        Ok(()) => {}
        Err(e) => {
            eprintln!("repoctl error: {:?}", e);
            exit(1);
        }
    }
}

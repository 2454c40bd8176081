//! Prints `Hello World!` followed by CRLF and exits with status 0.
//!
//! Arguments are ignored. Set `RUST_LOG=debug` to see diagnostics on stderr.

use std::io;
use std::process::ExitCode;

use hello_world::print_hello_message;

fn main() -> ExitCode {
    // Logging only when RUST_LOG is set, and never on stdout
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    if let Err(error) = print_hello_message(&mut io::stdout().lock()) {
        tracing::warn!(%error, "failed to write greeting to stdout");
    }

    ExitCode::SUCCESS
}

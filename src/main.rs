//! peon-ping CLI entry point

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use peon_ping::cli::{run_hook, Cli, HookOptions, EXIT_SUCCESS};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // The host must never see a failure: arguments clap rejects are scanned
    // for a hook instead, only explicit help/version requests print.
    let options = match Cli::try_parse() {
        Ok(cli) => HookOptions::from(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::from(EXIT_SUCCESS);
        }
        Err(_) => HookOptions::scan(std::env::args_os().skip(1)),
    };

    run_hook(options).await
}

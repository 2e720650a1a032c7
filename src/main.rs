use std::io::{self, Write};
use std::process::ExitCode;

use env_logger::{Builder, Env, Target};
use log::{error, info};

mod error;
mod networking;
mod report;
mod steplib;

use crate::error::error_chain;
use crate::networking::SteplibClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger_builder(Env::default()).init();

    let client = SteplibClient::new();
    exit_code(run(&client, &mut io::stdout()).await)
}

/// Progress lines share stdout with the report.
fn logger_builder(env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or("info"));
    builder.target(Target::Stdout);
    builder
}

fn exit_code(result: Result<(), String>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch the steplib spec and print the deprecated step ids to `out`.
/// Nothing is written to `out` when the fetch fails.
async fn run<W: Write>(client: &SteplibClient, out: &mut W) -> Result<(), String> {
    info!("Fetching step list");
    let mut manifest = client.fetch().await.map_err(|err| {
        let action = if err.is_network() { "fetch" } else { "decode" };
        format!(
            "Failed to {action} the step list from the server, error: {}",
            error_chain(&err)
        )
    })?;
    info!("Done");

    info!("List deprecated steps");
    let deprecated = report::select_deprecated(&mut manifest);
    info!("{} of {} steps are deprecated", deprecated.len(), manifest.steps.len());
    report::write_report(out, &deprecated)
        .map_err(|err| format!("Failed to write the deprecated step list, error: {err}"))
}

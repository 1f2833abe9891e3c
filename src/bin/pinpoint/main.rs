//! `pinpoint` - run Amazon Pinpoint operations from the command line.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser};
use integrations_aws_pinpoint::command::{CommandInvoker, Outcome, SkipReason};
use integrations_aws_pinpoint::config::PinpointConfigBuilder;
use integrations_aws_pinpoint::error::PinpointError;
use integrations_aws_pinpoint::logging::{LogFormat, LoggingConfig};
use integrations_aws_pinpoint::operations;
use integrations_aws_pinpoint::session::Session;
use tokio_util::sync::CancellationToken;

mod command;
mod output;
mod prompt;

/// Run Amazon Pinpoint operations.
#[derive(Debug, Parser)]
#[command(name = "pinpoint", version, about, subcommand_required = true)]
struct Cli {
    /// AWS region (defaults to AWS_REGION or the profile's region).
    #[arg(long, global = true, env = "AWS_REGION")]
    region: Option<String>,

    /// Override the service endpoint URL.
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Named profile from the shared credentials and config files.
    #[arg(long, global = true, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log output format: pretty, json or compact.
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    fn config_builder(&self) -> PinpointConfigBuilder {
        let mut builder = PinpointConfigBuilder::from_env();
        if let Some(profile) = &self.profile {
            builder = builder.profile(profile.clone());
        }
        if let Some(region) = &self.region {
            builder = builder.region(region.clone());
        }
        if let Some(endpoint) = &self.endpoint_url {
            builder = builder.endpoint(endpoint.clone());
        }
        if let Some(seconds) = self.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        builder
    }
}

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            output::print_message(&format!("failed to start runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let status = runtime.block_on(run());
    // Stdin readers may still be parked on a blocking thread after ctrl-c.
    runtime.shutdown_background();
    status
}

async fn run() -> ExitCode {
    let matches = Cli::command()
        .subcommand(command::list_command())
        .subcommands(operations::all().iter().copied().map(command::operation_command))
        .get_matches();

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = LoggingConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format)
        .init()
    {
        eprintln!("warning: logging not initialised: {e}");
    }

    let Some((name, sub_matches)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    if name == command::LIST {
        command::print_catalogue();
        return ExitCode::SUCCESS;
    }

    let Some(descriptor) = operations::find(name) else {
        output::print_message(&format!("unknown operation '{name}'"));
        return ExitCode::FAILURE;
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted; cancelling");
            on_interrupt.cancel();
        }
    });

    let options = match command::invocation_options(descriptor, sub_matches, cancel.clone()) {
        Ok(options) => options,
        Err(e) => return output::report_error(&e),
    };

    let inputs = match command::piped_inputs(sub_matches, &cancel).await {
        Ok(Some(inputs)) => inputs,
        Ok(None) => return output::report_error(&PinpointError::Cancelled),
        Err(e) => {
            output::print_message(&format!("failed to read input: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let session = Arc::new(Session::lazy(cli.config_builder()));
    let invoker = CommandInvoker::new(session, prompt::TerminalPrompt::new());

    let batches: Vec<Option<String>> = if inputs.is_empty() {
        vec![None]
    } else {
        inputs.into_iter().map(Some).collect()
    };

    let mut status = ExitCode::SUCCESS;
    for input in batches {
        let args = command::bound_args(descriptor, sub_matches, input);
        match invoker.invoke(descriptor, &args, &options).await {
            Ok(Outcome::Emitted(value)) => output::print_value(&value),
            Ok(Outcome::Skipped(SkipReason::WhatIf)) => output::print_what_if(descriptor, &args),
            Ok(Outcome::Skipped(SkipReason::Declined)) => {}
            Err(e) => {
                status = output::report_error(&e);
                if options.cancellation().is_cancelled() {
                    break;
                }
            }
        }
    }

    status
}

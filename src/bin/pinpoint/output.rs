//! Result and error printing.

use std::error::Error;
use std::process::ExitCode;

use integrations_aws_pinpoint::command::{BoundArgs, CallContext, OperationDescriptor};
use integrations_aws_pinpoint::error::PinpointError;
use serde_json::Value;

/// Print an emitted value to stdout. Strings print bare so they can be piped
/// into the next command.
pub fn print_value(value: &Value) {
    match value {
        Value::String(text) => println!("{text}"),
        Value::Null => {}
        other => match serde_json::to_string_pretty(other) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{other}"),
        },
    }
}

pub fn print_what_if(descriptor: &'static OperationDescriptor, args: &BoundArgs) {
    let target = CallContext::new(descriptor, args, None)
        .ok()
        .and_then(|context| context.target())
        .unwrap_or_else(|| descriptor.name.to_string());
    eprintln!(
        "What if: Performing the operation \"{}\" on target \"{target}\".",
        descriptor.name
    );
}

pub fn print_message(message: &str) {
    eprintln!("error: {message}");
}

/// Print `error` with its source chain and pick an exit code: 2 for local
/// validation faults, 130 for cancellation, 1 otherwise.
pub fn report_error(error: &PinpointError) -> ExitCode {
    eprintln!("error: {error}");

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    if let Some(request_id) = error.request_id() {
        eprintln!("  request id: {request_id}");
    }

    match error {
        PinpointError::Validation(_) => ExitCode::from(2),
        PinpointError::Cancelled => ExitCode::from(130),
        _ => ExitCode::FAILURE,
    }
}

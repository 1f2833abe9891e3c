//! Builds one subcommand per operation descriptor and turns parsed matches
//! back into bound arguments and invocation options.

use clap::{Arg, ArgAction, ArgMatches, Command};
use integrations_aws_pinpoint::command::{
    BindingSource, BoundArgs, FieldDescriptor, FieldKind, InvocationOptions, OperationDescriptor,
    OutputSelector,
};
use integrations_aws_pinpoint::error::{PinpointError, ValidationError};
use integrations_aws_pinpoint::operations;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;

/// Name of the catalogue listing subcommand.
pub const LIST: &str = "list";

const INPUT: &str = "input";
const SELECT: &str = "select";
const PASS_THRU: &str = "pass-thru";
const FORCE: &str = "force";
const WHAT_IF: &str = "what-if";

pub fn list_command() -> Command {
    Command::new(LIST).about("List every available operation")
}

pub fn operation_command(descriptor: &'static OperationDescriptor) -> Command {
    let mut command = Command::new(descriptor.cli_name())
        .about(descriptor.summary)
        .arg(
            Arg::new(SELECT)
                .long("select")
                .value_name("SPEC")
                .help("Output to emit: '*' whole response, '^Param' a parameter, or a response field"),
        )
        .arg(
            Arg::new(PASS_THRU)
                .long("pass-thru")
                .action(ArgAction::SetTrue)
                .help("Emit the piped input instead of the response"),
        )
        .arg(
            Arg::new(WHAT_IF)
                .long("what-if")
                .action(ArgAction::SetTrue)
                .help("Validate and show what would happen without calling the service"),
        );

    if descriptor.state_changing {
        command = command.arg(
            Arg::new(FORCE)
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Do not ask for confirmation"),
        );
    }

    if let Some(field) = descriptor.pipeline_field() {
        command = command.arg(
            Arg::new(INPUT)
                .value_name(field.name)
                .help(format!(
                    "Value for --{}; '-' reads one value per line from stdin",
                    field.name
                )),
        );
    }

    command.args(descriptor.fields.iter().map(field_arg))
}

fn field_arg(field: &'static FieldDescriptor) -> Arg {
    let mut help = kind_help(field.kind).to_string();
    if field.is_required() {
        help.push_str(" (required)");
    }
    if field.source == BindingSource::Pipeline {
        help.push_str(" (accepts piped input)");
    }
    Arg::new(field.name)
        .long(field.name)
        .value_name(kind_value_name(field.kind))
        .help(help)
}

fn kind_value_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "STRING",
        FieldKind::Integer => "INT",
        FieldKind::Double => "NUMBER",
        FieldKind::Boolean => "BOOL",
        FieldKind::Timestamp => "TIMESTAMP",
        FieldKind::StringList => "LIST",
        FieldKind::StringMap => "MAP",
        FieldKind::Document => "JSON",
    }
}

fn kind_help(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "Text",
        FieldKind::Integer => "Whole number",
        FieldKind::Double => "Number",
        FieldKind::Boolean => "true or false",
        FieldKind::Timestamp => "RFC 3339 timestamp",
        FieldKind::StringList => "Comma separated values or a JSON array",
        FieldKind::StringMap => "key=value pairs separated by commas, or a JSON object",
        FieldKind::Document => "JSON document",
    }
}

/// Named arguments from `matches`, plus one piped value if given.
pub fn bound_args(
    descriptor: &'static OperationDescriptor,
    matches: &ArgMatches,
    piped: Option<String>,
) -> BoundArgs {
    let mut args = descriptor
        .fields
        .iter()
        .filter_map(|field| {
            matches
                .get_one::<String>(field.name)
                .map(|text| (field.name, text.clone()))
        })
        .fold(BoundArgs::new(), |args, (name, text)| args.bind_text(name, text));

    if let Some(text) = piped {
        args = args.pipe_text(text);
    }
    args
}

/// Invocation options from the common flags.
pub fn invocation_options(
    descriptor: &OperationDescriptor,
    matches: &ArgMatches,
    cancellation: CancellationToken,
) -> Result<InvocationOptions, PinpointError> {
    let mut builder = InvocationOptions::builder()
        .pass_thru(matches.get_flag(PASS_THRU))
        .what_if(matches.get_flag(WHAT_IF))
        .force(flag_if_present(matches, FORCE))
        .cancellation(cancellation);

    if let Some(text) = matches.get_one::<String>(SELECT) {
        let selector = text.parse::<OutputSelector>().map_err(|reason| {
            ValidationError::InvalidSelector {
                operation: descriptor.name.to_string(),
                selector: text.clone(),
                reason,
            }
        })?;
        builder = builder.select(selector);
    }

    Ok(builder.build()?)
}

fn flag_if_present(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

/// Values for the pipeline field. `-` reads one value per non-empty line of
/// stdin; anything else is a single value. `None` when cancelled mid-read.
pub async fn piped_inputs(
    matches: &ArgMatches,
    cancel: &CancellationToken,
) -> std::io::Result<Option<Vec<String>>> {
    let Some(input) = matches.try_get_one::<String>(INPUT).ok().flatten() else {
        return Ok(Some(Vec::new()));
    };

    if input != "-" {
        return Ok(Some(vec![input.clone()]));
    }

    read_lines(tokio::io::stdin(), cancel).await
}

async fn read_lines<R>(
    mut reader: R,
    cancel: &CancellationToken,
) -> std::io::Result<Option<Vec<String>>>
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    tokio::select! {
        biased;
        _ = cancel.cancelled() => return Ok(None),
        read = reader.read_to_string(&mut text) => read?,
    };

    Ok(Some(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    ))
}

/// Print the catalogue as an aligned table.
pub fn print_catalogue() {
    let width = operations::all()
        .iter()
        .map(|op| op.cli_name().len())
        .max()
        .unwrap_or(0);

    for op in operations::all() {
        let marker = if op.state_changing { " " } else { "*" };
        println!("{marker} {:<width$}  {}", op.cli_name(), op.summary);
    }
    println!();
    println!("* read-only");
}

#[cfg(test)]
mod tests {
    use super::*;
    use integrations_aws_pinpoint::command::SelectorOverride;
    use integrations_aws_pinpoint::operations::{apps, tags};

    fn parse(descriptor: &'static OperationDescriptor, argv: &[&str]) -> ArgMatches {
        operation_command(descriptor)
            .try_get_matches_from(std::iter::once("test").chain(argv.iter().copied()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_read_lines_skips_blank_lines() {
        let input: &[u8] = b"app-1\n\n  app-2  \n";
        let lines = read_lines(input, &CancellationToken::new()).await.unwrap();
        assert_eq!(lines, Some(vec!["app-1".to_string(), "app-2".to_string()]));
    }

    #[tokio::test]
    async fn test_read_lines_stops_on_cancel() {
        // The writer half stays open, so the read never reaches EOF.
        let (_writer, reader) = tokio::io::duplex(64);
        let cancel = CancellationToken::new();
        let interrupt = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            interrupt.cancel();
        });

        let lines = tokio::time::timeout(
            std::time::Duration::from_secs(2),
            read_lines(reader, &cancel),
        )
        .await
        .expect("read was not cancelled")
        .unwrap();
        assert_eq!(lines, None);
    }

    #[test]
    fn test_every_operation_builds_a_valid_command() {
        for op in operations::all() {
            operation_command(op).debug_assert();
        }
        list_command().debug_assert();
    }

    #[test]
    fn test_bound_args_from_flags() {
        let matches = parse(&tags::TAG_RESOURCE, &["--ResourceArn", "arn:1", "--Tags", "a=b"]);
        let args = bound_args(&tags::TAG_RESOURCE, &matches, None);

        let named: Vec<_> = args.named().map(|(name, _)| name.to_string()).collect();
        assert_eq!(named, vec!["ResourceArn", "Tags"]);
        assert!(args.piped().is_none());
    }

    #[test]
    fn test_positional_input_is_piped() {
        let matches = parse(&apps::GET_APP, &["app-9"]);
        let args = bound_args(&apps::GET_APP, &matches, Some("app-9".to_string()));
        assert!(args.piped().is_some());
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_options_from_flags() {
        let matches = parse(&apps::DELETE_APP, &["--ApplicationId", "a", "--force", "--select", "*"]);
        let options =
            invocation_options(&apps::DELETE_APP, &matches, CancellationToken::new()).unwrap();
        assert!(options.force());
        assert_eq!(
            options.selector(),
            Some(&SelectorOverride::Expression(OutputSelector::WholeResponse))
        );

        let matches = parse(&apps::GET_APP, &["a", "--select", "X", "--pass-thru"]);
        let error =
            invocation_options(&apps::GET_APP, &matches, CancellationToken::new()).unwrap_err();
        assert!(matches!(
            error,
            PinpointError::Validation(ValidationError::ConflictingSelectors)
        ));
    }

    #[test]
    fn test_read_only_operation_has_no_force_flag() {
        let result = operation_command(&apps::GET_APP)
            .try_get_matches_from(["test", "a", "--force"]);
        assert!(result.is_err());
    }
}

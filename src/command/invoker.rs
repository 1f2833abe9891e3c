//! The generic command invoker.
//!
//! One invocation is: validate and build the call context, pass the
//! confirmation gate, build the request value, acquire the session's client,
//! perform exactly one call, and project the response. Exactly one of a
//! projected value or an error comes back.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, info_span, Instrument};

use super::binding::BoundArgs;
use super::confirm::ConfirmPrompt;
use super::context::CallContext;
use super::descriptor::OperationDescriptor;
use super::options::InvocationOptions;
use super::request::RequestValue;
use crate::error::{PinpointError, PinpointResult};
use crate::session::Session;

/// Why an invocation produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The confirmation prompt was declined.
    Declined,
    /// Dry run requested.
    WhatIf,
}

/// Result of a successful invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The projected response.
    Emitted(Value),
    /// No call was made and nothing is emitted.
    Skipped(SkipReason),
}

impl Outcome {
    /// The emitted value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Emitted(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    /// Consume into the emitted value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Emitted(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    /// True when the invocation was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }
}

/// Runs operation descriptors against a session.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use integrations_aws_pinpoint::command::{AutoConfirm, BoundArgs, CommandInvoker, InvocationOptions};
/// use integrations_aws_pinpoint::operations;
/// use integrations_aws_pinpoint::session::Session;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let invoker = CommandInvoker::new(Arc::new(Session::from_env()), AutoConfirm);
///
/// let outcome = invoker
///     .invoke(
///         &operations::apps::CREATE_APP,
///         &BoundArgs::new().bind("Name", "storefront"),
///         &InvocationOptions::default(),
///     )
///     .await?;
///
/// if let Some(app) = outcome.value() {
///     println!("{app}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CommandInvoker {
    session: Arc<Session>,
    prompt: Arc<dyn ConfirmPrompt>,
}

impl CommandInvoker {
    /// Create an invoker over `session` that asks `prompt` before
    /// state-changing calls.
    pub fn new(session: Arc<Session>, prompt: impl ConfirmPrompt + 'static) -> Self {
        Self {
            session,
            prompt: Arc::new(prompt),
        }
    }

    /// The session this invoker uses.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Invoke one operation.
    ///
    /// # Errors
    ///
    /// - `Validation` for binding or selector faults, before any network use
    /// - `Cancelled` when the options' token is raised before the call completes
    /// - `Connectivity` when the endpoint could not be reached
    /// - any other client or service error, unchanged
    pub async fn invoke(
        &self,
        descriptor: &'static OperationDescriptor,
        args: &BoundArgs,
        options: &InvocationOptions,
    ) -> PinpointResult<Outcome> {
        let span = info_span!("pinpoint_invoke", operation = descriptor.name);
        self.run(descriptor, args, options).instrument(span).await
    }

    async fn run(
        &self,
        descriptor: &'static OperationDescriptor,
        args: &BoundArgs,
        options: &InvocationOptions,
    ) -> PinpointResult<Outcome> {
        let context = CallContext::new(descriptor, args, options.selector())?;
        let target = context
            .target()
            .unwrap_or_else(|| descriptor.name.to_string());

        if descriptor.state_changing
            && !options.force()
            && !options.what_if()
            && !self.confirm(descriptor.name, &target, options).await?
        {
            info!(resource = %target, "Confirmation declined; skipping");
            return Ok(Outcome::Skipped(SkipReason::Declined));
        }

        let request = RequestValue::build(&context);

        if options.what_if() {
            info!(
                resource = %target,
                request = %request.as_value(),
                "What if: would perform {}",
                descriptor.name
            );
            return Ok(Outcome::Skipped(SkipReason::WhatIf));
        }

        let cancel = options.cancellation();

        let client = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PinpointError::Cancelled),
            client = self.session.client() => client?,
        };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Invocation cancelled during call");
                return Err(PinpointError::Cancelled);
            }
            result = client.call(descriptor, &request) => result,
        };

        match result {
            Ok(response) => {
                debug!("Operation succeeded");
                Ok(Outcome::Emitted(context.selector().project(&response, &context)))
            }
            Err(error) if error.is_connectivity_fault() => {
                Err(error.into_connectivity(client.endpoint(), client.region()))
            }
            Err(error) => {
                debug!(error = %error, "Operation failed");
                Err(error)
            }
        }
    }

    /// Ask the prompt on a blocking thread, racing the cancellation token.
    /// A panicking prompt counts as a decline.
    async fn confirm(
        &self,
        operation: &'static str,
        target: &str,
        options: &InvocationOptions,
    ) -> PinpointResult<bool> {
        let cancel = options.cancellation();
        if cancel.is_cancelled() {
            return Err(PinpointError::Cancelled);
        }

        let prompt = Arc::clone(&self.prompt);
        let target = target.to_string();
        let answer = tokio::task::spawn_blocking(move || prompt.confirm(operation, &target));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Invocation cancelled at confirmation");
                Err(PinpointError::Cancelled)
            }
            answer = answer => Ok(answer.unwrap_or(false)),
        }
    }
}

impl std::fmt::Debug for CommandInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandInvoker")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::confirm::MockConfirmPrompt;
    use crate::command::descriptor::{
        DefaultOutput, FieldDescriptor, FieldKind, HttpBinding, ResponseShape,
    };
    use crate::http::HttpMethod;
    use crate::mocks::MockServiceClient;
    use mockall::predicate::eq;
    use serde_json::json;

    static DELETE_THING: OperationDescriptor = OperationDescriptor {
        name: "DeleteThing",
        summary: "test",
        fields: &[FieldDescriptor::required("Id", "Id", FieldKind::String)
            .in_uri("id")
            .from_pipeline()],
        http: HttpBinding {
            method: HttpMethod::DELETE,
            uri: "/things/{id}",
            payload: None,
        },
        response: ResponseShape {
            payload: Some("Thing"),
            fields: &["Thing"],
        },
        default_output: DefaultOutput::Field("Thing"),
        state_changing: true,
    };

    fn invoker(mock: Arc<MockServiceClient>, prompt: MockConfirmPrompt) -> CommandInvoker {
        CommandInvoker::new(Arc::new(Session::with_client(mock)), prompt)
    }

    #[tokio::test]
    async fn test_prompt_receives_operation_and_target() {
        let mock = Arc::new(MockServiceClient::responding(json!({"Thing": {"Id": "t-1"}})));
        let mut prompt = MockConfirmPrompt::new();
        prompt
            .expect_confirm()
            .with(eq("DeleteThing"), eq("t-1"))
            .times(1)
            .return_const(true);

        let outcome = invoker(mock.clone(), prompt)
            .invoke(
                &DELETE_THING,
                &BoundArgs::new().pipe("t-1"),
                &InvocationOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Emitted(json!({"Id": "t-1"})));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_declined_is_silent_no_op() {
        let mock = Arc::new(MockServiceClient::responding(json!({})));
        let mut prompt = MockConfirmPrompt::new();
        prompt.expect_confirm().times(1).return_const(false);

        let outcome = invoker(mock.clone(), prompt)
            .invoke(
                &DELETE_THING,
                &BoundArgs::new().bind("Id", "t-1"),
                &InvocationOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::Declined));
        assert!(outcome.value().is_none());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_force_skips_prompt() {
        let mock = Arc::new(MockServiceClient::responding(json!({"Thing": {}})));
        let mut prompt = MockConfirmPrompt::new();
        prompt.expect_confirm().times(0);

        let options = InvocationOptions::builder().force(true).build().unwrap();
        invoker(mock.clone(), prompt)
            .invoke(&DELETE_THING, &BoundArgs::new().bind("Id", "t-1"), &options)
            .await
            .unwrap();
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_validation_happens_before_prompt() {
        let mock = Arc::new(MockServiceClient::responding(json!({})));
        let mut prompt = MockConfirmPrompt::new();
        prompt.expect_confirm().times(0);

        let error = invoker(mock.clone(), prompt)
            .invoke(&DELETE_THING, &BoundArgs::new(), &InvocationOptions::default())
            .await
            .unwrap_err();
        assert!(error.is_validation());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cancel_while_prompting_yields_cancelled() {
        let mock = Arc::new(MockServiceClient::responding(json!({"Thing": {}})));
        let token = tokio_util::sync::CancellationToken::new();
        let interrupt = token.clone();
        let mut prompt = MockConfirmPrompt::new();
        prompt.expect_confirm().times(1).returning(move |_, _| {
            interrupt.cancel();
            true
        });

        let options = InvocationOptions::builder()
            .cancellation(token)
            .build()
            .unwrap();
        let error = invoker(mock.clone(), prompt)
            .invoke(&DELETE_THING, &BoundArgs::new().bind("Id", "t-1"), &options)
            .await
            .unwrap_err();

        assert!(matches!(error, PinpointError::Cancelled));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cancel_unblocks_waiting_prompt() {
        let mock = Arc::new(MockServiceClient::responding(json!({"Thing": {}})));
        let token = tokio_util::sync::CancellationToken::new();
        let mut prompt = MockConfirmPrompt::new();
        prompt.expect_confirm().returning(|_, _| {
            std::thread::sleep(std::time::Duration::from_millis(300));
            true
        });

        let options = InvocationOptions::builder()
            .cancellation(token.clone())
            .build()
            .unwrap();
        let invoker = invoker(mock.clone(), prompt);
        let task = tokio::spawn(async move {
            invoker
                .invoke(&DELETE_THING, &BoundArgs::new().bind("Id", "t-1"), &options)
                .await
        });

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        token.cancel();

        let result = tokio::time::timeout(std::time::Duration::from_millis(200), task)
            .await
            .expect("prompt wait was not cancelled")
            .unwrap();
        assert!(matches!(result, Err(PinpointError::Cancelled)));
        assert_eq!(mock.call_count(), 0);
    }
}

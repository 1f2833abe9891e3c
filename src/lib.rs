//! AWS Pinpoint command bindings.
//!
//! Exposes Amazon Pinpoint REST operations (applications, settings,
//! campaigns, segments, journeys, templates, channels, endpoints, events,
//! messages, tags) as declarative commands run by one generic invoker.
//!
//! # Features
//!
//! - **Declarative operations**: every operation is a `static` descriptor
//! - **One call path**: validate, confirm, build, call once, project
//! - **Typed output selection**: default field, another field, the whole
//!   response, or an echo of an input
//! - **AWS Signature V4**: request signing for the `mobiletargeting` service
//! - **Credential chain**: environment and shared profile files
//! - **Cancellation and dry runs**: `CancellationToken` and what-if mode
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use integrations_aws_pinpoint::{
//!     operations, AutoConfirm, BoundArgs, CommandInvoker, InvocationOptions, OutputSelector,
//!     Session,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let invoker = CommandInvoker::new(Arc::new(Session::from_env()), AutoConfirm);
//!
//!     let options = InvocationOptions::builder()
//!         .select("ApplicationResponse.Id".parse::<OutputSelector>()?)
//!         .build()?;
//!
//!     let outcome = invoker
//!         .invoke(
//!             &operations::apps::CREATE_APP,
//!             &BoundArgs::new().bind("Name", "storefront"),
//!             &options,
//!         )
//!         .await?;
//!
//!     if let Some(id) = outcome.value() {
//!         println!("created {id}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is a [`PinpointError`]. Binding mistakes surface as
//! `Validation` before anything touches the network, unreachable endpoints
//! as `Connectivity`, and service rejections as `Service`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod command;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod logging;
pub mod mocks;
pub mod operations;
pub mod session;
pub mod signing;

pub use client::{PinpointClient, ServiceClient};

pub use command::{
    AutoConfirm, BoundArgs, CallContext, CommandInvoker, ConfirmPrompt, InvocationOptions,
    OperationDescriptor, Outcome, OutputSelector, RequestValue, SkipReason,
};

pub use config::{ConfigError, PinpointConfig, PinpointConfigBuilder};

pub use credentials::{
    AwsCredentials, ChainCredentialProvider, CredentialError, CredentialProvider,
    DefaultCredentialProvider, EnvironmentCredentialProvider, ProfileCredentialProvider,
    StaticCredentialProvider,
};

pub use error::{PinpointError, PinpointResult, ValidationError};

pub use session::Session;

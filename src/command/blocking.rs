//! Blocking adapter for synchronous hosts.

use super::binding::BoundArgs;
use super::descriptor::OperationDescriptor;
use super::invoker::{CommandInvoker, Outcome};
use super::options::InvocationOptions;
use crate::error::{PinpointError, PinpointResult};

impl CommandInvoker {
    /// Drive [`CommandInvoker::invoke`] to completion on a current-thread
    /// runtime.
    ///
    /// Must not be called from inside an async runtime.
    pub fn invoke_blocking(
        &self,
        descriptor: &'static OperationDescriptor,
        args: &BoundArgs,
        options: &InvocationOptions,
    ) -> PinpointResult<Outcome> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PinpointError::Configuration {
                message: format!("Failed to start async runtime: {e}"),
                source: Some(Box::new(e)),
            })?;

        runtime.block_on(self.invoke(descriptor, args, options))
    }
}

//! Per-invocation options.

use tokio_util::sync::CancellationToken;

use super::selector::OutputSelector;
use crate::error::ValidationError;

/// Caller override of the descriptor's default output.
///
/// The legacy pass-through switch and an explicit selector are one setting,
/// so an invocation can never carry both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOverride {
    /// Use this selector instead of the default.
    Expression(OutputSelector),
    /// Echo the pipeline field's bound value.
    PassThru,
}

/// Options for one invocation.
#[derive(Debug, Clone, Default)]
pub struct InvocationOptions {
    selector: Option<SelectorOverride>,
    force: bool,
    what_if: bool,
    cancellation: CancellationToken,
}

impl InvocationOptions {
    /// Start building options.
    pub fn builder() -> InvocationOptionsBuilder {
        InvocationOptionsBuilder::default()
    }

    /// The selector override, if any.
    pub fn selector(&self) -> Option<&SelectorOverride> {
        self.selector.as_ref()
    }

    /// Skip the confirmation prompt.
    pub fn force(&self) -> bool {
        self.force
    }

    /// Dry run: validate and build, but never call the service.
    pub fn what_if(&self) -> bool {
        self.what_if
    }

    /// Token that withdraws the invocation when cancelled.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

/// Builder for [`InvocationOptions`].
#[derive(Debug, Default)]
pub struct InvocationOptionsBuilder {
    select: Option<OutputSelector>,
    pass_thru: bool,
    force: bool,
    what_if: bool,
    cancellation: Option<CancellationToken>,
}

impl InvocationOptionsBuilder {
    /// Override the output selector.
    pub fn select(mut self, selector: OutputSelector) -> Self {
        self.select = Some(selector);
        self
    }

    /// Emit the pipeline input instead of the response.
    pub fn pass_thru(mut self, enabled: bool) -> Self {
        self.pass_thru = enabled;
        self
    }

    /// Skip confirmation.
    pub fn force(mut self, enabled: bool) -> Self {
        self.force = enabled;
        self
    }

    /// Dry run.
    pub fn what_if(mut self, enabled: bool) -> Self {
        self.what_if = enabled;
        self
    }

    /// Attach a cancellation token.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Build the options.
    ///
    /// # Errors
    ///
    /// `ValidationError::ConflictingSelectors` when both a selector and
    /// pass-through were requested.
    pub fn build(self) -> Result<InvocationOptions, ValidationError> {
        let selector = match (self.select, self.pass_thru) {
            (Some(_), true) => return Err(ValidationError::ConflictingSelectors),
            (Some(selector), false) => Some(SelectorOverride::Expression(selector)),
            (None, true) => Some(SelectorOverride::PassThru),
            (None, false) => None,
        };

        Ok(InvocationOptions {
            selector,
            force: self.force,
            what_if: self.what_if,
            cancellation: self.cancellation.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = InvocationOptions::default();
        assert!(options.selector().is_none());
        assert!(!options.force());
        assert!(!options.what_if());
        assert!(!options.cancellation().is_cancelled());
    }

    #[test]
    fn test_pass_thru_and_select_conflict() {
        let result = InvocationOptions::builder()
            .select(OutputSelector::WholeResponse)
            .pass_thru(true)
            .build();
        assert_eq!(result.unwrap_err(), ValidationError::ConflictingSelectors);
    }

    #[test]
    fn test_single_override() {
        let options = InvocationOptions::builder().pass_thru(true).build().unwrap();
        assert_eq!(options.selector(), Some(&SelectorOverride::PassThru));

        let options = InvocationOptions::builder()
            .select(OutputSelector::WholeResponse)
            .force(true)
            .build()
            .unwrap();
        assert_eq!(
            options.selector(),
            Some(&SelectorOverride::Expression(OutputSelector::WholeResponse))
        );
        assert!(options.force());
    }

    #[test]
    fn test_shared_cancellation_token() {
        let token = CancellationToken::new();
        let options = InvocationOptions::builder()
            .cancellation(token.clone())
            .build()
            .unwrap();
        token.cancel();
        assert!(options.cancellation().is_cancelled());
    }
}
